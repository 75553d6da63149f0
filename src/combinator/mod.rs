//! Point-free glue: classic combinators, currying and composition.
//!
//! # Overview
//!
//! - [`identity`], [`constant`], [`as_type_of`]
//! - [`flip`], [`flip3`], [`flip4`]: argument reversal
//! - [`compose`] / [`compose!`](crate::compose) and [`pipe`] / [`pipe!`](crate::pipe)
//! - [`fix`]: anonymous recursion
//! - [`on`], [`until`], [`substitute`], [`duplicate`], [`swap`]
//! - [`curry2`] .. [`curry5`] and [`uncurry2`] .. [`uncurry5`]
//! - [`Nothing`] and [`absurd`]
//!
//! # Examples
//!
//! ```
//! use preludium::combinator::{flip, on, until};
//! use preludium::{compose, pipe};
//!
//! let divide = |a: f64, b: f64| a / b;
//! assert_eq!(flip(divide)(2.0, 10.0), 5.0);
//!
//! let by_len = on(|a: usize, b: usize| a.max(b), |s: &str| s.len());
//! assert_eq!(by_len("ab", "abcd"), 4);
//!
//! assert_eq!(until(|n: &i32| *n > 50, |n| n * 3, 1), 81);
//!
//! let inc_then_double = compose!(|x: i32| x * 2, |x: i32| x + 1);
//! assert_eq!(pipe!(4, inc_then_double, |x: i32| x - 1), 9);
//! ```

mod basic;
mod curry;
mod fix;
mod macros;

pub use basic::{
    Nothing, absurd, apply, as_type_of, compose, constant, duplicate, flip, flip3, flip4,
    identity, on, pipe, substitute, swap, until,
};
pub use curry::{Curried, curry2, curry3, curry4, curry5, uncurry2, uncurry3, uncurry4, uncurry5};
pub use fix::fix;
