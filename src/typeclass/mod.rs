//! Algebraic type classes.
//!
//! - [`Semigroup`]: associative `op`
//! - [`Monoid`]: `op` with an identity `mzero`
//! - [`Functor`]: `fmap`
//! - [`Applicative`]: `pure`, `ap`, `map2`
//! - [`Monad`]: `bind`
//!
//! ## Higher-kinded types
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] emulates
//! them with a generic associated type, which is enough to state `fmap`,
//! `ap` and `bind` once for `Option`, `Result`, `Vec`, `Box` and
//! [`Identity`].
//!
//! ## Wrappers
//!
//! [`Sum`], [`Product`], [`Max`], [`Min`], [`All`], [`Any`], [`First`] and
//! [`Last`] pick a specific monoid for types that admit several.
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::{Functor, Monad, Monoid, Semigroup, Sum};
//!
//! let total = Sum::mconcat(vec![1, 2, 3].fmap(Sum));
//! assert_eq!(total, Sum(6));
//!
//! let chained = Some(3).bind(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(chained, Some(6));
//!
//! assert_eq!(String::from("ab").op(String::mzero()), "ab");
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::{Monoid, mconcat};
pub use semigroup::{Semigroup, sconcat};
pub use wrappers::{All, Any, Bounded, First, Last, Max, Min, Numeric, Product, Sum};

#[cfg(feature = "derive")]
pub use preludium_derive::{Monoid, Semigroup};
