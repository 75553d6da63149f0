//! # preludium
//!
//! A functional prelude for Rust: point-free combinators, algebraic type
//! classes, list algorithms, collection helpers and heterogeneous lists.
//!
//! ## Overview
//!
//! - **Combinators**: `identity`, `constant`, `flip`, `compose!`, `pipe!`,
//!   `fix`, `on`, curry/uncurry for arities 2 to 5
//! - **Type Classes**: Semigroup, Monoid, Functor, Applicative, Monad, with
//!   `Sum`, `Product`, `Max`, `Min`, `All`, `Any`, `First` and `Last`
//!   wrappers
//! - **Lists**: folds, scans, unfolds, zips and predicate-driven splitting,
//!   plus the `ArrayZipper` cursor
//! - **Collections**: order-preserving `uniq`, removal by value and
//!   `compute_if_absent`
//! - **HLists**: `hlist!`, `HList!`, append, map and folds
//!
//! Every partial operation reports misuse through
//! [`EmptyInputError`](error::EmptyInputError) rather than panicking.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and monoid wrappers
//! - `combinator`: Combinators, currying, `compose!` and `pipe!`
//! - `list`: List algorithms and `ArrayZipper` (enables `typeclass`)
//! - `collection`: `uniq`, `RemoveExt`, `ComputeIfAbsent`
//! - `hlist`: Heterogeneous lists
//! - `text`: `StrExt` character-class predicates
//! - `derive`: `#[derive(Semigroup, Monoid)]` for structs
//! - `serde`: `Serialize`/`Deserialize` for wrappers and `ArrayZipper`
//! - `fxhash` / `ahash`: faster hashing for `uniq`
//! - `full`: Enable everything except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use preludium::prelude::*;
//! use preludium::list::{foldr, scanl};
//!
//! let total = Sum::mconcat([1, 2, 3, 4].map(Sum));
//! assert_eq!(total, Sum(10));
//!
//! assert_eq!(foldr(|x, acc| x - acc, 0, [10, 4, 1]), 7);
//! assert_eq!(scanl(|acc, x| acc * x, 1, [2, 3, 4]), vec![1, 2, 6, 24]);
//!
//! let zipper = ArrayZipper::from_values(vec!['a', 'b', 'c'])?.right();
//! assert_eq!(*zipper.focus(), 'b');
//! # Ok::<(), preludium::error::EmptyInputError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits and types of every enabled module. Free functions
/// such as `take` or `drop` stay in their modules, since their names clash
/// with the standard prelude.
///
/// # Usage
///
/// ```rust
/// use preludium::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::EmptyInputError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::{
        All, Any, Applicative, Bounded, First, Functor, Identity, Last, Max, Min, Monad, Monoid,
        Numeric, Product, Semigroup, Sum, TypeConstructor,
    };

    #[cfg(feature = "combinator")]
    pub use crate::combinator::{Curried, Nothing};

    #[cfg(feature = "list")]
    pub use crate::list::{ArrayZipper, ListMatcher, SliceExt};

    #[cfg(feature = "collection")]
    pub use crate::collection::{ComputeIfAbsent, RemoveExt, UniqExt};

    #[cfg(feature = "hlist")]
    pub use crate::hlist::{
        HAppend, HCons, HFoldLeft, HFoldRight, HFolder, HList, HMap, HMapper, HNil,
    };

    #[cfg(feature = "text")]
    pub use crate::text::StrExt;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "hlist")]
pub mod hlist;

#[cfg(feature = "text")]
pub mod text;
