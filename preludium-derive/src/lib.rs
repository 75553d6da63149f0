//! Derive macros for `preludium` type classes.
//!
//! # Available Derive Macros
//!
//! - [`Semigroup`]: combines two values field by field
//! - [`Monoid`]: builds the identity from every field's identity
//!
//! Both work on structs with named fields, tuple structs and unit structs.
//! Every field type must itself implement the derived trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use preludium::typeclass::{Max, Monoid, Semigroup, Sum};
//!
//! #[derive(Debug, PartialEq, Semigroup, Monoid)]
//! struct Stats {
//!     count: Sum<u32>,
//!     peak: Max<i64>,
//! }
//!
//! let merged = Stats { count: Sum(2), peak: Max(7) }.op(Stats { count: Sum(3), peak: Max(4) });
//! assert_eq!(merged, Stats { count: Sum(5), peak: Max(7) });
//! assert_eq!(Stats::mzero().count, Sum(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod fields;
mod monoid;
mod semigroup;

use proc_macro::TokenStream;

/// Derive macro implementing `preludium::typeclass::Semigroup`.
///
/// `op` combines corresponding fields with their own `op`, so the derived
/// instance is associative whenever every field's instance is.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Semigroup for Pair {
///     fn op(self, other: Self) -> Self {
///         Self { left: Semigroup::op(self.left, other.left), /* ... */ }
///     }
/// }
/// ```
///
/// # Errors
///
/// Deriving on an enum or a union is a compile error.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    semigroup::derive_semigroup_impl(input)
}

/// Derive macro implementing `preludium::typeclass::Monoid`.
///
/// `mzero` is the struct whose fields are all `mzero`. The type must also
/// implement `Semigroup`, usually by deriving it alongside.
///
/// # Errors
///
/// Deriving on an enum or a union is a compile error.
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    monoid::derive_monoid_impl(input)
}
