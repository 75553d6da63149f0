//! The identity functor.
//!
//! `Identity` wraps a value and adds no effect at all. It is the smallest
//! lawful `Functor`/`Applicative`/`Monad` and is used throughout the tests
//! as the reference instance.

use super::TypeConstructor;

/// A transparent wrapper around a single value.
///
/// ```rust
/// use preludium::typeclass::{Functor, Identity};
///
/// let doubled = Identity::new(21).fmap(|n| n * 2);
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
