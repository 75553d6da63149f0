//! Semigroup: types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.op(b).op(c) == a.op(b.op(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").op(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].op(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use super::Identity;
use super::wrappers::{All, Any, First, Last, Max, Min, Product, Sum};

/// A type with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
///
/// ```text
/// a.op(b).op(c) == a.op(b.op(c))
/// ```
pub trait Semigroup: Sized {
    /// Combines `self` with `other`.
    #[must_use]
    fn op(self, other: Self) -> Self;

    /// Combines `n` copies of `self`.
    ///
    /// Returns `None` for `n == 0`, since a semigroup has no identity to fall
    /// back to.
    ///
    /// ```rust
    /// use preludium::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").op_n(3), Some(String::from("ababab")));
    /// assert_eq!(String::from("ab").op_n(0), None);
    /// ```
    #[must_use]
    fn op_n(self, n: usize) -> Option<Self>
    where
        Self: Clone,
    {
        if n == 0 {
            return None;
        }
        let mut accumulator = self.clone();
        for _ in 1..n {
            accumulator = accumulator.op(self.clone());
        }
        Some(accumulator)
    }
}

/// Combines a non-empty sequence given as its first element and the rest.
///
/// ```rust
/// use preludium::typeclass::{sconcat, Max};
///
/// assert_eq!(sconcat(Max(3), [Max(9), Max(1)]), Max(9));
/// assert_eq!(sconcat(Max(3), []), Max(3));
/// ```
pub fn sconcat<S, I>(head: S, tail: I) -> S
where
    S: Semigroup,
    I: IntoIterator<Item = S>,
{
    tail.into_iter().fold(head, Semigroup::op)
}

// =============================================================================
// Standard library instances
// =============================================================================

impl Semigroup for String {
    fn op(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn op(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn op(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.op(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn op(self, (): Self) -> Self {}
}

/// Lexicographic: the first non-`Equal` ordering wins.
impl Semigroup for Ordering {
    fn op(self, other: Self) -> Self {
        self.then(other)
    }
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn op(self, other: Self) -> Self {
        Self(self.0.op(other.0))
    }
}

impl<T: Semigroup> Semigroup for Box<T> {
    fn op(self, other: Self) -> Self {
        Self::new((*self).op(*other))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn op(self, other: Self) -> Self {
        (self.0.op(other.0), self.1.op(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn op(self, other: Self) -> Self {
        (self.0.op(other.0), self.1.op(other.1), self.2.op(other.2))
    }
}

// =============================================================================
// Wrapper instances
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn op(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn op(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Ties keep the left operand.
impl<A: PartialOrd> Semigroup for Max<A> {
    fn op(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

/// Ties keep the left operand.
impl<A: PartialOrd> Semigroup for Min<A> {
    fn op(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl Semigroup for All {
    fn op(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn op(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl<A> Semigroup for First<A> {
    fn op(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

impl<A> Semigroup for Last<A> {
    fn op(self, other: Self) -> Self {
        Self(other.0.or(self.0))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn string_is_associative(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            let left = a.clone().op(b.clone()).op(c.clone());
            let right = a.op(b.op(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sum_is_associative(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
            prop_assert_eq!(Sum(a).op(Sum(b)).op(Sum(c)), Sum(a).op(Sum(b).op(Sum(c))));
        }

        #[test]
        fn max_is_associative(a: i32, b: i32, c: i32) {
            prop_assert_eq!(Max(a).op(Max(b)).op(Max(c)), Max(a).op(Max(b).op(Max(c))));
        }
    }
}
