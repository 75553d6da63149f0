//! Monoid: a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! M::mzero().op(x) == x      // left identity
//! x.op(M::mzero()) == x      // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::mzero().op(String::from("x")), "x");
//! assert_eq!(Sum::mconcat(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(Vec::<u8>::mconcat(Vec::new()), Vec::<u8>::new());
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use super::Identity;
use super::Semigroup;
use super::wrappers::{All, Any, Bounded, First, Last, Max, Min, Numeric, Product, Sum};

/// A [`Semigroup`] with an identity element `mzero`.
pub trait Monoid: Semigroup {
    /// The identity element of `op`.
    fn mzero() -> Self;

    /// Combines every element of `values`, starting from `mzero`.
    ///
    /// An empty input yields `mzero`.
    fn mconcat<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().fold(Self::mzero(), Semigroup::op)
    }

    /// Whether `self` equals the identity element.
    fn is_mzero(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::mzero()
    }
}

/// Free-function form of [`Monoid::mconcat`].
///
/// ```rust
/// use preludium::typeclass::mconcat;
///
/// let joined: String = mconcat(["ab", "cd"].map(String::from));
/// assert_eq!(joined, "abcd");
/// ```
pub fn mconcat<M, I>(values: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    M::mconcat(values)
}

impl Monoid for String {
    fn mzero() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn mzero() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn mzero() -> Self {
        None
    }
}

impl Monoid for () {
    fn mzero() -> Self {}
}

impl Monoid for Ordering {
    fn mzero() -> Self {
        Self::Equal
    }
}

impl<T: Monoid> Monoid for Identity<T> {
    fn mzero() -> Self {
        Self(T::mzero())
    }
}

impl<T: Monoid> Monoid for Box<T> {
    fn mzero() -> Self {
        Self::new(T::mzero())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn mzero() -> Self {
        (A::mzero(), B::mzero())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn mzero() -> Self {
        (A::mzero(), B::mzero(), C::mzero())
    }
}

impl<A: Add<Output = A> + Numeric> Monoid for Sum<A> {
    fn mzero() -> Self {
        Self(A::ZERO)
    }
}

impl<A: Mul<Output = A> + Numeric> Monoid for Product<A> {
    fn mzero() -> Self {
        Self(A::ONE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn mzero() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn mzero() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl Monoid for All {
    fn mzero() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn mzero() -> Self {
        Self(false)
    }
}

impl<A> Monoid for First<A> {
    fn mzero() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn mzero() -> Self {
        Self(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identities() {
        assert_eq!(String::mzero(), "");
        assert_eq!(Vec::<i32>::mzero(), Vec::<i32>::new());
        assert_eq!(Sum::<i32>::mzero(), Sum(0));
        assert_eq!(Product::<i32>::mzero(), Product(1));
        assert_eq!(Max::<u8>::mzero(), Max(0));
        assert_eq!(Min::<u8>::mzero(), Min(255));
        assert_eq!(All::mzero(), All(true));
        assert_eq!(Any::mzero(), Any(false));
        assert_eq!(Ordering::mzero(), Ordering::Equal);
    }

    #[rstest]
    #[case(vec![], Sum(0))]
    #[case(vec![Sum(2), Sum(4), Sum(1), Sum(0), Sum(3)], Sum(10))]
    fn mconcat_sums(#[case] values: Vec<Sum<i32>>, #[case] expected: Sum<i32>) {
        assert_eq!(Sum::mconcat(values), expected);
    }

    #[rstest]
    fn mconcat_of_products() {
        let values = [3, 4, 1, 2, 2, 1, 3].map(Product);
        assert_eq!(mconcat(values), Product(144));
    }

    #[rstest]
    fn ordering_mconcat_compares_lexicographically() {
        let by_fields = [1.cmp(&1), "b".cmp("a"), 3.cmp(&9)];
        assert_eq!(Ordering::mconcat(by_fields), Ordering::Greater);
    }

    #[rstest]
    fn is_mzero_detects_identity() {
        assert!(String::new().is_mzero());
        assert!(!Sum(1).is_mzero());
        assert!(First::<i32>(None).is_mzero());
    }

    #[rstest]
    fn pair_identity_is_componentwise() {
        let pair: (String, Sum<u32>) = Monoid::mzero();
        assert_eq!(pair, (String::new(), Sum(0)));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn string_identity(value in ".{0,16}") {
            prop_assert_eq!(String::mzero().op(value.clone()), value.clone());
            prop_assert_eq!(value.clone().op(String::mzero()), value);
        }

        #[test]
        fn min_identity(value: i16) {
            prop_assert_eq!(Min::mzero().op(Min(value)), Min(value));
            prop_assert_eq!(Min(value).op(Min::mzero()), Min(value));
        }

        #[test]
        fn mconcat_matches_iterator_sum(values in proptest::collection::vec(-100i64..100, 0..32)) {
            let expected: i64 = values.iter().sum();
            prop_assert_eq!(Sum::mconcat(values.into_iter().map(Sum)), Sum(expected));
        }
    }
}
