//! Newtype wrappers selecting one of several lawful monoids for a type.
//!
//! Numbers form a monoid under addition *and* under multiplication; booleans
//! under conjunction *and* disjunction; any value under "keep the first"
//! *and* "keep the last". Each wrapper here fixes one of those choices so
//! that `op`/`mzero` are unambiguous.
//!
//! | Wrapper      | `op`              | `mzero`            |
//! |--------------|-------------------|--------------------|
//! | [`Sum`]      | `+`               | `Numeric::ZERO`    |
//! | [`Product`]  | `*`               | `Numeric::ONE`     |
//! | [`Max`]      | larger value      | `Bounded::MIN_VALUE` |
//! | [`Min`]      | smaller value     | `Bounded::MAX_VALUE` |
//! | [`All`]      | `&&`              | `true`             |
//! | [`Any`]      | `\|\|`            | `false`            |
//! | [`First`]    | leftmost `Some`   | `None`             |
//! | [`Last`]     | rightmost `Some`  | `None`             |
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::{Monoid, Product, Sum};
//!
//! let total = Sum::mconcat([1, 2, 3, 4].map(Sum));
//! let scaled = Product::mconcat([1, 2, 3, 4].map(Product));
//! assert_eq!(total, Sum(10));
//! assert_eq!(scaled, Product(24));
//! ```

macro_rules! wrapper_common {
    ($name:ident) => {
        impl<A> $name<A> {
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
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

/// Monoid under addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

/// Monoid under multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

/// Semigroup keeping the larger value; a monoid when `A: Bounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

/// Semigroup keeping the smaller value; a monoid when `A: Bounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

/// Boolean monoid under conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

/// Boolean monoid under disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

/// Keeps the leftmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Option<A>);

/// Keeps the rightmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Option<A>);

wrapper_common!(Sum);
wrapper_common!(Product);
wrapper_common!(Max);
wrapper_common!(Min);

// Not routed through `wrapper_common!`: the payload is fixed to `bool`
// or `Option<A>`.
impl All {
    /// Unwraps the flag.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl Any {
    /// Unwraps the flag.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl<A> First<A> {
    /// Unwraps the optional value.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> Last<A> {
    /// Unwraps the optional value.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> From<Option<A>> for First<A> {
    fn from(value: Option<A>) -> Self {
        Self(value)
    }
}

impl<A> From<Option<A>> for Last<A> {
    fn from(value: Option<A>) -> Self {
        Self(value)
    }
}

// =============================================================================
// Bounded / Numeric
// =============================================================================

/// Types with a least and a greatest value.
///
/// `Max<A>` uses `MIN_VALUE` as its identity and `Min<A>` uses `MAX_VALUE`.
///
/// ```rust
/// use preludium::typeclass::{Bounded, Max, Monoid};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Level(u8);
///
/// impl Bounded for Level {
///     const MIN_VALUE: Self = Level(0);
///     const MAX_VALUE: Self = Level(9);
/// }
///
/// assert_eq!(Max::<Level>::mzero(), Max(Level(0)));
/// ```
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;
    /// The greatest value.
    const MAX_VALUE: Self;
}

/// Types with additive and multiplicative identities.
pub trait Numeric {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
}

macro_rules! bounded_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bounded for $ty {
                const MIN_VALUE: Self = <$ty>::MIN;
                const MAX_VALUE: Self = <$ty>::MAX;
            }

            impl Numeric for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

bounded_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Numeric for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = char::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn numeric_wrappers_round_trip() {
        assert_eq!(Sum::new(3).into_inner(), 3);
        assert_eq!(Product::from(4).into_inner(), 4);
        assert_eq!(Max::new('z').into_inner(), 'z');
        assert_eq!(Min::from(-1_i64).into_inner(), -1);
    }

    #[rstest]
    fn optional_wrappers_round_trip() {
        assert_eq!(First::from(Some(1)).into_inner(), Some(1));
        assert_eq!(Last::<u8>::from(None).into_inner(), None);
    }

    #[rstest]
    #[case(i8::MIN, i8::MAX)]
    #[case(-128, 127)]
    fn bounded_i8(#[case] low: i8, #[case] high: i8) {
        assert_eq!(i8::MIN_VALUE, low);
        assert_eq!(i8::MAX_VALUE, high);
    }

    #[rstest]
    fn float_bounds_are_infinite() {
        assert!(f64::MIN_VALUE.is_infinite() && f64::MIN_VALUE < 0.0);
        assert!(f32::MAX_VALUE.is_infinite() && f32::MAX_VALUE > 0.0);
    }

    #[rstest]
    fn numeric_identities() {
        assert_eq!(u32::ZERO, 0);
        assert_eq!(u32::ONE, 1);
        assert!((f64::ONE - 1.0).abs() < f64::EPSILON);
    }
}
