//! Applicative: applying a contained function to a contained value.
//!
//! # Laws
//!
//! ```text
//! F::pure(identity).ap(v) == v                          // identity
//! F::pure(f).ap(F::pure(x)) == F::pure(f(x))            // homomorphism
//! u.ap(F::pure(y)) == F::pure(|f| f(y)).ap(u)           // interchange
//! ```
//!
//! `ap` is called on the container holding the function, mirroring
//! `ap : F<A -> B> -> F<A> -> F<B>`.
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Applicative;
//!
//! let add_one = Some(|n: i32| n + 1);
//! assert_eq!(add_one.ap(Some(41)), Some(42));
//!
//! let lifted: Option<&str> = <Option<()>>::pure("value");
//! assert_eq!(lifted, Some("value"));
//!
//! assert_eq!(Some(2).map2(Some(3), |a, b| a * b), Some(6));
//! ```

use super::{Functor, Identity};

/// A [`Functor`] that can lift values and apply contained functions.
pub trait Applicative: Functor {
    /// Lifts `value` into the minimal context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the function(s) in `self` to the value(s) in `values`.
    ///
    /// For `Vec` this is the cartesian product: every function meets every
    /// value, functions in the outer loop.
    fn ap<A, B>(self, values: Self::WithType<A>) -> Self::WithType<B>
    where
        Self::Inner: FnMut(A) -> B,
        A: Clone;

    /// Combines two contexts with a binary function.
    ///
    /// ```rust
    /// use preludium::typeclass::Applicative;
    ///
    /// let pairs = vec![1, 2].map2(vec!['a', 'b'], |n, c| (n, c));
    /// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnMut(Self::Inner, B) -> C,
        Self::Inner: Clone,
        B: Clone;
}

impl<T> Applicative for Option<T> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    fn ap<A, B>(self, values: Option<A>) -> Option<B>
    where
        T: FnMut(A) -> B,
        A: Clone,
    {
        match (self, values) {
            (Some(mut function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }

    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        F: FnMut(T, B) -> C,
        T: Clone,
        B: Clone,
    {
        match (self, other) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }
}

/// The first error encountered wins.
impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    fn ap<A, B>(self, values: Result<A, E>) -> Result<B, E>
    where
        T: FnMut(A) -> B,
        A: Clone,
    {
        let mut function = self?;
        values.map(|value| function(value))
    }

    fn map2<B, C, F>(self, other: Result<B, E>, mut function: F) -> Result<C, E>
    where
        F: FnMut(T, B) -> C,
        T: Clone,
        B: Clone,
    {
        let left = self?;
        let right = other?;
        Ok(function(left, right))
    }
}

impl<T> Applicative for Vec<T> {
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    fn ap<A, B>(self, values: Vec<A>) -> Vec<B>
    where
        T: FnMut(A) -> B,
        A: Clone,
    {
        let mut results = Vec::with_capacity(self.len() * values.len());
        for mut function in self {
            results.extend(values.iter().cloned().map(&mut function));
        }
        results
    }

    fn map2<B, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        F: FnMut(T, B) -> C,
        T: Clone,
        B: Clone,
    {
        let mut results = Vec::with_capacity(self.len() * other.len());
        for left in self {
            for right in &other {
                results.push(function(left.clone(), right.clone()));
            }
        }
        results
    }
}

impl<T> Applicative for Box<T> {
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    fn ap<A, B>(self, values: Box<A>) -> Box<B>
    where
        T: FnMut(A) -> B,
        A: Clone,
    {
        let mut function = *self;
        Box::new(function(*values))
    }

    fn map2<B, C, F>(self, other: Box<B>, mut function: F) -> Box<C>
    where
        F: FnMut(T, B) -> C,
        T: Clone,
        B: Clone,
    {
        Box::new(function(*self, *other))
    }
}

impl<T> Applicative for Identity<T> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    fn ap<A, B>(self, values: Identity<A>) -> Identity<B>
    where
        T: FnMut(A) -> B,
        A: Clone,
    {
        let Self(mut function) = self;
        Identity(function(values.0))
    }

    fn map2<B, C, F>(self, other: Identity<B>, mut function: F) -> Identity<C>
    where
        F: FnMut(T, B) -> C,
        T: Clone,
        B: Clone,
    {
        Identity(function(self.0, other.0))
    }
}
