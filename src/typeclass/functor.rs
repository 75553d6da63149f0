//! Functor: structure-preserving mapping.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa                              // identity
//! fa.fmap(|x| g(f(x))) == fa.fmap(f).fmap(g)        // composition
//! ```
//!
//! `fmap` takes an `FnMut`, so multi-element containers such as `Vec` share
//! the same trait as `Option`.
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Functor;
//!
//! assert_eq!(Some(2).fmap(|n| n + 1), Some(3));
//! assert_eq!(vec![1, 2, 3].fmap(|n| n * 10), vec![10, 20, 30]);
//!
//! let parsed: Result<i32, String> = Ok(4);
//! assert_eq!(parsed.fmap(|n| n.to_string()), Ok(String::from("4")));
//! ```

use super::{Identity, TypeConstructor};

/// A container whose contents can be mapped while its shape is kept.
pub trait Functor: TypeConstructor + Sized {
    /// Applies `function` to every contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every contained value with `value`.
    ///
    /// ```rust
    /// use preludium::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2].replace("x"), vec!["x", "x"]);
    /// ```
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B> {
        self.fmap(move |_| value.clone())
    }

    /// Discards the contents, keeping only the shape.
    fn void(self) -> Self::WithType<()> {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<A, E> Functor for Result<A, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Functor for Vec<A> {
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<A> Functor for Box<A> {
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(A) -> B,
    {
        Box::new(function(*self))
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }
}
