//! Monad: sequencing computations whose next step depends on the last.
//!
//! # Laws
//!
//! ```text
//! M::pure(a).bind(f) == f(a)                            // left identity
//! m.bind(M::pure) == m                                  // right identity
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))         // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Monad;
//!
//! fn half(n: i32) -> Option<i32> {
//!     (n % 2 == 0).then_some(n / 2)
//! }
//!
//! assert_eq!(Some(20).bind(half).bind(half), Some(5));
//! assert_eq!(Some(10).bind(half).bind(half), None);
//!
//! let expanded = vec![1, 2].bind(|n| vec![n; n]);
//! assert_eq!(expanded, vec![1, 2, 2]);
//! ```

use super::{Applicative, Identity};

/// An [`Applicative`] with a dependent sequencing operation.
pub trait Monad: Applicative {
    /// Feeds the contained value(s) to `function` and flattens the result.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// ```rust
    /// use preludium::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// assert_eq!(vec![1, 2].then(vec!['x']), vec!['x', 'x']);
    /// ```
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self::WithType<B>: Clone,
    {
        self.bind(move |_| next.clone())
    }
}

impl<T> Monad for Option<T> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(T) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Vec<T> {
    fn bind<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<T> Monad for Box<T> {
    fn bind<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> Box<B>,
    {
        function(*self)
    }
}

impl<T> Monad for Identity<T> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(T) -> Identity<B>,
    {
        function(self.0)
    }
}
