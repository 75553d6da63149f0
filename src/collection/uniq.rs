//! Order-preserving de-duplication.
//!
//! The first occurrence of every value is kept, in input order. Which hasher
//! backs the "already seen" set is a build-time choice:
//!
//! - feature `fxhash`: `rustc_hash::FxBuildHasher`
//! - feature `ahash` (without `fxhash`): `ahash::RandomState`
//! - neither: the standard library's `RandomState`

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Hasher used by [`uniq`] and [`UniqExt::uniq`].
#[cfg(feature = "fxhash")]
pub type UniqHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`uniq`] and [`UniqExt::uniq`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type UniqHasher = ahash::RandomState;

/// Hasher used by [`uniq`] and [`UniqExt::uniq`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type UniqHasher = std::collections::hash_map::RandomState;

/// Lazy iterator yielding each distinct item the first time it is seen.
///
/// Created by [`UniqExt::uniq`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Uniq<I: Iterator, S = UniqHasher> {
    inner: I,
    seen: HashSet<I::Item, S>,
}

impl<I, S> Iterator for Uniq<I, S>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.inner.by_ref().find(|item| seen.insert(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (usize::from(lower > 0 && self.seen.is_empty()), upper)
    }
}

/// De-duplication as an iterator adaptor.
///
/// ```
/// use preludium::collection::UniqExt;
///
/// let letters: String = "mississippi".chars().uniq().collect();
/// assert_eq!(letters, "misp");
///
/// let borrowed: Vec<&i32> = [3, 1, 3, 2, 1].iter().uniq().collect();
/// assert_eq!(borrowed, [&3, &1, &2]);
/// ```
pub trait UniqExt: IntoIterator + Sized {
    /// Adapts `self` to skip items already yielded.
    fn uniq(self) -> Uniq<Self::IntoIter>
    where
        Self::Item: Eq + Hash + Clone,
    {
        self.uniq_with_hasher(UniqHasher::default())
    }

    /// Like [`uniq`](UniqExt::uniq), with an explicit hasher.
    fn uniq_with_hasher<S>(self, hasher: S) -> Uniq<Self::IntoIter, S>
    where
        Self::Item: Eq + Hash + Clone,
        S: BuildHasher,
    {
        Uniq {
            inner: self.into_iter(),
            seen: HashSet::with_hasher(hasher),
        }
    }
}

impl<I: IntoIterator> UniqExt for I {}

/// Collects the distinct values of `values`, keeping first occurrences in
/// order.
///
/// ```
/// use preludium::collection::uniq;
///
/// assert_eq!(uniq([1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// assert_eq!(uniq(Vec::<u8>::new()), Vec::<u8>::new());
/// ```
pub fn uniq<A, I>(values: I) -> Vec<A>
where
    A: Eq + Hash + Clone,
    I: IntoIterator<Item = A>,
{
    values.uniq().collect()
}
