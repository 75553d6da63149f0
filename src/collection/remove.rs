//! Removing elements from a `Vec` by value.
//!
//! Removal by value deletes the **first** matching element only. Use
//! [`RemoveExt::remove_by`] to delete every element satisfying a predicate.

/// In-place removal helpers for `Vec`.
///
/// ```
/// use preludium::collection::RemoveExt;
///
/// let mut values = vec![1, 343, 4, 3];
/// values.remove_objects(&[1, 3, 5]);
/// assert_eq!(values, vec![343, 4]);
///
/// let mut letters: Vec<char> = "adsd".chars().collect();
/// assert!(letters.remove_object(&'d'));
/// assert_eq!(letters, vec!['a', 's', 'd']);
/// ```
pub trait RemoveExt<A> {
    /// Removes the first element equal to `target`, returning whether one
    /// was found.
    fn remove_object(&mut self, target: &A) -> bool
    where
        A: PartialEq;

    /// Removes the first occurrence of each of `targets`.
    ///
    /// Returns how many elements were removed.
    fn remove_objects(&mut self, targets: &[A]) -> usize
    where
        A: PartialEq;

    /// Removes every element for which `predicate` holds.
    ///
    /// Returns how many elements were removed.
    fn remove_by<P>(&mut self, predicate: P) -> usize
    where
        P: FnMut(&A) -> bool;
}

impl<A> RemoveExt<A> for Vec<A> {
    fn remove_object(&mut self, target: &A) -> bool
    where
        A: PartialEq,
    {
        self.iter()
            .position(|value| value == target)
            .map(|index| self.remove(index))
            .is_some()
    }

    fn remove_objects(&mut self, targets: &[A]) -> usize
    where
        A: PartialEq,
    {
        targets
            .iter()
            .filter(|target| self.remove_object(target))
            .count()
    }

    fn remove_by<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&A) -> bool,
    {
        let before = self.len();
        self.retain(|value| !predicate(value));
        before - self.len()
    }
}

/// Free-function form of [`RemoveExt::remove_object`].
///
/// ```
/// use preludium::collection::remove_object;
///
/// let mut values = vec![2, 7, 2];
/// assert!(remove_object(&mut values, &2));
/// assert_eq!(values, vec![7, 2]);
/// assert!(!remove_object(&mut values, &9));
/// ```
pub fn remove_object<A: PartialEq>(values: &mut Vec<A>, target: &A) -> bool {
    values.remove_object(target)
}
