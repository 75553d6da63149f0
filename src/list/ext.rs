//! Method syntax for the slice-shaped list operations.

use crate::error::EmptyInputError;

use super::matcher::{self, ListMatcher};
use super::{fold, sublist, transform};

/// List operations available as methods on any slice (and so on `Vec` and
/// arrays through auto-deref).
///
/// ```
/// use preludium::list::{ListMatcher, SliceExt};
///
/// let values = vec![1, 1, 2, 3, 3, 3];
/// assert_eq!(values.group_by(|a, b| a == b).len(), 3);
/// assert_eq!(values.safe_index(10), None);
/// assert!(matches!(values.match_list(), ListMatcher::Cons(1, _)));
/// ```
pub trait SliceExt<A> {
    /// See [`match_list`](super::match_list).
    fn match_list(&self) -> ListMatcher<'_, A>;

    /// See [`uncons`](super::uncons).
    fn uncons(&self) -> Option<(&A, &[A])>;

    /// Owned head and tail, or `None` when empty.
    fn decompose(&self) -> Option<(A, Vec<A>)>
    where
        A: Clone;

    /// See [`safe_index`](super::safe_index).
    fn safe_index(&self, index: isize) -> Option<&A>;

    /// See [`null`](super::null).
    fn is_null(&self) -> bool;

    /// See [`span`](super::span).
    fn span<P>(&self, predicate: P) -> (&[A], &[A])
    where
        P: FnMut(&A) -> bool;

    /// See [`group_by`](super::group_by).
    fn group_by<F>(&self, equivalent: F) -> Vec<&[A]>
    where
        F: FnMut(&A, &A) -> bool;

    /// See [`intersperse`](super::intersperse).
    fn intersperse(&self, separator: A) -> Vec<A>
    where
        A: Clone;

    /// See [`drop_while_end`](super::drop_while_end).
    fn drop_while_end<P>(&self, predicate: P) -> &[A]
    where
        P: FnMut(&A) -> bool;

    /// See [`map_with_index`](super::map_with_index).
    fn map_with_index<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(usize, &A) -> B;

    /// See [`filter_length`](super::filter_length).
    fn filter_length<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&A) -> bool;

    /// Left fold seeded with a clone of the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when the slice is empty.
    fn fold_left1<F>(&self, function: F) -> Result<A, EmptyInputError>
    where
        A: Clone,
        F: FnMut(A, A) -> A;

    /// Right fold seeded with a clone of the last element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when the slice is empty.
    fn fold_right1<F>(&self, function: F) -> Result<A, EmptyInputError>
    where
        A: Clone,
        F: FnMut(A, A) -> A;
}

impl<A> SliceExt<A> for [A] {
    fn match_list(&self) -> ListMatcher<'_, A> {
        matcher::match_list(self)
    }

    fn uncons(&self) -> Option<(&A, &[A])> {
        matcher::uncons(self)
    }

    fn decompose(&self) -> Option<(A, Vec<A>)>
    where
        A: Clone,
    {
        self.split_first()
            .map(|(head, tail)| (head.clone(), tail.to_vec()))
    }

    fn safe_index(&self, index: isize) -> Option<&A> {
        matcher::safe_index(self, index)
    }

    fn is_null(&self) -> bool {
        self.is_empty()
    }

    fn span<P>(&self, predicate: P) -> (&[A], &[A])
    where
        P: FnMut(&A) -> bool,
    {
        sublist::span(self, predicate)
    }

    fn group_by<F>(&self, equivalent: F) -> Vec<&[A]>
    where
        F: FnMut(&A, &A) -> bool,
    {
        sublist::group_by(self, equivalent)
    }

    fn intersperse(&self, separator: A) -> Vec<A>
    where
        A: Clone,
    {
        transform::intersperse(separator, self.iter().cloned())
    }

    fn drop_while_end<P>(&self, predicate: P) -> &[A]
    where
        P: FnMut(&A) -> bool,
    {
        sublist::drop_while_end(self, predicate)
    }

    fn map_with_index<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(usize, &A) -> B,
    {
        transform::map_with_index(self, function)
    }

    fn filter_length<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&A) -> bool,
    {
        fold::filter_length(self, |value: &&A| predicate(*value))
    }

    fn fold_left1<F>(&self, function: F) -> Result<A, EmptyInputError>
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        let (first, rest) = self
            .split_first()
            .ok_or_else(|| EmptyInputError::new("fold_left1"))?;
        Ok(fold::foldl(function, first.clone(), rest.iter().cloned()))
    }

    fn fold_right1<F>(&self, function: F) -> Result<A, EmptyInputError>
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        let (last, rest) = self
            .split_last()
            .ok_or_else(|| EmptyInputError::new("fold_right1"))?;
        Ok(fold::foldr(function, last.clone(), rest.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decompose_clones_head_and_tail() {
        let words = vec![String::from("x"), String::from("y")];
        assert_eq!(
            words.decompose(),
            Some((String::from("x"), vec![String::from("y")]))
        );
        assert_eq!(Vec::<String>::new().decompose(), None);
    }

    #[rstest]
    fn methods_delegate_to_free_functions() {
        let values = [1, 2, 3, 0, 0];
        assert_eq!(values.span(|x| *x < 3), (&values[..2], &values[2..]));
        assert_eq!(values.drop_while_end(|x| *x == 0), &[1, 2, 3]);
        assert_eq!(values.intersperse(9), vec![1, 9, 2, 9, 3, 9, 0, 9, 0]);
        assert_eq!(values.filter_length(|x| *x == 0), 2);
        assert!(!values.is_null());
        assert_eq!(values.uncons(), Some((&1, &values[1..])));
    }

    #[rstest]
    fn map_with_index_borrows() {
        let labels = ["a", "b"].map_with_index(|index, value| format!("{value}{index}"));
        assert_eq!(labels, vec!["a0", "b1"]);
    }

    #[rstest]
    fn fold_methods() {
        let values = [10, 2, 3];
        assert_eq!(values.fold_left1(|a, b| a - b), Ok(5));
        assert_eq!(values.fold_right1(|a, b| a - b), Ok(11));
        let empty: [i32; 0] = [];
        assert_eq!(
            empty.fold_left1(|a, b| a - b),
            Err(EmptyInputError::new("fold_left1"))
        );
        assert_eq!(
            empty.fold_right1(|a, b| a - b),
            Err(EmptyInputError::new("fold_right1"))
        );
    }
}
