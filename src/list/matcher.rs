//! Destructuring a slice into head and tail.
//!
//! Every accessor here is total: an empty slice produces
//! [`ListMatcher::Nil`] or `None`, never a panic.

/// The two shapes a list can take.
///
/// ```
/// use preludium::list::{ListMatcher, match_list};
///
/// fn length<A>(values: &[A]) -> usize {
///     let mut count = 0;
///     let mut rest = values;
///     while let ListMatcher::Cons(_, tail) = match_list(rest) {
///         count += 1;
///         rest = tail;
///     }
///     count
/// }
///
/// assert_eq!(length(&[1, 2, 3]), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListMatcher<'a, A> {
    /// The empty list.
    Nil,
    /// A first element followed by the remaining elements.
    Cons(&'a A, &'a [A]),
}

/// Views `values` as [`ListMatcher::Nil`] or [`ListMatcher::Cons`].
#[inline]
pub fn match_list<A>(values: &[A]) -> ListMatcher<'_, A> {
    match values {
        [] => ListMatcher::Nil,
        [head, tail @ ..] => ListMatcher::Cons(head, tail),
    }
}

/// The first element, if any.
#[inline]
pub fn head<A>(values: &[A]) -> Option<&A> {
    values.first()
}

/// Everything after the first element, or `None` for an empty slice.
///
/// ```
/// use preludium::list::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), Some(&[2, 3][..]));
/// assert_eq!(tail(&[1]), Some(&[][..]));
/// assert_eq!(tail::<i32>(&[]), None);
/// ```
#[inline]
pub fn tail<A>(values: &[A]) -> Option<&[A]> {
    values.split_first().map(|(_, rest)| rest)
}

/// Head and tail together.
#[inline]
pub fn uncons<A>(values: &[A]) -> Option<(&A, &[A])> {
    values.split_first()
}

/// Whether the slice is empty.
#[inline]
pub const fn null<A>(values: &[A]) -> bool {
    values.is_empty()
}

/// A new list with `value` in front of `values`.
pub fn cons<A: Clone>(value: A, values: &[A]) -> Vec<A> {
    let mut result = Vec::with_capacity(values.len() + 1);
    result.push(value);
    result.extend_from_slice(values);
    result
}

/// Index into `values`, answering `None` for negative or out-of-range
/// indices.
///
/// ```
/// use preludium::list::safe_index;
///
/// let values = ['a', 'b'];
/// assert_eq!(safe_index(&values, 1), Some(&'b'));
/// assert_eq!(safe_index(&values, 2), None);
/// assert_eq!(safe_index(&values, -1), None);
/// ```
#[inline]
pub fn safe_index<A>(values: &[A], index: isize) -> Option<&A> {
    usize::try_from(index).ok().and_then(|index| values.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn match_list_on_empty_is_nil() {
        assert_eq!(match_list::<u8>(&[]), ListMatcher::Nil);
    }

    #[rstest]
    #[case(&[7], 7, &[])]
    #[case(&[1, 2, 3], 1, &[2, 3])]
    fn match_list_splits(#[case] values: &[i32], #[case] first: i32, #[case] rest: &[i32]) {
        assert_eq!(match_list(values), ListMatcher::Cons(&first, rest));
    }

    #[rstest]
    fn head_and_uncons() {
        assert_eq!(head(&["x", "y"]), Some(&"x"));
        assert_eq!(head::<&str>(&[]), None);
        assert_eq!(uncons(&[1, 2]), Some((&1, &[2][..])));
        assert_eq!(uncons::<i32>(&[]), None);
    }

    #[rstest]
    fn null_detects_empty() {
        assert!(null::<()>(&[]));
        assert!(!null(&[()]));
    }

    #[rstest]
    fn cons_prepends() {
        assert_eq!(cons(0, &[1, 2]), vec![0, 1, 2]);
        assert_eq!(cons("only", &[]), vec!["only"]);
    }

    #[rstest]
    #[case(0, Some(10))]
    #[case(2, Some(30))]
    #[case(3, None)]
    #[case(-1, None)]
    #[case(isize::MIN, None)]
    fn safe_index_never_panics(#[case] index: isize, #[case] expected: Option<i32>) {
        assert_eq!(safe_index(&[10, 20, 30], index).copied(), expected);
    }
}
