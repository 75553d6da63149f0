//! Predicate-driven splitting of slices.
//!
//! All results borrow from the input; nothing is cloned.
//!
//! ```text
//! span(xs, p) == (take_while(xs, p), drop_while(xs, p))
//! ```

/// Splits `values` at the first element that fails `predicate`.
///
/// ```
/// use preludium::list::span;
///
/// let values = [1, 2, 3, 4, 1, 2, 3, 4];
/// assert_eq!(span(&values, |x| *x < 3), (&[1, 2][..], &[3, 4, 1, 2, 3, 4][..]));
/// assert_eq!(span(&[1, 2, 3], |x| *x < 9), (&[1, 2, 3][..], &[][..]));
/// assert_eq!(span(&[1, 2, 3], |x| *x < 0), (&[][..], &[1, 2, 3][..]));
/// ```
pub fn span<A, P>(values: &[A], mut predicate: P) -> (&[A], &[A])
where
    P: FnMut(&A) -> bool,
{
    let split = values
        .iter()
        .position(|value| !predicate(value))
        .unwrap_or(values.len());
    values.split_at(split)
}

/// Splits `values` at the first element that satisfies `predicate`.
///
/// Equivalent to `span` with the predicate negated.
pub fn break_when<A, P>(values: &[A], mut predicate: P) -> (&[A], &[A])
where
    P: FnMut(&A) -> bool,
{
    span(values, |value| !predicate(value))
}

/// The longest prefix whose elements all satisfy `predicate`.
///
/// ```
/// use preludium::list::take_while;
///
/// assert_eq!(take_while(&[1, 2, 3, 4, 1, 2, 3, 4], |x| *x < 3), &[1, 2]);
/// ```
pub fn take_while<A, P>(values: &[A], predicate: P) -> &[A]
where
    P: FnMut(&A) -> bool,
{
    span(values, predicate).0
}

/// What remains after [`take_while`].
///
/// ```
/// use preludium::list::drop_while;
///
/// assert_eq!(drop_while(&[1, 2, 3, 4, 5, 1, 2, 3], |x| *x < 3), &[3, 4, 5, 1, 2, 3]);
/// ```
pub fn drop_while<A, P>(values: &[A], predicate: P) -> &[A]
where
    P: FnMut(&A) -> bool,
{
    span(values, predicate).1
}

/// Removes the longest suffix whose elements all satisfy `predicate`.
///
/// ```
/// use preludium::list::drop_while_end;
///
/// assert_eq!(drop_while_end(&[1, 2, 3, 0, 0], |x| *x == 0), &[1, 2, 3]);
/// assert_eq!(drop_while_end(&[0, 1, 0], |x| *x == 0), &[0, 1]);
/// ```
pub fn drop_while_end<A, P>(values: &[A], mut predicate: P) -> &[A]
where
    P: FnMut(&A) -> bool,
{
    let keep = values
        .iter()
        .rposition(|value| !predicate(value))
        .map_or(0, |index| index + 1);
    &values[..keep]
}

/// Groups runs of elements that are `equivalent` to the first element of
/// their run.
///
/// Each element is compared against the head of the current group, not
/// against its neighbour, so a non-transitive relation still yields
/// well-defined groups.
///
/// ```
/// use preludium::list::group_by;
///
/// let runs = group_by(&[1_i32, 2, 3, 7, 8, 2], |head, x| (x - head).abs() < 3);
/// assert_eq!(runs, vec![&[1, 2, 3][..], &[7, 8][..], &[2][..]]);
/// ```
pub fn group_by<A, F>(values: &[A], mut equivalent: F) -> Vec<&[A]>
where
    F: FnMut(&A, &A) -> bool,
{
    let mut groups = Vec::new();
    let mut rest = values;
    while let Some((first, tail)) = rest.split_first() {
        let (same, _) = span(tail, |value| equivalent(first, value));
        let (group, remaining) = rest.split_at(same.len() + 1);
        groups.push(group);
        rest = remaining;
    }
    groups
}

/// Groups runs of equal adjacent elements.
///
/// ```
/// use preludium::list::group;
///
/// let runs = group(&[0, 1, 1, 2, 3, 3, 4, 5, 6, 7, 7]);
/// assert_eq!(runs.len(), 8);
/// assert_eq!(runs[1], &[1, 1]);
/// ```
pub fn group<A: PartialEq>(values: &[A]) -> Vec<&[A]> {
    group_by(values, |head, value| head == value)
}

/// The first element satisfying `predicate`.
pub fn find<A, P>(values: &[A], mut predicate: P) -> Option<&A>
where
    P: FnMut(&A) -> bool,
{
    values.iter().find(|value| predicate(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn span_on_empty() {
        let (front, back) = span::<i32, _>(&[], |_| true);
        assert!(front.is_empty() && back.is_empty());
    }

    #[rstest]
    fn break_when_stops_at_first_match() {
        let (front, back) = break_when(&["a", "b", "", "c"], |s| s.is_empty());
        assert_eq!(front, &["a", "b"]);
        assert_eq!(back, &["", "c"]);
    }

    #[rstest]
    #[case(&[1, 2, 3], 9, &[1, 2, 3], &[])]
    #[case(&[1, 2, 3], 0, &[], &[1, 2, 3])]
    #[case(&[5, 1, 2], 3, &[], &[5, 1, 2])]
    fn take_and_drop_while(
        #[case] values: &[i32],
        #[case] limit: i32,
        #[case] taken: &[i32],
        #[case] dropped: &[i32],
    ) {
        assert_eq!(take_while(values, |x| *x < limit), taken);
        assert_eq!(drop_while(values, |x| *x < limit), dropped);
    }

    #[rstest]
    fn drop_while_end_on_all_matching_is_empty() {
        assert!(drop_while_end(&[' ', ' '], |c| c.is_whitespace()).is_empty());
        assert!(drop_while_end::<char, _>(&[], |_| true).is_empty());
    }

    #[rstest]
    fn group_of_distinct_and_empty() {
        assert_eq!(group(&[1, 2, 3]), vec![&[1][..], &[2][..], &[3][..]]);
        assert!(group::<u8>(&[]).is_empty());
    }

    #[rstest]
    fn group_by_compares_with_group_head() {
        let runs = group_by(&[1_i32, 2, 3, 4, 5], |head, x| x - head <= 1);
        assert_eq!(runs, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[rstest]
    fn group_by_with_projection() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let runs = group_by(&words, |a, b| a.chars().next() == b.chars().next());
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], &["apple", "avocado"]);
    }

    #[rstest]
    fn find_first_match() {
        assert_eq!(find(&[1_u8, 4, 6], |x| x % 2 == 0), Some(&4));
        assert_eq!(find(&[1_u8, 3], |x| x % 2 == 0), None);
    }
}
