//! Prefix and suffix slicing with forgiving counts.
//!
//! Counts are signed: a negative count behaves like zero and a count past
//! the end behaves like the length, so none of these functions can panic.

fn clamp_count(count: isize, len: usize) -> usize {
    usize::try_from(count).map_or(0, |count| count.min(len))
}

/// The first `count` elements, or fewer if the slice is shorter.
///
/// ```
/// use preludium::list::take;
///
/// assert_eq!(take(3, &[1, 2]), &[1, 2]);
/// assert_eq!(take(0, &[1, 2]), &[] as &[i32]);
/// assert_eq!(take(-1, &[1, 2]), &[] as &[i32]);
/// ```
#[inline]
pub fn take<A>(count: isize, values: &[A]) -> &[A] {
    &values[..clamp_count(count, values.len())]
}

/// Everything after the first `count` elements.
///
/// ```
/// use preludium::list::drop;
///
/// assert_eq!(drop(3, &[1, 2]), &[] as &[i32]);
/// assert_eq!(drop(-1, &[1, 2]), &[1, 2]);
/// ```
#[inline]
pub fn drop<A>(count: isize, values: &[A]) -> &[A] {
    &values[clamp_count(count, values.len())..]
}

/// `(take(count, values), drop(count, values))` in one step.
///
/// ```
/// use preludium::list::split_at;
///
/// assert_eq!(split_at(3, &[1, 2, 3, 4, 5]), (&[1, 2, 3][..], &[4, 5][..]));
/// assert_eq!(split_at(0, &[1, 2, 3]), (&[][..], &[1, 2, 3][..]));
/// ```
#[inline]
pub fn split_at<A>(count: isize, values: &[A]) -> (&[A], &[A]) {
    values.split_at(clamp_count(count, values.len()))
}
