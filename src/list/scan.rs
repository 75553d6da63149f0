//! Scans: folds that keep every intermediate accumulator.
//!
//! ```text
//! scanl(f, z, [x1, x2, ..]) == [z, f(z, x1), f(f(z, x1), x2), ..]
//! scanr(f, z, [.., xn-1, xn]) == [.., f(xn-1, f(xn, z)), f(xn, z), z]
//! ```
//!
//! The last element of `scanl` is the matching `foldl`; the first element
//! of `scanr` is the matching `foldr`.

use crate::error::EmptyInputError;

/// Left-to-right scan, starting with `initial`.
///
/// The result always has one more element than the input.
///
/// ```
/// use preludium::list::scanl;
///
/// assert_eq!(scanl(|acc, x| acc + x, 0, [1, 2, 3]), vec![0, 1, 3, 6]);
/// ```
pub fn scanl<A, B, F, I>(mut function: F, initial: B, values: I) -> Vec<B>
where
    B: Clone,
    F: FnMut(B, A) -> B,
    I: IntoIterator<Item = A>,
{
    let iterator = values.into_iter();
    let mut results = Vec::with_capacity(iterator.size_hint().0 + 1);
    let mut accumulator = initial;
    for value in iterator {
        let next = function(accumulator.clone(), value);
        results.push(accumulator);
        accumulator = next;
    }
    results.push(accumulator);
    results
}

/// [`scanl`] seeded with the first element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
pub fn scanl1<A, F, I>(function: F, values: I) -> Result<Vec<A>, EmptyInputError>
where
    A: Clone,
    F: FnMut(A, A) -> A,
    I: IntoIterator<Item = A>,
{
    let mut iterator = values.into_iter();
    let first = iterator.next().ok_or_else(|| EmptyInputError::new("scanl1"))?;
    Ok(scanl(function, first, iterator))
}

/// Right-to-left scan, ending with `initial`.
///
/// ```
/// use preludium::list::scanr;
///
/// assert_eq!(scanr(|x, acc| x + acc, 0, [1, 2, 3]), vec![6, 5, 3, 0]);
/// ```
pub fn scanr<A, B, F, I>(mut function: F, initial: B, values: I) -> Vec<B>
where
    B: Clone,
    F: FnMut(A, B) -> B,
    I: IntoIterator<Item = A>,
    I::IntoIter: DoubleEndedIterator,
{
    let iterator = values.into_iter().rev();
    let mut results = Vec::with_capacity(iterator.size_hint().0 + 1);
    let mut accumulator = initial;
    for value in iterator {
        let next = function(value, accumulator.clone());
        results.push(accumulator);
        accumulator = next;
    }
    results.push(accumulator);
    results.reverse();
    results
}

/// [`scanr`] seeded with the last element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
///
/// ```
/// use preludium::list::scanr1;
///
/// assert_eq!(scanr1(|x, acc| x.max(acc), [3_i32, 1, 4, 1, 5, 2]), Ok(vec![5, 5, 5, 5, 5, 2]));
/// ```
pub fn scanr1<A, F, I>(function: F, values: I) -> Result<Vec<A>, EmptyInputError>
where
    A: Clone,
    F: FnMut(A, A) -> A,
    I: IntoIterator<Item = A>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut iterator = values.into_iter();
    let last = iterator
        .next_back()
        .ok_or_else(|| EmptyInputError::new("scanr1"))?;
    Ok(scanr(function, last, iterator))
}
