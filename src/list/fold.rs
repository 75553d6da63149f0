//! Folds: reducing a sequence to a single value.
//!
//! # Laws
//!
//! ```text
//! foldl(f, z, [x1, x2, x3]) == f(f(f(z, x1), x2), x3)
//! foldr(f, z, [x1, x2, x3]) == f(x1, f(x2, f(x3, z)))
//! ```
//!
//! `foldr` walks the input back to front with a loop, so it uses constant
//! stack regardless of input length.

use std::cmp::Ordering;
use std::iter::{Product, Sum};

use crate::error::EmptyInputError;

use super::unfold::unfoldr;

/// Left-associative fold.
///
/// ```
/// use preludium::list::foldl;
///
/// assert_eq!(foldl(|acc, x| acc - x, 10, [1, 2, 3]), 4);
/// ```
#[inline]
pub fn foldl<A, B, F, I>(function: F, initial: B, values: I) -> B
where
    F: FnMut(B, A) -> B,
    I: IntoIterator<Item = A>,
{
    values.into_iter().fold(initial, function)
}

/// Right-associative fold.
///
/// ```
/// use preludium::list::foldr;
///
/// assert_eq!(foldr(|x, acc| x - acc, 0, [1, 2, 3]), 2);
/// let rebuilt = foldr(|x, mut acc: Vec<i32>| { acc.insert(0, x); acc }, Vec::new(), [1, 2]);
/// assert_eq!(rebuilt, vec![1, 2]);
/// ```
#[inline]
pub fn foldr<A, B, F, I>(mut function: F, initial: B, values: I) -> B
where
    F: FnMut(A, B) -> B,
    I: IntoIterator<Item = A>,
    I::IntoIter: DoubleEndedIterator,
{
    values
        .into_iter()
        .rev()
        .fold(initial, |accumulator, value| function(value, accumulator))
}

/// [`foldl`] seeded with the first element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
///
/// ```
/// use preludium::list::foldl1;
///
/// assert_eq!(foldl1(|a, b| a - b, [10, 2, 3]), Ok(5));
/// assert!(foldl1(|a: i32, b| a + b, []).is_err());
/// ```
pub fn foldl1<A, F, I>(function: F, values: I) -> Result<A, EmptyInputError>
where
    F: FnMut(A, A) -> A,
    I: IntoIterator<Item = A>,
{
    let mut iterator = values.into_iter();
    let first = iterator.next().ok_or_else(|| EmptyInputError::new("foldl1"))?;
    Ok(iterator.fold(first, function))
}

/// [`foldr`] seeded with the last element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
///
/// ```
/// use preludium::list::foldr1;
///
/// assert_eq!(foldr1(|a, b| a - b, [10, 2, 3]), Ok(11));
/// ```
pub fn foldr1<A, F, I>(mut function: F, values: I) -> Result<A, EmptyInputError>
where
    F: FnMut(A, A) -> A,
    I: IntoIterator<Item = A>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut iterator = values.into_iter().rev();
    let last = iterator.next().ok_or_else(|| EmptyInputError::new("foldr1"))?;
    Ok(iterator.fold(last, |accumulator, value| function(value, accumulator)))
}

/// Conjunction; `true` for no input.
pub fn and<I: IntoIterator<Item = bool>>(values: I) -> bool {
    values.into_iter().all(|value| value)
}

/// Disjunction; `false` for no input.
pub fn or<I: IntoIterator<Item = bool>>(values: I) -> bool {
    values.into_iter().any(|value| value)
}

/// Whether some element satisfies `predicate`.
pub fn any<A, P, I>(values: I, predicate: P) -> bool
where
    P: FnMut(A) -> bool,
    I: IntoIterator<Item = A>,
{
    values.into_iter().any(predicate)
}

/// Whether every element satisfies `predicate`; `true` for no input.
pub fn all<A, P, I>(values: I, predicate: P) -> bool
where
    P: FnMut(A) -> bool,
    I: IntoIterator<Item = A>,
{
    values.into_iter().all(predicate)
}

/// Flattens one level of nesting.
///
/// ```
/// use preludium::list::concat;
///
/// assert_eq!(concat(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub fn concat<A, Inner, I>(values: I) -> Vec<A>
where
    Inner: IntoIterator<Item = A>,
    I: IntoIterator<Item = Inner>,
{
    values.into_iter().flatten().collect()
}

/// Maps every element to a sequence and concatenates the results.
pub fn concat_map<A, B, Inner, F, I>(values: I, function: F) -> Vec<B>
where
    F: FnMut(A) -> Inner,
    Inner: IntoIterator<Item = B>,
    I: IntoIterator<Item = A>,
{
    values.into_iter().flat_map(function).collect()
}

/// Sum of all elements; the additive identity for no input.
///
/// ```
/// use preludium::list::sum;
///
/// assert_eq!(sum::<i32, _>([2, 4, 1, 0, 3]), 10);
/// ```
pub fn sum<A, I>(values: I) -> A
where
    A: Sum<A>,
    I: IntoIterator<Item = A>,
{
    values.into_iter().sum()
}

/// Product of all elements; the multiplicative identity for no input.
pub fn product<A, I>(values: I) -> A
where
    A: Product<A>,
    I: IntoIterator<Item = A>,
{
    values.into_iter().product()
}

/// The greatest element. Among equal maxima the last one is returned.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
pub fn maximum<A, I>(values: I) -> Result<A, EmptyInputError>
where
    A: Ord,
    I: IntoIterator<Item = A>,
{
    values
        .into_iter()
        .max()
        .ok_or_else(|| EmptyInputError::new("maximum"))
}

/// The least element. Among equal minima the first one is returned.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
pub fn minimum<A, I>(values: I) -> Result<A, EmptyInputError>
where
    A: Ord,
    I: IntoIterator<Item = A>,
{
    values
        .into_iter()
        .min()
        .ok_or_else(|| EmptyInputError::new("minimum"))
}

/// [`maximum`] under a caller-supplied ordering.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
pub fn maximum_by<A, F, I>(values: I, compare: F) -> Result<A, EmptyInputError>
where
    F: FnMut(&A, &A) -> Ordering,
    I: IntoIterator<Item = A>,
{
    values
        .into_iter()
        .max_by(compare)
        .ok_or_else(|| EmptyInputError::new("maximum_by"))
}

/// [`minimum`] under a caller-supplied ordering.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `values` is empty.
pub fn minimum_by<A, F, I>(values: I, compare: F) -> Result<A, EmptyInputError>
where
    F: FnMut(&A, &A) -> Ordering,
    I: IntoIterator<Item = A>,
{
    values
        .into_iter()
        .min_by(compare)
        .ok_or_else(|| EmptyInputError::new("minimum_by"))
}

/// Number of elements satisfying `predicate`.
pub fn filter_length<A, P, I>(values: I, mut predicate: P) -> usize
where
    P: FnMut(&A) -> bool,
    I: IntoIterator<Item = A>,
{
    values.into_iter().filter(|value| predicate(value)).count()
}

/// Paramorphism: a right fold whose step also sees the unconsumed suffix.
///
/// `function(x, rest, acc)` receives each element, the slice after it and
/// the result of folding that slice.
///
/// ```
/// use preludium::list::para;
///
/// // Suffix sums: every element paired with the sum of what follows it.
/// let pairs = para(
///     |x: &i32, rest: &[i32], mut acc: Vec<(i32, i32)>| {
///         acc.insert(0, (*x, rest.iter().sum()));
///         acc
///     },
///     Vec::new(),
///     &[1, 2, 3],
/// );
/// assert_eq!(pairs, vec![(1, 5), (2, 3), (3, 0)]);
/// ```
pub fn para<A, B, F>(mut function: F, initial: B, values: &[A]) -> B
where
    F: FnMut(&A, &[A], B) -> B,
{
    let mut accumulator = initial;
    for index in (0..values.len()).rev() {
        accumulator = function(&values[index], &values[index + 1..], accumulator);
    }
    accumulator
}

/// Hylomorphism: unfold from `seed`, then right-fold the result.
///
/// `hylo(g, z, f, seed) == foldr(g, z, unfoldr(f, seed))`.
///
/// ```
/// use preludium::list::hylo;
///
/// let factorial = |n: u64| hylo(|x, acc| x * acc, 1, |k| (k > 0).then(|| (k, k - 1)), n);
/// assert_eq!(factorial(5), 120);
/// ```
pub fn hylo<A, B, S, G, F>(fold: G, initial: B, unfold: F, seed: S) -> B
where
    G: FnMut(A, B) -> B,
    F: FnMut(S) -> Option<(A, S)>,
{
    foldr(fold, initial, unfoldr(unfold, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn foldl_is_left_associative() {
        let rendered = foldl(|acc: String, x: i32| format!("({acc}-{x})"), String::from("0"), [1, 2]);
        assert_eq!(rendered, "((0-1)-2)");
    }

    #[rstest]
    fn foldr_is_right_associative() {
        let rendered = foldr(|x: i32, acc: String| format!("({x}-{acc})"), String::from("0"), [1, 2]);
        assert_eq!(rendered, "(1-(2-0))");
    }

    #[rstest]
    fn foldr_on_long_input_does_not_recurse() {
        let values: Vec<u64> = (1..=200_000).collect();
        assert_eq!(foldr(|x, acc: u64| x + acc, 0, &values), 20_000_100_000);
    }

    #[rstest]
    fn fold1_on_empty_is_error() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(foldl1(|a, b| a + b, empty.clone()), Err(EmptyInputError::new("foldl1")));
        assert_eq!(foldr1(|a, b| a + b, empty), Err(EmptyInputError::new("foldr1")));
    }

    #[rstest]
    fn fold1_on_singleton_returns_it() {
        assert_eq!(foldl1(|_, _| unreachable!(), [9]), Ok(9));
        assert_eq!(foldr1(|_, _| unreachable!(), [9]), Ok(9));
    }

    #[rstest]
    #[case(vec![], true, false)]
    #[case(vec![true, true], true, true)]
    #[case(vec![true, false], false, true)]
    #[case(vec![false, false], false, false)]
    fn and_or(#[case] values: Vec<bool>, #[case] conjunction: bool, #[case] disjunction: bool) {
        assert_eq!(and(values.clone()), conjunction);
        assert_eq!(or(values), disjunction);
    }

    #[rstest]
    fn any_all_with_predicates() {
        assert!(any([1, 3, 4], |x| x % 2 == 0));
        assert!(!all([1, 3, 4], |x| x % 2 == 1));
        assert!(all(Vec::<i32>::new(), |_| false));
    }

    #[rstest]
    fn concat_map_expands() {
        assert_eq!(concat_map(["ab", "c"], str::chars), vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn sum_and_product() {
        assert_eq!(sum::<i32, _>([2, 4, 1, 0, 3]), 10);
        assert_eq!(product::<i32, _>([3, 4, 1, 2, 2, 1, 3]), 144);
        assert_eq!(sum::<u8, _>([]), 0);
        assert_eq!(product::<u8, _>([]), 1);
    }

    #[rstest]
    fn extremes() {
        assert_eq!(maximum([3, 9, 2]), Ok(9));
        assert_eq!(minimum([3, 9, 2]), Ok(2));
        assert_eq!(maximum(Vec::<u8>::new()), Err(EmptyInputError::new("maximum")));
        assert_eq!(minimum(Vec::<u8>::new()), Err(EmptyInputError::new("minimum")));
    }

    #[rstest]
    fn extremes_by_key() {
        let words = ["pear", "fig", "banana"];
        assert_eq!(maximum_by(words, |a, b| a.len().cmp(&b.len())), Ok("banana"));
        assert_eq!(minimum_by(words, |a, b| a.len().cmp(&b.len())), Ok("fig"));
    }

    #[rstest]
    fn filter_length_counts() {
        assert_eq!(filter_length([1, 2, 3, 4, 5], |x| *x > 2), 3);
        assert_eq!(filter_length(Vec::<i32>::new(), |_| true), 0);
    }

    #[rstest]
    fn para_sees_suffixes() {
        let record_rest = |_: &char, rest: &[char], mut acc: Vec<usize>| {
            acc.push(rest.len());
            acc
        };
        let lengths = para(record_rest, Vec::new(), &['a', 'b', 'c']);
        assert_eq!(lengths, vec![0, 1, 2]);
    }

    #[rstest]
    fn hylo_matches_foldr_of_unfoldr() {
        let step = |n: u32| (n < 5).then_some((n, n + 1));
        let direct = hylo(|x, acc: Vec<u32>| [vec![x], acc].concat(), Vec::new(), step, 0);
        assert_eq!(direct, vec![0, 1, 2, 3, 4]);
    }
}
