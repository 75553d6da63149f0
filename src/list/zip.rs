//! Pairing sequences element by element.
//!
//! Every zip truncates to its shortest input; surplus elements of longer
//! inputs are discarded.

/// Pairs corresponding elements.
///
/// ```
/// use preludium::list::zip;
///
/// assert_eq!(zip([1, 2, 3], ['a', 'b']), vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip<A, B, I, J>(first: I, second: J) -> Vec<(A, B)>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
{
    first.into_iter().zip(second).collect()
}

/// Triples corresponding elements.
pub fn zip3<A, B, C, I, J, K>(first: I, second: J, third: K) -> Vec<(A, B, C)>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
    K: IntoIterator<Item = C>,
{
    first
        .into_iter()
        .zip(second)
        .zip(third)
        .map(|((a, b), c)| (a, b, c))
        .collect()
}

/// Combines corresponding elements with `function`.
///
/// ```
/// use preludium::list::zip_with;
///
/// assert_eq!(zip_with(|a, b| a + b, [1, 2, 3], [10, 20]), vec![11, 22]);
/// ```
pub fn zip_with<A, B, C, F, I, J>(mut function: F, first: I, second: J) -> Vec<C>
where
    F: FnMut(A, B) -> C,
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
{
    first
        .into_iter()
        .zip(second)
        .map(|(a, b)| function(a, b))
        .collect()
}

/// Combines corresponding elements of three sequences with `function`.
pub fn zip_with3<A, B, C, D, F, I, J, K>(mut function: F, first: I, second: J, third: K) -> Vec<D>
where
    F: FnMut(A, B, C) -> D,
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
    K: IntoIterator<Item = C>,
{
    first
        .into_iter()
        .zip(second)
        .zip(third)
        .map(|((a, b), c)| function(a, b, c))
        .collect()
}

/// Splits a sequence of pairs into a pair of sequences.
pub fn unzip<A, B, I>(pairs: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = (A, B)>,
{
    pairs.into_iter().unzip()
}

/// Splits a sequence of triples into a triple of sequences.
///
/// ```
/// use preludium::list::unzip3;
///
/// let (numbers, letters, flags) = unzip3([(1, 'a', true), (2, 'b', false)]);
/// assert_eq!(numbers, vec![1, 2]);
/// assert_eq!(letters, vec!['a', 'b']);
/// assert_eq!(flags, vec![true, false]);
/// ```
pub fn unzip3<A, B, C, I>(triples: I) -> (Vec<A>, Vec<B>, Vec<C>)
where
    I: IntoIterator<Item = (A, B, C)>,
{
    let iterator = triples.into_iter();
    let capacity = iterator.size_hint().0;
    let mut firsts = Vec::with_capacity(capacity);
    let mut seconds = Vec::with_capacity(capacity);
    let mut thirds = Vec::with_capacity(capacity);
    for (a, b, c) in iterator {
        firsts.push(a);
        seconds.push(b);
        thirds.push(c);
    }
    (firsts, seconds, thirds)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::list::take;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn zip_length_is_shortest(
            left in proptest::collection::vec(any::<i16>(), 0..20),
            right in proptest::collection::vec(any::<char>(), 0..20),
        ) {
            let shortest = left.len().min(right.len());
            prop_assert_eq!(zip(left.clone(), right.clone()).len(), shortest);

            let (unzipped_left, unzipped_right) = unzip(zip(left.clone(), right.clone()));
            let count = isize::try_from(shortest).unwrap();
            prop_assert_eq!(unzipped_left.as_slice(), take(count, &left));
            prop_assert_eq!(unzipped_right.as_slice(), take(count, &right));
        }
    }
}
