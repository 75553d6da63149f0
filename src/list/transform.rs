//! Element-wise rebuilding of sequences.

/// Places `separator` between consecutive elements.
///
/// ```
/// use preludium::list::intersperse;
///
/// assert_eq!(intersperse(",", ["a", "b", "c"]), vec!["a", ",", "b", ",", "c"]);
/// assert_eq!(intersperse(0, [7]), vec![7]);
/// ```
pub fn intersperse<A, I>(separator: A, values: I) -> Vec<A>
where
    A: Clone,
    I: IntoIterator<Item = A>,
{
    let mut iterator = values.into_iter();
    let Some(first) = iterator.next() else {
        return Vec::new();
    };
    let mut result = Vec::with_capacity(iterator.size_hint().0 * 2 + 1);
    result.push(first);
    for value in iterator {
        result.push(separator.clone());
        result.push(value);
    }
    result
}

/// Joins the inner sequences with `separator` between each pair.
///
/// `intercalate(sep, xss) == concat(intersperse(sep, xss))`.
///
/// ```
/// use preludium::list::intercalate;
///
/// let joined = intercalate(&[0], [vec![1, 2], vec![3], vec![]]);
/// assert_eq!(joined, vec![1, 2, 0, 3, 0]);
/// ```
pub fn intercalate<A, Inner, I>(separator: &[A], nested: I) -> Vec<A>
where
    A: Clone,
    Inner: AsRef<[A]>,
    I: IntoIterator<Item = Inner>,
{
    let mut result = Vec::new();
    for (index, inner) in nested.into_iter().enumerate() {
        if index > 0 {
            result.extend_from_slice(separator);
        }
        result.extend_from_slice(inner.as_ref());
    }
    result
}

/// Maps with access to each element's zero-based position.
///
/// ```
/// use preludium::list::map_with_index;
///
/// let labelled = map_with_index(["a", "b"], |index, value| format!("{index}:{value}"));
/// assert_eq!(labelled, vec!["0:a", "1:b"]);
/// ```
pub fn map_with_index<A, B, F, I>(values: I, mut function: F) -> Vec<B>
where
    F: FnMut(usize, A) -> B,
    I: IntoIterator<Item = A>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| function(index, value))
        .collect()
}

/// Maps and keeps only the `Some` results.
///
/// ```
/// use preludium::list::map_maybe;
///
/// let numbers = map_maybe(["1", "x", "3"], |s| s.parse::<i32>().ok());
/// assert_eq!(numbers, vec![1, 3]);
/// ```
pub fn map_maybe<A, B, F, I>(values: I, function: F) -> Vec<B>
where
    F: FnMut(A) -> Option<B>,
    I: IntoIterator<Item = A>,
{
    values.into_iter().filter_map(function).collect()
}

/// Drops the `None`s and unwraps the `Some`s.
pub fn cat_options<A, I>(values: I) -> Vec<A>
where
    I: IntoIterator<Item = Option<A>>,
{
    values.into_iter().flatten().collect()
}
