//! Building sequences from a seed.

/// Anamorphism: repeatedly applies `step` to a seed, collecting the emitted
/// values until `step` returns `None`.
///
/// ```
/// use preludium::list::unfoldr;
///
/// let counted = unfoldr(|seed| if seed <= 9 { Some((seed, seed + 1)) } else { None }, 3);
/// assert_eq!(counted, vec![3, 4, 5, 6, 7, 8, 9]);
/// ```
///
/// A `step` that never answers `None` never returns.
pub fn unfoldr<A, S, F>(mut step: F, seed: S) -> Vec<A>
where
    F: FnMut(S) -> Option<(A, S)>,
{
    let mut values = Vec::new();
    let mut state = seed;
    while let Some((value, next)) = step(state) {
        values.push(value);
        state = next;
    }
    values
}

/// Advances `initial` with `next` for as long as the produced value satisfies
/// `condition`, returning the last accepted value.
///
/// `initial` itself is not checked against `condition`. Stepping stops at
/// the first `None` or rejected value.
///
/// ```
/// use preludium::list::iterate_while;
///
/// let largest_square_below_100 =
///     iterate_while(|n: &u32| n * n < 100, 1, |n| n.checked_add(1));
/// assert_eq!(largest_square_below_100, 9);
///
/// assert_eq!(iterate_while(|_: &u8| true, 250, |n| n.checked_add(1)), 255);
/// ```
pub fn iterate_while<A, P, F>(mut condition: P, initial: A, mut next: F) -> A
where
    P: FnMut(&A) -> bool,
    F: FnMut(&A) -> Option<A>,
{
    let mut current = initial;
    while let Some(candidate) = next(&current) {
        if !condition(&candidate) {
            break;
        }
        current = candidate;
    }
    current
}
