//! Lazy insertion into maps.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Look up a key, computing and inserting its value only when missing.
///
/// The map is borrowed mutably for the whole call, so there is exactly one
/// writer. Sharing a map across threads needs external synchronization.
///
/// ```
/// use std::collections::HashMap;
/// use preludium::collection::ComputeIfAbsent;
///
/// let mut lengths: HashMap<&str, usize> = HashMap::new();
/// assert_eq!(*lengths.compute_if_absent("four", |key| key.len()), 4);
/// // Present keys are returned as-is; the function is not called.
/// assert_eq!(*lengths.compute_if_absent("four", |_| unreachable!()), 4);
/// ```
pub trait ComputeIfAbsent<K, V> {
    /// Returns the value stored under `key`, first inserting
    /// `function(&key)` if there is none.
    fn compute_if_absent<F>(&mut self, key: K, function: F) -> &mut V
    where
        F: FnOnce(&K) -> V;
}

impl<K, V, S> ComputeIfAbsent<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn compute_if_absent<F>(&mut self, key: K, function: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        self.entry(key).or_insert_with_key(|key| {
            tracing::trace!("computed absent value");
            function(key)
        })
    }
}

impl<K: Ord, V> ComputeIfAbsent<K, V> for BTreeMap<K, V> {
    fn compute_if_absent<F>(&mut self, key: K, function: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        self.entry(key).or_insert_with_key(|key| {
            tracing::trace!("computed absent value");
            function(key)
        })
    }
}

/// Free-function form of [`ComputeIfAbsent::compute_if_absent`].
pub fn compute_if_absent<M, K, V, F>(map: &mut M, key: K, function: F) -> &mut V
where
    M: ComputeIfAbsent<K, V>,
    F: FnOnce(&K) -> V,
{
    map.compute_if_absent(key, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn hash_map_computes_once() {
        let calls = Cell::new(0);
        let mut squares: HashMap<u32, u32> = HashMap::new();
        for _ in 0..3 {
            let value = squares.compute_if_absent(7, |key| {
                calls.set(calls.get() + 1);
                key * key
            });
            assert_eq!(*value, 49);
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(squares.len(), 1);
    }

    #[rstest]
    fn existing_value_is_kept() {
        let mut map = BTreeMap::from([("a", 1)]);
        assert_eq!(*map.compute_if_absent("a", |_| 99), 1);
        assert_eq!(*map.compute_if_absent("b", |_| 2), 2);
        assert_eq!(map, BTreeMap::from([("a", 1), ("b", 2)]));
    }

    #[rstest]
    fn returned_reference_is_mutable() {
        let mut groups: HashMap<char, Vec<&str>> = HashMap::new();
        for word in ["apple", "avocado", "banana"] {
            let initial = word.chars().next().unwrap_or_default();
            compute_if_absent(&mut groups, initial, |_| Vec::new()).push(word);
        }
        assert_eq!(groups[&'a'], vec!["apple", "avocado"]);
        assert_eq!(groups[&'b'], vec!["banana"]);
    }
}
