//! Map that materializes a default value on first read.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

/// A `HashMap` whose [`get`](DefaultMap::get) creates missing entries with `init()`.
///
/// Only `get` invokes the factory. [`peek`](DefaultMap::peek), `contains_key`,
/// `remove` and iteration behave like a plain map.
///
/// ```rust
/// use aoc_search::collections::DefaultMap;
///
/// let mut by_len = DefaultMap::new(Vec::new);
/// for word in ["ab", "cd", "efg"] {
///     by_len.get(word.len()).push(word);
/// }
///
/// assert_eq!(by_len.peek(&2), Some(&vec!["ab", "cd"]));
/// assert_eq!(by_len.peek(&4), None);
/// assert_eq!(by_len.len(), 2);
/// ```
#[derive(Clone)]
pub struct DefaultMap<K, V, F = fn() -> V> {
    entries: HashMap<K, V>,
    init: F,
}

impl<K, V, F> DefaultMap<K, V, F>
where
    K: Hash + Eq,
    F: Fn() -> V,
{
    pub fn new(init: F) -> Self {
        Self {
            entries: HashMap::new(),
            init,
        }
    }

    /// Returns the value for `key`, storing `init()` under it first if absent.
    pub fn get(&mut self, key: K) -> &mut V {
        self.entries.entry(key).or_insert_with(&self.init)
    }

    /// Looks up `key` without creating an entry.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }
}

impl<K, V> DefaultMap<K, V>
where
    K: Hash + Eq,
    V: Default,
{
    /// Creates a map that fills missing entries with `V::default()`.
    pub fn with_default() -> Self {
        Self::new(V::default)
    }
}

impl<K, V, F> DefaultMap<K, V, F> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, K, V> {
        self.entries.iter_mut()
    }

    pub fn into_inner(self) -> HashMap<K, V> {
        self.entries
    }
}

impl<K, V, F> IntoIterator for DefaultMap<K, V, F> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, F> IntoIterator for &'a DefaultMap<K, V, F> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, F> fmt::Debug for DefaultMap<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
