//! Map and set keyed through a caller-supplied hash function.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

/// A map whose key identity is decided by a hash function instead of `Eq`.
///
/// Each entry is stored under `hash(&key)` together with the key itself, so
/// iteration hands back the structured keys rather than their hashes. Two keys
/// with the same hash are the same key as far as the map is concerned.
///
/// # Type Parameters
///
/// - `K`: Key type (no trait bounds required)
/// - `V`: Value type
/// - `H`: Hash type, used as the native key of the backing `HashMap`
/// - `F`: Hash function `Fn(&K) -> H`
///
/// # Example
///
/// ```rust
/// use aoc_search::collections::XMap;
///
/// #[derive(Debug)]
/// struct Robot { x: i32, y: i32, name: &'static str }
///
/// let mut seen = XMap::new(|r: &Robot| (r.x, r.y));
/// seen.insert(Robot { x: 1, y: 2, name: "a" }, 10);
/// seen.insert(Robot { x: 1, y: 2, name: "b" }, 20);
///
/// assert_eq!(seen.len(), 1);
/// assert_eq!(seen.get(&Robot { x: 1, y: 2, name: "c" }), Some(&20));
/// ```
#[derive(Clone)]
pub struct XMap<K, V, H, F = fn(&K) -> H> {
    entries: HashMap<H, (K, V)>,
    hash: F,
}

impl<K, V, H, F> XMap<K, V, H, F>
where
    H: Hash + Eq,
    F: Fn(&K) -> H,
{
    /// Creates an empty map that identifies keys by `hash`.
    pub fn new(hash: F) -> Self {
        Self {
            entries: HashMap::new(),
            hash,
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize, hash: F) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            hash,
        }
    }

    /// Computes the hash this map uses for `key`.
    pub fn hash_of(&self, key: &K) -> H {
        (self.hash)(key)
    }

    /// Stores `value` under `key`, replacing both the stored key and value of
    /// any entry with the same hash. Returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = (self.hash)(&key);
        self.entries.insert(hash, (key, value)).map(|(_, old)| old)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(&(self.hash)(key)).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = (self.hash)(key);
        self.entries.get_mut(&hash).map(|(_, value)| value)
    }

    /// Returns the stored key (not the one passed in) along with its value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.entries
            .get(&(self.hash)(key))
            .map(|(stored, value)| (stored, value))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(&(self.hash)(key))
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = (self.hash)(key);
        self.entries.remove(&hash)
    }

    /// Returns the value for `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let hash = (self.hash)(&key);
        &mut self.entries.entry(hash).or_insert_with(|| (key, default())).1
    }
}

impl<K, V, H, F> XMap<K, V, H, F> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates `(key, value)` pairs using the stored keys. Order is unspecified.
    pub fn iter(&self) -> Iter<'_, K, V, H> {
        Iter {
            inner: self.entries.values(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries.values_mut().map(|(_, value)| value)
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K, &mut V) -> bool) {
        self.entries.retain(|_, (key, value)| keep(key, value));
    }
}

impl<K, V, H, F> Extend<(K, V)> for XMap<K, V, H, F>
where
    H: Hash + Eq,
    F: Fn(&K) -> H,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, H, F> fmt::Debug for XMap<K, V, H, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over an [`XMap`].
pub struct Iter<'a, K, V, H> {
    inner: hash_map::Values<'a, H, (K, V)>,
}

impl<'a, K, V, H> Iterator for Iter<'a, K, V, H> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for Iter<'_, K, V, H> {}

/// Owning iterator over an [`XMap`].
pub struct IntoIter<K, V, H> {
    inner: hash_map::IntoValues<H, (K, V)>,
}

impl<K, V, H> Iterator for IntoIter<K, V, H> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for IntoIter<K, V, H> {}

impl<K, V, H, F> IntoIterator for XMap<K, V, H, F> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, H>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_values(),
        }
    }
}

impl<'a, K, V, H, F> IntoIterator for &'a XMap<K, V, H, F> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A set whose membership is decided by a hash function instead of `Eq`.
///
/// Thin projection of [`XMap`] with the values dropped.
///
/// ```rust
/// use aoc_search::collections::XSet;
///
/// let mut evens = XSet::new(|n: &i32| n.rem_euclid(10));
/// evens.extend([2, 4, 6, 12]);
/// assert_eq!(evens.len(), 3);
///
/// let mut small = XSet::new(|n: &i32| n.rem_euclid(10));
/// small.extend([1, 2, 3, 4]);
///
/// let both = evens.intersection(&small);
/// assert!(both.contains(&2));
/// assert!(both.contains(&4));
/// assert!(!both.contains(&6));
/// ```
#[derive(Clone)]
pub struct XSet<K, H, F = fn(&K) -> H> {
    map: XMap<K, (), H, F>,
}

impl<K, H, F> XSet<K, H, F>
where
    H: Hash + Eq,
    F: Fn(&K) -> H,
{
    pub fn new(hash: F) -> Self {
        Self {
            map: XMap::new(hash),
        }
    }

    pub fn with_capacity(capacity: usize, hash: F) -> Self {
        Self {
            map: XMap::with_capacity(capacity, hash),
        }
    }

    pub fn hash_of(&self, key: &K) -> H {
        self.map.hash_of(key)
    }

    /// Adds `key`, returning `true` if no element with the same hash was present.
    pub fn insert(&mut self, key: K) -> bool {
        self.map.insert(key, ()).is_none()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the stored element equal (by hash) to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.map.get_key_value(key).map(|(stored, _)| stored)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.map.remove(key).is_some()
    }

    /// Returns a new set with the elements of `self` that are also in `other`.
    ///
    /// The result keeps `self`'s elements and hash function; `other` is probed
    /// with its own hash function.
    pub fn intersection<G>(&self, other: &XSet<K, H, G>) -> Self
    where
        K: Clone,
        F: Clone,
        G: Fn(&K) -> H,
    {
        let mut result = Self::new(self.map.hash.clone());
        result.extend(self.iter().filter(|key| other.contains(key)).cloned());
        result
    }
}

impl<K, H, F> XSet<K, H, F> {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.keys()
    }
}

impl<K, H, F> Extend<K> for XSet<K, H, F>
where
    H: Hash + Eq,
    F: Fn(&K) -> H,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, H, F> IntoIterator for XSet<K, H, F> {
    type Item = K;
    type IntoIter = std::iter::Map<IntoIter<K, (), H>, fn((K, ())) -> K>;

    fn into_iter(self) -> Self::IntoIter {
        self.map
            .into_iter()
            .map((|(key, ())| key) as fn((K, ())) -> K)
    }
}

impl<'a, K, H, F> IntoIterator for &'a XSet<K, H, F> {
    type Item = &'a K;
    type IntoIter = std::iter::Map<Iter<'a, K, (), H>, fn((&'a K, &'a ())) -> &'a K>;

    fn into_iter(self) -> Self::IntoIter {
        self.map
            .iter()
            .map((|(key, _)| key) as fn((&'a K, &'a ())) -> &'a K)
    }
}

impl<K: fmt::Debug, H, F> fmt::Debug for XSet<K, H, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
