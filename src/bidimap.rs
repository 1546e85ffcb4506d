use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Deref;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::Error;
use crate::iter::{Iter, Keys, Values};
use crate::Result;

/// A map with unique keys and unique values, searchable from either side.
///
/// Every key and every value is allocated once and shared by the forward
/// (key to value) and inverse (value to key) tables, so neither `K` nor `V`
/// has to be `Clone`.
///
/// # Examples
///
/// ```
/// use uniquemap::{BijectiveMap, Error};
///
/// let mut map = BijectiveMap::new();
/// map.add("a", 1).unwrap();
/// assert_eq!(map.add("b", 1), Err(Error::DuplicateValue));
/// assert_eq!(map.get_by_value(&1), Ok(&"a"));
/// ```
pub struct BijectiveMap<K, V, S = RandomState> {
    forward: IndexMap<Arc<K>, Arc<V>, S>,
    inverse: IndexMap<Arc<V>, Arc<K>, S>,
}

impl<K, V> BijectiveMap<K, V> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            forward: IndexMap::new(),
            inverse: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for at least `capacity` pairs.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: IndexMap::with_capacity(capacity),
            inverse: IndexMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> BijectiveMap<K, V, S>
where
    S: Clone,
{
    /// Creates an empty map which will use `hasher` for both tables.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            forward: IndexMap::with_hasher(hasher.clone()),
            inverse: IndexMap::with_hasher(hasher),
        }
    }

    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            forward: IndexMap::with_capacity_and_hasher(capacity, hasher.clone()),
            inverse: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }
}

impl<K, V, S> BijectiveMap<K, V, S> {
    /// Return the number of pairs.
    #[inline]
    pub fn count(&self) -> usize {
        debug_assert_eq!(self.forward.len(), self.inverse.len());
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of pairs the map can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.forward.capacity().min(self.inverse.capacity())
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.forward.hasher()
    }

    /// Removes every pair, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }

    /// An iterator visiting all pairs.
    /// Order is not guaranteed.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.forward.iter())
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.forward.keys())
    }

    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.forward.values())
    }
}

impl<K, V, S> BijectiveMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a new pair.
    ///
    /// Both sides are checked before anything is stored, so a failed call
    /// leaves the map untouched.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if `key` is present, otherwise
    /// [`Error::DuplicateValue`] if `value` is present.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.forward.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }
        if self.inverse.contains_key(&value) {
            return Err(Error::DuplicateValue);
        }

        let key = Arc::new(key);
        let value = Arc::new(value);
        self.forward.insert(Arc::clone(&key), Arc::clone(&value));
        self.inverse.insert(value, key);
        Ok(())
    }

    /// Get the value paired with `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    #[inline]
    pub fn get_by_key(&self, key: &K) -> Result<&V> {
        self.try_get_by_key(key).ok_or(Error::KeyNotFound)
    }

    /// Get the key paired with `value`.
    ///
    /// # Errors
    ///
    /// [`Error::ValueNotFound`] if `value` is absent.
    #[inline]
    pub fn get_by_value(&self, value: &V) -> Result<&K> {
        self.try_get_by_value(value).ok_or(Error::ValueNotFound)
    }

    #[inline]
    pub fn try_get_by_key(&self, key: &K) -> Option<&V> {
        self.forward.get(key).map(Deref::deref)
    }

    #[inline]
    pub fn try_get_by_value(&self, value: &V) -> Option<&K> {
        self.inverse.get(value).map(Deref::deref)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    #[inline]
    pub fn contains_value(&self, value: &V) -> bool {
        self.inverse.contains_key(value)
    }

    /// Removes the pair whose key is `key`.
    /// Returns `false` if there was no such pair.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.forward.swap_remove(key) {
            Some(value) => {
                self.inverse.swap_remove(&*value);
                true
            },
            None => false,
        }
    }

    /// Removes the pair whose value is `value`.
    /// Returns `false` if there was no such pair.
    pub fn remove_by_value(&mut self, value: &V) -> bool {
        match self.inverse.swap_remove(value) {
            Some(key) => {
                self.forward.swap_remove(&*key);
                true
            },
            None => false,
        }
    }

    /// Adds `pairs` in order, stopping at the first one that collides.
    ///
    /// Returns how many pairs were added. Pairs before the colliding one stay
    /// in the map.
    ///
    /// # Errors
    ///
    /// The error [`add`](Self::add) reports for the colliding pair.
    pub fn try_extend<I>(&mut self, pairs: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut added = 0;
        for (key, value) in pairs {
            self.add(key, value)?;
            added += 1;
        }
        Ok(added)
    }
}

impl<K, V, S> BijectiveMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    /// Builds a map from `pairs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniquemap::{BijectiveMap, Error};
    ///
    /// let map: BijectiveMap<_, _> = BijectiveMap::try_from_pairs(vec![(1, 'x'), (2, 'y')]).unwrap();
    /// assert_eq!(map.count(), 2);
    ///
    /// let dup = BijectiveMap::<_, _>::try_from_pairs(vec![(1, 'x'), (1, 'y')]);
    /// assert_eq!(dup.err(), Some(Error::DuplicateKey));
    /// ```
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut map = Self::with_capacity_and_hasher(pairs.size_hint().0, S::default());
        map.try_extend(pairs)?;
        Ok(map)
    }
}

impl<K, V, S> Default for BijectiveMap<K, V, S>
where
    S: Clone + Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Clone for BijectiveMap<K, V, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            inverse: self.inverse.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for BijectiveMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S1, S2> PartialEq<BijectiveMap<K, V, S2>> for BijectiveMap<K, V, S1>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &BijectiveMap<K, V, S2>) -> bool {
        self.count() == other.count()
            && self.iter().all(|(key, value)| other.try_get_by_key(key) == Some(value))
    }
}

impl<K, V, S> Eq for BijectiveMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: BuildHasher,
{
}

impl<'a, K, V, S> IntoIterator for &'a BijectiveMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
