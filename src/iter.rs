//! Borrowing iterators over a [`BijectiveMap`](crate::BijectiveMap).

use std::iter::FusedIterator;
use std::sync::Arc;

use indexmap::map;

/// An iterator over the pairs of a map, yielding `(&K, &V)`.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    inner: map::Iter<'a, Arc<K>, Arc<V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    #[inline]
    pub(crate) fn new(inner: map::Iter<'a, Arc<K>, Arc<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (&**key, &**value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a map.
#[derive(Clone, Debug)]
pub struct Keys<'a, K, V> {
    inner: map::Keys<'a, Arc<K>, Arc<V>>,
}

impl<'a, K, V> Keys<'a, K, V> {
    #[inline]
    pub(crate) fn new(inner: map::Keys<'a, Arc<K>, Arc<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|key| &**key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a map.
#[derive(Clone, Debug)]
pub struct Values<'a, K, V> {
    inner: map::Values<'a, Arc<K>, Arc<V>>,
}

impl<'a, K, V> Values<'a, K, V> {
    #[inline]
    pub(crate) fn new(inner: map::Values<'a, Arc<K>, Arc<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|value| &**value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}
