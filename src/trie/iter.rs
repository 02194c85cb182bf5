use super::Trie;
use crate::seq::{self, Sequence};
use std::collections::VecDeque;

use itertools::Itertools;

/// Breadth-first iterator over every `(key, value)` pair in a [`Trie`].
///
/// The queue holds `(stem, node)` pairs; each stem is the exact atom path
/// from the root to its node, so it equals the full key whenever that node
/// carries a value. Children are enqueued in ascending atom order, making
/// the output deterministic: shorter keys first, ties broken atom by atom.
pub struct Pairs<'a, K: Sequence, V> {
    queue: VecDeque<(K, &'a Trie<K, V>)>,
}

impl<'a, K, V> Pairs<'a, K, V>
where
    K: Sequence + FromIterator<K::Atom>,
{
    pub(super) fn new(trie: &'a Trie<K, V>) -> Self {
        Self {
            queue: VecDeque::from([(seq::empty(), trie)]),
        }
    }
}

impl<'a, K, V> Iterator for Pairs<'a, K, V>
where
    K: Sequence + FromIterator<K::Atom>,
    K::Atom: Clone + Ord,
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((stem, node)) = self.queue.pop_front() {
            self.queue.extend(
                node.children
                    .iter()
                    .sorted_unstable_by(|lhs, rhs| lhs.0.cmp(rhs.0))
                    .map(|(atom, child)| (seq::concat(&stem, atom.clone()), child)),
            );
            if let Some(value) = node.value.as_ref() {
                return Some((stem, value));
            }
        }
        None
    }
}

/// Breadth-first iterator over the keys of a [`Trie`].
pub struct Keys<'a, K: Sequence, V> {
    inner: Pairs<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V>
where
    K: Sequence + FromIterator<K::Atom>,
    K::Atom: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// Breadth-first iterator over the values of a [`Trie`].
pub struct Values<'a, K: Sequence, V> {
    inner: Pairs<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V>
where
    K: Sequence + FromIterator<K::Atom>,
    K::Atom: Clone + Ord,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<K, V> Trie<K, V>
where
    K: Sequence + FromIterator<K::Atom>,
{
    /// Every stored `(key, value)` pair in breadth-first order. Each call
    /// starts a fresh enumeration.
    pub fn iter(&self) -> Pairs<'_, K, V> {
        Pairs::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<'a, K, V> IntoIterator for &'a Trie<K, V>
where
    K: Sequence + FromIterator<K::Atom>,
    K::Atom: Clone + Ord,
{
    type Item = (K, &'a V);
    type IntoIter = Pairs<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Sequence, V> Extend<(K, V)> for Trie<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Sequence, V> FromIterator<(K, V)> for Trie<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

// Literal construction; later entries for a duplicate key win.
impl<K: Sequence, V, const N: usize> From<[(K, V); N]> for Trie<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
