use super::Trie;
use crate::seq::Sequence;
use crate::tree::Tree;
use std::any::type_name;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::ops::Index;

use itertools::Itertools;

impl<K: Sequence, V> core::fmt::Debug for Trie<K, V>
where
    K::Atom: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Trie<K, V>>())
            .field("value", &self.value)
            .field("children", &self.children)
            .finish()
    }
}

impl<K: Sequence, V> Default for Trie<K, V> {
    fn default() -> Self {
        Trie {
            value: None,
            children: HashMap::new(),
        }
    }
}

impl<K: Sequence, V: Clone> Clone for Trie<K, V>
where
    K::Atom: Clone,
{
    fn clone(&self) -> Self {
        Trie {
            value: self.value.clone(),
            children: self.children.clone(),
        }
    }
}

// Equality is structural: an unpruned node left behind by `remove` makes a
// trie unequal to one that never held that key.
impl<K: Sequence, V: PartialEq> PartialEq for Trie<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.children == other.children
    }
}
impl<K: Sequence, V: Eq> Eq for Trie<K, V> {}

impl<K: Sequence, V> Trie<K, V> {
    pub fn new() -> Self {
        Trie::default()
    }

    /// The value stored at this node's own slot; on the root this is the
    /// mapping for the empty key.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Sequence<Atom = K::Atom> + ?Sized,
    {
        let mut current_node = self;
        for atom in key.atoms() {
            current_node = current_node.children.get(&atom)?;
        }
        current_node.value.as_ref()
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Sequence<Atom = K::Atom> + ?Sized,
    {
        let mut current_node = self;
        for atom in key.atoms() {
            current_node = current_node.children.get_mut(&atom)?;
        }
        current_node.value.as_mut()
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Sequence<Atom = K::Atom> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, creating any missing nodes along the
    /// path, and returns the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut current_node = self;
        for atom in key.atoms() {
            current_node = current_node.children.entry(atom).or_default();
        }
        current_node.value.replace(value)
    }

    /// Clears the value stored under `key` and returns it. Removing a key
    /// that was never inserted changes nothing; nodes on the path stay put.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Sequence<Atom = K::Atom> + ?Sized,
    {
        let mut current_node = self;
        for atom in key.atoms() {
            current_node = current_node.children.get_mut(&atom)?;
        }
        current_node.value.take()
    }
}

impl<K, V, Q> Index<&Q> for Trie<K, V>
where
    K: Sequence + Borrow<Q>,
    Q: Sequence<Atom = K::Atom> + ?Sized,
{
    type Output = V;

    /// Panics if no value is stored under `key`, like `HashMap`'s `Index`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no value found for key")
    }
}

impl<K: Sequence, V> Tree for Trie<K, V>
where
    K::Atom: Ord,
{
    type Value = V;

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Children in ascending atom order.
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children
            .iter()
            .sorted_unstable_by(|lhs, rhs| lhs.0.cmp(rhs.0))
            .map(|(_, child)| child)
    }
}
