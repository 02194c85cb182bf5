pub mod iter;
mod node;

use std::collections::HashMap;

use crate::seq::Sequence;

/// A prefix tree mapping atom sequences to values.
///
/// Every node is itself a `Trie`: the container is just the root node, and
/// the empty key addresses the root's own value slot. Children are created
/// lazily on insert and never on lookup; `remove` clears a value slot but
/// does not prune the nodes leading to it.
pub struct Trie<K: Sequence, V> {
    value: Option<V>,
    children: HashMap<K::Atom, Trie<K, V>>,
}
