use super::*;
use crate::trie::Trie;

struct Node {
    value: Option<u32>,
    children: Vec<Node>,
}

impl Node {
    fn branch(value: Option<u32>, children: Vec<Node>) -> Self {
        Node { value, children }
    }

    fn leaf(value: u32) -> Self {
        Node {
            value: Some(value),
            children: Vec::new(),
        }
    }
}

impl Tree for Node {
    type Value = u32;

    fn value(&self) -> Option<&u32> {
        self.value.as_ref()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}

//        1
//      /   \
//    (_)    4
//    / \    |
//   2   3   5
fn sample() -> Node {
    Node::branch(
        Some(1),
        vec![
            Node::branch(None, vec![Node::leaf(2), Node::leaf(3)]),
            Node::branch(Some(4), vec![Node::leaf(5)]),
        ],
    )
}

#[test]
fn walks_level_by_level() {
    let root = sample();
    let visited: Vec<_> = Breadth::new(&root).map(Tree::value).collect();
    assert_eq!(
        visited,
        vec![Some(&1), None, Some(&4), Some(&2), Some(&3), Some(&5)]
    );
}

#[test]
fn values_skips_bare_nodes() {
    let root = sample();
    assert_eq!(values(&root).copied().collect::<Vec<_>>(), vec![1, 4, 2, 3, 5]);
}

#[test]
fn single_node_tree() {
    let root = Node::leaf(9);
    assert_eq!(Breadth::new(&root).count(), 1);
    assert_eq!(values(&root).copied().collect::<Vec<_>>(), vec![9]);
}

#[test]
fn restarting_repeats_the_walk() {
    let root = sample();
    let first: Vec<_> = values(&root).copied().collect();
    let second: Vec<_> = values(&root).copied().collect();
    assert_eq!(first, second);
}

#[test]
fn trie_nodes_walk_in_atom_order() {
    let trie: Trie<String, u32> = [("b", 2), ("a", 1), ("ab", 3)]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect();

    // Root first, then the 'a' and 'b' nodes, then "ab" below 'a'.
    assert_eq!(values(&trie).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}
