//! Prefix trees keyed by sequences of atoms

pub mod seq;
pub mod tree;
pub mod trie;

pub use seq::Sequence;
pub use tree::Tree;
pub use trie::Trie;
