#[cfg(test)]
mod test;

use std::collections::VecDeque;

/// A tree node: an optional stored value plus a sequence of child nodes.
///
/// The trait says nothing about how children are ordered; implementors
/// document their own order and [`Breadth`] preserves it within each level.
pub trait Tree {
    type Value;

    fn value(&self) -> Option<&Self::Value>;
    fn children(&self) -> impl Iterator<Item = &Self>;
}

/// Level-order walker over any [`Tree`], yielding each node exactly once.
///
/// Re-invoke [`Breadth::new`] for a fresh walk; the walker never mutates the
/// tree it visits.
pub struct Breadth<'a, T> {
    queue: VecDeque<&'a T>,
}

impl<'a, T: Tree> Breadth<'a, T> {
    pub fn new(root: &'a T) -> Self {
        Self {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a, T: Tree> Iterator for Breadth<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

/// Breadth-first stream of the values stored under `root`.
pub fn values<T: Tree>(root: &T) -> impl Iterator<Item = &T::Value> {
    Breadth::new(root).filter_map(Tree::value)
}
