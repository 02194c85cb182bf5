
use std::hash::Hash;
use std::iter;

use smallvec::{Array, SmallVec};

/// A key type decomposable into an ordered stream of hashable atoms.
///
/// Anything that can replay its elements one by one can key a
/// [`Trie`](crate::Trie); the unsized impls (`str`, `[A]`) exist so borrowed
/// lookups work without building an owned key first.
pub trait Sequence {
    type Atom: Eq + Hash;

    fn atoms(&self) -> impl Iterator<Item = Self::Atom> + '_;
}

/// The zero-length sequence.
pub fn empty<S>() -> S
where
    S: Sequence + FromIterator<S::Atom>,
{
    iter::empty().collect()
}

/// A new sequence holding `prefix` followed by one extra atom.
pub fn concat<S>(prefix: &S, atom: S::Atom) -> S
where
    S: Sequence + FromIterator<S::Atom>,
{
    prefix.atoms().chain(iter::once(atom)).collect()
}

/// A new sequence holding `prefix` followed by every atom of `suffix`.
pub fn join<S>(prefix: &S, suffix: &S) -> S
where
    S: Sequence + FromIterator<S::Atom>,
{
    prefix.atoms().chain(suffix.atoms()).collect()
}

impl Sequence for String {
    type Atom = char;

    fn atoms(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl Sequence for str {
    type Atom = char;

    fn atoms(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl<A: Eq + Hash + Clone> Sequence for Vec<A> {
    type Atom = A;

    fn atoms(&self) -> impl Iterator<Item = A> + '_ {
        self.iter().cloned()
    }
}

impl<A: Eq + Hash + Clone> Sequence for [A] {
    type Atom = A;

    fn atoms(&self) -> impl Iterator<Item = A> + '_ {
        self.iter().cloned()
    }
}

impl<A: Array> Sequence for SmallVec<A>
where
    A::Item: Eq + Hash + Clone,
{
    type Atom = A::Item;

    fn atoms(&self) -> impl Iterator<Item = A::Item> + '_ {
        self.iter().cloned()
    }
}
