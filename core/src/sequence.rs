//! The ordered-sequence boundary.
//!
//! Dynamic arrays convert to and from any front-to-back sequence made of
//! `(value, rest)` nodes ending in an explicit empty marker. Reading only
//! needs a single forward pass ([`OrderedSequence::uncons`]); writing only
//! needs prepend ([`OrderedSequence::cons`]), so exports are built from the
//! last element to the first.

use alloc::collections::LinkedList;

use plain_array_cons_list::ConsList;

/// A singly-linked, front-to-back sequence.
pub trait OrderedSequence: Sized {
    type Item;

    /// The empty sequence.
    fn nil() -> Self;

    /// Prepend `head` to `tail`.
    fn cons(head: Self::Item, tail: Self) -> Self;

    /// Split off the first node. `None` marks the end of the sequence.
    fn uncons(self) -> Option<(Self::Item, Self)>;
}

impl<T: Clone> OrderedSequence for ConsList<T> {
    type Item = T;

    fn nil() -> Self {
        ConsList::nil()
    }

    fn cons(head: T, tail: Self) -> Self {
        ConsList::prepend(head, tail)
    }

    fn uncons(self) -> Option<(T, Self)> {
        ConsList::uncons(self)
    }
}

impl<T> OrderedSequence for LinkedList<T> {
    type Item = T;

    fn nil() -> Self {
        LinkedList::new()
    }

    fn cons(head: T, mut tail: Self) -> Self {
        tail.push_front(head);
        tail
    }

    fn uncons(mut self) -> Option<(T, Self)> {
        let head = self.pop_front()?;
        Some((head, self))
    }
}
