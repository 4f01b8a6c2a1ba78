//! ConsList: a persistent singly-linked list built by prepending.
//!
//! This is the list shape that dynamic arrays convert to and from:
//!
//! ```text
//! cons(1, cons(2, cons(3, nil)))
//!
//!   ┌───┬───┐   ┌───┬───┐   ┌───┬───┐
//!   │ 1 │ ●─┼──▶│ 2 │ ●─┼──▶│ 3 │ ●─┼──▶ nil
//!   └───┴───┘   └───┴───┘   └───┴───┘
//! ```
//!
//! - `cons` is O(1) and shares the tail with every other list holding it
//! - `head`/`tail` are O(1)
//! - `len` walks the list, O(n)
//! - Cloning a list is a reference-count bump
//!
//! # Example
//!
//! ```
//! use plain_array_cons_list::ConsList;
//!
//! let tail = ConsList::nil().cons(3).cons(2);
//! let list = tail.cons(1);
//!
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tail.len(), 2); // still shared, still intact
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

use alloc::rc::Rc;
use core::fmt;
use core::hash::{Hash, Hasher};

struct Node<T> {
    value: T,
    next: Option<Rc<Node<T>>>,
}

/// A persistent singly-linked list.
///
/// An empty list is `nil`; every other list is a value followed by the rest
/// of the list. Lists are never mutated: `cons` returns a new list sharing
/// the old one as its tail.
pub struct ConsList<T> {
    head: Option<Rc<Node<T>>>,
}

// `Option<Rc<_>>` uses the null niche, so a list is a single pointer.
static_assertions::assert_eq_size!(ConsList<u64>, usize);

impl<T> ConsList<T> {
    /// The empty list.
    pub const fn nil() -> Self {
        Self { head: None }
    }

    /// Prepend `value`, sharing `self` as the tail.
    #[must_use]
    pub fn cons(&self, value: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                value,
                next: self.head.clone(),
            })),
        }
    }

    /// Prepend `value` to `tail`, consuming it.
    #[must_use]
    pub fn prepend(value: T, mut tail: Self) -> Self {
        Self {
            head: Some(Rc::new(Node {
                value,
                next: tail.head.take(),
            })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements. Walks the whole list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Everything after the head. The tail of `nil` is `nil`.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            head: self.head.as_ref().and_then(|node| node.next.clone()),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Clone> ConsList<T> {
    /// Split into head and tail, or `None` for `nil`.
    ///
    /// The head is moved out when this list is the only owner of its first
    /// node, and cloned when that node is shared with another list.
    pub fn uncons(mut self) -> Option<(T, Self)> {
        let node = self.head.take()?;
        match Rc::try_unwrap(node) {
            Ok(node) => Some((node.value, Self { head: node.next })),
            Err(shared) => Some((
                shared.value.clone(),
                Self {
                    head: shared.next.clone(),
                },
            )),
        }
    }

    /// A new list with the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::nil(), |acc, value| Self::prepend(value.clone(), acc))
    }
}

impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one at a time; the default recursive
        // drop overflows the stack on long lists.
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    /// Builds a list in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: alloc::vec::Vec<T> = iter.into_iter().collect();
        let mut list = Self::nil();
        while let Some(value) = values.pop() {
            list = Self::prepend(value, list);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`ConsList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}
