//! One-item lookahead over any sequence.
//!
//! [`Peekable`] keeps at most one item pulled ahead of its consumer in a
//! [`Lookahead`] slot. Peeking never changes what the sequence yields: the
//! items observed through `peek` are exactly the items `next` returns, in
//! the same order.
//!
//! # Examples
//!
//! ```rust
//! use seqwise::peekable::peekable;
//!
//! let mut cursor = peekable(vec![1, 2, 3]);
//! assert_eq!(cursor.peek(), Some(&1));
//! assert_eq!(cursor.peek(), Some(&1));
//! assert_eq!(cursor.next(), Some(1));
//! assert_eq!(cursor.next_if(|item| *item > 5), None);
//! assert_eq!(cursor.collect::<Vec<_>>(), vec![2, 3]);
//! ```

use std::iter::FusedIterator;

/// The one-slot cache behind [`Peekable`].
///
/// The slot is either empty (nothing pulled ahead) or buffered with the
/// result of pulling ahead. A buffered `None` records that the source is
/// exhausted so it is not pulled again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookahead<T> {
    slot: Option<Option<T>>,
}

impl<T> Lookahead<T> {
    /// An empty slot.
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// A slot buffered with `item`.
    pub const fn buffered(item: Option<T>) -> Self {
        Self { slot: Some(item) }
    }

    /// Takes whatever is cached, leaving the slot empty.
    pub fn take(&mut self) -> Option<Option<T>> {
        self.slot.take()
    }

    /// Returns the buffered result, pulling it with `pull` if the slot is empty.
    pub fn get_or_pull(&mut self, pull: impl FnOnce() -> Option<T>) -> &mut Option<T> {
        self.slot.get_or_insert_with(pull)
    }

    /// Whether an item or the exhaustion marker is cached.
    pub const fn is_buffered(&self) -> bool {
        self.slot.is_some()
    }

    /// Whether the exhaustion marker is cached.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.slot, Some(None))
    }

    /// How many items the slot holds (zero or one).
    pub const fn len(&self) -> usize {
        match self.slot {
            Some(Some(_)) => 1,
            _ => 0,
        }
    }

    /// Whether the slot holds no item.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Lookahead<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A cursor that can look at its next item without consuming it.
///
/// Created by [`peekable`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Peekable<I: Iterator> {
    iter: I,
    lookahead: Lookahead<I::Item>,
}

/// Wraps a sequence with one-item lookahead.
pub fn peekable<S: IntoIterator>(source: S) -> Peekable<S::IntoIter> {
    Peekable::new(source.into_iter())
}

impl<I: Iterator> Peekable<I> {
    /// Wraps `iter`. Nothing is pulled yet.
    pub const fn new(iter: I) -> Self {
        Self {
            iter,
            lookahead: Lookahead::empty(),
        }
    }

    fn fill(&mut self) -> &mut Option<I::Item> {
        let iter = &mut self.iter;
        self.lookahead.get_or_pull(|| iter.next())
    }

    /// Returns the next item without consuming it.
    ///
    /// Pulls from the source only when nothing is cached; repeated calls
    /// return the same item.
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.fill().as_ref()
    }

    /// Like [`peek`](Self::peek), but allows changing the cached item before
    /// it is yielded.
    pub fn peek_mut(&mut self) -> Option<&mut I::Item> {
        self.fill().as_mut()
    }

    /// Consumes and returns the next item only if it satisfies `predicate`.
    ///
    /// A rejected item stays cached and is returned by the next pull.
    pub fn next_if(&mut self, predicate: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        match self.next() {
            Some(item) if predicate(&item) => Some(item),
            other => {
                self.lookahead = Lookahead::buffered(other);
                None
            }
        }
    }

    /// Consumes and returns the next item only if it equals `expected`.
    pub fn next_if_eq<T>(&mut self, expected: &T) -> Option<I::Item>
    where
        T: ?Sized,
        I::Item: PartialEq<T>,
    {
        self.next_if(|item| item == expected)
    }

    /// Returns the underlying cursor and whatever was cached.
    pub fn into_parts(self) -> (I, Lookahead<I::Item>) {
        (self.iter, self.lookahead)
    }
}

impl<I: Iterator> Iterator for Peekable<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.lookahead.take() {
            Some(item) => item,
            None => self.iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.lookahead.is_exhausted() {
            return (0, Some(0));
        }
        let buffered = self.lookahead.len();
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> FusedIterator for Peekable<I> where I: FusedIterator {}

/// The lookahead capability.
///
/// Lets code accept "any cursor that can peek" without naming a concrete
/// wrapper.
pub trait SupportsPeek: Iterator {
    /// Returns the next item without consuming it.
    fn peek(&mut self) -> Option<&Self::Item>;
}

impl<I: Iterator> SupportsPeek for Peekable<I> {
    fn peek(&mut self) -> Option<&I::Item> {
        Self::peek(self)
    }
}

impl<I: Iterator> SupportsPeek for std::iter::Peekable<I> {
    fn peek(&mut self) -> Option<&I::Item> {
        Self::peek(self)
    }
}
