//! Method-chaining wrapper over any sequence.
//!
//! [`Fluent`] holds one cursor and exposes every combinator as a method.
//! Transformation methods wrap the combinator's lazy output in a new
//! [`Seq`]; terminal methods return plain values. Nothing runs until a
//! terminal method, a `for` loop or `collect` pulls from the chain.
//!
//! Whether the wrapper can look ahead is decided by its [`LookaheadMode`]
//! parameter rather than by a separate type: [`Seq`] is the plain wrapper and
//! [`PeekableSeq`] owns a one-item lookahead cache. Every constructor is
//! written once and works for both.
//!
//! # Examples
//!
//! ```rust
//! use seqwise::fluent::Seq;
//!
//! let labels: Vec<String> = Seq::from_range(10, 1, 1)
//!     .filter(|item, _| item % 3 == 0)
//!     .map(|item, index| format!("{index}:{item}"))
//!     .collect();
//! assert_eq!(labels, vec!["0:3", "1:6", "2:9"]);
//!
//! let total = Seq::generate(|index| index * 2).take(4).sum();
//! assert_eq!(total, 12.0);
//! ```
//!
//! Looking ahead:
//!
//! ```rust
//! use seqwise::fluent::{PeekableSeq, Seq};
//!
//! let mut tokens = Seq::new("12+3".chars()).peekable();
//! assert!(tokens.supports_peek());
//! let mut digits = String::new();
//! while let Some(digit) = tokens.next_if(char::is_ascii_digit) {
//!     digits.push(digit);
//! }
//! assert_eq!(digits, "12");
//! assert_eq!(tokens.peek(), Some(&'+'));
//!
//! let direct: PeekableSeq<_> = PeekableSeq::from_range(3, 1, 1);
//! assert_eq!(direct.peekable().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::ops::{self, AsNumber, Groups, Nested, Pluck, RangeValue, ZipPolicy};
use crate::peekable::{Peekable, SupportsPeek};

#[cfg(feature = "curried")]
use crate::curried::Transform;
#[cfg(feature = "search")]
use crate::search::{self, PathKey, SearchOptions, Walk};

// =============================================================================
// lookahead modes
// =============================================================================

mod sealed {
    pub trait Sealed {}
}

/// Decides which cursor a [`Fluent`] wrapper owns.
///
/// Implemented by [`Plain`] and [`Peeking`] only.
pub trait LookaheadMode: sealed::Sealed {
    /// Whether wrappers in this mode can [`peek`](Fluent::peek).
    const SUPPORTS_PEEK: bool;

    /// The cursor held for an underlying iterator `I`.
    type Cursor<I: Iterator>: Iterator<Item = I::Item>;

    /// Wraps a freshly created iterator.
    fn wrap<I: Iterator>(iter: I) -> Self::Cursor<I>;
}

/// Mode without lookahead: the wrapper holds the iterator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plain {}

/// Mode with a one-item lookahead cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peeking {}

impl sealed::Sealed for Plain {}
impl sealed::Sealed for Peeking {}

impl LookaheadMode for Plain {
    const SUPPORTS_PEEK: bool = false;

    type Cursor<I: Iterator> = I;

    fn wrap<I: Iterator>(iter: I) -> I {
        iter
    }
}

impl LookaheadMode for Peeking {
    const SUPPORTS_PEEK: bool = true;

    type Cursor<I: Iterator> = Peekable<I>;

    fn wrap<I: Iterator>(iter: I) -> Peekable<I> {
        Peekable::new(iter)
    }
}

// =============================================================================
// Fluent
// =============================================================================

/// A sequence with every combinator available as a method.
///
/// Use it through the [`Seq`] and [`PeekableSeq`] aliases.
///
/// A wrapper owns its cursor, so chaining moves it along. Sources that can be
/// iterated again (a `Vec`, a range) are re-wrapped to start over; the wrapper
/// never rewinds anything itself.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Fluent<I: Iterator, M: LookaheadMode> {
    cursor: M::Cursor<I>,
}

/// The plain fluent wrapper.
pub type Seq<I> = Fluent<I, Plain>;

/// The fluent wrapper with one-item lookahead.
pub type PeekableSeq<I> = Fluent<I, Peeking>;

type CursorOf<I, M> = <M as LookaheadMode>::Cursor<I>;

/// Wraps `source` in a [`Seq`].
///
/// ```rust
/// let evens: Vec<i32> = seqwise::seq(vec![1, 2, 3, 4]).filter(|item, _| item % 2 == 0).collect();
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn seq<S: IntoIterator>(source: S) -> Seq<S::IntoIter> {
    Fluent::new(source)
}

impl<I: Iterator, M: LookaheadMode> Fluent<I, M> {
    /// Wraps any sequence.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            cursor: M::wrap(source.into_iter()),
        }
    }

    /// Whether this wrapper can peek.
    pub const fn supports_peek(&self) -> bool {
        M::SUPPORTS_PEEK
    }

    /// Unwraps the cursor.
    pub fn into_inner(self) -> CursorOf<I, M> {
        self.cursor
    }
}

// -----------------------------------------------------------------------------
// constructors
// -----------------------------------------------------------------------------

impl<T: RangeValue, M: LookaheadMode> Fluent<ops::Range<T>, M> {
    /// See [`ops::range`].
    pub fn from_range(stop: T, start: T, step: T) -> Self {
        Self::new(ops::range(stop, start, step))
    }
}

impl<F, T, M> Fluent<ops::Generate<F>, M>
where
    F: FnMut(usize) -> T,
    M: LookaheadMode,
{
    /// See [`ops::generate`].
    pub fn generate(function: F) -> Self {
        Self::new(ops::generate(function))
    }
}

impl<J: Iterator, M: LookaheadMode> Fluent<ops::Zip<J>, M> {
    /// See [`ops::zip`].
    pub fn zip<S, T>(sources: S, policy: ZipPolicy) -> Self
    where
        S: IntoIterator<Item = T>,
        T: IntoIterator<IntoIter = J>,
    {
        Self::new(ops::zip(sources, policy))
    }
}

#[cfg(feature = "search")]
impl<V, P, M> Fluent<search::Search<V, P>, M>
where
    V: Walk,
    P: FnMut(&[PathKey], &V) -> bool,
    M: LookaheadMode,
{
    /// See [`search::search`].
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::TypeMismatch`](crate::SeqError::TypeMismatch)
    /// when `root` is a scalar.
    pub fn search(root: V, predicate: P) -> Result<Self> {
        search::search(root, predicate).map(Self::new)
    }

    /// See [`search::search_with`].
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::TypeMismatch`](crate::SeqError::TypeMismatch)
    /// when `root` is a scalar.
    pub fn search_with(root: V, predicate: P, options: SearchOptions) -> Result<Self> {
        search::search_with(root, predicate, options).map(Self::new)
    }
}

#[cfg(feature = "search")]
impl<V: Walk, M: LookaheadMode> Fluent<std::vec::IntoIter<(PathKey, V)>, M> {
    /// The `(key, value)` entries of an object or the `(index, item)` pairs
    /// of an array.
    ///
    /// ```rust
    /// use seqwise::fluent::Seq;
    /// use seqwise::value::Value;
    ///
    /// let record = Value::object([("a", 1), ("b", 2)]);
    /// let keys: Vec<String> = Seq::from_entries(&record)?.map(|(key, _), _| key.to_string()).collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// assert!(Seq::from_entries(&Value::from("text")).is_err());
    /// # Ok::<(), seqwise::SeqError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::TypeMismatch`](crate::SeqError::TypeMismatch)
    /// when `value` is a scalar.
    pub fn from_entries(value: &V) -> Result<Self> {
        search::entries(value).map(Self::new)
    }
}

#[cfg(feature = "async")]
impl<T, M: LookaheadMode> Fluent<std::vec::IntoIter<T>, M> {
    /// Drains an async stream into memory, in stream order.
    pub async fn from_stream<St>(stream: St) -> Self
    where
        St: futures::Stream<Item = T>,
    {
        use futures::StreamExt;
        let items: Vec<T> = stream.collect().await;
        Self::new(items)
    }

    /// Awaits each future in turn and collects the outputs in order.
    ///
    /// Futures are awaited one at a time; none is polled before the previous
    /// one has completed.
    pub async fn from_futures<S>(futures: S) -> Self
    where
        S: IntoIterator,
        S::Item: std::future::Future<Output = T>,
    {
        let mut items = Vec::new();
        for future in futures {
            items.push(future.await);
        }
        Self::new(items)
    }
}

// -----------------------------------------------------------------------------
// lookahead
// -----------------------------------------------------------------------------

impl<I: Iterator> Fluent<I, Plain> {
    /// Adds a one-item lookahead cache.
    pub fn peekable(self) -> Fluent<I, Peeking> {
        Fluent {
            cursor: Peeking::wrap(self.cursor),
        }
    }
}

impl<I: Iterator> Fluent<I, Peeking> {
    /// Already peekable: returns `self` unchanged.
    pub const fn peekable(self) -> Self {
        self
    }

    /// Returns the next item without consuming it.
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.cursor.peek()
    }

    /// Mutable access to the next item without consuming it.
    pub fn peek_mut(&mut self) -> Option<&mut I::Item> {
        self.cursor.peek_mut()
    }

    /// Consumes the next item only if it satisfies `predicate`.
    pub fn next_if(&mut self, predicate: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        self.cursor.next_if(predicate)
    }
}

impl<I: Iterator> SupportsPeek for Fluent<I, Peeking> {
    fn peek(&mut self) -> Option<&I::Item> {
        self.cursor.peek()
    }
}

// -----------------------------------------------------------------------------
// transformations
// -----------------------------------------------------------------------------

impl<I: Iterator, M: LookaheadMode> Fluent<I, M> {
    /// See [`ops::map`].
    pub fn map<F, U>(self, function: F) -> Seq<ops::Map<CursorOf<I, M>, F>>
    where
        F: FnMut(I::Item, usize) -> U,
    {
        Seq::new(ops::map(self.cursor, function))
    }

    /// See [`ops::filter`].
    pub fn filter<P>(self, predicate: P) -> Seq<ops::Filter<CursorOf<I, M>, P>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Seq::new(ops::filter(self.cursor, predicate))
    }

    /// See [`ops::tap`].
    pub fn tap<F>(self, observer: F) -> Seq<ops::Tap<CursorOf<I, M>, F>>
    where
        F: FnMut(&I::Item, usize),
    {
        Seq::new(ops::tap(self.cursor, observer))
    }

    /// See [`ops::enumerate`].
    pub fn enumerate(self) -> Seq<ops::Enumerate<CursorOf<I, M>>> {
        Seq::new(ops::enumerate(self.cursor))
    }

    /// See [`ops::take`].
    pub fn take(self, count: usize) -> Seq<ops::Take<CursorOf<I, M>>> {
        Seq::new(ops::take(self.cursor, count))
    }

    /// See [`ops::skip`].
    pub fn skip(self, count: usize) -> Seq<ops::Skip<CursorOf<I, M>>> {
        Seq::new(ops::skip(self.cursor, count))
    }

    /// See [`ops::take_while`].
    pub fn take_while<P>(self, predicate: P) -> Seq<ops::TakeWhile<CursorOf<I, M>, P>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Seq::new(ops::take_while(self.cursor, predicate))
    }

    /// See [`ops::skip_while`].
    pub fn skip_while<P>(self, predicate: P) -> Seq<ops::SkipWhile<CursorOf<I, M>, P>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Seq::new(ops::skip_while(self.cursor, predicate))
    }

    /// See [`ops::until`].
    pub fn until<P>(self, predicate: P) -> Seq<ops::Until<CursorOf<I, M>, P>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Seq::new(ops::until(self.cursor, predicate))
    }

    /// See [`ops::chunk`].
    pub fn chunk(self, size: usize) -> Seq<ops::Chunk<CursorOf<I, M>>> {
        Seq::new(ops::chunk(self.cursor, size))
    }

    /// See [`ops::windows`].
    pub fn windows(self, size: usize) -> Seq<ops::Windows<CursorOf<I, M>>>
    where
        I::Item: Clone,
    {
        Seq::new(ops::windows(self.cursor, size))
    }

    /// See [`ops::scan`].
    pub fn scan<F>(self, function: F) -> Seq<ops::Scan<CursorOf<I, M>, F>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item, usize) -> I::Item,
    {
        Seq::new(ops::scan(self.cursor, function))
    }

    /// See [`ops::scan_from`].
    pub fn scan_from<U, F>(self, seed: U, function: F) -> Seq<ops::ScanFrom<CursorOf<I, M>, F, U>>
    where
        U: Clone,
        F: FnMut(U, I::Item, usize) -> U,
    {
        Seq::new(ops::scan_from(self.cursor, seed, function))
    }

    /// See [`ops::flat_map`].
    pub fn flat_map<F, R>(self, function: F) -> Seq<ops::FlatMap<CursorOf<I, M>, F, R::IntoIter>>
    where
        F: FnMut(I::Item, usize) -> R,
        R: IntoIterator,
    {
        Seq::new(ops::flat_map(self.cursor, function))
    }

    /// See [`ops::flatten`].
    pub fn flatten(self) -> Seq<ops::Flatten<CursorOf<I, M>, <I::Item as IntoIterator>::IntoIter>>
    where
        I::Item: IntoIterator,
    {
        Seq::new(ops::flatten(self.cursor))
    }

    /// See [`ops::flat`].
    pub fn flat(self, depth: usize) -> Seq<ops::Flat<CursorOf<I, M>>>
    where
        I::Item: Nested,
    {
        Seq::new(ops::flat(self.cursor, depth))
    }

    /// See [`ops::unique`].
    pub fn unique(self) -> Seq<ops::Unique<CursorOf<I, M>>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Seq::new(ops::unique(self.cursor))
    }

    /// See [`ops::unique_by`].
    pub fn unique_by<F, K>(self, selector: F) -> Seq<ops::UniqueBy<CursorOf<I, M>, F, K>>
    where
        F: FnMut(&I::Item, usize) -> K,
        K: Eq + Hash,
    {
        Seq::new(ops::unique_by(self.cursor, selector))
    }

    /// See [`ops::pluck`].
    pub fn pluck<K>(self, key: K) -> Seq<ops::Plucked<CursorOf<I, M>, K>>
    where
        I::Item: Pluck<K>,
    {
        Seq::new(ops::pluck(self.cursor, key))
    }

    /// See [`ops::filter_nullish`].
    pub fn filter_nullish<T>(self) -> Seq<ops::FilterNullish<CursorOf<I, M>>>
    where
        I: Iterator<Item = Option<T>>,
    {
        Seq::new(ops::filter_nullish(self.cursor))
    }

    /// See [`ops::cycle`].
    pub fn cycle(self) -> Seq<ops::Cycle<CursorOf<I, M>>>
    where
        I::Item: Clone,
    {
        Seq::new(ops::cycle(self.cursor))
    }

    /// See [`ops::repeat`].
    pub fn repeat(self, times: usize) -> Seq<ops::Repeat<CursorOf<I, M>>>
    where
        I::Item: Clone,
    {
        Seq::new(ops::repeat(self.cursor, times))
    }

    /// Pairs items with those of `other`, stopping at the shorter sequence.
    ///
    /// Unlike [`Seq::zip`], the two sides may have different item types.
    pub fn zip_with<J>(self, other: J) -> Seq<std::iter::Zip<CursorOf<I, M>, J::IntoIter>>
    where
        J: IntoIterator,
    {
        Seq::new(self.cursor.zip(other))
    }

    /// Applies a point-free transformer that produces a sequence, and wraps
    /// the result.
    ///
    /// ```rust
    /// use seqwise::curried;
    /// use seqwise::fluent::Seq;
    ///
    /// let pairs: Vec<Vec<i32>> = Seq::new(vec![1, 2, 3]).apply(curried::windows(2)).collect();
    /// assert_eq!(pairs, vec![vec![1, 2], vec![2, 3]]);
    /// ```
    #[cfg(feature = "curried")]
    pub fn apply<T>(self, transformer: T) -> Seq<<T::Output as IntoIterator>::IntoIter>
    where
        T: Transform<CursorOf<I, M>>,
        T::Output: IntoIterator,
    {
        Seq::new(transformer.apply_to(self.cursor))
    }

    /// Applies a point-free transformer and returns its output as is.
    #[cfg(feature = "curried")]
    pub fn finish_with<T>(self, transformer: T) -> T::Output
    where
        T: Transform<CursorOf<I, M>>,
    {
        transformer.apply_to(self.cursor)
    }
}

// -----------------------------------------------------------------------------
// terminal operations
// -----------------------------------------------------------------------------

impl<I: Iterator, M: LookaheadMode> Fluent<I, M> {
    /// See [`ops::reduce`].
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::EmptyReduce`](crate::SeqError::EmptyReduce) when
    /// the sequence is empty.
    pub fn reduce<F>(self, function: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item, usize) -> I::Item,
    {
        ops::reduce(self.cursor, function)
    }

    /// See [`ops::fold`].
    pub fn fold<U, F>(self, seed: U, function: F) -> U
    where
        F: FnMut(U, I::Item, usize) -> U,
    {
        ops::fold(self.cursor, seed, function)
    }

    /// See [`ops::group_by`].
    pub fn group_by<F, K>(self, selector: F) -> Groups<K, I::Item>
    where
        F: FnMut(&I::Item, usize) -> K,
        K: Eq + Hash + Clone,
    {
        ops::group_by(self.cursor, selector)
    }

    /// See [`ops::group_by_key`].
    pub fn group_by_key<K>(self, key: K) -> Groups<Option<<I::Item as Pluck<K>>::Output>, I::Item>
    where
        I::Item: Pluck<K>,
        <I::Item as Pluck<K>>::Output: Eq + Hash + Clone,
    {
        ops::group_by_key(self.cursor, key)
    }

    /// See [`ops::partition`].
    pub fn partition<P>(self, predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        ops::partition(self.cursor, predicate)
    }

    /// See [`ops::unzip`].
    pub fn unzip(self) -> Vec<Vec<<I::Item as IntoIterator>::Item>>
    where
        I::Item: IntoIterator,
    {
        ops::unzip(self.cursor)
    }

    /// See [`ops::sum`].
    pub fn sum(self) -> f64
    where
        I::Item: AsNumber,
    {
        ops::sum(self.cursor)
    }

    /// See [`ops::product`].
    pub fn product(self) -> f64
    where
        I::Item: AsNumber,
    {
        ops::product(self.cursor)
    }

    /// See [`ops::average`].
    pub fn average(self) -> f64
    where
        I::Item: AsNumber,
    {
        ops::average(self.cursor)
    }

    /// See [`ops::count`].
    pub fn count(self) -> usize {
        ops::count(self.cursor)
    }

    /// See [`ops::first`].
    pub fn first(self) -> Option<I::Item> {
        ops::first(self.cursor)
    }

    /// See [`ops::last`].
    pub fn last(self) -> Option<I::Item> {
        ops::last(self.cursor)
    }

    /// See [`ops::find`].
    pub fn find<P>(self, predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        ops::find(self.cursor, predicate)
    }

    /// See [`ops::find_index`].
    pub fn find_index<P>(self, predicate: P) -> Option<usize>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        ops::find_index(self.cursor, predicate)
    }

    /// See [`ops::includes`].
    pub fn includes<Q>(self, needle: &Q) -> bool
    where
        Q: ?Sized,
        I::Item: PartialEq<Q>,
    {
        ops::includes(self.cursor, needle)
    }

    /// See [`ops::every`].
    pub fn every<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        ops::every(self.cursor, predicate)
    }

    /// See [`ops::some`].
    pub fn some<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        ops::some(self.cursor, predicate)
    }

    /// See [`ops::is_empty`].
    #[allow(clippy::wrong_self_convention)]
    pub fn is_empty(self) -> bool {
        ops::is_empty(self.cursor)
    }

    /// See [`ops::join`].
    pub fn join(self, delimiter: &str) -> String
    where
        I::Item: Display,
    {
        ops::join(self.cursor, delimiter)
    }

    /// See [`ops::min`].
    pub fn min(self) -> Option<I::Item>
    where
        I::Item: PartialOrd,
    {
        ops::min(self.cursor)
    }

    /// See [`ops::max`].
    pub fn max(self) -> Option<I::Item>
    where
        I::Item: PartialOrd,
    {
        ops::max(self.cursor)
    }

    /// Collects the items into a `Vec`.
    pub fn into_vec(self) -> Vec<I::Item> {
        self.cursor.collect()
    }

    /// Collects the distinct items into a `HashSet`.
    pub fn into_set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.cursor.collect()
    }

    /// Collects `(key, value)` items into a `HashMap`; later keys win.
    pub fn into_map<K, V>(self) -> HashMap<K, V>
    where
        I: Iterator<Item = (K, V)>,
        K: Eq + Hash,
    {
        self.cursor.collect()
    }
}

// -----------------------------------------------------------------------------
// std traits
// -----------------------------------------------------------------------------

impl<I: Iterator, M: LookaheadMode> Iterator for Fluent<I, M> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.cursor.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<I, M> FusedIterator for Fluent<I, M>
where
    I: Iterator,
    M: LookaheadMode,
    CursorOf<I, M>: FusedIterator,
{
}

impl<I, M> Clone for Fluent<I, M>
where
    I: Iterator,
    M: LookaheadMode,
    CursorOf<I, M>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<I, M> fmt::Debug for Fluent<I, M>
where
    I: Iterator,
    M: LookaheadMode,
    CursorOf<I, M>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fluent")
            .field("supports_peek", &M::SUPPORTS_PEEK)
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqError;
    use std::cell::Cell;

    #[test]
    fn test_chain_is_lazy_until_terminal() {
        let pulled = Cell::new(0);
        let chain = Seq::generate(|index| {
            pulled.set(pulled.get() + 1);
            index
        })
        .map(|item, _| item * 10)
        .take(3);
        assert_eq!(pulled.get(), 0);
        assert_eq!(chain.into_vec(), vec![0, 10, 20]);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_peekable_is_idempotent() {
        let once = Seq::new(vec![1, 2]).peekable();
        let twice = once.peekable();
        assert!(twice.supports_peek());
        assert_eq!(twice.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_plain_does_not_support_peek() {
        assert!(!Seq::new(Vec::<u8>::new()).supports_peek());
    }

    #[test]
    fn test_peek_then_chain_keeps_buffered_item() {
        let mut numbers = PeekableSeq::from_range(5, 1, 1);
        assert_eq!(numbers.peek(), Some(&1));
        let doubled: Vec<i32> = numbers.map(|item, _| item * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_constructors_work_in_both_modes() {
        let plain = Seq::zip(vec![vec![1, 2], vec![3]], ZipPolicy::Longest).count();
        let peeking = PeekableSeq::zip(vec![vec![1, 2], vec![3]], ZipPolicy::Longest).count();
        assert_eq!(plain, 2);
        assert_eq!(peeking, 2);
    }

    #[test]
    fn test_terminal_operations() {
        assert_eq!(seq(vec![3, 1, 2]).max(), Some(3));
        assert_eq!(seq(vec![3, 1, 2]).join(","), "3,1,2");
        assert_eq!(seq(Vec::<i32>::new()).reduce(|a, b, _| a + b), Err(SeqError::EmptyReduce));
        assert!(seq(vec!["a", "b"]).includes(&"b"));
        assert_eq!(seq(vec![1, 2, 3, 4]).find_index(|item, _| *item > 2), Some(2));
        assert!(seq(0..0).is_empty());
    }

    #[test]
    fn test_zip_with_mixed_types() {
        let pairs: Vec<(i32, char)> = seq(vec![1, 2, 3]).zip_with("ab".chars()).collect();
        assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_into_collections() {
        let set = seq(vec![1, 1, 2]).into_set();
        assert_eq!(set.len(), 2);
        let map = seq(vec![("a", 1), ("a", 2)]).into_map();
        assert_eq!(map.get("a"), Some(&2));
    }

    #[test]
    fn test_clone_forks_restartable_cursor() {
        let original = seq(vec![1, 2, 3]).skip(1);
        let fork = original.clone();
        assert_eq!(original.into_vec(), fork.into_vec());
    }
}
