//! Element-wise adapters: mapping, filtering, observing and flattening.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

// =============================================================================
// map / filter / tap / enumerate
// =============================================================================

/// Lazy adapter returned by [`map`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    function: F,
    index: usize,
}

/// Applies `function` to every item, passing the item and its index.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let doubled: Vec<i32> = ops::map(vec![1, 2, 3], |item, _| item * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<S, F, U>(source: S, function: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> U,
{
    Map {
        iter: source.into_iter(),
        function,
        index: 0,
    }
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.function)(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, U> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> U,
{
}

/// Lazy adapter returned by [`filter`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
    index: usize,
}

/// Keeps the items for which `predicate` returns `true`.
///
/// The index passed to `predicate` counts every input item, kept or not.
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    Filter {
        iter: source.into_iter(),
        predicate,
        index: 0,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}

/// Lazy adapter returned by [`tap`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Tap<I, F> {
    iter: I,
    observer: F,
    index: usize,
}

/// Calls `observer` on every item as it is pulled, yielding the item unchanged.
///
/// The observer runs once per pulled item. An item pulled here and then
/// discarded further down the chain has still been observed.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let mut seen = Vec::new();
/// let taken: Vec<i32> = ops::take(ops::tap(vec![1, 2, 3, 4], |item, _| seen.push(*item)), 2).collect();
/// assert_eq!(taken, vec![1, 2]);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub fn tap<S, F>(source: S, observer: F) -> Tap<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize),
{
    Tap {
        iter: source.into_iter(),
        observer,
        index: 0,
    }
}

impl<I, F> Iterator for Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        (self.observer)(&item, self.index);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for Tap<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item, usize),
{
}

/// Lazy adapter returned by [`enumerate`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Enumerate<I> {
    iter: I,
    index: usize,
}

/// Pairs every item with its index: `(index, item)`.
pub fn enumerate<S: IntoIterator>(source: S) -> Enumerate<S::IntoIter> {
    Enumerate {
        iter: source.into_iter(),
        index: 0,
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Enumerate<I> {}

// =============================================================================
// pluck
// =============================================================================

/// Items that expose named (or indexed) properties.
///
/// `K` is the key type as the caller passes it. A missing property is
/// `None`, never an error.
pub trait Pluck<K> {
    /// The property value type.
    type Output;

    /// Returns a copy of the property stored under `key`, if present.
    fn pluck(&self, key: &K) -> Option<Self::Output>;
}

impl<K, V, H> Pluck<K> for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: Clone,
    H: BuildHasher,
{
    type Output = V;

    fn pluck(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V, H> Pluck<&str> for HashMap<String, V, H>
where
    V: Clone,
    H: BuildHasher,
{
    type Output = V;

    fn pluck(&self, key: &&str) -> Option<V> {
        self.get(*key).cloned()
    }
}

impl<K: Ord, V: Clone> Pluck<K> for BTreeMap<K, V> {
    type Output = V;

    fn pluck(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V: Clone> Pluck<&str> for BTreeMap<String, V> {
    type Output = V;

    fn pluck(&self, key: &&str) -> Option<V> {
        self.get(*key).cloned()
    }
}

impl<K, T: Pluck<K> + ?Sized> Pluck<K> for &T {
    type Output = T::Output;

    fn pluck(&self, key: &K) -> Option<Self::Output> {
        (**self).pluck(key)
    }
}

/// Lazy adapter returned by [`pluck`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Plucked<I, K> {
    iter: I,
    key: K,
}

/// Extracts the property `key` from every item; missing properties yield `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use seqwise::ops;
///
/// let rows = vec![
///     HashMap::from([("name".to_string(), "ada")]),
///     HashMap::from([("role".to_string(), "admin")]),
/// ];
/// let names: Vec<Option<&str>> = ops::pluck(&rows, "name").collect();
/// assert_eq!(names, vec![Some("ada"), None]);
/// ```
pub fn pluck<S, K>(source: S, key: K) -> Plucked<S::IntoIter, K>
where
    S: IntoIterator,
    S::Item: Pluck<K>,
{
    Plucked {
        iter: source.into_iter(),
        key,
    }
}

impl<I, K> Iterator for Plucked<I, K>
where
    I: Iterator,
    I::Item: Pluck<K>,
{
    type Item = Option<<I::Item as Pluck<K>>::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|item| item.pluck(&self.key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, K> FusedIterator for Plucked<I, K>
where
    I: FusedIterator,
    I::Item: Pluck<K>,
{
}

// =============================================================================
// filter_nullish
// =============================================================================

/// Lazy adapter returned by [`filter_nullish`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct FilterNullish<I> {
    iter: I,
}

/// Drops the `None`s from a sequence of options and unwraps the rest.
pub fn filter_nullish<S, T>(source: S) -> FilterNullish<S::IntoIter>
where
    S: IntoIterator<Item = Option<T>>,
{
    FilterNullish {
        iter: source.into_iter(),
    }
}

impl<I, T> Iterator for FilterNullish<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.find_map(|item| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> FusedIterator for FilterNullish<I> where I: FusedIterator<Item = Option<T>> {}

// =============================================================================
// flatten / flat_map (static nesting)
// =============================================================================

/// Lazy adapter returned by [`flatten`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Flatten<I, U> {
    iter: I,
    front: Option<U>,
}

/// Flattens one level of statically nested sequences.
///
/// ```rust
/// use seqwise::ops;
///
/// let flat: Vec<i32> = ops::flatten(vec![vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
pub fn flatten<S>(source: S) -> Flatten<S::IntoIter, <S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Flatten {
        iter: source.into_iter(),
        front: None,
    }
}

impl<I, U> Iterator for Flatten<I, U>
where
    I: Iterator,
    I::Item: IntoIterator<IntoIter = U>,
    U: Iterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(front) = self.front.as_mut() {
                if let Some(item) = front.next() {
                    return Some(item);
                }
                self.front = None;
            }
            self.front = Some(self.iter.next()?.into_iter());
        }
    }
}

/// Lazy adapter returned by [`flat_map`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct FlatMap<I, F, U> {
    inner: Flatten<Map<I, F>, U>,
}

/// Maps every item to a sequence and flattens the result one level.
pub fn flat_map<S, F, R>(source: S, function: F) -> FlatMap<S::IntoIter, F, R::IntoIter>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> R,
    R: IntoIterator,
{
    FlatMap {
        inner: flatten(map(source, function)),
    }
}

impl<I, F, R, U> Iterator for FlatMap<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> R,
    R: IntoIterator<IntoIter = U>,
    U: Iterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        self.inner.next()
    }
}

// =============================================================================
// flat (depth-limited, dynamic nesting)
// =============================================================================

/// The two shapes a [`Nested`] item can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nesting<T, C> {
    /// A value that is never descended into.
    Leaf(T),
    /// A container whose children have the same type as the container.
    Branch(C),
}

/// Items that may themselves contain items of the same type.
///
/// String-like values must report themselves as leaves; otherwise a
/// character-level flatten would recurse forever.
pub trait Nested: Sized {
    /// The children of a branch.
    type Children: IntoIterator<Item = Self>;

    /// Splits the item into a leaf or its children.
    fn into_nesting(self) -> Nesting<Self, Self::Children>;
}

/// Lazy adapter returned by [`flat`].
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Flat<I>
where
    I: Iterator,
    I::Item: Nested,
{
    iter: I,
    depth: usize,
    stack: Vec<<<I::Item as Nested>::Children as IntoIterator>::IntoIter>,
}

/// Flattens branches up to `depth` levels; `depth == 0` yields the items unchanged.
///
/// Branches deeper than `depth` are yielded as-is.
pub fn flat<S>(source: S, depth: usize) -> Flat<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Nested,
{
    Flat {
        iter: source.into_iter(),
        depth,
        stack: Vec::new(),
    }
}

impl<I> Iterator for Flat<I>
where
    I: Iterator,
    I::Item: Nested,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let level = self.stack.len();
            let item = match self.stack.last_mut() {
                Some(children) => match children.next() {
                    Some(item) => item,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                None => self.iter.next()?,
            };

            if level >= self.depth {
                return Some(item);
            }
            match item.into_nesting() {
                Nesting::Leaf(leaf) => return Some(leaf),
                Nesting::Branch(children) => self.stack.push(children.into_iter()),
            }
        }
    }
}

impl<I> std::fmt::Debug for Flat<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: Nested,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Flat")
            .field("iter", &self.iter)
            .field("depth", &self.depth)
            .field("open_levels", &self.stack.len())
            .finish()
    }
}
