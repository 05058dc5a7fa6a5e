//! Terminal consumers: folds, searches, grouping and other scalar results.
//!
//! Every function here pulls from its source until it has an answer. The
//! short-circuiting ones ([`first`], [`find`], [`find_index`], [`includes`],
//! [`every`], [`some`], [`is_empty`]) stop pulling as soon as the answer is
//! known; the rest drain the source.

use std::fmt::{Display, Write};
use std::hash::Hash;

use super::KeyIndex;
use super::transform::Pluck;
use crate::error::{Result, SeqError};

// =============================================================================
// folds
// =============================================================================

/// Folds the sequence with its first item as the seed.
///
/// `function` receives `(accumulator, item, index)` starting with the second
/// item (index 1).
///
/// # Errors
///
/// Returns [`SeqError::EmptyReduce`] when the sequence is empty, since there
/// is no seed to return.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// assert_eq!(ops::reduce(vec![1, 2, 3], |total, item, _| total + item), Ok(6));
/// assert!(ops::reduce(Vec::<i32>::new(), |total, item, _| total + item).is_err());
/// ```
pub fn reduce<S, F>(source: S, mut function: F) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
{
    let mut iter = source.into_iter();
    let seed = iter.next().ok_or(SeqError::EmptyReduce)?;
    Ok(iter
        .zip(1..)
        .fold(seed, |accumulator, (item, index)| function(accumulator, item, index)))
}

/// Folds the sequence starting from `seed`; an empty sequence returns `seed`.
pub fn fold<S, F, U>(source: S, seed: U, mut function: F) -> U
where
    S: IntoIterator,
    F: FnMut(U, S::Item, usize) -> U,
{
    source
        .into_iter()
        .zip(0..)
        .fold(seed, |accumulator, (item, index)| function(accumulator, item, index))
}

// =============================================================================
// grouping
// =============================================================================

/// Items grouped by key, in first-seen key order.
///
/// Returned by [`group_by`] and [`group_by_key`]. Within a group, items keep
/// their source order.
#[derive(Debug, Clone)]
pub struct Groups<K, T> {
    index: KeyIndex<K>,
    groups: Vec<(K, Vec<T>)>,
}

impl<K, T> Groups<K, T>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self {
            index: KeyIndex::default(),
            groups: Vec::new(),
        }
    }

    fn push(&mut self, key: K, item: T) {
        if let Some(&position) = self.index.get(&key) {
            self.groups[position].1.push(item);
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, vec![item]));
        }
    }

    /// Returns the group stored under `key`.
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Whether a group exists for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// The keys, in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Iterates over `(key, group)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.groups.iter().map(|(key, items)| (key, items.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Converts into the ordered `(key, group)` pairs.
    pub fn into_vec(self) -> Vec<(K, Vec<T>)> {
        self.groups
    }
}

impl<K: PartialEq, T: PartialEq> PartialEq for Groups<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: Eq, T: Eq> Eq for Groups<K, T> {}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups items by the key `selector` derives from `(item, index)`.
///
/// Drains the source.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let groups = ops::group_by(vec![1, 2, 3, 4, 5], |item, _| item % 2 == 0);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![false, true]);
/// assert_eq!(groups.get(&false), Some(&[1, 3, 5][..]));
/// ```
pub fn group_by<S, F, K>(source: S, mut selector: F) -> Groups<K, S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) -> K,
    K: Eq + Hash + Clone,
{
    let mut groups = Groups::new();
    for (index, item) in source.into_iter().enumerate() {
        groups.push(selector(&item, index), item);
    }
    debug!(groups = groups.len(), "grouped source");
    groups
}

/// Groups items by the property `key`; items without it land under `None`.
pub fn group_by_key<S, K>(
    source: S,
    key: K,
) -> Groups<Option<<S::Item as Pluck<K>>::Output>, S::Item>
where
    S: IntoIterator,
    S::Item: Pluck<K>,
    <S::Item as Pluck<K>>::Output: Eq + Hash + Clone,
{
    group_by(source, |item, _| item.pluck(&key))
}

/// Splits the sequence into `(passed, failed)` by `predicate`. Drains the source.
pub fn partition<S, P>(source: S, mut predicate: P) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for (index, item) in source.into_iter().enumerate() {
        if predicate(&item, index) {
            passed.push(item);
        } else {
            failed.push(item);
        }
    }
    (passed, failed)
}

// =============================================================================
// queries
// =============================================================================

/// Number of items. Drains the source.
pub fn count<S: IntoIterator>(source: S) -> usize {
    source.into_iter().count()
}

/// The first item, pulling at most one.
pub fn first<S: IntoIterator>(source: S) -> Option<S::Item> {
    source.into_iter().next()
}

/// The last item. Drains the source.
pub fn last<S: IntoIterator>(source: S) -> Option<S::Item> {
    source.into_iter().last()
}

/// Whether the sequence has no items, pulling at most one.
pub fn is_empty<S: IntoIterator>(source: S) -> bool {
    source.into_iter().next().is_none()
}

/// The first item satisfying `predicate`.
pub fn find<S, P>(source: S, mut predicate: P) -> Option<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(_, item)| item)
}

/// The index of the first item satisfying `predicate`.
pub fn find_index<S, P>(source: S, mut predicate: P) -> Option<usize>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(index, _)| index)
}

/// Whether any item equals `needle`.
pub fn includes<S, Q>(source: S, needle: &Q) -> bool
where
    S: IntoIterator,
    S::Item: PartialEq<Q>,
    Q: ?Sized,
{
    source.into_iter().any(|item| item == *needle)
}

/// Whether every item satisfies `predicate`; `true` for an empty sequence.
pub fn every<S, P>(source: S, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .all(|(index, item)| predicate(&item, index))
}

/// Whether some item satisfies `predicate`; `false` for an empty sequence.
pub fn some<S, P>(source: S, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .any(|(index, item)| predicate(&item, index))
}

/// Formats every item with `Display`, separated by `delimiter`.
///
/// ```rust
/// use seqwise::ops;
///
/// assert_eq!(ops::join(vec![1, 2, 3], ", "), "1, 2, 3");
/// assert_eq!(ops::join(Vec::<i32>::new(), ","), "");
/// ```
pub fn join<S>(source: S, delimiter: &str) -> String
where
    S: IntoIterator,
    S::Item: Display,
{
    let mut joined = String::new();
    for (index, item) in source.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(delimiter);
        }
        // Writing into a String cannot fail.
        let _ = write!(joined, "{item}");
    }
    joined
}

/// The smallest item. Items that do not compare (such as NaN) are skipped.
pub fn min<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: PartialOrd,
{
    extreme(source, |candidate, current| candidate < current)
}

/// The largest item. Items that do not compare (such as NaN) are skipped.
pub fn max<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: PartialOrd,
{
    extreme(source, |candidate, current| candidate > current)
}

fn extreme<S, F>(source: S, replaces: F) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: PartialOrd,
    F: Fn(&S::Item, &S::Item) -> bool,
{
    let comparable = |item: &S::Item| item.partial_cmp(item).is_some();
    source.into_iter().fold(None, |current, item| match current {
        _ if !comparable(&item) => current,
        Some(current) if !replaces(&item, &current) => Some(current),
        _ => Some(item),
    })
}
