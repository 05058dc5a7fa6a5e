//! First-occurrence deduplication.
//!
//! Both adapters remember what they have already yielded in a seen-set and
//! decide per item, so they stay lazy and work on unbounded sources. Memory
//! grows with the number of distinct keys seen so far.

use std::hash::Hash;
use std::iter::FusedIterator;

use super::SeenSet;

/// Lazy adapter returned by [`unique`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Unique<I: Iterator> {
    iter: I,
    seen: SeenSet<I::Item>,
}

/// Yields each distinct item once, at its first occurrence.
///
/// Distinctness is value equality (`Eq + Hash`). To deduplicate by identity,
/// map items to something identity-bearing first, or use [`unique_by`].
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let distinct: Vec<i32> = ops::unique(vec![3, 1, 3, 2, 1]).collect();
/// assert_eq!(distinct, vec![3, 1, 2]);
/// ```
pub fn unique<S>(source: S) -> Unique<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    Unique {
        iter: source.into_iter(),
        seen: SeenSet::default(),
    }
}

impl<I> Iterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let seen = &mut self.seen;
        self.iter.find(|item| {
            if seen.contains(item) {
                false
            } else {
                seen.insert(item.clone());
                true
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (usize::from(lower > 0 && self.seen.is_empty()), upper)
    }
}

impl<I> FusedIterator for Unique<I>
where
    I: FusedIterator,
    I::Item: Eq + Hash + Clone,
{
}

/// Lazy adapter returned by [`unique_by`].
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct UniqueBy<I, F, K> {
    iter: I,
    selector: F,
    seen: SeenSet<K>,
    index: usize,
}

/// Yields each item whose derived key has not been seen before.
///
/// `selector` receives `(item, index)` and runs once per pulled item.
///
/// ```rust
/// use seqwise::ops;
///
/// let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
/// let first_per_letter: Vec<&str> = ops::unique_by(words, |word, _| word.chars().next()).collect();
/// assert_eq!(first_per_letter, vec!["apple", "banana", "cherry"]);
/// ```
pub fn unique_by<S, F, K>(source: S, selector: F) -> UniqueBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) -> K,
    K: Eq + Hash,
{
    UniqueBy {
        iter: source.into_iter(),
        selector,
        seen: SeenSet::default(),
        index: 0,
    }
}

impl<I, F, K> Iterator for UniqueBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            let key = (self.selector)(&item, self.index);
            self.index += 1;
            if self.seen.insert(key) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, K> Clone for UniqueBy<I, F, K>
where
    I: Clone,
    F: Clone,
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            selector: self.selector.clone(),
            seen: self.seen.clone(),
            index: self.index,
        }
    }
}

impl<I: std::fmt::Debug, F, K> std::fmt::Debug for UniqueBy<I, F, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UniqueBy")
            .field("iter", &self.iter)
            .field("seen", &self.seen.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
