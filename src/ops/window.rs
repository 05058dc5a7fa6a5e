//! Grouping adapters over consecutive items: chunks, sliding windows and
//! running folds.

use std::collections::VecDeque;
use std::iter::FusedIterator;

// =============================================================================
// chunk
// =============================================================================

/// Lazy adapter returned by [`chunk`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Chunk<I> {
    iter: I,
    size: usize,
    finished: bool,
}

/// Groups items into non-overlapping vectors of `size` items.
///
/// The final group may be shorter; it is emitted only if non-empty. A size of
/// zero yields nothing.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let chunks: Vec<Vec<i32>> = ops::chunk(vec![1, 2, 3, 4, 5], 2).collect();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk<S: IntoIterator>(source: S, size: usize) -> Chunk<S::IntoIter> {
    Chunk {
        iter: source.into_iter(),
        size,
        finished: size == 0,
    }
}

impl<I: Iterator> Iterator for Chunk<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut group = Vec::with_capacity(self.size);
        while group.len() < self.size {
            if let Some(item) = self.iter.next() {
                group.push(item);
            } else {
                self.finished = true;
                break;
            }
        }
        (!group.is_empty()).then_some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I: Iterator> FusedIterator for Chunk<I> {}

// =============================================================================
// windows
// =============================================================================

/// Lazy adapter returned by [`windows`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Windows<I: Iterator> {
    iter: I,
    size: usize,
    buffer: VecDeque<I::Item>,
    finished: bool,
}

/// Yields every run of `size` consecutive items, sliding by one.
///
/// A source of `n` items yields `n - size + 1` windows when `n >= size` and
/// none otherwise. A size of zero yields nothing. Only one item is pulled per
/// window after the first.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let pairs: Vec<Vec<i32>> = ops::windows(vec![1, 2, 3, 4], 2).collect();
/// assert_eq!(pairs, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
/// ```
pub fn windows<S>(source: S, size: usize) -> Windows<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Windows {
        iter: source.into_iter(),
        size,
        buffer: VecDeque::with_capacity(size),
        finished: size == 0,
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.buffer.len() == self.size {
            self.buffer.pop_front();
        }
        while self.buffer.len() < self.size {
            let Some(item) = self.iter.next() else {
                self.finished = true;
                self.buffer.clear();
                return None;
            };
            self.buffer.push_back(item);
        }
        Some(self.buffer.iter().cloned().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let retained = if self.buffer.len() == self.size {
            self.size - 1
        } else {
            self.buffer.len()
        };
        let (lower, upper) = self.iter.size_hint();
        let lower = lower.saturating_add(retained).saturating_sub(self.size - 1);
        let upper = upper
            .and_then(|upper| upper.checked_add(retained))
            .map(|upstream| upstream.saturating_sub(self.size - 1));
        (lower, upper)
    }
}

impl<I> FusedIterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

// =============================================================================
// scan
// =============================================================================

/// Lazy adapter returned by [`scan`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Scan<I: Iterator, F> {
    iter: I,
    function: F,
    accumulator: Option<I::Item>,
    index: usize,
}

/// Running fold without a seed: the first item is emitted unchanged and
/// becomes the accumulator; folding starts from the second item.
///
/// `function` receives `(accumulator, item, index)`.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let running: Vec<i32> = ops::scan(vec![1, 2, 3, 4], |sum, item, _| sum + item).collect();
/// assert_eq!(running, vec![1, 3, 6, 10]);
/// ```
pub fn scan<S, F>(source: S, function: F) -> Scan<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
{
    Scan {
        iter: source.into_iter(),
        function,
        accumulator: None,
        index: 0,
    }
}

impl<I, F> Iterator for Scan<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        let next = match self.accumulator.take() {
            Some(accumulator) => (self.function)(accumulator, item, index),
            None => item,
        };
        self.accumulator = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Lazy adapter returned by [`scan_from`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct ScanFrom<I, F, U> {
    iter: I,
    function: F,
    accumulator: Option<U>,
    index: usize,
}

/// Running fold from `seed`, emitting one accumulator per input item.
///
/// The seed itself is not emitted.
///
/// ```rust
/// use seqwise::ops;
///
/// let running: Vec<i32> = ops::scan_from(vec![1, 2, 3, 4], 0, |sum, item, _| sum + item).collect();
/// assert_eq!(running, vec![1, 3, 6, 10]);
/// ```
pub fn scan_from<S, F, U>(source: S, seed: U, function: F) -> ScanFrom<S::IntoIter, F, U>
where
    S: IntoIterator,
    U: Clone,
    F: FnMut(U, S::Item, usize) -> U,
{
    ScanFrom {
        iter: source.into_iter(),
        function,
        accumulator: Some(seed),
        index: 0,
    }
}

impl<I, F, U> Iterator for ScanFrom<I, F, U>
where
    I: Iterator,
    U: Clone,
    F: FnMut(U, I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let accumulator = self.accumulator.take()?;
        let Some(item) = self.iter.next() else {
            self.accumulator = Some(accumulator);
            return None;
        };
        let index = self.index;
        self.index += 1;
        let next = (self.function)(accumulator, item, index);
        self.accumulator = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
