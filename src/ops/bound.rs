//! Boundary adapters: `take`, `skip` and their predicate-driven variants.
//!
//! These are the operators that make unbounded sources usable. A bounding
//! adapter stops pulling from its source as soon as its boundary is reached,
//! so `take(source, n)` never touches item `n + 1`.

use std::iter::FusedIterator;

/// Lazy adapter returned by [`take`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

/// Yields at most the first `count` items. `take(source, 0)` yields nothing
/// and never pulls from `source`.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let first: Vec<usize> = ops::take(ops::generate(|index| index), 5).collect();
/// assert_eq!(first, vec![0, 1, 2, 3, 4]);
/// ```
pub fn take<S: IntoIterator>(source: S, count: usize) -> Take<S::IntoIter> {
    Take {
        iter: source.into_iter(),
        remaining: count,
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.iter.next();
        if item.is_none() {
            self.remaining = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

/// Lazy adapter returned by [`skip`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Skip<I> {
    iter: I,
    pending: usize,
}

/// Skips the first `count` items and yields the rest.
///
/// The skipped items are pulled on the first call to `next`, not when the
/// adapter is built.
pub fn skip<S: IntoIterator>(source: S, count: usize) -> Skip<S::IntoIter> {
    Skip {
        iter: source.into_iter(),
        pending: count,
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.iter.next()?;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Skip<I> {}

/// Lazy adapter returned by [`take_while`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    index: usize,
    finished: bool,
}

/// Yields items while `predicate` holds; the first failing item ends the
/// sequence and is discarded.
pub fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    TakeWhile {
        iter: source.into_iter(),
        predicate,
        index: 0,
        finished: false,
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        let item = self.iter.next();
        let keep = item.as_ref().is_some_and(|item| (self.predicate)(item, self.index));
        self.index += 1;
        if keep {
            item
        } else {
            self.finished = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}

/// Lazy adapter returned by [`until`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Until<I, P> {
    iter: I,
    predicate: P,
    index: usize,
    finished: bool,
}

/// Yields items until `predicate` first holds; that item is discarded.
///
/// `until(source, predicate)` behaves exactly like
/// `take_while(source, |item, index| !predicate(item, index))`.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let head: Vec<&str> = ops::until(vec!["a", "b", "--", "c"], |item, _| *item == "--").collect();
/// assert_eq!(head, vec!["a", "b"]);
/// ```
pub fn until<S, P>(source: S, predicate: P) -> Until<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    Until {
        iter: source.into_iter(),
        predicate,
        index: 0,
        finished: false,
    }
}

impl<I, P> Iterator for Until<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        let item = self.iter.next();
        let stop = item
            .as_ref()
            .is_none_or(|item| (self.predicate)(item, self.index));
        self.index += 1;
        if stop {
            self.finished = true;
            None
        } else {
            item
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for Until<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}

/// Lazy adapter returned by [`skip_while`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: Option<P>,
    index: usize,
}

/// Skips items while `predicate` holds, then yields the first failing item
/// and everything after it without consulting `predicate` again.
pub fn skip_while<S, P>(source: S, predicate: P) -> SkipWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    SkipWhile {
        iter: source.into_iter(),
        predicate: Some(predicate),
        index: 0,
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let Some(mut predicate) = self.predicate.take() else {
            return self.iter.next();
        };
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if !predicate(&item, index) {
                return Some(item);
            }
        }
        self.predicate = Some(predicate);
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.predicate.is_some() {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I, P> FusedIterator for SkipWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}
