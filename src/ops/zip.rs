//! Tuple-aligning combinators: advancing several cursors in lockstep and the
//! column-splitting inverse.

use std::iter::FusedIterator;

/// What [`zip`] does once one of its sources runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZipPolicy {
    /// Stop as soon as any source is exhausted.
    #[default]
    Shortest,
    /// Keep going while any source has items, padding the exhausted ones
    /// with `None`.
    Longest,
}

impl ZipPolicy {
    /// Builds a policy from a "stop on the shortest input" flag.
    pub const fn from_stop_on_min(stop_on_min: bool) -> Self {
        if stop_on_min {
            Self::Shortest
        } else {
            Self::Longest
        }
    }
}

impl From<bool> for ZipPolicy {
    fn from(stop_on_min: bool) -> Self {
        Self::from_stop_on_min(stop_on_min)
    }
}

/// Lazy adapter returned by [`zip`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Zip<I> {
    cursors: Vec<I>,
    policy: ZipPolicy,
    finished: bool,
}

/// Advances every source once per round and yields the round as a row.
///
/// A row holds one slot per source, in source order; `None` marks a source
/// that had nothing left this round. Every cursor is advanced each round,
/// including under [`ZipPolicy::Shortest`]. No sources means no rows.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops::{self, ZipPolicy};
///
/// let rows: Vec<Vec<Option<i32>>> = ops::zip(vec![vec![1, 2], vec![10, 20, 30]], ZipPolicy::Longest).collect();
/// assert_eq!(rows, vec![
///     vec![Some(1), Some(10)],
///     vec![Some(2), Some(20)],
///     vec![None, Some(30)],
/// ]);
/// ```
pub fn zip<S, T>(sources: S, policy: ZipPolicy) -> Zip<T::IntoIter>
where
    S: IntoIterator<Item = T>,
    T: IntoIterator,
{
    let cursors: Vec<T::IntoIter> = sources.into_iter().map(IntoIterator::into_iter).collect();
    Zip {
        finished: cursors.is_empty(),
        cursors,
        policy,
    }
}

impl<I: Iterator> Iterator for Zip<I> {
    type Item = Vec<Option<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let row: Vec<Option<I::Item>> = self.cursors.iter_mut().map(Iterator::next).collect();
        let live = row.iter().filter(|slot| slot.is_some()).count();
        let proceed = match self.policy {
            ZipPolicy::Shortest => live == row.len(),
            ZipPolicy::Longest => live > 0,
        };
        if proceed {
            Some(row)
        } else {
            trace!(sources = row.len(), live, "zip exhausted");
            self.finished = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let hints = self.cursors.iter().map(Iterator::size_hint);
        match self.policy {
            ZipPolicy::Shortest => hints.fold((usize::MAX, None::<usize>), |(lower, upper), hint| {
                let upper = match (upper, hint.1) {
                    (Some(left), Some(right)) => Some(left.min(right)),
                    (left, right) => left.or(right),
                };
                (lower.min(hint.0), upper)
            }),
            ZipPolicy::Longest => hints.fold((0, Some(0)), |(lower, upper), hint| {
                let upper = match (upper, hint.1) {
                    (Some(left), Some(right)) => Some(left.max(right)),
                    _ => None,
                };
                (lower.max(hint.0), upper)
            }),
        }
    }
}

impl<I: Iterator> FusedIterator for Zip<I> {}

/// Lazy adapter returned by [`zip_shortest`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct ZipShortest<I> {
    inner: Zip<I>,
}

/// [`zip`] with [`ZipPolicy::Shortest`], yielding rows without the `Option`
/// wrapper since every slot is filled.
///
/// ```rust
/// use seqwise::ops;
///
/// let rows: Vec<Vec<char>> = ops::zip_shortest(vec!["abc".chars(), "xy".chars()]).collect();
/// assert_eq!(rows, vec![vec!['a', 'x'], vec!['b', 'y']]);
/// ```
pub fn zip_shortest<S, T>(sources: S) -> ZipShortest<T::IntoIter>
where
    S: IntoIterator<Item = T>,
    T: IntoIterator,
{
    ZipShortest {
        inner: zip(sources, ZipPolicy::Shortest),
    }
}

impl<I: Iterator> Iterator for ZipShortest<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()?.into_iter().collect()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Iterator> FusedIterator for ZipShortest<I> {}

/// Splits a sequence of rows into one vector per column.
///
/// The number of columns is the length of the first row. Later rows that are
/// longer have their extra positions ignored; shorter rows simply contribute
/// nothing to the missing columns. Drains the source.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let columns = ops::unzip(vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']]);
/// assert_eq!(columns, vec![vec!['a', 'c', 'e'], vec!['b', 'd', 'f']]);
/// ```
pub fn unzip<S, R, T>(source: S) -> Vec<Vec<T>>
where
    S: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
{
    let mut rows = source.into_iter();
    let Some(first) = rows.next() else {
        return Vec::new();
    };
    let mut columns: Vec<Vec<T>> = first.into_iter().map(|value| vec![value]).collect();
    for row in rows {
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }
    columns
}
