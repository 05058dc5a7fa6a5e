//! Sequence producers: numeric ranges, index generators and replaying
//! sources.

use std::iter::FusedIterator;

// =============================================================================
// range
// =============================================================================

/// Numeric types that [`range`] can step through.
pub trait RangeValue: Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;
    /// The default step.
    const ONE: Self;

    /// Whether this value is zero.
    fn is_zero(self) -> bool;

    /// The absolute value, saturating where the type cannot represent it.
    fn magnitude(self) -> Self;

    /// Moves `step` away from `self`, or `None` when the type would overflow.
    fn advance(self, step: Self, ascending: bool) -> Option<Self>;
}

macro_rules! impl_range_value_signed {
    ($($type:ty),* $(,)?) => {
        $(
            impl RangeValue for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn is_zero(self) -> bool {
                    self == 0
                }

                fn magnitude(self) -> Self {
                    self.checked_abs().unwrap_or(Self::MAX)
                }

                fn advance(self, step: Self, ascending: bool) -> Option<Self> {
                    if ascending {
                        self.checked_add(step)
                    } else {
                        self.checked_sub(step)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_range_value_unsigned {
    ($($type:ty),* $(,)?) => {
        $(
            impl RangeValue for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn is_zero(self) -> bool {
                    self == 0
                }

                fn magnitude(self) -> Self {
                    self
                }

                fn advance(self, step: Self, ascending: bool) -> Option<Self> {
                    if ascending {
                        self.checked_add(step)
                    } else {
                        self.checked_sub(step)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_range_value_float {
    ($($type:ty),* $(,)?) => {
        $(
            impl RangeValue for $type {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn is_zero(self) -> bool {
                    self == 0.0
                }

                fn magnitude(self) -> Self {
                    self.abs()
                }

                fn advance(self, step: Self, ascending: bool) -> Option<Self> {
                    Some(if ascending { self + step } else { self - step })
                }
            }
        )*
    };
}

impl_range_value_signed!(i8, i16, i32, i64, i128, isize);
impl_range_value_unsigned!(u8, u16, u32, u64, u128, usize);
impl_range_value_float!(f32, f64);

/// Lazy producer returned by [`range`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Range<T> {
    next: Option<T>,
    stop: T,
    step: T,
    ascending: bool,
    single: bool,
}

/// Steps from `start` to `stop`, inclusive of both ends.
///
/// The direction comes from comparing `stop` with `start`; only the magnitude
/// of `step` is used. A zero step, or `stop == start`, yields `start` exactly
/// once. Integer ranges end instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// assert_eq!(ops::range(10, 0, 2).collect::<Vec<_>>(), vec![0, 2, 4, 6, 8, 10]);
/// assert_eq!(ops::range(0, 3, 1).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
/// assert_eq!(ops::range(5, 1, 0).collect::<Vec<_>>(), vec![1]);
/// ```
pub fn range<T: RangeValue>(stop: T, start: T, step: T) -> Range<T> {
    Range {
        next: Some(start),
        stop,
        step: step.magnitude(),
        ascending: stop > start,
        single: step.is_zero() || stop == start,
    }
}

/// `range(stop, 0, 1)`.
pub fn range_to<T: RangeValue>(stop: T) -> Range<T> {
    range(stop, T::ZERO, T::ONE)
}

impl<T: RangeValue> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        let in_bounds = if self.ascending {
            current <= self.stop
        } else {
            current >= self.stop
        };
        if !in_bounds {
            self.next = None;
            return None;
        }
        self.next = if self.single {
            None
        } else {
            current.advance(self.step, self.ascending)
        };
        Some(current)
    }
}

impl<T: RangeValue> FusedIterator for Range<T> {}

// =============================================================================
// generate
// =============================================================================

/// Unbounded producer returned by [`generate`].
#[derive(Debug, Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Generate<F> {
    function: F,
    index: usize,
}

/// Produces `function(0), function(1), function(2), ...` without end.
///
/// Pair it with a bound such as [`take`](super::take) or
/// [`take_while`](super::take_while).
pub fn generate<F, T>(function: F) -> Generate<F>
where
    F: FnMut(usize) -> T,
{
    Generate { function, index: 0 }
}

impl<F, T> Iterator for Generate<F>
where
    F: FnMut(usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.index;
        self.index += 1;
        Some((self.function)(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<F, T> FusedIterator for Generate<F> where F: FnMut(usize) -> T {}

// =============================================================================
// cycle / repeat
// =============================================================================

#[derive(Debug, Clone)]
enum Replay<I: Iterator> {
    Pending(I),
    Replaying {
        buffer: Vec<I::Item>,
        position: usize,
    },
}

impl<I> Replay<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Returns the next buffered item and whether it closed a round.
    fn next_item(&mut self) -> Option<(I::Item, bool)> {
        if let Self::Pending(iter) = self {
            let buffer: Vec<I::Item> = iter.by_ref().collect();
            debug!(items = buffer.len(), "materialized source for replay");
            *self = Self::Replaying {
                buffer,
                position: 0,
            };
        }
        let Self::Replaying { buffer, position } = self else {
            return None;
        };
        let item = buffer.get(*position)?.clone();
        *position = (*position + 1) % buffer.len();
        Some((item, *position == 0))
    }

    fn buffered_len(&self) -> Option<usize> {
        match self {
            Self::Pending(_) => None,
            Self::Replaying { buffer, .. } => Some(buffer.len()),
        }
    }
}

/// Lazy adapter returned by [`cycle`].
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Cycle<I: Iterator> {
    replay: Replay<I>,
}

/// Replays the source forever.
///
/// On the first pull the whole source is drained into a buffer, so the
/// source must be finite; the buffer is then replayed indefinitely. An empty
/// source yields nothing.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// let looped: Vec<i32> = ops::take(ops::cycle(vec![1, 2, 3]), 7).collect();
/// assert_eq!(looped, vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
pub fn cycle<S>(source: S) -> Cycle<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Cycle {
        replay: Replay::Pending(source.into_iter()),
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.replay.next_item().map(|(item, _)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.replay.buffered_len() {
            Some(0) => (0, Some(0)),
            Some(_) => (usize::MAX, None),
            None => (0, None),
        }
    }
}

impl<I> Clone for Cycle<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            replay: self.replay.clone(),
        }
    }
}

impl<I> std::fmt::Debug for Cycle<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Cycle").field("replay", &self.replay).finish()
    }
}

/// Lazy adapter returned by [`repeat`].
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Repeat<I: Iterator> {
    replay: Replay<I>,
    rounds: usize,
}

/// Replays the source `times` times.
///
/// Like [`cycle`], the source is drained into a buffer on the first pull.
/// `times == 0` yields nothing and never touches the source.
pub fn repeat<S>(source: S, times: usize) -> Repeat<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Repeat {
        replay: Replay::Pending(source.into_iter()),
        rounds: times,
    }
}

impl<I> Iterator for Repeat<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.rounds == 0 {
            return None;
        }
        let (item, round_closed) = self.replay.next_item()?;
        if round_closed {
            self.rounds -= 1;
        }
        Some(item)
    }
}

impl<I> Clone for Repeat<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            replay: self.replay.clone(),
            rounds: self.rounds,
        }
    }
}

impl<I> std::fmt::Debug for Repeat<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Repeat")
            .field("replay", &self.replay)
            .field("rounds", &self.rounds)
            .finish()
    }
}

impl<I> FusedIterator for Repeat<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
