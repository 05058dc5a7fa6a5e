//! Transformers that produce lazy adapters.

use std::hash::Hash;

use super::Transform;
use crate::ops::{self, Nested, Pluck as PluckProperty, ZipPolicy};
use crate::peekable;

/// Transformer returned by [`map`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Map<F> {
    function: F,
}

/// Point-free [`ops::map`].
pub const fn map<F>(function: F) -> Map<F> {
    Map { function }
}

impl<S, F, U> Transform<S> for Map<F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> U + Clone,
{
    type Output = ops::Map<S::IntoIter, F>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::map(source, self.function.clone())
    }
}

/// Transformer returned by [`filter`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Filter<P> {
    predicate: P,
}

/// Point-free [`ops::filter`].
pub const fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

impl<S, P> Transform<S> for Filter<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = ops::Filter<S::IntoIter, P>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::filter(source, self.predicate.clone())
    }
}

/// Transformer returned by [`tap`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Tap<F> {
    observer: F,
}

/// Point-free [`ops::tap`].
pub const fn tap<F>(observer: F) -> Tap<F> {
    Tap { observer }
}

impl<S, F> Transform<S> for Tap<F>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) + Clone,
{
    type Output = ops::Tap<S::IntoIter, F>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::tap(source, self.observer.clone())
    }
}

/// Transformer returned by [`enumerate`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Enumerate;

/// Point-free [`ops::enumerate`].
pub const fn enumerate() -> Enumerate {
    Enumerate
}

impl<S: IntoIterator> Transform<S> for Enumerate {
    type Output = ops::Enumerate<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::enumerate(source)
    }
}

/// Transformer returned by [`take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Take {
    count: usize,
}

/// Point-free [`ops::take`].
pub const fn take(count: usize) -> Take {
    Take { count }
}

impl<S: IntoIterator> Transform<S> for Take {
    type Output = ops::Take<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::take(source, self.count)
    }
}

/// Transformer returned by [`skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Skip {
    count: usize,
}

/// Point-free [`ops::skip`].
pub const fn skip(count: usize) -> Skip {
    Skip { count }
}

impl<S: IntoIterator> Transform<S> for Skip {
    type Output = ops::Skip<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::skip(source, self.count)
    }
}

/// Transformer returned by [`take_while`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct TakeWhile<P> {
    predicate: P,
}

/// Point-free [`ops::take_while`].
pub const fn take_while<P>(predicate: P) -> TakeWhile<P> {
    TakeWhile { predicate }
}

impl<S, P> Transform<S> for TakeWhile<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = ops::TakeWhile<S::IntoIter, P>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::take_while(source, self.predicate.clone())
    }
}

/// Transformer returned by [`skip_while`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct SkipWhile<P> {
    predicate: P,
}

/// Point-free [`ops::skip_while`].
pub const fn skip_while<P>(predicate: P) -> SkipWhile<P> {
    SkipWhile { predicate }
}

impl<S, P> Transform<S> for SkipWhile<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = ops::SkipWhile<S::IntoIter, P>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::skip_while(source, self.predicate.clone())
    }
}

/// Transformer returned by [`until`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Until<P> {
    predicate: P,
}

/// Point-free [`ops::until`].
pub const fn until<P>(predicate: P) -> Until<P> {
    Until { predicate }
}

impl<S, P> Transform<S> for Until<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = ops::Until<S::IntoIter, P>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::until(source, self.predicate.clone())
    }
}

/// Transformer returned by [`chunk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Chunk {
    size: usize,
}

/// Point-free [`ops::chunk`].
pub const fn chunk(size: usize) -> Chunk {
    Chunk { size }
}

impl<S: IntoIterator> Transform<S> for Chunk {
    type Output = ops::Chunk<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::chunk(source, self.size)
    }
}

/// Transformer returned by [`windows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Windows {
    size: usize,
}

/// Point-free [`ops::windows`].
pub const fn windows(size: usize) -> Windows {
    Windows { size }
}

impl<S> Transform<S> for Windows
where
    S: IntoIterator,
    S::Item: Clone,
{
    type Output = ops::Windows<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::windows(source, self.size)
    }
}

/// Transformer returned by [`scan`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Scan<F> {
    function: F,
}

/// Point-free [`ops::scan`].
pub const fn scan<F>(function: F) -> Scan<F> {
    Scan { function }
}

impl<S, F> Transform<S> for Scan<F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item, usize) -> S::Item + Clone,
{
    type Output = ops::Scan<S::IntoIter, F>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::scan(source, self.function.clone())
    }
}

/// Transformer returned by [`scan_from`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct ScanFrom<U, F> {
    seed: U,
    function: F,
}

/// Point-free [`ops::scan_from`].
pub const fn scan_from<U, F>(seed: U, function: F) -> ScanFrom<U, F> {
    ScanFrom { seed, function }
}

impl<S, U, F> Transform<S> for ScanFrom<U, F>
where
    S: IntoIterator,
    U: Clone,
    F: FnMut(U, S::Item, usize) -> U + Clone,
{
    type Output = ops::ScanFrom<S::IntoIter, F, U>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::scan_from(source, self.seed.clone(), self.function.clone())
    }
}

/// Transformer returned by [`flat_map`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct FlatMap<F> {
    function: F,
}

/// Point-free [`ops::flat_map`].
pub const fn flat_map<F>(function: F) -> FlatMap<F> {
    FlatMap { function }
}

impl<S, F, R> Transform<S> for FlatMap<F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> R + Clone,
    R: IntoIterator,
{
    type Output = ops::FlatMap<S::IntoIter, F, R::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::flat_map(source, self.function.clone())
    }
}

/// Transformer returned by [`flatten`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Flatten;

/// Point-free [`ops::flatten`].
pub const fn flatten() -> Flatten {
    Flatten
}

impl<S> Transform<S> for Flatten
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    type Output = ops::Flatten<S::IntoIter, <S::Item as IntoIterator>::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::flatten(source)
    }
}

/// Transformer returned by [`flat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Flat {
    depth: usize,
}

/// Point-free [`ops::flat`].
pub const fn flat(depth: usize) -> Flat {
    Flat { depth }
}

impl<S> Transform<S> for Flat
where
    S: IntoIterator,
    S::Item: Nested,
{
    type Output = ops::Flat<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::flat(source, self.depth)
    }
}

/// Transformer returned by [`unique`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Unique;

/// Point-free [`ops::unique`].
pub const fn unique() -> Unique {
    Unique
}

impl<S> Transform<S> for Unique
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    type Output = ops::Unique<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::unique(source)
    }
}

/// Transformer returned by [`unique_by`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct UniqueBy<F> {
    selector: F,
}

/// Point-free [`ops::unique_by`].
pub const fn unique_by<F>(selector: F) -> UniqueBy<F> {
    UniqueBy { selector }
}

impl<S, F, K> Transform<S> for UniqueBy<F>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) -> K + Clone,
    K: Eq + Hash,
{
    type Output = ops::UniqueBy<S::IntoIter, F, K>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::unique_by(source, self.selector.clone())
    }
}

/// Transformer returned by [`pluck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Pluck<K> {
    key: K,
}

/// Point-free [`ops::pluck`].
pub const fn pluck<K>(key: K) -> Pluck<K> {
    Pluck { key }
}

impl<S, K> Transform<S> for Pluck<K>
where
    S: IntoIterator,
    S::Item: PluckProperty<K>,
    K: Clone,
{
    type Output = ops::Plucked<S::IntoIter, K>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::pluck(source, self.key.clone())
    }
}

/// Transformer returned by [`filter_nullish`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct FilterNullish;

/// Point-free [`ops::filter_nullish`].
pub const fn filter_nullish() -> FilterNullish {
    FilterNullish
}

impl<S, T> Transform<S> for FilterNullish
where
    S: IntoIterator<Item = Option<T>>,
{
    type Output = ops::FilterNullish<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::filter_nullish(source)
    }
}

/// Transformer returned by [`cycle`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Cycle;

/// Point-free [`ops::cycle`].
pub const fn cycle() -> Cycle {
    Cycle
}

impl<S> Transform<S> for Cycle
where
    S: IntoIterator,
    S::Item: Clone,
{
    type Output = ops::Cycle<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::cycle(source)
    }
}

/// Transformer returned by [`repeat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Repeat {
    times: usize,
}

/// Point-free [`ops::repeat`].
pub const fn repeat(times: usize) -> Repeat {
    Repeat { times }
}

impl<S> Transform<S> for Repeat
where
    S: IntoIterator,
    S::Item: Clone,
{
    type Output = ops::Repeat<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::repeat(source, self.times)
    }
}

/// Transformer returned by [`zip`]. Applies to a sequence of sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Zip {
    policy: ZipPolicy,
}

/// Point-free [`ops::zip`].
pub const fn zip(policy: ZipPolicy) -> Zip {
    Zip { policy }
}

impl<S> Transform<S> for Zip
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    type Output = ops::Zip<<S::Item as IntoIterator>::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::zip(source, self.policy)
    }
}

/// Transformer returned by [`zip_shortest`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct ZipShortest;

/// Point-free [`ops::zip_shortest`].
pub const fn zip_shortest() -> ZipShortest {
    ZipShortest
}

impl<S> Transform<S> for ZipShortest
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    type Output = ops::ZipShortest<<S::Item as IntoIterator>::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::zip_shortest(source)
    }
}

/// Transformer returned by [`peekable`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Peekable;

/// Point-free [`peekable::peekable`].
pub const fn peekable() -> Peekable {
    Peekable
}

impl<S: IntoIterator> Transform<S> for Peekable {
    type Output = peekable::Peekable<S::IntoIter>;

    fn apply_to(&self, source: S) -> Self::Output {
        peekable::peekable(source)
    }
}
