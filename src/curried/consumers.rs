//! Transformers that consume their source and produce a scalar.

use std::fmt::Display;
use std::hash::Hash;

use super::Transform;
use crate::error::Result;
use crate::ops::{self, AsNumber, Groups, Pluck};

/// Transformer returned by [`reduce`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Reduce<F> {
    function: F,
}

/// Point-free [`ops::reduce`].
pub const fn reduce<F>(function: F) -> Reduce<F> {
    Reduce { function }
}

impl<S, F> Transform<S> for Reduce<F>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item, usize) -> S::Item + Clone,
{
    type Output = Result<S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::reduce(source, self.function.clone())
    }
}

/// Transformer returned by [`fold`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Fold<U, F> {
    seed: U,
    function: F,
}

/// Point-free [`ops::fold`].
pub const fn fold<U, F>(seed: U, function: F) -> Fold<U, F> {
    Fold { seed, function }
}

impl<S, U, F> Transform<S> for Fold<U, F>
where
    S: IntoIterator,
    U: Clone,
    F: FnMut(U, S::Item, usize) -> U + Clone,
{
    type Output = U;

    fn apply_to(&self, source: S) -> U {
        ops::fold(source, self.seed.clone(), self.function.clone())
    }
}

/// Transformer returned by [`group_by`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct GroupBy<F> {
    selector: F,
}

/// Point-free [`ops::group_by`].
pub const fn group_by<F>(selector: F) -> GroupBy<F> {
    GroupBy { selector }
}

impl<S, F, K> Transform<S> for GroupBy<F>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) -> K + Clone,
    K: Eq + Hash + Clone,
{
    type Output = Groups<K, S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::group_by(source, self.selector.clone())
    }
}

/// Transformer returned by [`group_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct GroupByKey<K> {
    key: K,
}

/// Point-free [`ops::group_by_key`].
pub const fn group_by_key<K>(key: K) -> GroupByKey<K> {
    GroupByKey { key }
}

impl<S, K> Transform<S> for GroupByKey<K>
where
    S: IntoIterator,
    S::Item: Pluck<K>,
    <S::Item as Pluck<K>>::Output: Eq + Hash + Clone,
    K: Clone,
{
    type Output = Groups<Option<<S::Item as Pluck<K>>::Output>, S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::group_by_key(source, self.key.clone())
    }
}

/// Transformer returned by [`partition`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Partition<P> {
    predicate: P,
}

/// Point-free [`ops::partition`].
pub const fn partition<P>(predicate: P) -> Partition<P> {
    Partition { predicate }
}

impl<S, P> Transform<S> for Partition<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = (Vec<S::Item>, Vec<S::Item>);

    fn apply_to(&self, source: S) -> Self::Output {
        ops::partition(source, self.predicate.clone())
    }
}

/// Transformer returned by [`unzip`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Unzip;

/// Point-free [`ops::unzip`].
pub const fn unzip() -> Unzip {
    Unzip
}

impl<S> Transform<S> for Unzip
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    type Output = Vec<Vec<<S::Item as IntoIterator>::Item>>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::unzip(source)
    }
}

macro_rules! numeric_transformer {
    ($(#[$meta:meta])* $name:ident => $function:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        #[must_use = "transformers do nothing until applied"]
        pub struct $name;

        #[doc = concat!("Point-free [`ops::", stringify!($function), "`].")]
        pub const fn $function() -> $name {
            $name
        }

        impl<S> Transform<S> for $name
        where
            S: IntoIterator,
            S::Item: AsNumber,
        {
            type Output = f64;

            fn apply_to(&self, source: S) -> f64 {
                ops::$function(source)
            }
        }
    };
}

numeric_transformer!(
    /// Transformer returned by [`sum`].
    Sum => sum
);
numeric_transformer!(
    /// Transformer returned by [`product`].
    Product => product
);
numeric_transformer!(
    /// Transformer returned by [`average`].
    Average => average
);

/// Transformer returned by [`count`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Count;

/// Point-free [`ops::count`].
pub const fn count() -> Count {
    Count
}

impl<S: IntoIterator> Transform<S> for Count {
    type Output = usize;

    fn apply_to(&self, source: S) -> usize {
        ops::count(source)
    }
}

/// Transformer returned by [`first`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct First;

/// Point-free [`ops::first`].
pub const fn first() -> First {
    First
}

impl<S: IntoIterator> Transform<S> for First {
    type Output = Option<S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::first(source)
    }
}

/// Transformer returned by [`last`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Last;

/// Point-free [`ops::last`].
pub const fn last() -> Last {
    Last
}

impl<S: IntoIterator> Transform<S> for Last {
    type Output = Option<S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::last(source)
    }
}

/// Transformer returned by [`is_empty`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct IsEmpty;

/// Point-free [`ops::is_empty`].
pub const fn is_empty() -> IsEmpty {
    IsEmpty
}

impl<S: IntoIterator> Transform<S> for IsEmpty {
    type Output = bool;

    fn apply_to(&self, source: S) -> bool {
        ops::is_empty(source)
    }
}

/// Transformer returned by [`find`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Find<P> {
    predicate: P,
}

/// Point-free [`ops::find`].
pub const fn find<P>(predicate: P) -> Find<P> {
    Find { predicate }
}

impl<S, P> Transform<S> for Find<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = Option<S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::find(source, self.predicate.clone())
    }
}

/// Transformer returned by [`find_index`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct FindIndex<P> {
    predicate: P,
}

/// Point-free [`ops::find_index`].
pub const fn find_index<P>(predicate: P) -> FindIndex<P> {
    FindIndex { predicate }
}

impl<S, P> Transform<S> for FindIndex<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = Option<usize>;

    fn apply_to(&self, source: S) -> Option<usize> {
        ops::find_index(source, self.predicate.clone())
    }
}

/// Transformer returned by [`includes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Includes<Q> {
    needle: Q,
}

/// Point-free [`ops::includes`].
pub const fn includes<Q>(needle: Q) -> Includes<Q> {
    Includes { needle }
}

impl<S, Q> Transform<S> for Includes<Q>
where
    S: IntoIterator,
    S::Item: PartialEq<Q>,
{
    type Output = bool;

    fn apply_to(&self, source: S) -> bool {
        ops::includes(source, &self.needle)
    }
}

/// Transformer returned by [`every`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Every<P> {
    predicate: P,
}

/// Point-free [`ops::every`].
pub const fn every<P>(predicate: P) -> Every<P> {
    Every { predicate }
}

impl<S, P> Transform<S> for Every<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = bool;

    fn apply_to(&self, source: S) -> bool {
        ops::every(source, self.predicate.clone())
    }
}

/// Transformer returned by [`some`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct SomeMatch<P> {
    predicate: P,
}

/// Point-free [`ops::some`].
pub const fn some<P>(predicate: P) -> SomeMatch<P> {
    SomeMatch { predicate }
}

impl<S, P> Transform<S> for SomeMatch<P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Output = bool;

    fn apply_to(&self, source: S) -> bool {
        ops::some(source, self.predicate.clone())
    }
}

/// Transformer returned by [`join`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Join {
    delimiter: String,
}

/// Point-free [`ops::join`].
pub fn join(delimiter: impl Into<String>) -> Join {
    Join {
        delimiter: delimiter.into(),
    }
}

impl<S> Transform<S> for Join
where
    S: IntoIterator,
    S::Item: Display,
{
    type Output = String;

    fn apply_to(&self, source: S) -> String {
        ops::join(source, &self.delimiter)
    }
}

/// Transformer returned by [`min`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Min;

/// Point-free [`ops::min`].
pub const fn min() -> Min {
    Min
}

impl<S> Transform<S> for Min
where
    S: IntoIterator,
    S::Item: PartialOrd,
{
    type Output = Option<S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::min(source)
    }
}

/// Transformer returned by [`max`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "transformers do nothing until applied"]
pub struct Max;

/// Point-free [`ops::max`].
pub const fn max() -> Max {
    Max
}

impl<S> Transform<S> for Max
where
    S: IntoIterator,
    S::Item: PartialOrd,
{
    type Output = Option<S::Item>;

    fn apply_to(&self, source: S) -> Self::Output {
        ops::max(source)
    }
}
