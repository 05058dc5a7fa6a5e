//! Point-free combinators.
//!
//! Every combinator in [`crate::ops`] has a counterpart here that takes only
//! its configuration and returns a *transformer*: a reusable value
//! implementing [`Transform`] that is later applied to a sequence. Applying a
//! transformer gives exactly what the direct form gives for the same
//! configuration:
//!
//! ```rust
//! use seqwise::curried::{self, Transform};
//! use seqwise::ops;
//!
//! let first_three = curried::take(3);
//! let direct: Vec<i32> = ops::take(vec![1, 2, 3, 4], 3).collect();
//! let applied: Vec<i32> = first_three.apply_to(vec![1, 2, 3, 4]).collect();
//! assert_eq!(direct, applied);
//!
//! // Transformers can be applied again.
//! assert_eq!(first_three.apply_to(10..).collect::<Vec<_>>(), vec![10, 11, 12]);
//! ```
//!
//! Because a transformer may be applied many times, it hands each application
//! a clone of its configuration. Callbacks passed to the constructors in this
//! module must therefore be `Clone`, which closures are whenever everything
//! they capture is.
//!
//! # Composition
//!
//! - [`pipe!`](crate::pipe!) applies transformers to a sequence left to right.
//! - [`compose!`](crate::compose!) builds a single transformer right to left.
//! - [`chain`] is the two-transformer building block behind both.
//! - [`from_fn`] lifts any function of a sequence into a transformer.
//!
//! ```rust
//! use seqwise::{compose, curried, pipe};
//!
//! let evens = curried::filter(|item: &i32, _: usize| item % 2 == 0);
//! let squares = curried::map(|item: i32, _: usize| item * item);
//!
//! let piped: Vec<i32> = pipe!(1..=6, evens, squares).collect();
//! assert_eq!(piped, vec![4, 16, 36]);
//!
//! let composed = compose!(curried::sum(), squares, evens);
//! assert_eq!(seqwise::curried::Transform::apply_to(&composed, 1..=6), 56.0);
//! ```
//!
//! # Laws
//!
//! - **Agreement**: `t.apply_to(s) == ops::f(s, config)` for every combinator.
//! - **Associativity**: `chain(chain(a, b), c)` and `chain(a, chain(b, c))`
//!   apply identically.
//! - **Identity**: `chain(identity(), t)` and `chain(t, identity())` apply
//!   like `t`.

mod adapters;
mod compose_macro;
mod consumers;
mod pipe_macro;
#[cfg(feature = "search")]
mod structural;

pub use adapters::{
    Chunk, Cycle, Enumerate, Filter, FilterNullish, Flat, FlatMap, Flatten, Map, Peekable, Pluck,
    Repeat, Scan, ScanFrom, Skip, SkipWhile, Take, TakeWhile, Tap, Until, Unique, UniqueBy,
    Windows, Zip, ZipShortest, chunk, cycle, enumerate, filter, filter_nullish, flat, flat_map,
    flatten, map, peekable, pluck, repeat, scan, scan_from, skip, skip_while, take, take_while,
    tap, until, unique, unique_by, windows, zip, zip_shortest,
};
pub use consumers::{
    Average, Count, Every, Find, FindIndex, First, Fold, GroupBy, GroupByKey, Includes, IsEmpty,
    Join, Last, Max, Min, Partition, Product, Reduce, SomeMatch, Sum, Unzip, average, count, every,
    find, find_index, first, fold, group_by, group_by_key, includes, is_empty, join, last, max,
    min, partition, product, reduce, some, sum, unzip,
};
#[cfg(feature = "search")]
pub use structural::{Search, search, search_with};

/// A reusable operation on sequences of type `S`.
///
/// Implemented by every transformer in this module, by [`Chain`] and by
/// [`FromFn`]. Applying borrows the transformer, so one value can be applied
/// to any number of sources.
pub trait Transform<S> {
    /// What applying to `S` produces: a lazy adapter or a scalar.
    type Output;

    /// Applies this transformer to `source`.
    fn apply_to(&self, source: S) -> Self::Output;
}

impl<S, T: Transform<S> + ?Sized> Transform<S> for &T {
    type Output = T::Output;

    fn apply_to(&self, source: S) -> Self::Output {
        (**self).apply_to(source)
    }
}

/// Two transformers applied one after the other. Created by [`chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Applies `first`, then `second` to its output.
///
/// ```rust
/// use seqwise::curried::{self, Transform, chain};
///
/// let skip_then_take = chain(curried::skip(2), curried::take(2));
/// assert_eq!(skip_then_take.apply_to(0..10).collect::<Vec<_>>(), vec![2, 3]);
/// ```
pub const fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain { first, second }
}

impl<S, A, B> Transform<S> for Chain<A, B>
where
    A: Transform<S>,
    B: Transform<A::Output>,
{
    type Output = B::Output;

    fn apply_to(&self, source: S) -> B::Output {
        self.second.apply_to(self.first.apply_to(source))
    }
}

/// A plain function lifted into a transformer. Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct FromFn<F> {
    function: F,
}

/// Lifts `function` into a transformer, so hand-written steps can take part
/// in [`chain`], [`pipe!`](crate::pipe!) and [`compose!`](crate::compose!).
///
/// ```rust
/// use seqwise::curried::{self, from_fn};
/// use seqwise::pipe;
///
/// let reversed = from_fn(|source: Vec<i32>| source.into_iter().rev());
/// let result: Vec<i32> = pipe!(vec![1, 2, 3], reversed, curried::take(2)).collect();
/// assert_eq!(result, vec![3, 2]);
/// ```
pub const fn from_fn<F>(function: F) -> FromFn<F> {
    FromFn { function }
}

impl<S, F, R> Transform<S> for FromFn<F>
where
    F: Fn(S) -> R,
{
    type Output = R;

    fn apply_to(&self, source: S) -> R {
        (self.function)(source)
    }
}

/// The transformer that hands its source back unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use = "transformers do nothing until applied"]
pub struct Identity;

/// Returns the [`Identity`] transformer.
pub const fn identity() -> Identity {
    Identity
}

impl<S> Transform<S> for Identity {
    type Output = S;

    fn apply_to(&self, source: S) -> S {
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    #[test]
    fn test_transformer_is_reusable() {
        let doubled = map(|item: i32, _: usize| item * 2);
        assert_eq!(doubled.apply_to(vec![1, 2]).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(doubled.apply_to(vec![5]).collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_chain_is_associative() {
        let left = chain(chain(skip(1), take(3)), sum());
        let right = chain(skip(1), chain(take(3), sum()));
        assert_eq!(left.apply_to(1..=10), right.apply_to(1..=10));
    }

    #[test]
    fn test_identity_is_neutral() {
        let plain = take(2);
        let before = chain(identity(), plain);
        let after = chain(plain, identity());
        let expected: Vec<i32> = plain.apply_to(vec![7, 8, 9]).collect();
        assert_eq!(before.apply_to(vec![7, 8, 9]).collect::<Vec<_>>(), expected);
        assert_eq!(after.apply_to(vec![7, 8, 9]).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_references_apply_too() {
        let transformer = count();
        let borrowed = &transformer;
        assert_eq!(borrowed.apply_to(0..4), ops::count(0..4));
    }
}
