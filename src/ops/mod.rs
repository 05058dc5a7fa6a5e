//! Direct-form combinators.
//!
//! Every function in this module takes its subject sequence as the first
//! argument and returns either a lazy adapter or a scalar. The point-free
//! counterparts live in [`crate::curried`].
//!
//! # The sequence contract
//!
//! A sequence is anything implementing [`IntoIterator`]; the [`Iterator`] it
//! produces is the cursor. Adapters are pull-based and single-pass: they never
//! pull more than one element ahead of what their own consumer asked for,
//! except for the operators documented as draining their source
//! ([`cycle`], [`repeat`], [`group_by`], [`group_by_key`], [`partition`],
//! [`unzip`] and the other scalar consumers).
//!
//! # Index-aware callbacks
//!
//! Callbacks receive `(item, index)`, where `index` is the zero-based
//! position of the item within the input of *that* combinator:
//!
//! ```rust
//! use seqwise::ops;
//!
//! let evens = ops::filter(10..20, |_, index| index % 2 == 0);
//! let labelled: Vec<String> = ops::map(evens, |item, index| format!("{index}:{item}")).collect();
//! assert_eq!(labelled, vec!["0:10", "1:12", "2:14", "3:16", "4:18"]);
//! ```
//!
//! # Laziness
//!
//! Nothing is pulled until the consumer asks, so unbounded sources are fine
//! as long as something bounds them:
//!
//! ```rust
//! use seqwise::ops;
//!
//! let squares: Vec<usize> = ops::take(ops::generate(|index| index * index), 5).collect();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16]);
//! ```

mod bound;
mod consume;
mod distinct;
mod number;
mod source;
mod transform;
mod window;
mod zip;

pub use bound::{Skip, SkipWhile, Take, TakeWhile, Until, skip, skip_while, take, take_while, until};
pub use consume::{
    Groups, count, every, find, find_index, first, fold, group_by, group_by_key, includes,
    is_empty, join, last, max, min, partition, reduce, some,
};
pub use distinct::{Unique, UniqueBy, unique, unique_by};
pub use number::{AsNumber, average, product, sum};
pub use source::{Cycle, Generate, Range, RangeValue, Repeat, cycle, generate, range, range_to, repeat};
pub use transform::{
    Enumerate, Filter, FilterNullish, Flat, FlatMap, Flatten, Map, Nested, Nesting, Pluck,
    Plucked, Tap, enumerate, filter, filter_nullish, flat, flat_map, flatten, map, pluck, tap,
};
pub use window::{Chunk, Scan, ScanFrom, Windows, chunk, scan, scan_from, windows};
pub use zip::{Zip, ZipPolicy, ZipShortest, unzip, zip, zip_shortest};

#[cfg(feature = "fxhash")]
pub(crate) type SeenSet<K> = rustc_hash::FxHashSet<K>;
#[cfg(not(feature = "fxhash"))]
pub(crate) type SeenSet<K> = std::collections::HashSet<K>;

#[cfg(feature = "fxhash")]
pub(crate) type KeyIndex<K> = rustc_hash::FxHashMap<K, usize>;
#[cfg(not(feature = "fxhash"))]
pub(crate) type KeyIndex<K> = std::collections::HashMap<K, usize>;
