//! # seqwise
//!
//! Lazy, composable sequence combinators.
//!
//! ## Overview
//!
//! Every combinator is available in three forms that agree on results:
//!
//! - **Direct**: [`ops`] functions take the sequence first, such as
//!   `ops::map(source, f)`.
//! - **Point-free**: [`curried`] constructors take only the configuration
//!   and return a reusable transformer, composed with [`pipe!`] and
//!   [`compose!`].
//! - **Fluent**: [`fluent::Seq`] wraps a sequence and exposes every
//!   combinator as a method.
//!
//! On top of these sit a one-item lookahead layer ([`peekable`]), a dynamic
//! [`value::Value`] for heterogeneous records, and a cycle-safe depth-first
//! [`search`] over nested containers.
//!
//! Adapters are pull-based: nothing runs until a consumer asks for the next
//! item, so unbounded sources such as [`ops::generate`] or [`ops::cycle`] are
//! fine as long as something downstream bounds them.
//!
//! ## Feature Flags
//!
//! - `fluent`: the method-chaining wrapper (default)
//! - `curried`: point-free transformers, `pipe!` and `compose!` (default)
//! - `search`: `Value` and structural search (default)
//! - `async`: fluent constructors from streams and futures
//! - `serde`: `Serialize`/`Deserialize` for `Value`, and search over
//!   `serde_json::Value`
//! - `tracing`: debug and trace events from the combinators
//! - `fxhash`: faster hashing for `unique` and `group_by`
//! - `full`: all of the above
//!
//! ## Example
//!
//! ```rust
//! use seqwise::prelude::*;
//!
//! let direct: Vec<i32> = ops::take(ops::map(1.., |item, _| item * item), 3).collect();
//!
//! let point_free: Vec<i32> = pipe!(1.., curried::map(|item: i32, _: usize| item * item), curried::take(3))
//!     .collect();
//!
//! let fluent: Vec<i32> = seq(1..).map(|item, _| item * item).take(3).collect();
//!
//! assert_eq!(direct, vec![1, 4, 9]);
//! assert_eq!(point_free, direct);
//! assert_eq!(fluent, direct);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod logging;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use seqwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, SeqError};
    pub use crate::ops::{self, AsNumber, Groups, Nested, Pluck, ZipPolicy};
    pub use crate::peekable::{Peekable, SupportsPeek, peekable};

    #[cfg(feature = "curried")]
    pub use crate::curried::{self, Transform};
    #[cfg(feature = "curried")]
    pub use crate::{compose, pipe};

    #[cfg(feature = "fluent")]
    pub use crate::fluent::{PeekableSeq, Seq, seq};

    #[cfg(feature = "search")]
    pub use crate::search::{PathKey, SearchOptions, Walk};
    #[cfg(feature = "search")]
    pub use crate::value::{Array, Object, Value};
}

pub mod error;
pub mod ops;
pub mod peekable;

#[cfg(feature = "curried")]
pub mod curried;

#[cfg(feature = "fluent")]
pub mod fluent;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "search")]
pub mod value;

pub use error::{Result, SeqError};

#[cfg(feature = "fluent")]
pub use fluent::seq;
