//! Error types for sequence operations.
//!
//! Almost every combinator in this crate is infallible: callbacks supplied by
//! the caller that panic simply unwind through whatever code is pulling from
//! the pipeline. The few operations that can reject their input report it
//! through [`SeqError`].

/// Errors raised by sequence operations.
///
/// # Examples
///
/// ```rust
/// use seqwise::{SeqError, ops};
///
/// let result = ops::reduce(Vec::<i32>::new(), |accumulator, item, _| accumulator + item);
/// assert_eq!(result, Err(SeqError::EmptyReduce));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// `reduce` was called without a seed on a sequence that produced no items.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduce,

    /// A container-only operation received a value of the wrong shape.
    #[error("{operation}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The operation that rejected its input.
        operation: &'static str,
        /// What the operation accepts.
        expected: &'static str,
        /// What it was given.
        found: &'static str,
    },
}

impl SeqError {
    /// Builds a [`SeqError::TypeMismatch`] for a container-only operation.
    pub(crate) const fn not_a_container(operation: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            operation,
            expected: "an array or an object",
            found,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = SeqError> = std::result::Result<T, E>;
