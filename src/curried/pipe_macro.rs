//! The `pipe!` macro for left-to-right application of transformers.

/// Pipes a sequence through transformers from left to right.
///
/// `pipe!(source, a, b, c)` is `c.apply_to(b.apply_to(a.apply_to(source)))`.
/// Each transformer is borrowed, so it stays usable after the pipe.
///
/// # Syntax
///
/// - `pipe!(source)` - Returns `source` unchanged
/// - `pipe!(source, a)` - Returns `a.apply_to(source)`
/// - `pipe!(source, a, b, ...)` - Applies each transformer to the previous output
///
/// # Examples
///
/// ## Lazy pipeline
///
/// ```
/// use seqwise::{curried, ops, pipe};
///
/// let labels: Vec<String> = pipe!(
///     ops::generate(|index| index * 3),
///     curried::filter(|item: &usize, _: usize| item % 2 == 0),
///     curried::take(3),
///     curried::map(|item: usize, index: usize| format!("{index}={item}")),
/// )
/// .collect();
/// assert_eq!(labels, vec!["0=0", "1=6", "2=12"]);
/// ```
///
/// ## Ending in a scalar
///
/// ```
/// use seqwise::{curried, pipe};
///
/// let joined = pipe!(vec![3, 1, 3, 2], curried::unique(), curried::join("-"));
/// assert_eq!(joined, "3-1-2");
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use seqwise::curried::{self, Transform};
/// use seqwise::{compose, pipe};
///
/// let piped = pipe!(1..=10, curried::skip(2), curried::take(3), curried::sum());
/// let composed = compose!(curried::sum(), curried::take(3), curried::skip(2));
/// assert_eq!(piped, composed.apply_to(1..=10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($source:expr $(,)?) => {
        $source
    };

    ($source:expr, $transformer:expr $(,)?) => {
        $crate::curried::Transform::apply_to(&$transformer, $source)
    };

    ($source:expr, $transformer:expr, $($remaining:expr),+ $(,)?) => {
        $crate::pipe!(
            $crate::curried::Transform::apply_to(&$transformer, $source),
            $($remaining),+
        )
    };
}
