//! Point-free structural search.

use super::Transform;
use crate::error::Result;
use crate::search::{self, PathKey, SearchOptions, Walk};

/// Transformer returned by [`search`] and [`search_with`]. Applies to the
/// root of a tree.
#[derive(Debug, Clone, Copy)]
#[must_use = "transformers do nothing until applied"]
pub struct Search<P> {
    predicate: P,
    options: SearchOptions,
}

/// Point-free [`search::search`].
///
/// ```rust
/// use seqwise::curried::{self, Transform};
/// use seqwise::search::PathKey;
/// use seqwise::value::Value;
///
/// let find_strings = curried::search(|_: &[PathKey], value: &Value| value.as_str().is_some());
/// let person = Value::object([
///     ("name", Value::from("John")),
///     ("age", Value::from(30)),
///     ("city", Value::from("NYC")),
/// ]);
/// let hits: Vec<Value> = find_strings.apply_to(person)?.map(|(_, value)| value).collect();
/// assert_eq!(hits, vec![Value::from("John"), Value::from("NYC")]);
/// # Ok::<(), seqwise::SeqError>(())
/// ```
pub const fn search<P>(predicate: P) -> Search<P> {
    Search {
        predicate,
        options: SearchOptions {
            skip_after_yield: false,
        },
    }
}

/// Point-free [`search::search_with`].
pub const fn search_with<P>(predicate: P, options: SearchOptions) -> Search<P> {
    Search { predicate, options }
}

impl<V, P> Transform<V> for Search<P>
where
    V: Walk,
    P: FnMut(&[PathKey], &V) -> bool + Clone,
{
    type Output = Result<search::Search<V, P>>;

    fn apply_to(&self, root: V) -> Self::Output {
        search::search_with(root, self.predicate.clone(), self.options)
    }
}
