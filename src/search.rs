//! Lazy structural search over nested values.
//!
//! [`search`] walks a tree of containers depth-first and yields every
//! `(path, value)` pair accepted by a predicate. The walk is driven by the
//! consumer: nothing is visited until the first pull, and abandoning the
//! iterator abandons the walk.
//!
//! Anything implementing [`Walk`] can be searched; [`Value`](crate::value::Value)
//! does, and with the `serde` feature so does `&serde_json::Value`.
//!
//! # Cycles
//!
//! Containers that report an [`identity`](Walk::identity) are tracked while
//! they are on the current path. A child that is one of its own ancestors is
//! skipped: it is neither tested nor descended into. Identities are released
//! on backtrack, so a container shared by two branches is visited under
//! both.
//!
//! # Examples
//!
//! ```rust
//! use seqwise::search::{PathKey, search};
//! use seqwise::value::Value;
//!
//! let data = Value::object([
//!     ("a", Value::object([("b", 1)])),
//!     ("c", Value::object([("d", Value::object([("e", 2)]))])),
//! ]);
//!
//! let numbers: Vec<(Vec<PathKey>, Value)> =
//!     search(data, |_, value: &Value| value.as_f64().is_some())?.collect();
//! assert_eq!(numbers.len(), 2);
//! assert_eq!(numbers[0].0, vec!["a", "b"]);
//! assert_eq!(numbers[1].0, vec!["c", "d", "e"]);
//! # Ok::<(), seqwise::SeqError>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Result, SeqError};
use crate::ops::SeenSet;
use crate::value::Value;

// =============================================================================
// PathKey
// =============================================================================

/// One step of a search path: an array index or an object key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathKey {
    /// Position within an array.
    Index(usize),
    /// Key within an object.
    Key(String),
}

impl fmt::Display for PathKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Key(key) => formatter.write_str(key),
        }
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl PartialEq<&str> for PathKey {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Key(key) if key == other)
    }
}

impl PartialEq<usize> for PathKey {
    fn eq(&self, other: &usize) -> bool {
        matches!(self, Self::Index(index) if index == other)
    }
}

// =============================================================================
// Walk
// =============================================================================

/// A node of a searchable tree.
///
/// Nodes are cloned into search results and child lists, so `Clone` should
/// be cheap: a handle, a reference or a small scalar.
pub trait Walk: Clone {
    /// The keyed children of a container, in walk order; `None` for scalars.
    ///
    /// Arrays report [`PathKey::Index`] keys in index order and objects
    /// report [`PathKey::Key`] keys for their own entries.
    fn children(&self) -> Option<Vec<(PathKey, Self)>>;

    /// A number identifying this container, used for cycle detection.
    ///
    /// Trees that cannot contain cycles may leave this as `None`.
    fn identity(&self) -> Option<usize> {
        None
    }

    /// Whether this node has children to walk.
    fn is_container(&self) -> bool {
        self.children().is_some()
    }

    /// The name of this node's kind, as used in error messages.
    fn type_name(&self) -> &'static str;
}

impl Walk for Value {
    fn children(&self) -> Option<Vec<(PathKey, Self)>> {
        match self {
            Self::Array(array) => Some(
                array
                    .borrow()
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (PathKey::Index(index), item.clone()))
                    .collect(),
            ),
            Self::Object(object) => Some(
                object
                    .borrow()
                    .iter()
                    .map(|(key, value)| (PathKey::Key(key.clone()), value.clone()))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn identity(&self) -> Option<usize> {
        Self::identity(self)
    }

    fn is_container(&self) -> bool {
        Self::is_container(self)
    }

    fn type_name(&self) -> &'static str {
        Self::type_name(self)
    }
}

#[cfg(feature = "serde")]
impl Walk for &serde_json::Value {
    fn children(&self) -> Option<Vec<(PathKey, Self)>> {
        match *self {
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (PathKey::Index(index), item))
                    .collect(),
            ),
            serde_json::Value::Object(entries) => Some(
                entries
                    .iter()
                    .map(|(key, value)| (PathKey::Key(key.clone()), value))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn is_container(&self) -> bool {
        self.is_array() || self.is_object()
    }

    fn type_name(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

/// The keyed children of a container.
///
/// # Errors
///
/// Returns [`SeqError::TypeMismatch`](crate::SeqError::TypeMismatch) when
/// `value` is a scalar.
pub fn entries<V: Walk>(value: &V) -> Result<std::vec::IntoIter<(PathKey, V)>> {
    value
        .children()
        .map(Vec::into_iter)
        .ok_or_else(|| SeqError::not_a_container("entries", value.type_name()))
}

// =============================================================================
// Search
// =============================================================================

/// How a [`search`] treats matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchOptions {
    /// Do not descend into a container that the predicate accepted.
    pub skip_after_yield: bool,
}

impl SearchOptions {
    /// Options with `skip_after_yield` set.
    pub const fn skip_after_yield() -> Self {
        Self {
            skip_after_yield: true,
        }
    }
}

struct Frame<V> {
    identity: Option<usize>,
    keyed: bool,
    children: std::vec::IntoIter<(PathKey, V)>,
}

/// Lazy iterator returned by [`search`] and [`search_with`].
#[must_use = "searches are lazy and do nothing unless consumed"]
pub struct Search<V, P> {
    predicate: P,
    options: SearchOptions,
    root: Option<V>,
    path: Vec<PathKey>,
    stack: Vec<Frame<V>>,
    on_path: SeenSet<usize>,
}

/// Searches `root` for every `(path, value)` accepted by `predicate`.
///
/// The root itself is tested first, with an empty path. Children follow in
/// depth-first pre-order: array items by index, object entries in insertion
/// order.
///
/// # Errors
///
/// Returns [`SeqError::TypeMismatch`](crate::SeqError::TypeMismatch) when
/// `root` is a scalar.
pub fn search<V, P>(root: V, predicate: P) -> Result<Search<V, P>>
where
    V: Walk,
    P: FnMut(&[PathKey], &V) -> bool,
{
    search_with(root, predicate, SearchOptions::default())
}

/// [`search`] with explicit [`SearchOptions`].
///
/// ```rust
/// use seqwise::search::{SearchOptions, search_with};
/// use seqwise::value::Value;
///
/// let tree = Value::array([Value::array([1, 2]), Value::from(3)]);
/// let containers = search_with(
///     tree,
///     |path, value: &Value| !path.is_empty() && value.is_container(),
///     SearchOptions::skip_after_yield(),
/// )?;
/// assert_eq!(containers.count(), 1);
/// # Ok::<(), seqwise::SeqError>(())
/// ```
///
/// # Errors
///
/// Returns [`SeqError::TypeMismatch`](crate::SeqError::TypeMismatch) when
/// `root` is a scalar.
pub fn search_with<V, P>(root: V, predicate: P, options: SearchOptions) -> Result<Search<V, P>>
where
    V: Walk,
    P: FnMut(&[PathKey], &V) -> bool,
{
    if !root.is_container() {
        return Err(SeqError::not_a_container("search", root.type_name()));
    }
    Ok(Search {
        predicate,
        options,
        root: Some(root),
        path: Vec::new(),
        stack: Vec::new(),
        on_path: SeenSet::default(),
    })
}

impl<V, P> Search<V, P>
where
    V: Walk,
    P: FnMut(&[PathKey], &V) -> bool,
{
    fn backtrack(&mut self) {
        if let Some(frame) = self.stack.pop() {
            if let Some(identity) = frame.identity {
                self.on_path.remove(&identity);
            }
            if frame.keyed {
                self.path.pop();
            }
        }
    }

    /// Pushes a frame for `value` if it is a container to descend into.
    /// Returns whether `value` now owns the last path segment.
    fn descend(&mut self, value: &V, keyed: bool) -> bool {
        let Some(children) = value.children() else {
            return false;
        };
        let identity = value.identity();
        if let Some(identity) = identity {
            self.on_path.insert(identity);
        }
        self.stack.push(Frame {
            identity,
            keyed,
            children: children.into_iter(),
        });
        true
    }
}

impl<V, P> Iterator for Search<V, P>
where
    V: Walk,
    P: FnMut(&[PathKey], &V) -> bool,
{
    type Item = (Vec<PathKey>, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (value, keyed) = if let Some(root) = self.root.take() {
                (root, false)
            } else {
                let frame = self.stack.last_mut()?;
                let Some((key, child)) = frame.children.next() else {
                    self.backtrack();
                    continue;
                };
                if child.identity().is_some_and(|identity| self.on_path.contains(&identity)) {
                    trace!(depth = self.path.len() + 1, "skipped container already on the search path");
                    continue;
                }
                self.path.push(key);
                (child, true)
            };

            let matched = (self.predicate)(&self.path, &value);
            let found = matched.then(|| (self.path.clone(), value.clone()));

            let descended = !(matched && self.options.skip_after_yield) && self.descend(&value, keyed);
            if keyed && !descended {
                self.path.pop();
            }
            if found.is_some() {
                return found;
            }
        }
    }
}

impl<V, P> FusedIterator for Search<V, P>
where
    V: Walk,
    P: FnMut(&[PathKey], &V) -> bool,
{
}

impl<V, P> fmt::Debug for Search<V, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Search")
            .field("options", &self.options)
            .field("path", &self.path)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqError;
    use crate::value::{Array, Object};

    fn numbers(root: Value) -> Vec<(Vec<PathKey>, Value)> {
        search(root, |_, value: &Value| value.as_f64().is_some())
            .unwrap()
            .collect()
    }

    #[test]
    fn test_arrays_walk_by_index() {
        let root = Value::array([
            Value::from(1),
            Value::array([2, 3]),
            Value::array([Value::from(4), Value::array([5, 6])]),
        ]);
        let found = search(root, |_, value: &Value| *value == Value::from(5))
            .unwrap()
            .map(|(path, _)| path)
            .collect::<Vec<_>>();
        assert_eq!(found, vec![vec![PathKey::Index(2), PathKey::Index(1), PathKey::Index(0)]]);
    }

    #[test]
    fn test_root_is_tested_with_empty_path() {
        let root = Value::object([("a", 1)]);
        let paths: Vec<Vec<PathKey>> = search(root, |_, _: &Value| true)
            .unwrap()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(paths, vec![vec![], vec![PathKey::from("a")]]);
    }

    #[test]
    fn test_scalar_root_is_a_type_mismatch() {
        let error = search(Value::from(3), |_, _: &Value| true).unwrap_err();
        assert_eq!(
            error,
            SeqError::TypeMismatch {
                operation: "search",
                expected: "an array or an object",
                found: "number",
            }
        );
    }

    #[test]
    fn test_self_reference_terminates() {
        let object = Object::new();
        object.insert("a", 1);
        object.insert("self", object.clone());
        let found = numbers(Value::from(object));
        assert_eq!(found, vec![(vec![PathKey::from("a")], Value::from(1))]);
    }

    #[test]
    fn test_shared_subtree_is_visited_per_path() {
        let shared = Value::array([7]);
        let root = Value::object([("left", shared.clone()), ("right", shared)]);
        let paths: Vec<String> = numbers(root)
            .into_iter()
            .map(|(path, _)| crate::ops::join(path, "."))
            .collect();
        assert_eq!(paths, vec!["left.0", "right.0"]);
    }

    #[test]
    fn test_indirect_cycle_is_cut_at_the_repeat() {
        let outer = Array::new();
        let inner = Array::new();
        inner.push(2);
        inner.push(outer.clone());
        outer.push(1);
        outer.push(inner);
        let found: Vec<f64> = numbers(Value::from(outer))
            .into_iter()
            .filter_map(|(_, value)| value.as_f64())
            .collect();
        assert_eq!(found, vec![1.0, 2.0]);
    }

    #[test]
    fn test_skip_after_yield_prunes_matches() {
        let root = Value::object([
            ("hit", Value::object([("inner", Object::new())])),
            ("miss", Value::from(0)),
        ]);
        let options = SearchOptions::skip_after_yield();
        let found: Vec<Vec<PathKey>> = search_with(
            root,
            |path, value: &Value| !path.is_empty() && value.is_container(),
            options,
        )
        .unwrap()
        .map(|(path, _)| path)
        .collect();
        assert_eq!(found, vec![vec![PathKey::from("hit")]]);
    }

    #[test]
    fn test_entries_of_scalar_fails() {
        assert!(entries(&Value::Null).is_err());
        let keys: Vec<PathKey> = entries(&Value::object([("x", 1), ("y", 2)]))
            .unwrap()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["x", "y"]);
    }
}
