//! Integration tests for structural search and dynamic values.

#![cfg(feature = "search")]

use rstest::rstest;
use seqwise::SeqError;
use seqwise::search::{PathKey, SearchOptions, entries, search, search_with};
use seqwise::value::{Array, Object, Value};

fn paths_of<I>(hits: I) -> Vec<String>
where
    I: Iterator<Item = (Vec<PathKey>, Value)>,
{
    hits.map(|(path, _)| {
        path.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    })
    .collect()
}

// =============================================================================
// walk order
// =============================================================================

#[test]
fn test_nested_objects_in_pre_order() {
    let data = Value::object([
        ("a", Value::object([("b", 1)])),
        ("c", Value::object([("d", Value::object([("e", 2)]))])),
    ]);
    let everything = search(data, |_, _: &Value| true).map(paths_of);
    assert_eq!(
        everything,
        Ok(["", "a", "a.b", "c", "c.d", "c.d.e"].map(String::from).to_vec())
    );
}

#[test]
fn test_arrays_use_index_keys() {
    let data = Value::array([Value::array(["x"]), Value::from("y")]);
    let hits: Vec<(Vec<PathKey>, Value)> = search(data, |_, value: &Value| value.as_str().is_some())
        .map(Iterator::collect)
        .unwrap_or_default();
    assert_eq!(hits[0].0, vec![PathKey::Index(0), PathKey::Index(0)]);
    assert_eq!(hits[1].0, vec![1usize]);
    assert_eq!(hits[1].1, Value::from("y"));
}

#[test]
fn test_predicate_sees_path() {
    let data = Value::object([("keep", Value::object([("deep", 1)])), ("drop", Value::from(2))]);
    let under_keep = search(data, |path, _: &Value| path.first().is_some_and(|key| *key == "keep"))
        .map(paths_of);
    assert_eq!(under_keep, Ok(vec!["keep".to_string(), "keep.deep".to_string()]));
}

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::from(1), "number")]
#[case(Value::from("text"), "string")]
#[case(Value::from(false), "boolean")]
fn test_scalar_root_is_rejected(#[case] root: Value, #[case] found: &'static str) {
    let error = search(root, |_, _: &Value| true).err();
    assert_eq!(
        error,
        Some(SeqError::TypeMismatch {
            operation: "search",
            expected: "an array or an object",
            found,
        })
    );
}

#[test]
fn test_empty_container_yields_only_root_if_matched() {
    assert_eq!(search(Value::from(Array::new()), |_, _: &Value| false).map(Iterator::count), Ok(0));
    assert_eq!(search(Value::from(Object::new()), |_, _: &Value| true).map(Iterator::count), Ok(1));
}

// =============================================================================
// cycles and sharing
// =============================================================================

#[test]
fn test_self_reference_terminates() {
    let node = Object::new();
    node.insert("name", "loop");
    node.insert("me", node.clone());

    let hits = search(Value::from(node), |_, _: &Value| true).map(paths_of);
    assert_eq!(hits, Ok(vec![String::new(), "name".to_string()]));
}

#[test]
fn test_indirect_cycle_terminates() {
    let first = Object::new();
    let second = Object::new();
    first.insert("next", second.clone());
    second.insert("back", first.clone());
    second.insert("value", 7);

    let numbers = search(Value::from(first), |_, value: &Value| value.as_f64().is_some()).map(paths_of);
    assert_eq!(numbers, Ok(vec!["next.value".to_string()]));
}

#[test]
fn test_shared_subtree_is_visited_under_each_parent() {
    let shared = Value::object([("leaf", 1)]);
    let root = Value::object([("left", shared.clone()), ("right", shared)]);
    let leaves = search(root, |path, _: &Value| path.last().is_some_and(|key| *key == "leaf")).map(paths_of);
    assert_eq!(leaves, Ok(vec!["left.leaf".to_string(), "right.leaf".to_string()]));
}

#[test]
fn test_cyclic_value_formats_with_marker() {
    let list = Array::new();
    list.push(1);
    list.push(list.clone());
    assert_eq!(format!("{:?}", Value::from(list)), "[1, [Circular]]");
}

// =============================================================================
// options
// =============================================================================

#[test]
fn test_skip_after_yield_prunes_matched_subtree() {
    let data = Value::object([
        ("hit", Value::object([("inner", Object::new())])),
        ("miss", Value::from(0)),
    ]);
    let pruned = search_with(
        data.clone(),
        |path, value: &Value| !path.is_empty() && value.as_object().is_some(),
        SearchOptions::skip_after_yield(),
    )
    .map(paths_of);
    assert_eq!(pruned, Ok(vec!["hit".to_string()]));

    let full = search(data, |path, value: &Value| !path.is_empty() && value.as_object().is_some()).map(paths_of);
    assert_eq!(full, Ok(vec!["hit".to_string(), "hit.inner".to_string()]));
}

#[test]
fn test_search_is_lazy() {
    let wide = Value::array((0..1000).map(Value::from));
    let mut visited = 0;
    let first = search(wide, |_, value: &Value| {
        visited += 1;
        value.as_f64() == Some(3.0)
    })
    .ok()
    .and_then(|mut hits| hits.next());
    assert_eq!(first.map(|(path, _)| path), Some(vec![PathKey::Index(3)]));
    assert_eq!(visited, 5);
}

// =============================================================================
// entries
// =============================================================================

#[test]
fn test_entries_of_object_keep_insertion_order() {
    let record = Value::object([("z", 1), ("a", 2)]);
    let keys: Vec<PathKey> = entries(&record).map(|pairs| pairs.map(|(key, _)| key).collect()).unwrap_or_default();
    assert_eq!(keys, vec!["z", "a"]);
}

#[test]
fn test_entries_of_scalar_is_error() {
    assert!(matches!(
        entries(&Value::from(1)),
        Err(SeqError::TypeMismatch { operation: "entries", .. })
    ));
}

// =============================================================================
// other surfaces
// =============================================================================

#[cfg(feature = "curried")]
#[test]
fn test_point_free_search_is_reusable() {
    use seqwise::curried::{self, Transform};

    let numbers = curried::search(|_: &[PathKey], value: &Value| value.as_f64().is_some());
    let first = Value::object([("a", 1)]);
    let second = Value::array([1, 2]);
    assert_eq!(numbers.apply_to(first).map(Iterator::count), Ok(1));
    assert_eq!(numbers.apply_to(second).map(Iterator::count), Ok(2));
}

#[cfg(feature = "fluent")]
#[test]
fn test_fluent_search_chains() {
    use seqwise::fluent::Seq;

    let data = Value::object([
        ("a", Value::from(1)),
        ("b", Value::array([2, 3])),
        ("c", Value::from("skip")),
    ]);
    let total = Seq::search(data, |_: &[PathKey], value: &Value| value.as_f64().is_some())
        .map(|hits| hits.map(|(_, value), _| value).sum())
        .unwrap_or_default();
    assert!((total - 6.0).abs() < f64::EPSILON);
}
