//! Scenario tests for the direct-form combinators.
//!
//! Each test walks one concrete input through a combinator and checks the
//! exact output, including the edge cases at empty input and zero sizes.

use std::cell::Cell;
use std::collections::HashMap;

use rstest::rstest;
use seqwise::SeqError;
use seqwise::ops::{self, ZipPolicy};

// =============================================================================
// producers
// =============================================================================

#[rstest]
#[case(5, 1, 1, vec![1, 2, 3, 4, 5])]
#[case(1, 5, 1, vec![5, 4, 3, 2, 1])]
#[case(10, 0, 3, vec![0, 3, 6, 9])]
#[case(0, 10, -4, vec![10, 6, 2])]
#[case(7, 7, 1, vec![7])]
#[case(9, 2, 0, vec![2])]
fn test_range(#[case] stop: i32, #[case] start: i32, #[case] step: i32, #[case] expected: Vec<i32>) {
    assert_eq!(ops::range(stop, start, step).collect::<Vec<_>>(), expected);
}

#[test]
fn test_range_to_counts_from_zero() {
    assert_eq!(ops::range_to(3u8).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn test_float_range_includes_stop() {
    let steps: Vec<f64> = ops::range(1.0, 0.0, 0.25).collect();
    assert_eq!(steps, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_unsigned_range_does_not_overflow() {
    let tail: Vec<u8> = ops::range(255u8, 250, 2).collect();
    assert_eq!(tail, vec![250, 252, 254]);
}

#[test]
fn test_generate_bounded_by_take_while() {
    let powers: Vec<u32> = ops::take_while(ops::generate(|index| 2u32.pow(index as u32)), |item, _| *item < 100).collect();
    assert_eq!(powers, vec![1, 2, 4, 8, 16, 32, 64]);
}

#[test]
fn test_cycle_replays_source() {
    let looped: Vec<char> = ops::take(ops::cycle("ab".chars()), 5).collect();
    assert_eq!(looped, vec!['a', 'b', 'a', 'b', 'a']);
}

#[test]
fn test_cycle_of_empty_source_ends() {
    assert_eq!(ops::cycle(Vec::<i32>::new()).next(), None);
}

#[rstest]
#[case(0, vec![])]
#[case(1, vec![1, 2])]
#[case(3, vec![1, 2, 1, 2, 1, 2])]
fn test_repeat(#[case] times: usize, #[case] expected: Vec<i32>) {
    assert_eq!(ops::repeat(vec![1, 2], times).collect::<Vec<_>>(), expected);
}

#[test]
fn test_repeat_zero_never_touches_source() {
    let pulled = Cell::new(false);
    let source = ops::generate(|index| {
        pulled.set(true);
        index
    });
    assert_eq!(ops::repeat(source, 0).next(), None);
    assert!(!pulled.get());
}

// =============================================================================
// bounds
// =============================================================================

#[test]
fn test_take_zero_pulls_nothing() {
    let pulled = Cell::new(0);
    let source = ops::generate(|index| {
        pulled.set(pulled.get() + 1);
        index
    });
    assert_eq!(ops::take(source, 0).count(), 0);
    assert_eq!(pulled.get(), 0);
}

#[test]
fn test_skip_past_end_is_empty() {
    assert_eq!(ops::skip(vec![1, 2], 5).count(), 0);
}

#[test]
fn test_skip_while_stops_testing_after_first_failure() {
    let calls = Cell::new(0);
    let rest: Vec<i32> = ops::skip_while(vec![1, 2, 5, 1, 2], |item, _| {
        calls.set(calls.get() + 1);
        *item < 3
    })
    .collect();
    assert_eq!(rest, vec![5, 1, 2]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_take_while_does_not_yield_failing_item() {
    let head: Vec<i32> = ops::take_while(vec![2, 4, 5, 6], |item, _| item % 2 == 0).collect();
    assert_eq!(head, vec![2, 4]);
}

#[test]
fn test_until_uses_index() {
    let head: Vec<char> = ops::until("abcdef".chars(), |_, index| index == 3).collect();
    assert_eq!(head, vec!['a', 'b', 'c']);
}

// =============================================================================
// windows, chunks and scans
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3, 4, 5], 2, vec![vec![1, 2], vec![3, 4], vec![5]])]
#[case(vec![1, 2, 3], 3, vec![vec![1, 2, 3]])]
#[case(vec![1, 2], 5, vec![vec![1, 2]])]
#[case(vec![], 2, vec![])]
#[case(vec![1, 2], 0, vec![])]
fn test_chunk(#[case] source: Vec<i32>, #[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
    assert_eq!(ops::chunk(source, size).collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(vec![1, 2, 3, 4], 3, vec![vec![1, 2, 3], vec![2, 3, 4]])]
#[case(vec![1, 2], 3, vec![])]
#[case(vec![1, 2], 0, vec![])]
#[case(vec![7], 1, vec![vec![7]])]
fn test_windows(#[case] source: Vec<i32>, #[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
    assert_eq!(ops::windows(source, size).collect::<Vec<_>>(), expected);
}

#[test]
fn test_scan_without_seed_emits_first_item() {
    let running: Vec<i32> = ops::scan(vec![5, 1, 2], |max, item, _| max.max(item)).collect();
    assert_eq!(running, vec![5, 5, 5]);
}

#[test]
fn test_scan_indices_start_at_one() {
    let mut indices = Vec::new();
    let _running: Vec<i32> = ops::scan(vec![1, 2, 3], |sum, item, index| {
        indices.push(index);
        sum + item
    })
    .collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_scan_from_changes_type() {
    let lengths: Vec<usize> = ops::scan_from(vec!["ab", "c", "def"], 0usize, |total, word, _| total + word.len()).collect();
    assert_eq!(lengths, vec![2, 3, 6]);
}

// =============================================================================
// mapping and flattening
// =============================================================================

#[test]
fn test_tap_observes_without_changing() {
    let mut seen = Vec::new();
    let passed: Vec<i32> = ops::tap(vec![3, 4], |item, index| seen.push((*item, index))).collect();
    assert_eq!(passed, vec![3, 4]);
    assert_eq!(seen, vec![(3, 0), (4, 1)]);
}

#[test]
fn test_flat_map_with_index() {
    let expanded: Vec<i32> = ops::flat_map(vec![10, 20], |item, index| vec![item; index + 1]).collect();
    assert_eq!(expanded, vec![10, 20, 20]);
}

#[test]
fn test_flatten_skips_empty_inner_sequences() {
    let flat: Vec<i32> = ops::flatten(vec![vec![], vec![1], vec![], vec![2, 3]]).collect();
    assert_eq!(flat, vec![1, 2, 3]);
}

#[test]
fn test_filter_nullish() {
    let present: Vec<&str> = ops::filter_nullish(vec![Some("a"), None, Some("b")]).collect();
    assert_eq!(present, vec!["a", "b"]);
}

#[test]
fn test_pluck_from_maps() {
    let rows = vec![
        HashMap::from([("id".to_string(), 1)]),
        HashMap::from([("name".to_string(), 2)]),
    ];
    let ids: Vec<Option<i32>> = ops::pluck(&rows, "id").collect();
    assert_eq!(ids, vec![Some(1), None]);
}

#[test]
fn test_unique_by_keeps_first_of_each_key() {
    let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
    let firsts: Vec<&str> = ops::unique_by(words, |word, _| word.chars().next()).collect();
    assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
}

// =============================================================================
// zip
// =============================================================================

#[test]
fn test_zip_longest_pads_with_none() {
    let rows: Vec<Vec<Option<char>>> = ops::zip(vec!["ab".chars(), "xyz".chars()], ZipPolicy::Longest).collect();
    assert_eq!(
        rows,
        vec![
            vec![Some('a'), Some('x')],
            vec![Some('b'), Some('y')],
            vec![None, Some('z')],
        ]
    );
}

#[test]
fn test_zip_of_no_sources_is_empty() {
    assert_eq!(ops::zip(Vec::<Vec<i32>>::new(), ZipPolicy::Longest).count(), 0);
}

#[test]
fn test_zip_policy_from_flag() {
    assert_eq!(ZipPolicy::from(true), ZipPolicy::Shortest);
    assert_eq!(ZipPolicy::from(false), ZipPolicy::Longest);
}

#[test]
fn test_unzip_uses_first_row_width() {
    let columns = ops::unzip(vec![vec![1, 2], vec![3, 4, 5], vec![6]]);
    assert_eq!(columns, vec![vec![1, 3, 6], vec![2, 4]]);
}

// =============================================================================
// consumers
// =============================================================================

#[test]
fn test_reduce_of_empty_is_error() {
    assert_eq!(ops::reduce(Vec::<i32>::new(), |left, right, _| left + right), Err(SeqError::EmptyReduce));
}

#[test]
fn test_reduce_without_seed() {
    assert_eq!(ops::reduce(vec![1, 2, 3], |left, right, _| left * 10 + right), Ok(123));
}

#[test]
fn test_fold_passes_zero_based_index() {
    let indices = ops::fold(vec!['a', 'b'], Vec::new(), |mut seen, _, index| {
        seen.push(index);
        seen
    });
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_group_by_keeps_first_seen_key_order() {
    let groups = ops::group_by(vec!["pear", "fig", "plum", "kiwi"], |word, _| word.len());
    let layout: Vec<(usize, Vec<&str>)> = groups.into_vec();
    assert_eq!(layout, vec![(4, vec!["pear", "plum", "kiwi"]), (3, vec!["fig"])]);
}

#[test]
fn test_partition() {
    let (small, large) = ops::partition(vec![5, 12, 3, 40], |item, _| *item < 10);
    assert_eq!(small, vec![5, 3]);
    assert_eq!(large, vec![12, 40]);
}

#[rstest]
#[case(vec![], 0.0)]
#[case(vec![1, 2, 3], 6.0)]
fn test_sum(#[case] items: Vec<i32>, #[case] expected: f64) {
    assert!((ops::sum(items) - expected).abs() < f64::EPSILON);
}

#[test]
fn test_product_of_empty_is_one() {
    assert!((ops::product(Vec::<u8>::new()) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_average_of_empty_is_nan() {
    assert!(ops::average(Vec::<f64>::new()).is_nan());
}

#[test]
fn test_average_counts_every_item() {
    assert!((ops::average(vec!["4", "x", "2"]) - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_min_and_max_skip_nan() {
    assert_eq!(ops::min(vec![2.0, f64::NAN, 1.0]), Some(1.0));
    assert_eq!(ops::max(vec![f64::NAN, 2.0, 1.0]), Some(2.0));
    assert_eq!(ops::max(Vec::<i32>::new()), None);
}

#[test]
fn test_short_circuit_consumers_stop_pulling() {
    let pulled = Cell::new(0);
    let source = || {
        ops::generate(|index| {
            pulled.set(pulled.get() + 1);
            index
        })
    };
    assert_eq!(ops::find(source(), |item, _| *item == 3), Some(3));
    assert_eq!(pulled.get(), 4);
    assert!(ops::some(source(), |item, _| *item > 1));
    assert!(!ops::every(source(), |item, _| *item < 2));
    assert_eq!(ops::find_index(source(), |item, _| item * item > 10), Some(4));
}

#[test]
fn test_join() {
    assert_eq!(ops::join(vec!['a', 'b', 'c'], "-"), "a-b-c");
}

#[test]
fn test_first_last_count_is_empty() {
    assert_eq!(ops::first(vec![4, 5]), Some(4));
    assert_eq!(ops::last(vec![4, 5]), Some(5));
    assert_eq!(ops::count(vec![4, 5]), 2);
    assert!(ops::is_empty(Vec::<i32>::new()));
    assert!(!ops::is_empty(vec![0]));
}

// =============================================================================
// dynamic values
// =============================================================================

#[cfg(feature = "search")]
mod values {
    use super::*;
    use seqwise::value::Value;

    #[test]
    fn test_pluck_values() {
        let people = vec![
            Value::object([("name", Value::from("ada")), ("age", Value::from(36))]),
            Value::object([("name", "bob")]),
        ];
        let ages: Vec<Option<Value>> = ops::pluck(&people, "age").collect();
        assert_eq!(ages, vec![Some(Value::from(36)), None]);
    }

    #[test]
    fn test_flat_respects_depth() {
        let nested = vec![
            Value::from(1),
            Value::array([Value::from(2), Value::array([3, 4])]),
        ];
        let one_level: Vec<Value> = ops::flat(nested.clone(), 1).collect();
        assert_eq!(
            one_level,
            vec![Value::from(1), Value::from(2), Value::array([3, 4])]
        );
        let all: Vec<Value> = ops::flat(nested.clone(), usize::MAX).collect();
        assert_eq!(all, vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
        assert_eq!(ops::flat(nested.clone(), 0).collect::<Vec<_>>(), nested);
    }

    #[test]
    fn test_sum_of_values_parses_strings() {
        let mixed = vec![Value::from("2"), Value::from(true), Value::Null, Value::from(3.5)];
        assert!((ops::sum(mixed) - 6.5).abs() < f64::EPSILON);
    }
}
