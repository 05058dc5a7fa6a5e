//! Integration tests for the fluent wrapper.

#![cfg(feature = "fluent")]

use std::cell::Cell;

use rstest::rstest;
use seqwise::fluent::{PeekableSeq, Seq};
use seqwise::ops::ZipPolicy;
use seqwise::peekable::SupportsPeek;
use seqwise::{SeqError, seq};

// =============================================================================
// construction
// =============================================================================

#[test]
fn test_new_and_seq_agree() {
    assert_eq!(Seq::new(vec![1, 2]).into_vec(), seq(vec![1, 2]).into_vec());
}

#[rstest]
#[case(4, 0, 2, vec![0, 2, 4])]
#[case(0, 3, 1, vec![3, 2, 1, 0])]
fn test_from_range(#[case] stop: i64, #[case] start: i64, #[case] step: i64, #[case] expected: Vec<i64>) {
    assert_eq!(Seq::from_range(stop, start, step).into_vec(), expected);
}

#[test]
fn test_zip_constructor() {
    let rows: Vec<Vec<Option<i32>>> = Seq::zip(vec![vec![1, 2, 3], vec![4]], ZipPolicy::Shortest).collect();
    assert_eq!(rows, vec![vec![Some(1), Some(4)]]);
}

#[test]
fn test_wrapping_is_lazy() {
    let pulled = Cell::new(0);
    let chain = Seq::generate(|index| {
        pulled.set(pulled.get() + 1);
        index
    })
    .filter(|item, _| item % 2 == 0)
    .map(|item, _| item + 1);
    assert_eq!(pulled.get(), 0);
    assert_eq!(chain.take(2).into_vec(), vec![1, 3]);
    assert_eq!(pulled.get(), 3);
}

// =============================================================================
// chaining
// =============================================================================

#[test]
fn test_index_is_local_to_each_step() {
    let labelled: Vec<String> = seq(vec!['a', 'b', 'c', 'd'])
        .skip(1)
        .map(|item, index| format!("{index}{item}"))
        .collect();
    assert_eq!(labelled, vec!["0b", "1c", "2d"]);
}

#[test]
fn test_long_chain() {
    let result = seq(1..=20)
        .filter(|item, _| item % 3 != 0)
        .windows(2)
        .map(|pair, _| pair[0] * pair[1])
        .until(|product, _| *product > 100)
        .scan(|left, right, _| left + right)
        .last();
    assert_eq!(result, Some(2 + 8 + 20 + 35 + 56 + 80));
}

#[test]
fn test_scan_from_and_enumerate() {
    let running: Vec<(usize, String)> = seq(vec!["a", "b", "c"])
        .scan_from(String::new(), |mut text, item, _| {
            text.push_str(item);
            text
        })
        .enumerate()
        .collect();
    assert_eq!(
        running,
        vec![(0, "a".to_string()), (1, "ab".to_string()), (2, "abc".to_string())]
    );
}

#[test]
fn test_flat_map_unique_and_chunk() {
    let chunks: Vec<Vec<u8>> = seq(vec![1u8, 2, 3])
        .flat_map(|item, _| vec![item, item + 1])
        .unique()
        .chunk(3)
        .collect();
    assert_eq!(chunks, vec![vec![1, 2, 3], vec![4]]);
}

#[test]
fn test_cycle_take_and_repeat() {
    let looped = seq(vec![1, 2]).cycle().take(5).into_vec();
    assert_eq!(looped, vec![1, 2, 1, 2, 1]);
    assert_eq!(seq(vec![1, 2]).repeat(2).into_vec(), vec![1, 2, 1, 2]);
}

#[test]
fn test_windows_over_unbounded_sources() {
    let counted: Vec<Vec<usize>> = Seq::generate(|index| index).windows(2).take(3).collect();
    assert_eq!(counted, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);

    let looped = seq(vec!['a', 'b']).cycle().windows(3).take(2).into_vec();
    assert_eq!(looped, vec![vec!['a', 'b', 'a'], vec!['b', 'a', 'b']]);
}

#[test]
fn test_cloned_cycle_chain_replays_independently() {
    let mut looped = seq(vec![1, 2, 3]).cycle().map(|item, _| item * 10);
    assert_eq!(looped.next(), Some(10));
    let fork = looped.clone();
    assert_eq!(looped.take(3).into_vec(), vec![20, 30, 10]);
    assert_eq!(fork.take(3).into_vec(), vec![20, 30, 10]);
    assert_eq!(seq(vec![1]).repeat(2).clone().into_vec(), vec![1, 1]);
}

#[test]
fn test_filter_nullish_and_flatten() {
    let values = seq(vec![Some(vec![1, 2]), None, Some(vec![3])])
        .filter_nullish()
        .flatten()
        .into_vec();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_tap_and_skip_while() {
    let mut seen = 0;
    let rest = seq(vec![1, 1, 2, 3])
        .tap(|_, _| seen += 1)
        .skip_while(|item, _| *item == 1)
        .into_vec();
    assert_eq!(rest, vec![2, 3]);
    assert_eq!(seen, 4);
}

#[test]
fn test_unique_by_and_take_while() {
    let firsts = seq(vec![10, 11, 20, 25, 31, 40])
        .unique_by(|item, _| item / 10)
        .take_while(|item, _| *item < 35)
        .into_vec();
    assert_eq!(firsts, vec![10, 20, 31]);
}

// =============================================================================
// terminal operations
// =============================================================================

#[test]
fn test_reduce_and_fold() {
    assert_eq!(seq(vec![2, 3, 4]).reduce(|left, right, _| left * right), Ok(24));
    assert_eq!(seq(Vec::<u8>::new()).reduce(|left, _, _| left), Err(SeqError::EmptyReduce));
    assert_eq!(seq(vec!["x", "y"]).fold(String::from(">"), |text, item, _| text + item), ">xy");
}

#[test]
fn test_group_by_and_partition() {
    let groups = seq(1..=6).group_by(|item, _| item % 3);
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2, 0]);
    assert_eq!(groups.get(&0), Some(&[3, 6][..]));

    let (short, long) = seq(vec!["to", "three", "be"]).partition(|word, _| word.len() < 3);
    assert_eq!(short, vec!["to", "be"]);
    assert_eq!(long, vec!["three"]);
}

#[test]
fn test_numeric_terminals() {
    assert!((seq(vec![1.5, 2.5]).sum() - 4.0).abs() < f64::EPSILON);
    assert!((seq(vec![2, 3]).product() - 6.0).abs() < f64::EPSILON);
    assert!((seq(vec![1, 2, 3, 4]).average() - 2.5).abs() < f64::EPSILON);
    assert!(seq(Vec::<i32>::new()).average().is_nan());
}

#[test]
fn test_search_terminals() {
    let words = || seq(vec!["alpha", "beta", "gamma"]);
    assert_eq!(words().first(), Some("alpha"));
    assert_eq!(words().last(), Some("gamma"));
    assert_eq!(words().count(), 3);
    assert_eq!(words().find(|word, _| word.starts_with('g')), Some("gamma"));
    assert_eq!(words().find_index(|word, _| word.len() == 4), Some(1));
    assert!(words().includes(&"beta"));
    assert!(words().every(|word, _| word.ends_with('a')));
    assert!(!words().some(|word, _| word.is_empty()));
    assert!(!words().is_empty());
    assert_eq!(words().join(","), "alpha,beta,gamma");
    assert_eq!(words().min(), Some("alpha"));
    assert_eq!(words().max(), Some("gamma"));
}

#[test]
fn test_unzip_rows() {
    let columns = seq(vec![vec![1, 2], vec![3, 4]]).unzip();
    assert_eq!(columns, vec![vec![1, 3], vec![2, 4]]);
}

// =============================================================================
// lookahead
// =============================================================================

#[test]
fn test_peekable_seq_supports_peek() {
    let mut numbers = PeekableSeq::new(vec![1, 2, 3]);
    assert!(numbers.supports_peek());
    assert_eq!(numbers.peek(), Some(&1));
    assert_eq!(numbers.peek(), Some(&1));
    assert_eq!(numbers.next(), Some(1));
    assert_eq!(numbers.into_vec(), vec![2, 3]);
}

#[test]
fn test_peek_mut_changes_next_item() {
    let mut numbers = seq(vec![1, 2]).peekable();
    if let Some(first) = numbers.peek_mut() {
        *first = 10;
    }
    assert_eq!(numbers.into_vec(), vec![10, 2]);
}

#[test]
fn test_peek_on_empty() {
    let mut empty = seq(Vec::<i32>::new()).peekable();
    assert_eq!(empty.peek(), None);
    assert!(empty.is_empty());
}

#[test]
fn test_generic_lookahead_consumer() {
    fn skip_spaces<C: SupportsPeek<Item = char>>(cursor: &mut C) {
        while cursor.peek() == Some(&' ') {
            cursor.next();
        }
    }
    let mut text = seq("  hi".chars()).peekable();
    skip_spaces(&mut text);
    assert_eq!(text.collect::<String>(), "hi");
}

// =============================================================================
// dynamic values
// =============================================================================

#[cfg(feature = "search")]
mod values {
    use super::*;
    use seqwise::value::Value;

    #[test]
    fn test_pluck_and_group() {
        let rows = vec![
            Value::object([("team", "red"), ("name", "ann")]),
            Value::object([("team", "blue"), ("name", "ben")]),
            Value::object([("team", "red"), ("name", "cal")]),
        ];
        let names = seq(rows.clone())
            .pluck("name")
            .filter_nullish()
            .map(|name, _| name.to_string())
            .into_vec();
        assert_eq!(names, vec!["ann", "ben", "cal"]);

        let teams = seq(rows).group_by(|row, _| row.get("team").and_then(|team| team.as_str().map(String::from)));
        assert_eq!(teams.len(), 2);
        assert_eq!(teams.get(&Some("red".to_string())).map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_flat() {
        let nested = vec![Value::array([1, 2]), Value::array([Value::array([3])])];
        assert_eq!(seq(nested).flat(2).sum(), 6.0);
    }

    #[test]
    fn test_from_entries_of_array() {
        let list = Value::array(["x", "y"]);
        let keys: Vec<String> = Seq::from_entries(&list)
            .map(|entries| entries.map(|(key, _), _| key.to_string()).into_vec())
            .unwrap_or_default();
        assert_eq!(keys, vec!["0", "1"]);
    }
}
