//! Tests for the async fluent constructors.

#![cfg(feature = "async")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::stream;
use seqwise::fluent::{PeekableSeq, Seq};

#[tokio::test]
async fn test_from_stream_keeps_stream_order() {
    let numbers = Seq::from_stream(stream::iter(vec![3, 1, 2])).await;
    assert_eq!(numbers.map(|item, index| item * 10 + index as i32).into_vec(), vec![30, 11, 22]);
}

#[tokio::test]
async fn test_from_stream_of_nothing() {
    let empty = Seq::from_stream(stream::empty::<u8>()).await;
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_from_futures_resolves_in_input_order() {
    let delays = [30u64, 10, 20];
    let futures = delays.map(|delay| async move {
        tokio::time::sleep(Duration::from_millis(delay)).await;
        delay
    });
    let resolved = Seq::from_futures(futures).await;
    assert_eq!(resolved.into_vec(), vec![30, 10, 20]);
}

#[tokio::test]
async fn test_from_futures_awaits_one_at_a_time() {
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let futures = (0..4).map(|item| {
        let running = Arc::clone(&running);
        let peak = Arc::clone(&peak);
        async move {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::task::yield_now().await;
            running.fetch_sub(1, Ordering::SeqCst);
            item
        }
    });
    let collected = Seq::from_futures(futures).await.into_vec();
    assert_eq!(collected, vec![0, 1, 2, 3]);
    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_async_constructor_in_peekable_mode() {
    let mut letters = PeekableSeq::from_stream(stream::iter("xyz".chars())).await;
    assert_eq!(letters.peek(), Some(&'x'));
    assert_eq!(letters.collect::<String>(), "xyz");
}
