//! Generic tests for all PriorityQueue implementations
//!
//! These tests work with any implementation of the shared contract and are
//! instantiated once per backend, so every queue is held to exactly the
//! same behavior: entry ordering, empty-queue errors, size bookkeeping,
//! and clear semantics.

use priority_queues::binary::BinaryHeapQueue;
use priority_queues::binomial::BinomialQueue;
use priority_queues::sorted_list::SortedListQueue;
use priority_queues::unsorted::UnsortedVecQueue;
use priority_queues::{PriorityQueue, QueueError};

/// Test that a fresh queue is empty and every fallible op fails
fn test_empty_queue<Q: PriorityQueue>() {
    let mut queue = Q::new();

    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.peek(), Err(QueueError::EmptyQueue));
    assert_eq!(queue.peek_priority(), Err(QueueError::EmptyQueue));
    assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));

    // The failed calls must not have mutated anything
    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);
}

/// Test basic enqueue and dequeue ordering
fn test_basic_operations<Q: PriorityQueue>() {
    let mut queue = Q::new();

    queue.enqueue("five", 5);
    queue.enqueue("one", 1);
    queue.enqueue("ten", 10);
    queue.enqueue("three", 3);

    assert!(!queue.is_empty());
    assert_eq!(queue.size(), 4);
    assert_eq!(queue.peek(), Ok("one"));
    assert_eq!(queue.peek_priority(), Ok(1));

    assert_eq!(queue.dequeue(), Ok("one".to_string()));
    assert_eq!(queue.dequeue(), Ok("three".to_string()));
    assert_eq!(queue.dequeue(), Ok("five".to_string()));
    assert_eq!(queue.dequeue(), Ok("ten".to_string()));
    assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    assert!(queue.is_empty());
}

/// Test the documented round-trip: ties broken by lexicographic value
fn test_tie_break_round_trip<Q: PriorityQueue>() {
    let mut queue = Q::new();

    queue.enqueue("a", 5);
    queue.enqueue("b", 3);
    queue.enqueue("c", 3);
    queue.enqueue("d", 8);

    assert_eq!(queue.dequeue(), Ok("b".to_string()));
    assert_eq!(queue.dequeue(), Ok("c".to_string()));
    assert_eq!(queue.dequeue(), Ok("a".to_string()));
    assert_eq!(queue.dequeue(), Ok("d".to_string()));
}

/// Test that duplicate entries are both kept and both dequeued
fn test_duplicate_entries<Q: PriorityQueue>() {
    let mut queue = Q::new();

    queue.enqueue("dup", 2);
    queue.enqueue("dup", 2);
    queue.enqueue("other", 1);

    assert_eq!(queue.size(), 3);
    assert_eq!(queue.dequeue(), Ok("other".to_string()));
    assert_eq!(queue.dequeue(), Ok("dup".to_string()));
    assert_eq!(queue.dequeue(), Ok("dup".to_string()));
    assert!(queue.is_empty());
}

/// Test that peek and peek_priority never mutate
fn test_peek_idempotent<Q: PriorityQueue>() {
    let mut queue = Q::new();

    queue.enqueue("low", 7);
    queue.enqueue("high", 2);

    for _ in 0..5 {
        assert_eq!(queue.peek(), Ok("high"));
        assert_eq!(queue.peek_priority(), Ok(2));
        assert_eq!(queue.size(), 2);
    }

    assert_eq!(queue.dequeue(), Ok("high".to_string()));
    assert_eq!(queue.peek(), Ok("low"));
}

/// Test size tracking across interleaved enqueues and dequeues
fn test_size_tracking<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in 0..10 {
        queue.enqueue("v", i);
        assert_eq!(queue.size(), (i + 1) as usize);
    }

    for i in 0..4 {
        queue.dequeue().unwrap();
        assert_eq!(queue.size(), (9 - i) as usize);
    }

    for i in 10..15 {
        queue.enqueue("v", i);
    }
    assert_eq!(queue.size(), 11);

    while queue.dequeue().is_ok() {}
    assert_eq!(queue.size(), 0);
}

/// Test clear on populated and already-empty queues
fn test_clear<Q: PriorityQueue>() {
    let mut queue = Q::new();

    // Clearing an empty queue is a no-op
    queue.clear();
    assert!(queue.is_empty());

    for i in 0..25 {
        queue.enqueue("v", i);
    }
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));

    // The queue stays usable after clear
    queue.enqueue("again", 1);
    assert_eq!(queue.dequeue(), Ok("again".to_string()));
}

/// Test that a fully drained queue errors like a fresh one
fn test_drained_queue_errors<Q: PriorityQueue>() {
    let mut queue = Q::new();

    queue.enqueue("only", 1);
    assert_eq!(queue.dequeue(), Ok("only".to_string()));

    assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    assert_eq!(queue.peek(), Err(QueueError::EmptyQueue));
    assert_eq!(queue.peek_priority(), Err(QueueError::EmptyQueue));
}

/// Test ascending priority insertion dequeues in insertion order
fn test_ascending_insertion<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in 0..50 {
        queue.enqueue(&format!("v{i:03}"), i);
    }

    for i in 0..50 {
        assert_eq!(queue.peek_priority(), Ok(i));
        assert_eq!(queue.dequeue(), Ok(format!("v{i:03}")));
    }
}

/// Test descending priority insertion dequeues in reverse
fn test_descending_insertion<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in (0..50).rev() {
        queue.enqueue(&format!("v{i:03}"), i);
    }

    for i in 0..50 {
        assert_eq!(queue.dequeue(), Ok(format!("v{i:03}")));
    }
}

/// Test negative priorities sort before positive ones
fn test_negative_priorities<Q: PriorityQueue>() {
    let mut queue = Q::new();

    queue.enqueue("zero", 0);
    queue.enqueue("minus", -5);
    queue.enqueue("plus", 5);
    queue.enqueue("min", i32::MIN);

    assert_eq!(queue.peek_priority(), Ok(i32::MIN));
    assert_eq!(queue.dequeue(), Ok("min".to_string()));
    assert_eq!(queue.dequeue(), Ok("minus".to_string()));
    assert_eq!(queue.dequeue(), Ok("zero".to_string()));
    assert_eq!(queue.dequeue(), Ok("plus".to_string()));
}

/// Test a shared priority level drains in lexicographic value order
fn test_all_same_priority<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for value in ["delta", "alpha", "echo", "charlie", "bravo"] {
        queue.enqueue(value, 3);
    }

    for expected in ["alpha", "bravo", "charlie", "delta", "echo"] {
        assert_eq!(queue.dequeue(), Ok(expected.to_string()));
    }
}

/// Test alternating enqueue and dequeue keeps ordering consistent
fn test_alternating_operations<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in 0..100 {
        queue.enqueue("a", i * 2);
        queue.enqueue("b", i * 2 + 1);
        // Always removes the global minimum so far
        let priority = queue.peek_priority().unwrap();
        assert_eq!(priority, i);
        queue.dequeue().unwrap();
    }

    assert_eq!(queue.size(), 100);
    let mut last = i32::MIN;
    while let Ok(priority) = queue.peek_priority() {
        assert!(priority >= last);
        last = priority;
        queue.dequeue().unwrap();
    }
}

/// Test a long pseudo-random workload drains fully sorted
fn test_large_sequence<Q: PriorityQueue>() {
    let mut queue = Q::new();

    // Weyl-style scramble: distinct priorities in a scattered order
    for i in 0..500u32 {
        let priority = (i.wrapping_mul(2654435761) % 100_000) as i32;
        queue.enqueue(&format!("v{i}"), priority);
    }

    assert_eq!(queue.size(), 500);

    let mut last = i32::MIN;
    let mut drained = 0;
    while let Ok(priority) = queue.peek_priority() {
        assert!(priority >= last);
        last = priority;
        queue.dequeue().unwrap();
        drained += 1;
    }
    assert_eq!(drained, 500);
}

// Macro to generate a single test function
macro_rules! queue_test {
    ($name:ident, $queue:ty, $func:ident) => {
        #[test]
        fn $name() {
            $func::<$queue>();
        }
    };
}

// Macro to generate the full suite for one queue type
macro_rules! define_queue_tests {
    ($module:ident, $queue:ty) => {
        mod $module {
            use super::*;

            queue_test!(test_empty_queue_contract, $queue, test_empty_queue);
            queue_test!(test_basic, $queue, test_basic_operations);
            queue_test!(test_tie_break, $queue, test_tie_break_round_trip);
            queue_test!(test_duplicates, $queue, test_duplicate_entries);
            queue_test!(test_peek, $queue, test_peek_idempotent);
            queue_test!(test_size, $queue, test_size_tracking);
            queue_test!(test_clear_semantics, $queue, test_clear);
            queue_test!(test_drained, $queue, test_drained_queue_errors);
            queue_test!(test_ascending, $queue, test_ascending_insertion);
            queue_test!(test_descending, $queue, test_descending_insertion);
            queue_test!(test_negative, $queue, test_negative_priorities);
            queue_test!(test_same_priority, $queue, test_all_same_priority);
            queue_test!(test_alternating, $queue, test_alternating_operations);
            queue_test!(test_large, $queue, test_large_sequence);
        }
    };
}

define_queue_tests!(binomial, BinomialQueue);
define_queue_tests!(binary, BinaryHeapQueue);
define_queue_tests!(sorted_list, SortedListQueue);
define_queue_tests!(unsorted, UnsortedVecQueue);
