//! Priority Queue Containers
//!
//! This crate provides four priority-queue containers behind one shared
//! [`PriorityQueue`] contract, each backed by a different structure with
//! its own complexity trade-off:
//!
//! - **Binomial queue**: forest of binomial trees merged like binary
//!   addition; O(log n) enqueue and dequeue
//! - **Binary heap queue**: array-backed min-heap; O(log n) enqueue and
//!   dequeue
//! - **Sorted list queue**: priority-sorted linked list; O(n) enqueue,
//!   O(1) dequeue
//! - **Unsorted vector queue**: O(1) enqueue, O(n) dequeue scan
//!
//! All four store a string value with an integer priority and dequeue the
//! entry with the smallest priority first, breaking priority ties by
//! lexicographically smaller value.
//!
//! # Example
//!
//! ```rust
//! use priority_queues::PriorityQueue;
//! use priority_queues::binomial::BinomialQueue;
//!
//! let mut queue = BinomialQueue::new();
//! queue.enqueue("a", 5);
//! queue.enqueue("b", 3);
//! queue.enqueue("c", 3);
//! queue.enqueue("d", 8);
//!
//! assert_eq!(queue.dequeue(), Ok("b".to_string()));
//! assert_eq!(queue.dequeue(), Ok("c".to_string()));
//! assert_eq!(queue.dequeue(), Ok("a".to_string()));
//! assert_eq!(queue.dequeue(), Ok("d".to_string()));
//! ```

pub mod binary;
pub mod binomial;
pub mod entry;
pub mod sorted_list;
pub mod traits;
pub mod unsorted;

// Re-export the shared contract for convenience
pub use entry::Entry;
pub use traits::{PriorityQueue, QueueError};
