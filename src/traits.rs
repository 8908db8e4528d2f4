//! The shared priority-queue contract
//!
//! All four queue backends implement [`PriorityQueue`], so callers can swap
//! one for another based on the complexity trade-off they need:
//!
//! | Implementation | `enqueue` | `dequeue` |
//! |----------------|-----------|-----------|
//! | [`BinomialQueue`](crate::binomial::BinomialQueue)        | O(log n) | O(log n) |
//! | [`BinaryHeapQueue`](crate::binary::BinaryHeapQueue)      | O(log n) | O(log n) |
//! | [`SortedListQueue`](crate::sorted_list::SortedListQueue) | O(n)     | O(1)     |
//! | [`UnsortedVecQueue`](crate::unsorted::UnsortedVecQueue)  | O(1)     | O(n)     |
//!
//! Every implementation uses the same entry ordering (priority ascending,
//! value ascending on ties) and the same failure contract: `dequeue`,
//! `peek`, and `peek_priority` on an empty queue return
//! [`QueueError::EmptyQueue`] without mutating the container.

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no entries
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "the queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

/// A min-first priority queue over string values with integer priorities.
///
/// The most urgent entry is the one with the smallest priority; entries
/// with equal priority are ordered by their value (lexicographically
/// smaller first). All implementations are single-threaded and not safe
/// for concurrent mutation without external locking.
///
/// # Example
///
/// ```rust
/// use priority_queues::PriorityQueue;
/// use priority_queues::binomial::BinomialQueue;
///
/// let mut queue = BinomialQueue::new();
/// queue.enqueue("write tests", 2);
/// queue.enqueue("fix the build", 1);
///
/// assert_eq!(queue.peek(), Ok("fix the build"));
/// assert_eq!(queue.dequeue(), Ok("fix the build".to_string()));
/// assert_eq!(queue.dequeue(), Ok("write tests".to_string()));
/// assert!(queue.dequeue().is_err());
/// ```
pub trait PriorityQueue {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Adds a value with the given priority
    fn enqueue(&mut self, value: &str, priority: i32);

    /// Removes and returns the value of the most urgent entry
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    /// A failed call leaves the queue untouched.
    fn dequeue(&mut self) -> Result<String, QueueError>;

    /// Returns the value of the most urgent entry without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    fn peek(&self) -> Result<&str, QueueError>;

    /// Returns the priority of the most urgent entry without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    fn peek_priority(&self) -> Result<i32, QueueError>;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the queue
    fn size(&self) -> usize;

    /// Removes all entries
    fn clear(&mut self);
}
