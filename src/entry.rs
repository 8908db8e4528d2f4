//! Queue entries and their urgency ordering
//!
//! Every queue in this crate stores [`Entry`] values and agrees on a single
//! total order: lower priority numbers are dequeued first, and entries with
//! equal priority are dequeued in lexicographic order of their values.

use std::cmp::Ordering;
use std::fmt;

/// A (value, priority) pair stored by every queue implementation.
///
/// The ordering is total: priority ascending, then value ascending. A
/// numerically smaller priority is *more urgent* and comparisons on ties
/// fall through to the string value, so dequeue order is fully determined
/// for distinct entries. Duplicate entries (same value and priority) are
/// permitted; they compare equal.
///
/// # Example
///
/// ```rust
/// use priority_queues::Entry;
///
/// let a = Entry::new("task-a", 3);
/// let b = Entry::new("task-b", 3);
/// let c = Entry::new("task-c", 1);
///
/// assert!(c < a); // smaller priority wins
/// assert!(a < b); // equal priority: lexicographically smaller value wins
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The payload handed back by `dequeue` and `peek`.
    pub value: String,
    /// The urgency key. Smaller means dequeued earlier.
    pub priority: i32,
}

impl Entry {
    /// Creates an entry from a value and its priority.
    pub fn new(value: &str, priority: i32) -> Self {
        Self {
            value: value.to_string(),
            priority,
        }
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.value, self.priority)
    }
}
