//! Unsorted vector queue
//!
//! The simplest backend: entries are appended as they arrive in O(1), and
//! dequeue scans the whole vector for the most urgent entry in O(n).

use crate::entry::Entry;
use crate::traits::{PriorityQueue, QueueError};

/// Unsorted vector priority queue
#[derive(Debug, Default)]
pub struct UnsortedVecQueue {
    entries: Vec<Entry>,
}

impl PriorityQueue for UnsortedVecQueue {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn enqueue(&mut self, value: &str, priority: i32) {
        self.entries.push(Entry::new(value, priority));
    }

    fn dequeue(&mut self) -> Result<String, QueueError> {
        let index = self.most_urgent_index().ok_or(QueueError::EmptyQueue)?;
        let entry = self.entries.remove(index);
        Ok(entry.value)
    }

    fn peek(&self) -> Result<&str, QueueError> {
        self.most_urgent_index()
            .map(|index| self.entries[index].value.as_str())
            .ok_or(QueueError::EmptyQueue)
    }

    fn peek_priority(&self) -> Result<i32, QueueError> {
        self.most_urgent_index()
            .map(|index| self.entries[index].priority)
            .ok_or(QueueError::EmptyQueue)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl UnsortedVecQueue {
    /// Index of the most urgent entry; the earliest one wins on exact
    /// duplicates since only a strictly more urgent entry displaces it.
    fn most_urgent_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(index, _)| index)
    }
}
