//! Array-backed binary heap priority queue
//!
//! A conventional binary min-heap over a `Vec` of entries:
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | O(log n)   |
//! | `dequeue` | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! Whole entries are compared, so the value tie-break applies here just as
//! it does in the other backends.

use crate::entry::Entry;
use crate::traits::{PriorityQueue, QueueError};

/// Binary min-heap priority queue
///
/// The most urgent entry sits at index 0; each parent is no less urgent
/// than its two children.
#[derive(Debug, Default)]
pub struct BinaryHeapQueue {
    entries: Vec<Entry>,
}

impl PriorityQueue for BinaryHeapQueue {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn enqueue(&mut self, value: &str, priority: i32) {
        self.entries.push(Entry::new(value, priority));
        self.sift_up(self.entries.len() - 1);
    }

    fn dequeue(&mut self) -> Result<String, QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().ok_or(QueueError::EmptyQueue)?;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Ok(entry.value)
    }

    fn peek(&self) -> Result<&str, QueueError> {
        self.entries
            .first()
            .map(|entry| entry.value.as_str())
            .ok_or(QueueError::EmptyQueue)
    }

    fn peek_priority(&self) -> Result<i32, QueueError> {
        self.entries
            .first()
            .map(|entry| entry.priority)
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

impl BinaryHeapQueue {
    /// Move the entry at `index` up until its parent is no less urgent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index] < self.entries[parent] {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `index` down until both children are no more urgent
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left] < self.entries[smallest] {
                smallest = left;
            }
            if right < len && self.entries[right] < self.entries[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.entries.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}
