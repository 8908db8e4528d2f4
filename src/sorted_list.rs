//! Priority-sorted linked list queue
//!
//! Keeps entries in dequeue order at all times: enqueue walks the list to
//! the insertion point in O(n), dequeue and peek just take the head in
//! O(1). A good trade when reads dominate writes.
//!
//! Nodes own their successor exclusively (`Option<Box<ListNode>>`), so the
//! list is a straight ownership chain with no shared references.

use crate::entry::Entry;
use crate::traits::{PriorityQueue, QueueError};

#[derive(Debug)]
struct ListNode {
    entry: Entry,
    next: Option<Box<ListNode>>,
}

/// Sorted linked-list priority queue
#[derive(Debug, Default)]
pub struct SortedListQueue {
    head: Option<Box<ListNode>>,
    len: usize,
}

impl PriorityQueue for SortedListQueue {
    fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Splices the new entry in front of the first strictly less urgent
    /// node. Walking past equal entries keeps insertion stable for ties.
    fn enqueue(&mut self, value: &str, priority: i32) {
        let entry = Entry::new(value, priority);

        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.entry <= entry) {
            // The loop condition guarantees the node is present.
            cursor = &mut cursor.as_mut().unwrap().next;
        }

        let next = cursor.take();
        *cursor = Some(Box::new(ListNode { entry, next }));
        self.len += 1;
    }

    fn dequeue(&mut self) -> Result<String, QueueError> {
        let node = self.head.take().ok_or(QueueError::EmptyQueue)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.entry.value)
    }

    fn peek(&self) -> Result<&str, QueueError> {
        self.head
            .as_ref()
            .map(|node| node.entry.value.as_str())
            .ok_or(QueueError::EmptyQueue)
    }

    fn peek_priority(&self) -> Result<i32, QueueError> {
        self.head
            .as_ref()
            .map(|node| node.entry.priority)
            .ok_or(QueueError::EmptyQueue)
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        // Unlink iteratively; dropping a long chain recursively could
        // overflow the stack.
        let mut node = self.head.take();
        while let Some(mut boxed) = node {
            node = boxed.next.take();
        }
        self.len = 0;
    }
}

impl Drop for SortedListQueue {
    fn drop(&mut self) {
        self.clear();
    }
}
