//! Binomial heap priority queue
//!
//! A binomial queue maintains a forest of heap-ordered binomial trees with:
//! - O(log n) enqueue
//! - O(log n) dequeue
//! - O(log n) merge of two whole queues
//!
//! # Algorithm Overview
//!
//! The forest is an ordered sequence of optional tree roots, where slot *i*
//! holds either nothing or the root of an order-*i* binomial tree:
//! - An order-0 tree is a single node
//! - An order-k tree is formed by linking two order-(k-1) trees
//! - An order-k tree has exactly 2ᵏ nodes; its root has k children of
//!   orders 0, 1, ..., k-1
//!
//! The forest therefore encodes its entry count in binary: bit *i* of the
//! count is 1 exactly when slot *i* is occupied, and `size()` reads the
//! count back by summing 2ⁱ over occupied slots.
//!
//! **Key operations**:
//! - **Enqueue**: wrap the new entry as a one-slot forest and merge it in.
//!   The merge ripples like binary addition with carry propagation, so the
//!   cost is O(log n) worst case.
//! - **Dequeue**: scan the O(log n) roots for the most urgent entry, detach
//!   that root, and merge its children (themselves a valid forest of orders
//!   0..k-1) back into the main forest.
//! - **Merge**: walk both forests order by order, combining equal-order
//!   trees into a carry for the next order, exactly like a ripple-carry
//!   adder combines two binary numbers.
//!
//! **Invariant**: after every operation, at most one tree per order, each
//! node's entry no less urgent than its parent's.

use crate::entry::Entry;
use crate::traits::{PriorityQueue, QueueError};

/// A node of a binomial tree.
///
/// A node owns its children outright; ownership flows forest → root →
/// children with no sharing, so linking two trees is a move of one root
/// into the other's child list, never a copy.
///
/// The root of an order-k tree has exactly k children, one of each order
/// 0..k-1 in increasing order, which is what lets a dequeued root's child
/// list be reused directly as a forest.
#[derive(Debug)]
struct TreeNode {
    entry: Entry,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(entry: Entry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }
}

/// The sparse forest: slot index is tree order, `None` is an absent order.
type Forest = Vec<Option<TreeNode>>;

/// Binomial heap priority queue
///
/// # Example
///
/// ```rust
/// use priority_queues::PriorityQueue;
/// use priority_queues::binomial::BinomialQueue;
///
/// let mut queue = BinomialQueue::new();
/// queue.enqueue("a", 5);
/// queue.enqueue("b", 3);
/// queue.enqueue("c", 3);
///
/// assert_eq!(queue.peek_priority(), Ok(3));
/// assert_eq!(queue.dequeue(), Ok("b".to_string()));
/// assert_eq!(queue.dequeue(), Ok("c".to_string()));
/// assert_eq!(queue.dequeue(), Ok("a".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct BinomialQueue {
    forest: Forest,
}

impl PriorityQueue for BinomialQueue {
    fn new() -> Self {
        Self { forest: Vec::new() }
    }

    /// Adds a value by merging a singleton order-0 forest into the main one.
    ///
    /// **Time Complexity**: O(log n) worst case, dominated by the carry
    /// ripple. Like incrementing a binary counter, the common case touches
    /// only the first few slots.
    fn enqueue(&mut self, value: &str, priority: i32) {
        let singleton = vec![Some(TreeNode::leaf(Entry::new(value, priority)))];
        Self::merge_forests(singleton, &mut self.forest);
    }

    /// Removes and returns the value of the most urgent entry.
    ///
    /// **Time Complexity**: O(log n): the root scan visits O(log n) slots
    /// and the child re-merge ripples across O(log n) orders.
    ///
    /// **Algorithm**:
    /// 1. Scan all roots for the most urgent entry and its slot.
    /// 2. Clear that slot in place (orders above it keep their slots).
    /// 3. The detached root's children are trees of orders 0..k-1, already
    ///    a valid forest; merge them back into the main forest.
    ///
    /// The scan happens before any mutation, so a failed call on an empty
    /// queue leaves the forest untouched.
    fn dequeue(&mut self) -> Result<String, QueueError> {
        let (order, _) = self.most_urgent_root().ok_or(QueueError::EmptyQueue)?;
        let root = self.forest[order].take().ok_or(QueueError::EmptyQueue)?;
        let TreeNode { entry, children } = root;
        let orphaned: Forest = children.into_iter().map(Some).collect();
        Self::merge_forests(orphaned, &mut self.forest);
        Ok(entry.value)
    }

    fn peek(&self) -> Result<&str, QueueError> {
        self.most_urgent_root()
            .map(|(_, root)| root.entry.value.as_str())
            .ok_or(QueueError::EmptyQueue)
    }

    fn peek_priority(&self) -> Result<i32, QueueError> {
        self.most_urgent_root()
            .map(|(_, root)| root.entry.priority)
            .ok_or(QueueError::EmptyQueue)
    }

    fn is_empty(&self) -> bool {
        self.forest.iter().all(Option::is_none)
    }

    /// Returns the entry count by reading the forest as a binary number.
    ///
    /// An occupied slot *i* contributes exactly 2ⁱ entries, so the total is
    /// recomputed from the occupied slots rather than kept as a counter.
    fn size(&self) -> usize {
        self.forest
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(order, _)| 1usize << order)
            .sum()
    }

    fn clear(&mut self) {
        self.forest.clear();
    }
}

impl BinomialQueue {
    /// Merges another queue into this one, consuming it.
    ///
    /// **Time Complexity**: O(log n), one ripple pass over both forests.
    pub fn merge(&mut self, other: BinomialQueue) {
        Self::merge_forests(other.forest, &mut self.forest);
    }

    /// Verifies the structural invariants of the forest.
    ///
    /// Checks that each occupied slot *i* holds a well-formed order-*i*
    /// binomial tree: exactly *i* children of orders 0..i-1 in increasing
    /// order, and every node's entry no more urgent than its parent's.
    /// Intended for tests; the operations maintain these invariants.
    pub fn check_invariants(&self) -> bool {
        self.forest
            .iter()
            .enumerate()
            .all(|(order, slot)| match slot {
                Some(tree) => Self::check_tree(tree, order),
                None => true,
            })
    }

    fn check_tree(tree: &TreeNode, order: usize) -> bool {
        tree.children.len() == order
            && tree
                .children
                .iter()
                .enumerate()
                .all(|(child_order, child)| {
                    tree.entry <= child.entry && Self::check_tree(child, child_order)
                })
    }

    /// Finds the slot and root holding the globally most urgent entry.
    ///
    /// The scan replaces its best candidate whenever the candidate is not
    /// strictly more urgent, so on an exact tie the later-scanned
    /// (higher-order) root wins.
    fn most_urgent_root(&self) -> Option<(usize, &TreeNode)> {
        let mut best: Option<(usize, &TreeNode)> = None;
        for (order, slot) in self.forest.iter().enumerate() {
            if let Some(tree) = slot {
                match best {
                    Some((_, current)) if current.entry < tree.entry => {}
                    _ => best = Some((order, tree)),
                }
            }
        }
        best
    }

    /// Links two trees of equal order k into one tree of order k+1.
    ///
    /// **Time Complexity**: O(1). The less urgent root moves into the more
    /// urgent root's child list, becoming its highest-order child. When the
    /// two roots compare equal, the second argument becomes the parent.
    fn merge_trees(first: TreeNode, second: TreeNode) -> TreeNode {
        if first.entry >= second.entry {
            let mut parent = second;
            parent.children.push(first);
            parent
        } else {
            let mut parent = first;
            parent.children.push(second);
            parent
        }
    }

    /// Merges the `incoming` forest into `forest`, ripple-carry style.
    ///
    /// **Time Complexity**: O(log n) tree-level work; forest length is
    /// O(log n) slots.
    ///
    /// **Algorithm**: walk orders 0..max(len, len). At each order up to
    /// three trees can be present: the incoming slot, the accumulator
    /// slot, and a carry from the previous order.
    /// - zero trees: the slot stays empty
    /// - one tree: it keeps the slot
    /// - two trees: they link into the next order's carry, the slot stays
    ///   empty
    /// - three trees: the carry keeps the slot (the other two already
    ///   coexisted at this order) and those two link into the next carry
    ///
    /// A carry surviving the final order is appended as one more slot.
    /// This is exactly binary addition: two set bits at a position sum to
    /// zero-carry-one.
    fn merge_forests(incoming: Forest, forest: &mut Forest) {
        let orders = incoming.len().max(forest.len());
        let mut merged: Forest = Vec::with_capacity(orders + 1);
        let mut carry: Option<TreeNode> = None;
        let mut incoming = incoming;

        for order in 0..orders {
            let from_incoming = incoming.get_mut(order).and_then(Option::take);
            let from_forest = forest.get_mut(order).and_then(Option::take);
            let from_carry = carry.take();

            let (kept, next_carry) = match (from_incoming, from_forest, from_carry) {
                (None, None, None) => (None, None),
                (Some(tree), None, None)
                | (None, Some(tree), None)
                | (None, None, Some(tree)) => (Some(tree), None),
                (Some(a), Some(b), None)
                | (Some(a), None, Some(b))
                | (None, Some(a), Some(b)) => (None, Some(Self::merge_trees(a, b))),
                (Some(a), Some(b), Some(c)) => (Some(c), Some(Self::merge_trees(a, b))),
            };

            merged.push(kept);
            carry = next_carry;
        }

        if let Some(tree) = carry {
            merged.push(Some(tree));
        }

        while let Some(None) = merged.last() {
            merged.pop();
        }

        *forest = merged;
    }
}
