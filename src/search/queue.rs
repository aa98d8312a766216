use super::Entry;

use slab::Slab;
use std::ops::Index;

/// Handle of an [`Entry`] stored in an [`EntryQueue`].
pub type EntryKey = usize;

/// A binary heap of [`Entry`]s ordered by [`Entry::is_better_than`].
///
/// The queue owns every Entry pushed into it, including the ones that were popped again, so
/// that their cost can still be looked up and changed through their [`EntryKey`]. Each Entry
/// remembers its slot in the heap, which lets [`fix`](EntryQueue::fix) restore the heap order
/// after a cost change in `O(log n)`.
///
/// ## Examples
/// ```
/// # use route_coverage::search::{Entry, EntryQueue, Node};
/// let mut queue = EntryQueue::new();
/// let far = queue.push(Entry::new(Node::new(3, 2), 1, 4.0));
/// let near = queue.push(Entry::new(Node::new(1, 2), 3, 1.0));
///
/// assert_eq!(queue.pop_best(), Some(near));
/// assert_eq!(queue.pop_best(), Some(far));
/// assert_eq!(queue.pop_best(), None);
///
/// // popped Entries stay accessible
/// assert_eq!(queue[far].cost, 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryQueue {
    entries: Slab<Entry>,
    heap: Vec<EntryKey>,
}

impl EntryQueue {
    /// creates a new, empty queue
    pub fn new() -> EntryQueue {
        EntryQueue::default()
    }

    /// creates a new, empty queue with room for `capacity` Entries
    pub fn with_capacity(capacity: usize) -> EntryQueue {
        EntryQueue {
            entries: Slab::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
        }
    }

    /// The number of queued Entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if no Entry is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The number of Entries ever pushed, queued or not.
    pub fn stored(&self) -> usize {
        self.entries.len()
    }

    /// Stores `entry` and adds it to the heap.
    pub fn push(&mut self, entry: Entry) -> EntryKey {
        let key = self.entries.insert(entry);
        self.enqueue(key);
        key
    }

    /// Removes the best Entry from the heap and returns its key, or `None` if the queue is empty.
    pub fn pop_best(&mut self) -> Option<EntryKey> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        self.sift_down(0, last);
        let key = self.heap.pop()?;
        self.entries[key].position = None;
        Some(key)
    }

    /// Restores the heap order after the cost of `key` changed.
    ///
    /// An Entry that is no longer queued is pushed onto the heap again, since its changed cost has
    /// to be propagated to its successors once more.
    #[track_caller]
    pub fn fix(&mut self, key: EntryKey) {
        match self.entries[key].position {
            Some(index) => {
                if !self.sift_down(index, self.heap.len()) {
                    self.sift_up(index);
                }
            }
            None => self.enqueue(key),
        }
    }

    /// Sets the cost of `key`. [`fix`](EntryQueue::fix) must be called afterwards.
    #[track_caller]
    pub fn set_cost(&mut self, key: EntryKey, cost: f64) {
        self.entries[key].cost = cost;
    }

    /// Removes all Entries, queued or not.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.heap.clear();
    }

    fn enqueue(&mut self, key: EntryKey) {
        let index = self.heap.len();
        self.heap.push(key);
        self.entries[key].position = Some(index);
        self.sift_up(index);
    }

    fn is_better(&self, a: usize, b: usize) -> bool {
        self.entries[self.heap[a]].is_better_than(&self.entries[self.heap[b]])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.entries[self.heap[a]].position = Some(a);
        self.entries[self.heap[b]].position = Some(b);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.is_better(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the Entry at `start` down within the first `len` slots. Returns `true` if it moved.
    fn sift_down(&mut self, start: usize, len: usize) -> bool {
        let mut index = start;
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.is_better(right, left) {
                right
            } else {
                left
            };
            if !self.is_better(child, index) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
        index > start
    }
}

impl Index<EntryKey> for EntryQueue {
    type Output = Entry;
    #[track_caller]
    fn index(&self, key: EntryKey) -> &Entry {
        &self.entries[key]
    }
}
