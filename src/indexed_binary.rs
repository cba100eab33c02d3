//! Indexed binary min-heap with decrease-key
//!
//! A binary min-heap over `(id, priority)` pairs whose ids come from a dense
//! range `0..capacity`. Next to the slot vector the heap keeps a position
//! array mapping every live id to the slot that holds it, so priority lookup
//! and `decrease_priority` need no search.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `insert`            | O(log n)   |
//! | `extract_min`       | O(log n)   |
//! | `decrease_priority` | O(log n)   |
//! | `priority`          | O(1)       |
//! | `peek`              | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_greedy_trees::indexed_binary::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new(3);
//! heap.insert(30, 0).unwrap();
//! heap.insert(10, 1).unwrap();
//! heap.insert(20, 2).unwrap();
//!
//! assert!(heap.decrease_priority(0, 5));
//! assert_eq!(heap.priority(0), Ok(5));
//!
//! assert_eq!(heap.extract_min().unwrap().id, 0);
//! assert_eq!(heap.extract_min().unwrap().id, 1);
//! assert_eq!(heap.extract_min().unwrap().id, 2);
//! assert!(heap.is_empty());
//! ```

use crate::error::HeapError;
use crate::VertexId;
use std::fmt;

/// A live heap entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapNode<P> {
    pub id: VertexId,
    pub priority: P,
}

/// A binary min-heap keyed by dense ids
///
/// Each id may be present at most once. Ids that have been extracted are
/// no longer tracked and cannot be looked up or decreased.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P> {
    /// Heap-ordered slots
    nodes: Vec<HeapNode<P>>,
    /// Slot of each id, `None` when the id is not in the heap
    position_of: Vec<Option<usize>>,
}

impl<P: Ord + Copy> IndexedMinHeap<P> {
    /// Creates an empty heap accepting ids `0..capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            position_of: vec![None; capacity],
        }
    }

    /// Returns the number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the size of the id space
    pub fn capacity(&self) -> usize {
        self.position_of.len()
    }

    /// Returns true if `id` currently has a node in the heap
    pub fn contains(&self, id: VertexId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the slot currently holding `id`
    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.position_of.get(id).copied().flatten()
    }

    /// Returns the slots in heap order
    pub fn as_slice(&self) -> &[HeapNode<P>] {
        &self.nodes
    }

    /// Returns the minimum node without removing it
    pub fn peek(&self) -> Option<&HeapNode<P>> {
        self.nodes.first()
    }

    /// Inserts `id` with the given priority
    ///
    /// # Errors
    /// - [`HeapError::Full`] if every slot is taken
    /// - [`HeapError::IdOutOfRange`] if `id >= capacity`
    /// - [`HeapError::DuplicateId`] if `id` is already present
    pub fn insert(&mut self, priority: P, id: VertexId) -> Result<(), HeapError> {
        let capacity = self.capacity();
        if self.nodes.len() == capacity {
            return Err(HeapError::Full { capacity });
        }
        if id >= capacity {
            return Err(HeapError::IdOutOfRange { id, capacity });
        }
        if self.contains(id) {
            return Err(HeapError::DuplicateId { id });
        }

        let slot = self.nodes.len();
        self.nodes.push(HeapNode { id, priority });
        self.position_of[id] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the node with the smallest priority
    ///
    /// # Errors
    /// [`HeapError::Empty`] if there is nothing to extract
    pub fn extract_min(&mut self) -> Result<HeapNode<P>, HeapError> {
        if self.nodes.is_empty() {
            return Err(HeapError::Empty);
        }

        let last = self.nodes.len() - 1;
        self.swap(0, last);
        let min = self.nodes.pop().ok_or(HeapError::Empty)?;
        self.position_of[min.id] = None;

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Returns the current priority of `id`
    ///
    /// # Errors
    /// [`HeapError::NotFound`] if `id` is not in the heap
    pub fn priority(&self, id: VertexId) -> Result<P, HeapError> {
        self.position(id)
            .map(|slot| self.nodes[slot].priority)
            .ok_or(HeapError::NotFound { id })
    }

    /// Lowers the priority of `id` to `new_priority`
    ///
    /// Returns false and leaves the heap untouched if `id` is not present or
    /// `new_priority` is not strictly smaller than the current priority.
    pub fn decrease_priority(&mut self, id: VertexId, new_priority: P) -> bool {
        let Some(slot) = self.position(id) else {
            return false;
        };
        if new_priority >= self.nodes[slot].priority {
            return false;
        }

        self.nodes[slot].priority = new_priority;
        self.sift_up(slot);
        true
    }

    /// Swaps two slots and keeps `position_of` in step
    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.position_of[self.nodes[a].id] = Some(a);
        self.position_of[self.nodes[b].id] = Some(b);
    }

    /// Move the node at `index` up while its parent is strictly greater
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index].priority < self.nodes[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the node at `index` down to maintain heap property.
    /// On equal children the left one wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.nodes[left].priority < self.nodes[smallest].priority {
                smallest = left;
            }
            if right < len && self.nodes[right].priority < self.nodes[smallest].priority {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<P: fmt::Debug> fmt::Display for IndexedMinHeap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "IndexedMinHeap with len: {}, capacity: {}",
            self.nodes.len(),
            self.position_of.len()
        )?;
        writeln!(f, "slot: priority [id]")?;
        for (slot, node) in self.nodes.iter().enumerate() {
            writeln!(f, "{}: {:?} [{}]", slot, node.priority, node.id)?;
        }
        Ok(())
    }
}
