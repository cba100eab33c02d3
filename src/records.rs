//! Bookkeeping for one run of Prim's or Dijkstra's algorithm

use crate::error::TreeError;
use crate::indexed_binary::IndexedMinHeap;
use crate::traits::Weight;
use crate::tree::TreeEdge;
use crate::VertexId;

/// Scratch state owned by a single run. Dropped once the tree is returned.
pub(crate) struct Records<W: Weight> {
    pub(crate) num_vertices: usize,
    /// Vertices not yet settled, keyed by their best-known priority
    pub(crate) heap: IndexedMinHeap<W>,
    /// `finished[id]` is true once `id` has left the heap
    pub(crate) finished: Vec<bool>,
    pub(crate) predecessor: Vec<Option<VertexId>>,
    /// Distance from the start vertex (Dijkstra only)
    pub(crate) distance: Vec<W>,
    pub(crate) tree: Vec<TreeEdge<W>>,
}

impl<W: Weight> Records<W> {
    /// Fills the heap with every vertex: `start` at zero, the rest at infinity
    pub(crate) fn new(num_vertices: usize, start: VertexId) -> Result<Self, TreeError> {
        let mut heap = IndexedMinHeap::new(num_vertices);
        heap.insert(W::default(), start)?;
        for id in (0..num_vertices).filter(|&id| id != start) {
            heap.insert(W::INFINITY, id)?;
        }

        Ok(Records {
            num_vertices,
            heap,
            finished: vec![false; num_vertices],
            predecessor: vec![None; num_vertices],
            distance: vec![W::INFINITY; num_vertices],
            tree: Vec::with_capacity(num_vertices),
        })
    }

    /// Rejects neighbor ids the graph view should never have produced
    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<(), TreeError> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(TreeError::UnknownVertex {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    /// Dumps the full state at trace level
    pub(crate) fn trace(&self) {
        if !tracing::enabled!(tracing::Level::TRACE) {
            return;
        }
        tracing::trace!(
            num_vertices = self.num_vertices,
            heap = %self.heap,
            finished = ?self.finished,
            predecessor = ?self.predecessor,
            tree_edges = self.tree.len(),
            "records"
        );
    }
}
