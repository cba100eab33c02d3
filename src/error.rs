//! Error types for heap, graph and tree operations

use crate::VertexId;
use thiserror::Error;

/// Error type for [`IndexedMinHeap`](crate::indexed_binary::IndexedMinHeap) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Every slot is occupied
    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },
    /// `extract_min` on an empty heap
    #[error("heap is empty")]
    Empty,
    /// The id is not currently in the heap
    #[error("id {id} is not in the heap")]
    NotFound { id: VertexId },
    /// The id is outside `0..capacity`
    #[error("id {id} is out of range for heap capacity {capacity}")]
    IdOutOfRange { id: VertexId, capacity: usize },
    /// The id already has a live node
    #[error("id {id} is already in the heap")]
    DuplicateId { id: VertexId },
}

/// Error type for [`AdjacencyGraph`](crate::graph::AdjacencyGraph) construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        num_vertices: usize,
    },
}

/// Error type for tree construction and path reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The start vertex is outside `0..num_vertices`
    #[error("start vertex {vertex} is invalid for a graph with {num_vertices} vertices")]
    InvalidStartVertex {
        vertex: VertexId,
        num_vertices: usize,
    },
    /// The graph view yielded a neighbor outside `0..num_vertices`
    #[error("vertex {vertex} reached from the graph is outside 0..{num_vertices}")]
    UnknownVertex {
        vertex: VertexId,
        num_vertices: usize,
    },
    /// Dijkstra's algorithm met an edge with negative weight
    #[error("edge {from} -> {to} has a negative weight")]
    NegativeWeight { from: VertexId, to: VertexId },
    /// The tree does not lead back to the start vertex
    #[error("tree is malformed at vertex {vertex}")]
    MalformedTree { vertex: VertexId },
    #[error(transparent)]
    Heap(#[from] HeapError),
}
