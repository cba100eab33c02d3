//! Greedy tree construction over an indexed binary heap
//!
//! This crate grows trees over a weighted graph one vertex at a time, driven
//! by a binary min-heap that supports `decrease_priority` and O(1) lookup of
//! any vertex by id.
//!
//! # Features
//!
//! - **Indexed binary heap**: O(log n) insert, extract-min and decrease-priority;
//!   O(1) priority lookup
//! - **Prim's algorithm**: minimum spanning tree from any start vertex
//! - **Dijkstra's algorithm**: shortest-path tree with absolute distances
//! - **Path reconstruction**: per-vertex hop lists from either kind of tree
//!
//! Graphs are read through the [`GraphView`] trait; [`graph::AdjacencyGraph`]
//! is a ready-made dense implementation.
//!
//! # Cargo features
//!
//! - `float-weights`: `Weight` impls for `ordered_float::OrderedFloat<f32>` and `OrderedFloat<f64>`
//! - `serde`: `Serialize`/`Deserialize` for trees, edges and paths
//!
//! # Example
//!
//! ```rust
//! use rust_greedy_trees::graph::AdjacencyGraph;
//! use rust_greedy_trees::{
//!     all_shortest_paths, minimum_spanning_tree, shortest_path_tree, GraphView,
//! };
//!
//! let graph = AdjacencyGraph::from_edges(
//!     4,
//!     [(0, 1, 4u32), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 3)],
//! )
//! .unwrap();
//!
//! let mst = minimum_spanning_tree(&graph, 0).unwrap();
//! assert_eq!(mst.total_weight(), 6);
//!
//! let spt = shortest_path_tree(&graph, 0).unwrap();
//! let paths = all_shortest_paths(&spt, graph.num_vertices(), 0).unwrap();
//! assert_eq!(paths[&3].total_weight(), 4);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexed_binary;
pub mod pathfinding;
mod records;
pub mod spanning;
pub mod traits;
pub mod tree;

/// Dense vertex identifier, valid in `0..num_vertices`
pub type VertexId = usize;

pub use builder::TreeBuilder;
pub use error::{GraphError, HeapError, TreeError};
pub use indexed_binary::{HeapNode, IndexedMinHeap};
pub use pathfinding::{all_shortest_paths, shortest_path_tree, ShortestPaths};
pub use spanning::minimum_spanning_tree;
pub use traits::{GraphView, Weight};
pub use tree::{Path, Tree, TreeEdge, TreeKind};
