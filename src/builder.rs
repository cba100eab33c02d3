//! Fluent entry point for running the tree builders
//!
//! ```rust
//! use rust_greedy_trees::graph::AdjacencyGraph;
//! use rust_greedy_trees::TreeBuilder;
//!
//! let graph = AdjacencyGraph::from_edges(3, [(0, 1, 4u32), (1, 2, 1), (0, 2, 2)]).unwrap();
//!
//! let mst = TreeBuilder::new(&graph).start(1).minimum_spanning_tree().unwrap();
//! assert_eq!(mst.total_weight(), 3);
//!
//! let spt = TreeBuilder::new(&graph).start(0).shortest_path_tree().unwrap();
//! assert_eq!(spt.distances(3), Some(vec![0, 3, 2]));
//! ```

use crate::error::TreeError;
use crate::records::Records;
use crate::traits::GraphView;
use crate::VertexId;

/// Configures a Prim or Dijkstra run over a graph view.
///
/// The start vertex defaults to `0`.
pub struct TreeBuilder<'g, G: GraphView> {
    pub(crate) graph: &'g G,
    pub(crate) start: VertexId,
}

impl<'g, G: GraphView> TreeBuilder<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        TreeBuilder { graph, start: 0 }
    }

    /// Sets the vertex the tree grows from.
    pub fn start(mut self, vertex: VertexId) -> Self {
        self.start = vertex;
        self
    }

    /// Validates the start vertex, then allocates the run's records.
    pub(crate) fn records(&self) -> Result<Records<G::Weight>, TreeError> {
        let num_vertices = self.graph.num_vertices();
        if !self.graph.contains_vertex(self.start) {
            return Err(TreeError::InvalidStartVertex {
                vertex: self.start,
                num_vertices,
            });
        }
        Records::new(num_vertices, self.start)
    }
}
