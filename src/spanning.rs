//! Prim's minimum spanning tree
//!
//! The heap holds every vertex not yet in the tree, keyed by the lightest
//! edge known to join it to the tree. Each extraction adds one vertex and the
//! edge that reached it, then relaxes the vertex's outgoing edges.
//!
//! The graph should be undirected (each edge stored in both directions).
//! Vertices in a different component than the start vertex are emitted with
//! no parent and an infinite weight.

use crate::builder::TreeBuilder;
use crate::error::TreeError;
use crate::indexed_binary::HeapNode;
use crate::traits::{GraphView, Weight};
use crate::tree::{Tree, TreeEdge, TreeKind};
use crate::VertexId;

impl<G: GraphView> TreeBuilder<'_, G> {
    /// Runs Prim's algorithm from the configured start vertex.
    ///
    /// Edges are returned in the order their vertices were settled, one per
    /// vertex other than the start.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(start = self.start, num_vertices = self.graph.num_vertices())
    )]
    pub fn minimum_spanning_tree(&self) -> Result<Tree<G::Weight>, TreeError> {
        let mut records = self.records()?;

        while !records.heap.is_empty() {
            let HeapNode { id: u, priority } = records.heap.extract_min()?;
            records.finished[u] = true;

            if u != self.start {
                records.tree.push(TreeEdge {
                    vertex: u,
                    parent: records.predecessor[u],
                    weight: priority,
                });
            }

            // Nothing reached u, so nothing can be reached through it
            if priority.is_infinite() {
                tracing::debug!(vertex = u, "unreachable from start");
                continue;
            }

            for (v, weight) in self.graph.neighbors(u) {
                records.check_vertex(v)?;
                if records.finished[v] {
                    continue;
                }
                if weight < records.heap.priority(v)? {
                    records.predecessor[v] = Some(u);
                    records.heap.decrease_priority(v, weight);
                }
            }

            records.trace();
        }

        tracing::debug!(edges = records.tree.len(), "spanning tree complete");
        Ok(Tree {
            kind: TreeKind::Spanning,
            source: self.start,
            edges: records.tree,
        })
    }
}

/// Computes a minimum spanning tree of `graph` with Prim's algorithm.
///
/// # Errors
/// [`TreeError::InvalidStartVertex`] if `start` is not a vertex of `graph`.
///
/// # Example
///
/// ```rust
/// use rust_greedy_trees::graph::AdjacencyGraph;
/// use rust_greedy_trees::minimum_spanning_tree;
///
/// let graph = AdjacencyGraph::from_edges(
///     4,
///     [(0, 1, 4u32), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 3)],
/// )
/// .unwrap();
///
/// let tree = minimum_spanning_tree(&graph, 0).unwrap();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.total_weight(), 6);
/// ```
pub fn minimum_spanning_tree<G: GraphView>(
    graph: &G,
    start: VertexId,
) -> Result<Tree<G::Weight>, TreeError> {
    TreeBuilder::new(graph).start(start).minimum_spanning_tree()
}
