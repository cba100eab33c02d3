//! Dijkstra's shortest-path tree and path reconstruction
//!
//! [`shortest_path_tree`] settles vertices in order of their distance from
//! the start, lowering a vertex's key with `decrease_priority` whenever a
//! shorter route to it is found. The resulting [`Tree`] stores the absolute
//! distance of every vertex.
//!
//! [`all_shortest_paths`] walks any tree backward from each vertex to the
//! start and returns the hops with their individual weights. For a distance
//! tree the weight of the hop `x -> parent(x)` is
//! `distance[x] - distance[parent(x)]`; a spanning tree already stores hop
//! weights.
//!
//! # Example
//!
//! ```rust
//! use rust_greedy_trees::graph::AdjacencyGraph;
//! use rust_greedy_trees::pathfinding::{all_shortest_paths, shortest_path_tree};
//!
//! let graph = AdjacencyGraph::from_edges(
//!     4,
//!     [(0, 1, 4u32), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 3)],
//! )
//! .unwrap();
//!
//! let tree = shortest_path_tree(&graph, 0).unwrap();
//! assert_eq!(tree.distances(4), Some(vec![0, 3, 1, 4]));
//!
//! let paths = all_shortest_paths(&tree, 4, 0).unwrap();
//! assert_eq!(paths[&1].vertices(), vec![1, 2, 0]);
//! assert_eq!(paths[&1].total_weight(), 3);
//! ```

use crate::builder::TreeBuilder;
use crate::error::TreeError;
use crate::graph::Edge;
use crate::indexed_binary::HeapNode;
use crate::traits::{GraphView, Weight};
use crate::tree::{Path, Tree, TreeEdge, TreeKind};
use crate::VertexId;
use rustc_hash::FxHashMap;

/// Paths keyed by the vertex they start from
pub type ShortestPaths<W> = FxHashMap<VertexId, Path<W>>;

impl<G: GraphView> TreeBuilder<'_, G> {
    /// Runs Dijkstra's algorithm from the configured start vertex.
    ///
    /// The tree lists the start vertex first as its own parent at distance
    /// zero, then every other vertex in id order.
    ///
    /// # Errors
    /// - [`TreeError::InvalidStartVertex`] for a start outside the graph
    /// - [`TreeError::NegativeWeight`] when relaxation meets a negative edge
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(start = self.start, num_vertices = self.graph.num_vertices())
    )]
    pub fn shortest_path_tree(&self) -> Result<Tree<G::Weight>, TreeError> {
        let mut records = self.records()?;

        while !records.heap.is_empty() {
            let HeapNode { id: u, priority: dist_u } = records.heap.extract_min()?;
            records.finished[u] = true;
            records.distance[u] = dist_u;

            if dist_u.is_infinite() {
                tracing::debug!(vertex = u, "unreachable from start");
                continue;
            }

            for (v, weight) in self.graph.neighbors(u) {
                records.check_vertex(v)?;
                if weight.is_negative() {
                    return Err(TreeError::NegativeWeight { from: u, to: v });
                }
                if records.finished[v] {
                    continue;
                }

                let candidate = dist_u.saturating_add(weight);
                if candidate < records.heap.priority(v)? {
                    records.predecessor[v] = Some(u);
                    records.distance[v] = candidate;
                    records.heap.decrease_priority(v, candidate);
                }
            }

            records.trace();
        }

        // Distances are only final once the heap has drained
        records.tree.push(TreeEdge {
            vertex: self.start,
            parent: Some(self.start),
            weight: G::Weight::default(),
        });
        for id in (0..records.num_vertices).filter(|&id| id != self.start) {
            records.tree.push(TreeEdge {
                vertex: id,
                parent: records.predecessor[id],
                weight: records.distance[id],
            });
        }

        tracing::debug!(edges = records.tree.len(), "distance tree complete");
        Ok(Tree {
            kind: TreeKind::Distance,
            source: self.start,
            edges: records.tree,
        })
    }
}

/// Computes a shortest-path tree of `graph` rooted at `start`.
///
/// Edge weights must be non-negative.
pub fn shortest_path_tree<G: GraphView>(
    graph: &G,
    start: VertexId,
) -> Result<Tree<G::Weight>, TreeError> {
    TreeBuilder::new(graph).start(start).shortest_path_tree()
}

/// Reconstructs the path from every vertex back to `start`.
///
/// Vertices the tree marks as unreachable, and `start` itself, have no
/// entry in the result.
///
/// # Errors
/// - [`TreeError::InvalidStartVertex`] if `start >= num_vertices`
/// - [`TreeError::MalformedTree`] if a walk does not reach `start` within
///   `num_vertices` hops, or the tree names vertices outside the graph
#[tracing::instrument(level = "debug", skip(tree), fields(kind = ?tree.kind, source = tree.source))]
pub fn all_shortest_paths<W: Weight>(
    tree: &Tree<W>,
    num_vertices: usize,
    start: VertexId,
) -> Result<ShortestPaths<W>, TreeError> {
    if start >= num_vertices {
        return Err(TreeError::InvalidStartVertex {
            vertex: start,
            num_vertices,
        });
    }

    let mut links: Vec<Option<&TreeEdge<W>>> = vec![None; num_vertices];
    for edge in tree {
        let slot = links
            .get_mut(edge.vertex)
            .ok_or(TreeError::MalformedTree { vertex: edge.vertex })?;
        *slot = Some(edge);
    }

    let distance_of = |vertex: VertexId| -> Result<W, TreeError> {
        if vertex == tree.source {
            return Ok(W::default());
        }
        links
            .get(vertex)
            .copied()
            .flatten()
            .map(|edge| edge.weight)
            .ok_or(TreeError::MalformedTree { vertex })
    };

    let mut paths: ShortestPaths<W> = FxHashMap::default();
    for vertex in (0..num_vertices).filter(|&v| v != start) {
        let own = links[vertex].ok_or(TreeError::MalformedTree { vertex })?;
        if !own.is_connected() {
            continue;
        }

        let mut hops = Vec::new();
        let mut current = vertex;
        while current != start {
            if hops.len() >= num_vertices {
                return Err(TreeError::MalformedTree { vertex });
            }
            let link = links
                .get(current)
                .copied()
                .flatten()
                .ok_or(TreeError::MalformedTree { vertex: current })?;
            let parent = link
                .parent
                .ok_or(TreeError::MalformedTree { vertex: current })?;

            let weight = match tree.kind {
                TreeKind::Spanning => link.weight,
                TreeKind::Distance => {
                    let parent_distance = distance_of(parent)?;
                    if link.weight < parent_distance {
                        return Err(TreeError::MalformedTree { vertex: current });
                    }
                    link.weight - parent_distance
                }
            };
            hops.push(Edge::new(current, parent, weight));
            current = parent;
        }

        paths.insert(vertex, Path { edges: hops });
    }

    tracing::debug!(paths = paths.len(), "paths reconstructed");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;
    use crate::spanning::minimum_spanning_tree;

    fn sample_graph() -> AdjacencyGraph<u32> {
        AdjacencyGraph::from_edges(4, [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 3)])
            .unwrap()
    }

    #[test]
    fn test_sample_distance_tree() {
        let tree = shortest_path_tree(&sample_graph(), 0).unwrap();

        assert_eq!(tree.kind, TreeKind::Distance);
        assert_eq!(
            tree.edges,
            vec![
                TreeEdge {
                    vertex: 0,
                    parent: Some(0),
                    weight: 0,
                },
                TreeEdge {
                    vertex: 1,
                    parent: Some(2),
                    weight: 3,
                },
                TreeEdge {
                    vertex: 2,
                    parent: Some(0),
                    weight: 1,
                },
                TreeEdge {
                    vertex: 3,
                    parent: Some(2),
                    weight: 4,
                },
            ]
        );
    }

    #[test]
    fn test_decrease_key_finds_optimal() {
        //   0 --10-> 1 --1-> 3
        //   |        ^
        //   1        5
        //   v        |
        //   2 -------+
        let mut graph = AdjacencyGraph::new(4);
        graph.add_edge(0, 1, 10u32).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(1, 3, 1).unwrap();
        graph.add_edge(2, 1, 5).unwrap();

        let tree = shortest_path_tree(&graph, 0).unwrap();
        assert_eq!(tree.distances(4), Some(vec![0, 6, 1, 7]));

        let paths = all_shortest_paths(&tree, 4, 0).unwrap();
        assert_eq!(paths[&3].vertices(), vec![3, 1, 2, 0]);
        let hops: Vec<u32> = paths[&3].iter().map(|e| e.weight).collect();
        assert_eq!(hops, vec![1, 5, 1]);
    }

    #[test]
    fn test_two_hop_path_weights() {
        let tree = shortest_path_tree(&sample_graph(), 0).unwrap();
        let paths = all_shortest_paths(&tree, 4, 0).unwrap();

        // 1 is reached through 2, the direct child of the source
        assert_eq!(paths[&1].edges, vec![Edge::new(1, 2, 2), Edge::new(2, 0, 1)]);
        assert_eq!(paths[&2].edges, vec![Edge::new(2, 0, 1)]);
        assert_eq!(paths[&3].edges, vec![Edge::new(3, 2, 3), Edge::new(2, 0, 1)]);
        assert!(!paths.contains_key(&0));
    }

    #[test]
    fn test_paths_from_spanning_tree() {
        let tree = minimum_spanning_tree(&sample_graph(), 0).unwrap();
        let paths = all_shortest_paths(&tree, 4, 0).unwrap();

        assert_eq!(paths.len(), 3);
        assert_eq!(paths[&1].edges, vec![Edge::new(1, 2, 2), Edge::new(2, 0, 1)]);
        assert_eq!(paths[&3].total_weight(), 4);
    }

    #[test]
    fn test_unreachable_vertices() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(0, 1, 2u32).unwrap();
        graph.add_edge(2, 0, 1).unwrap();

        let tree = shortest_path_tree(&graph, 0).unwrap();
        let unreachable = tree.edge_for(2).unwrap();
        assert_eq!(unreachable.parent, None);
        assert_eq!(unreachable.weight, u32::MAX);

        let paths = all_shortest_paths(&tree, 3, 0).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths.contains_key(&1));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph = AdjacencyGraph::new(2);
        graph.add_edge(0, 1, -3i32).unwrap();
        assert_eq!(
            shortest_path_tree(&graph, 0),
            Err(TreeError::NegativeWeight { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_invalid_start() {
        let graph = sample_graph();
        assert!(matches!(
            shortest_path_tree(&graph, 4),
            Err(TreeError::InvalidStartVertex { vertex: 4, .. })
        ));

        let tree = shortest_path_tree(&graph, 0).unwrap();
        assert!(matches!(
            all_shortest_paths(&tree, 4, 4),
            Err(TreeError::InvalidStartVertex { vertex: 4, .. })
        ));
    }

    #[test]
    fn test_cycle_is_malformed() {
        let tree = Tree {
            kind: TreeKind::Spanning,
            source: 0,
            edges: vec![
                TreeEdge {
                    vertex: 1,
                    parent: Some(2),
                    weight: 1u32,
                },
                TreeEdge {
                    vertex: 2,
                    parent: Some(1),
                    weight: 1,
                },
            ],
        };
        assert!(matches!(
            all_shortest_paths(&tree, 3, 0),
            Err(TreeError::MalformedTree { .. })
        ));
    }

    #[test]
    fn test_foreign_vertex_is_malformed() {
        let tree = Tree {
            kind: TreeKind::Spanning,
            source: 0,
            edges: vec![TreeEdge {
                vertex: 5,
                parent: Some(0),
                weight: 1u32,
            }],
        };
        assert_eq!(
            all_shortest_paths(&tree, 2, 0),
            Err(TreeError::MalformedTree { vertex: 5 })
        );
    }

    #[test]
    fn test_missing_entry_is_malformed() {
        let tree = Tree {
            kind: TreeKind::Spanning,
            source: 0,
            edges: vec![TreeEdge {
                vertex: 1,
                parent: Some(0),
                weight: 1u32,
            }],
        };
        assert_eq!(
            all_shortest_paths(&tree, 3, 0),
            Err(TreeError::MalformedTree { vertex: 2 })
        );
    }

    #[test]
    fn test_child_closer_than_parent_is_malformed() {
        let tree = Tree {
            kind: TreeKind::Distance,
            source: 0,
            edges: vec![
                TreeEdge {
                    vertex: 0,
                    parent: Some(0),
                    weight: 0u32,
                },
                TreeEdge {
                    vertex: 1,
                    parent: Some(0),
                    weight: 5,
                },
                TreeEdge {
                    vertex: 2,
                    parent: Some(1),
                    weight: 3,
                },
            ],
        };
        assert_eq!(
            all_shortest_paths(&tree, 3, 0),
            Err(TreeError::MalformedTree { vertex: 2 })
        );
    }
}
