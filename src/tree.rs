//! Trees produced by the builders and the paths read back out of them

use crate::graph::Edge;
use crate::traits::Weight;
use crate::VertexId;
use std::fmt;

/// What the weight of a [`TreeEdge`] means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeKind {
    /// Weight of the edge joining the vertex to its parent (Prim)
    Spanning,
    /// Total distance from the source to the vertex (Dijkstra)
    Distance,
}

/// One vertex of a tree together with its link towards the source
///
/// `parent` is `None` for a vertex the source cannot reach; such entries
/// carry [`Weight::INFINITY`] and are not real connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeEdge<W> {
    pub vertex: VertexId,
    pub parent: Option<VertexId>,
    pub weight: W,
}

impl<W: Weight> TreeEdge<W> {
    /// Returns true if this entry links the vertex into the tree
    pub fn is_connected(&self) -> bool {
        self.parent.is_some()
    }
}

/// A spanning tree or shortest-path tree rooted at `source`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<W> {
    pub kind: TreeKind,
    pub source: VertexId,
    pub edges: Vec<TreeEdge<W>>,
}

impl<W: Weight> Tree<W> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeEdge<W>> {
        self.edges.iter()
    }

    /// Returns the entry recorded for `vertex`
    pub fn edge_for(&self, vertex: VertexId) -> Option<&TreeEdge<W>> {
        self.edges.iter().find(|edge| edge.vertex == vertex)
    }

    /// Sums the weights of every connected entry.
    ///
    /// For a spanning tree this is the tree's total weight.
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .filter(|edge| edge.is_connected() && edge.vertex != self.source)
            .fold(W::default(), |acc, edge| acc.saturating_add(edge.weight))
    }

    /// Returns the distance of every vertex in `0..num_vertices`, or `None`
    /// for a spanning tree. Vertices without an entry read as infinite.
    pub fn distances(&self, num_vertices: usize) -> Option<Vec<W>> {
        if self.kind != TreeKind::Distance {
            return None;
        }
        let mut distances = vec![W::INFINITY; num_vertices];
        for edge in &self.edges {
            if let Some(slot) = distances.get_mut(edge.vertex) {
                *slot = edge.weight;
            }
        }
        Some(distances)
    }
}

impl<'a, W: Weight> IntoIterator for &'a Tree<W> {
    type Item = &'a TreeEdge<W>;
    type IntoIter = std::slice::Iter<'a, TreeEdge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The hops from a vertex down to the source, each weighted by its own cost
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<W> {
    pub edges: Vec<Edge<W>>,
}

impl<W: Weight> Path<W> {
    /// Returns the number of hops
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<W>> {
        self.edges.iter()
    }

    /// Sums the hop weights
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::default(), |acc, edge| acc.saturating_add(edge.weight))
    }

    /// Returns the visited vertices, starting at the path's origin
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self.edges.iter().map(|edge| edge.from).collect();
        if let Some(last) = self.edges.last() {
            vertices.push(last.to);
        }
        vertices
    }
}

impl<W: fmt::Debug> fmt::Display for Path<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            write!(f, "{} --> ", edge)?;
        }
        write!(f, "NULL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance_tree() -> Tree<u32> {
        Tree {
            kind: TreeKind::Distance,
            source: 0,
            edges: vec![
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
                    parent: None,
                    weight: u32::MAX,
                },
            ],
        }
    }

    #[test]
    fn test_distances() {
        let tree = distance_tree();
        assert_eq!(tree.distances(5), Some(vec![0, 3, 1, u32::MAX, u32::MAX]));
        assert_eq!(tree.edge_for(1).and_then(|e| e.parent), Some(2));
        assert!(!tree.edge_for(3).unwrap().is_connected());
    }

    #[test]
    fn test_spanning_total_weight_skips_unreachable() {
        let tree = Tree {
            kind: TreeKind::Spanning,
            source: 0,
            edges: vec![
                TreeEdge {
                    vertex: 2,
                    parent: Some(0),
                    weight: 1u32,
                },
                TreeEdge {
                    vertex: 1,
                    parent: Some(2),
                    weight: 2,
                },
                TreeEdge {
                    vertex: 3,
                    parent: None,
                    weight: u32::MAX,
                },
            ],
        };
        assert_eq!(tree.total_weight(), 3);
        assert_eq!(tree.distances(4), None);
        assert_eq!(tree.iter().count(), 3);
    }

    #[test]
    fn test_path_helpers() {
        let path = Path {
            edges: vec![Edge::new(1, 2, 2u32), Edge::new(2, 0, 1)],
        };
        assert_eq!(path.len(), 2);
        assert_eq!(path.total_weight(), 3);
        assert_eq!(path.vertices(), vec![1, 2, 0]);
        assert_eq!(path.to_string(), "(1 -- 2, 2) --> (2 -- 0, 1) --> NULL");
        assert!(Path::<u32>::default().vertices().is_empty());
    }
}
