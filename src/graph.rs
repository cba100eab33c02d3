//! Dense adjacency-list graph
//!
//! Vertices are the ids `0..num_vertices`; each vertex owns a vector of its
//! outgoing edges. Undirected edges are stored once per direction.

use crate::error::GraphError;
use crate::traits::{GraphView, Weight};
use crate::VertexId;
use std::fmt;

/// A weighted, directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: VertexId, to: VertexId, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

impl<W: fmt::Debug> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -- {}, {:?})", self.from, self.to, self.weight)
    }
}

/// A graph stored as one adjacency vector per vertex
///
/// # Example
///
/// ```rust
/// use rust_greedy_trees::graph::AdjacencyGraph;
/// use rust_greedy_trees::GraphView;
///
/// let mut graph = AdjacencyGraph::new(3);
/// graph.add_undirected_edge(0, 1, 4u32).unwrap();
/// graph.add_edge(1, 2, 7).unwrap();
///
/// assert_eq!(graph.num_edges(), 3);
/// assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(0, 4), (2, 7)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<W> {
    adjacency: Vec<Vec<Edge<W>>>,
    num_edges: usize,
}

impl<W: Weight> AdjacencyGraph<W> {
    /// Creates a graph with `num_vertices` vertices and no edges
    pub fn new(num_vertices: usize) -> Self {
        AdjacencyGraph {
            adjacency: vec![Vec::new(); num_vertices],
            num_edges: 0,
        }
    }

    /// Builds an undirected graph from `(a, b, weight)` triples
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, W)>,
    {
        let mut graph = Self::new(num_vertices);
        for (a, b, weight) in edges {
            graph.add_undirected_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Adds the directed edge `from -> to`
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(Edge::new(from, to, weight));
        self.num_edges += 1;
        Ok(())
    }

    /// Adds `a -> b` and `b -> a` with the same weight
    pub fn add_undirected_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: W,
    ) -> Result<(), GraphError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Returns the outgoing edges of `vertex`, or an empty slice for an unknown id
    pub fn edges(&self, vertex: VertexId) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over every stored edge, grouped by source vertex
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                num_vertices: self.adjacency.len(),
            })
        }
    }
}

impl<W: Weight> GraphView for AdjacencyGraph<W> {
    type Weight = W;

    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.edges(vertex).iter().map(|edge| (edge.to, edge.weight))
    }
}

impl<W: fmt::Debug> fmt::Display for AdjacencyGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Number of vertices: {}. Number of edges: {}.",
            self.adjacency.len(),
            self.num_edges
        )?;
        writeln!(f)?;
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            write!(f, "{}: ", vertex)?;
            for edge in edges {
                write!(f, "{} --> ", edge)?;
            }
            writeln!(f, "NULL")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edges() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(0, 1, 5u32).unwrap();
        graph.add_undirected_edge(1, 2, 3).unwrap();

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.edges(0), &[Edge::new(0, 1, 5)]);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(1, 3)]);
        assert!(graph.edges(7).is_empty());
        assert_eq!(graph.all_edges().count(), 3);
    }

    #[test]
    fn test_out_of_range_vertex() {
        let mut graph = AdjacencyGraph::new(2);
        assert_eq!(
            graph.add_edge(0, 2, 1u32),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                num_vertices: 2
            })
        );
        assert_eq!(
            graph.add_undirected_edge(5, 0, 1),
            Err(GraphError::VertexOutOfRange {
                vertex: 5,
                num_vertices: 2
            })
        );
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_from_edges() {
        let graph = AdjacencyGraph::from_edges(3, [(0, 1, 2u32), (1, 2, 4)]).unwrap();
        assert_eq!(graph.num_edges(), 4);
        assert!(AdjacencyGraph::from_edges(2, [(0, 3, 1u32)]).is_err());
    }

    #[test]
    fn test_display() {
        let mut graph = AdjacencyGraph::new(2);
        graph.add_edge(0, 1, 9u32).unwrap();
        let text = graph.to_string();
        assert!(text.starts_with("Number of vertices: 2. Number of edges: 1."));
        assert!(text.contains("0: (0 -- 1, 9) --> NULL"));
        assert!(text.contains("1: NULL"));
    }
}
