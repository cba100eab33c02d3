//! Common traits for weights and graph views
//!
//! The tree builders never touch a concrete graph type. They read a graph
//! through [`GraphView`], which only needs a vertex count and the outgoing
//! edges of a vertex, and they order priorities through [`Weight`].

use crate::VertexId;
use std::fmt;
use std::ops::{Add, Sub};

/// Trait for types that can be used as edge weights and priorities.
///
/// Weights must be totally ordered, copyable and support addition and
/// subtraction. `Default` is the zero weight given to the source vertex.
/// [`Weight::INFINITY`] is the priority of a vertex that no edge has reached
/// yet; it must compare greater than any finite sum of edge weights.
pub trait Weight: Ord + Copy + Add<Output = Self> + Sub<Output = Self> + Default + fmt::Debug {
    /// The "not reached" sentinel
    const INFINITY: Self;

    /// Adds two weights, clamping at [`Weight::INFINITY`]
    fn saturating_add(self, rhs: Self) -> Self;

    /// Returns true if this weight is the sentinel
    fn is_infinite(self) -> bool {
        self == Self::INFINITY
    }

    /// Returns true if this weight is below zero
    fn is_negative(self) -> bool {
        self < Self::default()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const INFINITY: Self = <$t>::MAX;

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(feature = "float-weights")]
mod float_weights {
    use super::Weight;
    use ordered_float::OrderedFloat;

    macro_rules! impl_float_weight {
        ($($t:ty),*) => {
            $(
                impl Weight for OrderedFloat<$t> {
                    const INFINITY: Self = OrderedFloat(<$t>::INFINITY);

                    #[inline]
                    fn saturating_add(self, rhs: Self) -> Self {
                        // IEEE addition already saturates at +inf
                        self + rhs
                    }
                }
            )*
        };
    }

    impl_float_weight!(f32, f64);
}

/// Read access to a weighted, directed graph with dense vertex ids.
///
/// Undirected graphs store each edge in both directions. Vertex ids are
/// `0..num_vertices()`.
///
/// # Example
///
/// ```rust
/// use rust_greedy_trees::{GraphView, VertexId};
///
/// struct Ring(usize);
///
/// impl GraphView for Ring {
///     type Weight = u32;
///
///     fn num_vertices(&self) -> usize {
///         self.0
///     }
///
///     fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, u32)> + '_ {
///         std::iter::once(((vertex + 1) % self.0, 1))
///     }
/// }
///
/// let ring = Ring(4);
/// assert!(ring.contains_vertex(3));
/// assert!(!ring.contains_vertex(4));
/// ```
pub trait GraphView {
    /// The edge weight type
    type Weight: Weight;

    /// Returns the number of vertices
    fn num_vertices(&self) -> usize;

    /// Returns the outgoing edges of `vertex` as `(to, weight)` pairs
    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Self::Weight)> + '_;

    /// Returns true if `vertex` is a valid id in this graph
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.num_vertices()
    }
}
