//! Edge contract and edge-list helpers used by `spanwood`.
//!
//! Graphs are never materialized as adjacency containers here: both solvers consume a flat
//! slice of edges, and vertices are identified purely by their string labels.

pub mod alg;
mod edge;
mod index;

pub use edge::{Edge, WeightedEdge};
pub use index::VertexIndex;

/// Sums the weights of `edges`.
///
/// Infinite weights propagate, so a tree that needed an augmentation edge sums to `inf`.
pub fn total_weight<E: Edge>(edges: &[E]) -> f64 {
    edges.iter().map(|e| e.weight()).sum()
}
