#![forbid(unsafe_code)]

//! Spanning structures over labelled, weighted edge lists.
//!
//! - [`edmonds`]: minimum-weight spanning arborescence rooted at a chosen vertex, using the
//!   contraction-tree formulation of Chu-Liu/Edmonds with mergeable candidate heaps.
//! - [`kruskal`]: minimum spanning forest of the underlying undirected graph.
//!
//! Both consume any type implementing [`Edge`].

pub use spanwood_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod edmonds;
pub mod error;
pub mod kruskal;

pub use edmonds::{Arborescence, TreeEdge, edmonds};
pub use error::{Error, Result};
pub use graphlib::{Edge, WeightedEdge, total_weight};
pub use kruskal::kruskal;
