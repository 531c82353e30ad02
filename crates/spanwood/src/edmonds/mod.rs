//! Minimum-weight spanning arborescence (directed minimum spanning tree).
//!
//! The solver follows the contraction-tree formulation of Chu-Liu/Edmonds:
//!
//! 1. make the graph strongly connected with synthetic edges (`connect`);
//! 2. contract cycles of locally cheapest incoming edges into supervertices until a single
//!    supervertex remains, keeping per-vertex candidate heaps that are melded on contraction
//!    (`state`, `heap`);
//! 3. dismantle the contraction tree outward from the root, keeping for every vertex the one
//!    edge that enters its cycle from outside (`expand`).
//!
//! Edge weights are compared through a lazily evaluated offset chain, so contracting a cycle
//! never touches the edges entering it.

mod connect;
mod expand;
mod heap;
mod state;

use crate::error::{Error, Result};
use crate::graphlib::{Edge, VertexIndex};
use rustc_hash::FxHashSet as HashSet;
use state::{ContractionState, Origin};

/// An edge of the computed arborescence.
#[derive(Debug, PartialEq)]
pub enum TreeEdge<'a, E> {
    /// One of the caller's edges.
    Input(&'a E),
    /// An augmentation edge: the input has no path from the root to `destination`.
    Synthetic {
        source: &'a str,
        destination: &'a str,
    },
}

impl<E> Clone for TreeEdge<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TreeEdge<'_, E> {}

impl<'a, E> TreeEdge<'a, E> {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, TreeEdge::Synthetic { .. })
    }

    pub fn input(&self) -> Option<&'a E> {
        match self {
            TreeEdge::Input(e) => Some(*e),
            TreeEdge::Synthetic { .. } => None,
        }
    }
}

impl<E: Edge> Edge for TreeEdge<'_, E> {
    fn source(&self) -> &str {
        match self {
            TreeEdge::Input(e) => e.source(),
            TreeEdge::Synthetic { source, .. } => *source,
        }
    }

    fn destination(&self) -> &str {
        match self {
            TreeEdge::Input(e) => e.destination(),
            TreeEdge::Synthetic { destination, .. } => *destination,
        }
    }

    /// Synthetic edges report `+inf`.
    fn weight(&self) -> f64 {
        match self {
            TreeEdge::Input(e) => e.weight(),
            TreeEdge::Synthetic { .. } => f64::INFINITY,
        }
    }
}

/// Computes a minimum-weight spanning arborescence of `edges` rooted at `root`.
///
/// The tree spans every endpoint of `edges`. Vertices the root cannot reach through real
/// edges are attached by a [`TreeEdge::Synthetic`] edge, whose weight reads as `+inf`.
/// Edges are returned ordered by destination, following the order in which vertices first
/// appear in `edges`.
///
/// An empty edge list yields an empty tree.
pub fn edmonds<'a, E: Edge>(root: &str, edges: &'a [E]) -> Result<Vec<TreeEdge<'a, E>>> {
    if edges.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(e) = edges.iter().find(|e| !e.weight().is_finite()) {
        return Err(Error::InvalidWeight {
            from: e.source().to_string(),
            to: e.destination().to_string(),
            weight: e.weight(),
        });
    }

    let index = VertexIndex::from_edges(edges);
    let Some(root_ix) = index.get(root) else {
        return Err(Error::UnknownRoot {
            root: root.to_string(),
        });
    };

    let candidates = connect::connect_all(&index, edges)?;
    tracing::debug!(
        root,
        vertices = index.len(),
        edges = edges.len(),
        synthetic = candidates.len() - edges.len(),
        "solving minimum spanning arborescence"
    );

    let mut state = ContractionState::new(index.len(), candidates);
    state.contract();
    tracing::debug!(
        supervertices = state.records.len() - state.originals,
        "contraction finished"
    );

    if let Err(c) = state.expand(root_ix) {
        let v = state.representative(c);
        return Err(Error::ContractionIncomplete {
            vertex: index.label(v).unwrap_or_default().to_string(),
        });
    }

    let mut out: Vec<TreeEdge<'a, E>> = Vec::with_capacity(index.len().saturating_sub(1));
    for v in 0..index.len() {
        if v == root_ix {
            continue;
        }
        let Some(id) = state.records[v].chosen else {
            continue;
        };
        let c = state.candidate(id);
        out.push(match c.origin {
            Origin::Input(i) => TreeEdge::Input(&edges[i]),
            Origin::Synthetic => TreeEdge::Synthetic {
                source: index.label(c.source).unwrap_or_default(),
                destination: index.label(c.destination).unwrap_or_default(),
            },
        });
    }
    Ok(out)
}

/// A solved arborescence together with the input it was computed from.
#[derive(Debug, Clone)]
pub struct Arborescence<'a, E> {
    root: String,
    input: &'a [E],
    edges: Vec<TreeEdge<'a, E>>,
}

impl<'a, E: Edge> Arborescence<'a, E> {
    pub fn solve(root: &str, edges: &'a [E]) -> Result<Self> {
        Ok(Self {
            root: root.to_string(),
            input: edges,
            edges: edmonds(root, edges)?,
        })
    }

    pub fn edges(&self) -> &[TreeEdge<'a, E>] {
        &self.edges
    }

    /// Sum of the real edge weights; synthetic edges are left out.
    pub fn total_weight(&self) -> f64 {
        self.edges
            .iter()
            .filter(|e| !e.is_synthetic())
            .map(|e| e.weight())
            .sum()
    }

    pub fn synthetic_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_synthetic()).count()
    }

    /// Vertices that the root cannot reach through the input edges, in first-appearance order.
    pub fn unreachable(&self) -> Vec<&'a str> {
        let reached = crate::graphlib::alg::preorder(self.input, &self.root);
        let reached: HashSet<&str> = reached.iter().map(String::as_str).collect();
        VertexIndex::from_edges(self.input)
            .labels()
            .iter()
            .copied()
            .filter(|v| !reached.contains(v))
            .collect()
    }

    /// True when no synthetic edge was needed.
    pub fn is_spanning(&self) -> bool {
        self.synthetic_count() == 0
    }
}
