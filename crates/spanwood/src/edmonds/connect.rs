//! Strong-connectivity augmentation.

use super::state::{Candidate, Origin};
use crate::graphlib::{Edge, VertexIndex};
use crate::error::{Error, Result};
use rustc_hash::FxHashSet as HashSet;

/// Weight given to synthetic edges, standing in for `+inf`.
///
/// Exceeds twice the total magnitude of all real weights, so removing one synthetic edge always
/// outweighs any rearrangement of real edges, while keeping offset arithmetic finite
/// (`inf - inf` would poison the heap ordering with NaN). `None` when a chain of `vertices`
/// such weights would overflow.
pub(crate) fn synthetic_weight(magnitude: f64, vertices: usize) -> Option<f64> {
    let w = 2.0 * magnitude + 1.0;
    (w * (vertices as f64 + 1.0)).is_finite().then_some(w)
}

/// Converts `edges` into candidates and appends a synthetic edge for every ordered pair of
/// distinct vertices that has no direct edge.
pub(crate) fn connect_all<E: Edge>(
    index: &VertexIndex<'_>,
    edges: &[E],
) -> Result<Vec<Candidate>> {
    let n = index.len();
    let mut linked: HashSet<(usize, usize)> = HashSet::default();
    let mut out: Vec<Candidate> = Vec::with_capacity(edges.len() + n * n.saturating_sub(1));
    let mut magnitude = 0.0;

    for (i, e) in edges.iter().enumerate() {
        let (Some(v), Some(w)) = (index.get(e.source()), index.get(e.destination())) else {
            debug_assert!(false, "edge endpoint missing from the vertex index");
            continue;
        };
        linked.insert((v, w));
        magnitude += e.weight().abs();
        out.push(Candidate {
            source: v,
            destination: w,
            weight: e.weight(),
            origin: Origin::Input(i),
        });
    }

    let Some(weight) = synthetic_weight(magnitude, n) else {
        return Err(Error::WeightRange { magnitude });
    };
    for u in 0..n {
        for v in 0..n {
            if u != v && !linked.contains(&(u, v)) {
                out.push(Candidate {
                    source: u,
                    destination: v,
                    weight,
                    origin: Origin::Synthetic,
                });
            }
        }
    }
    Ok(out)
}
