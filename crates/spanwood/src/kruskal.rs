//! Minimum spanning forest via Kruskal's algorithm.
//!
//! Edge orientation is ignored.

use crate::graphlib::{Edge, VertexIndex};

/// Disjoint sets over dense vertex ids, with path halving and union by rank.
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets of `a` and `b`; false when they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Returns a minimum spanning forest of `edges`, in selection (ascending weight) order.
///
/// Equal weights keep their input order. The input slice is left untouched.
pub fn kruskal<E: Edge>(edges: &[E]) -> Vec<&E> {
    let index = VertexIndex::from_edges(edges);
    let mut sets = DisjointSet::new(index.len());

    let mut sorted: Vec<&E> = edges.iter().collect();
    sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut forest: Vec<&E> = Vec::with_capacity(index.len().saturating_sub(1));
    for e in sorted {
        let (Some(v), Some(w)) = (index.get(e.source()), index.get(e.destination())) else {
            continue;
        };
        if sets.union(v, w) {
            forest.push(e);
        }
    }
    tracing::debug!(
        vertices = index.len(),
        edges = edges.len(),
        selected = forest.len(),
        "minimum spanning forest"
    );
    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_reports_whether_sets_were_merged() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.find(0), sets.find(3));
    }
}
