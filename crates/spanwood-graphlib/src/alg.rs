//! Structural helpers over flat edge lists.

use crate::{Edge, VertexIndex};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("root `{root}` has an incoming edge")]
    RootHasParent { root: String },
    #[error("vertex `{vertex}` has more than one incoming edge")]
    MultipleParents { vertex: String },
    #[error("vertex `{vertex}` is not reachable from the root")]
    Unreached { vertex: String },
    #[error("vertex `{vertex}` is not covered by the tree")]
    Uncovered { vertex: String },
}

fn successors(index: &VertexIndex<'_>, edges: &[impl Edge]) -> Vec<Vec<usize>> {
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); index.len()];
    for e in edges {
        let (Some(v), Some(w)) = (index.get(e.source()), index.get(e.destination())) else {
            continue;
        };
        out[v].push(w);
    }
    out
}

/// Vertices reachable from `root` along directed edges, in depth-first preorder.
///
/// Returns an empty list when `root` is not an endpoint of any edge.
pub fn preorder<E: Edge>(edges: &[E], root: &str) -> Vec<String> {
    let index = VertexIndex::from_edges(edges);
    let Some(start) = index.get(root) else {
        return Vec::new();
    };
    let succ = successors(&index, edges);

    let mut visited = vec![false; index.len()];
    let mut out: Vec<String> = Vec::new();
    let mut stack: Vec<usize> = vec![start];
    while let Some(v) = stack.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        if let Some(label) = index.label(v) {
            out.push(label.to_string());
        }
        // Reverse so that the first listed successor is visited first.
        for &w in succ[v].iter().rev() {
            if !visited[w] {
                stack.push(w);
            }
        }
    }
    out
}

/// Connected components, ignoring edge orientation.
///
/// Components are listed in first-appearance order of their first vertex.
pub fn components<E: Edge>(edges: &[E]) -> Vec<Vec<String>> {
    let index = VertexIndex::from_edges(edges);
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); index.len()];
    for e in edges {
        let (Some(v), Some(w)) = (index.get(e.source()), index.get(e.destination())) else {
            continue;
        };
        adj[v].push(w);
        adj[w].push(v);
    }

    let mut seen = vec![false; index.len()];
    let mut out: Vec<Vec<String>> = Vec::new();
    for start in 0..index.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut comp: Vec<String> = Vec::new();
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            if let Some(label) = index.label(v) {
                comp.push(label.to_string());
            }
            for &n in &adj[v] {
                if !seen[n] {
                    seen[n] = true;
                    q.push_back(n);
                }
            }
        }
        out.push(comp);
    }
    out
}

/// Checks that `tree` is an arborescence rooted at `root` spanning every label in `vertices`.
///
/// Every non-root vertex must have exactly one incoming tree edge and be reachable from the
/// root; the root must have none.
pub fn verify_arborescence<'a, E: Edge>(
    root: &'a str,
    vertices: impl IntoIterator<Item = &'a str>,
    tree: &'a [E],
) -> Result<(), Violation> {
    let mut index = VertexIndex::new();
    index.intern(root);
    for v in vertices {
        index.intern(v);
    }
    let expected = index.len();
    for e in tree {
        index.intern(e.source());
        index.intern(e.destination());
    }

    let mut has_parent = vec![false; index.len()];
    for e in tree {
        let w = index.get(e.destination()).unwrap_or_default();
        if e.destination() == root {
            return Err(Violation::RootHasParent {
                root: root.to_string(),
            });
        }
        if has_parent[w] {
            return Err(Violation::MultipleParents {
                vertex: e.destination().to_string(),
            });
        }
        has_parent[w] = true;
    }

    let reached = preorder(tree, root);
    let mut reached_ix = vec![false; index.len()];
    reached_ix[0] = true;
    for label in &reached {
        if let Some(ix) = index.get(label) {
            reached_ix[ix] = true;
        }
    }

    for (ix, label) in index.labels().iter().enumerate() {
        if reached_ix[ix] {
            continue;
        }
        if ix < expected && !has_parent[ix] {
            return Err(Violation::Uncovered {
                vertex: label.to_string(),
            });
        }
        return Err(Violation::Unreached {
            vertex: label.to_string(),
        });
    }
    Ok(())
}
