//! Expansion: undo the contraction tree outward from the root.

use super::state::{ContractionState, VertexId};
use std::collections::VecDeque;

impl ContractionState {
    /// Detaches every sibling along the ancestor chain of `u`, queueing detached supervertices.
    ///
    /// `u` itself keeps its parent link: the walk continues through it.
    pub(crate) fn dismantle(&mut self, mut u: VertexId, pending: &mut VecDeque<VertexId>) {
        while let Some(p) = self.records[u].parent {
            for i in 0..self.records[p].children.len() {
                let v = self.records[p].children[i];
                if v == u {
                    continue;
                }
                self.records[v].parent = None;
                if !self.records[v].children.is_empty() {
                    pending.push_back(v);
                }
            }
            u = p;
        }
    }

    /// Fixes the final incoming edge of every original vertex.
    ///
    /// Each detached supervertex is entered by its own chosen edge; that edge becomes the
    /// incoming edge of its original destination, and the cycle edge previously chosen for that
    /// destination is dropped. On failure returns the supervertex that had no chosen edge.
    pub(crate) fn expand(&mut self, root: VertexId) -> Result<(), VertexId> {
        let mut pending: VecDeque<VertexId> = VecDeque::new();
        self.dismantle(root, &mut pending);
        while let Some(c) = pending.pop_front() {
            let Some(e) = self.records[c].chosen else {
                return Err(c);
            };
            let dst = self.candidate(e).destination;
            self.records[dst].chosen = Some(e);
            self.dismantle(dst, &mut pending);
        }
        Ok(())
    }
}
