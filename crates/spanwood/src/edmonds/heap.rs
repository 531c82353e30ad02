//! Mergeable min-heap of candidate edges.
//!
//! Keys are not stored: every comparison calls back into `key`, which reads the adjusted weight
//! from the live contraction state. A heap is therefore only ordered relative to the state at
//! the time of its last mutation, and callers must re-heapify (via [`CandidateHeap::meld`])
//! whenever the keys of its members shift by different amounts.

use super::state::CandidateId;

#[derive(Debug, Clone, Default)]
pub(crate) struct CandidateHeap {
    items: Vec<CandidateId>,
}

impl CandidateHeap {
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn push(&mut self, id: CandidateId, key: impl Fn(CandidateId) -> f64) {
        self.items.push(id);
        self.sift_up(self.items.len() - 1, &key);
    }

    pub(crate) fn pop_min(&mut self, key: impl Fn(CandidateId) -> f64) -> Option<CandidateId> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0, &key);
        }
        min
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    ///
    /// Concatenates and re-heapifies once. When `self` is empty the elements of `other` are
    /// taken over as-is, which requires `other` to already be ordered under `key`.
    pub(crate) fn meld(&mut self, other: &mut CandidateHeap, key: impl Fn(CandidateId) -> f64) {
        if other.items.is_empty() {
            return;
        }
        if self.items.is_empty() {
            std::mem::swap(&mut self.items, &mut other.items);
            return;
        }
        self.items.append(&mut other.items);
        self.heapify(&key);
    }

    fn heapify(&mut self, key: &impl Fn(CandidateId) -> f64) {
        for i in (0..self.items.len() / 2).rev() {
            self.sift_down(i, key);
        }
    }

    fn sift_up(&mut self, mut i: usize, key: &impl Fn(CandidateId) -> f64) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if key(self.items[i]) < key(self.items[parent]) {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize, key: &impl Fn(CandidateId) -> f64) {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && key(self.items[left]) < key(self.items[smallest]) {
                smallest = left;
            }
            if right < n && key(self.items[right]) < key(self.items[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}
