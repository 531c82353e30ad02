//! Contraction state: one record per vertex or supervertex, stored in an arena.
//!
//! Original vertices occupy ids `0..originals`; every contracted cycle appends a new
//! supervertex at the end. All vertex relations are plain ids into `records`.

use super::heap::CandidateHeap;

pub(crate) type VertexId = usize;
pub(crate) type CandidateId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    /// Index into the caller's edge slice.
    Input(usize),
    /// Augmentation edge making the graph strongly connected.
    Synthetic,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) source: VertexId,
    pub(crate) destination: VertexId,
    pub(crate) weight: f64,
    pub(crate) origin: Origin,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Record {
    /// Best incoming edge selected for this (super)vertex.
    pub(crate) chosen: Option<CandidateId>,
    /// Added to the weight of every edge entering this vertex's subtree once it is contracted.
    pub(crate) offset: f64,
    /// The vertex this one chose its incoming edge from during the current growth path.
    /// Stale once that vertex is contracted; resolve it with [`ContractionState::find`].
    pub(crate) prev: Option<VertexId>,
    pub(crate) parent: Option<VertexId>,
    pub(crate) children: Vec<VertexId>,
}

/// Weight of `c` relative to the supervertex that currently contains its destination.
///
/// Walks the parent chain on every call; the result depends on which contractions have
/// happened so far and must never be cached.
pub(crate) fn adjusted_weight(records: &[Record], c: &Candidate) -> f64 {
    let mut w = c.weight;
    let mut v = c.destination;
    while let Some(p) = records[v].parent {
        w += records[v].offset;
        v = p;
    }
    w
}

pub(crate) struct ContractionState {
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) records: Vec<Record>,
    /// Kept beside `records` so a heap can be mutated while its keys read the records.
    pub(crate) heaps: Vec<CandidateHeap>,
    pub(crate) originals: usize,
}

impl ContractionState {
    pub(crate) fn new(originals: usize, candidates: Vec<Candidate>) -> Self {
        let mut state = Self {
            candidates,
            records: vec![Record::default(); originals],
            heaps: vec![CandidateHeap::default(); originals],
            originals,
        };
        for id in 0..state.candidates.len() {
            let dst = state.candidates[id].destination;
            let (records, candidates) = (&state.records, &state.candidates);
            state.heaps[dst].push(id, |c| adjusted_weight(records, &candidates[c]));
        }
        state
    }

    pub(crate) fn candidate(&self, id: CandidateId) -> &Candidate {
        &self.candidates[id]
    }

    pub(crate) fn weight(&self, id: CandidateId) -> f64 {
        adjusted_weight(&self.records, &self.candidates[id])
    }

    /// Top-most supervertex currently containing `v`.
    pub(crate) fn find(&self, mut v: VertexId) -> VertexId {
        while let Some(p) = self.records[v].parent {
            v = p;
        }
        v
    }

    /// Some original vertex contained in `v` (`v` itself when it is original).
    pub(crate) fn representative(&self, mut v: VertexId) -> VertexId {
        while v >= self.originals {
            let Some(&first) = self.records[v].children.first() else {
                debug_assert!(false, "supervertex without children");
                break;
            };
            v = first;
        }
        v
    }

    fn add_supervertex(&mut self) -> VertexId {
        self.records.push(Record::default());
        self.heaps.push(CandidateHeap::default());
        self.records.len() - 1
    }

    fn pop_candidate(&mut self, v: VertexId) -> Option<CandidateId> {
        let (records, candidates) = (&self.records, &self.candidates);
        self.heaps[v].pop_min(|c| adjusted_weight(records, &candidates[c]))
    }

    fn meld_into(&mut self, dst: VertexId, src: VertexId) {
        let mut taken = std::mem::take(&mut self.heaps[src]);
        let (records, candidates) = (&self.records, &self.candidates);
        self.heaps[dst].meld(&mut taken, |c| adjusted_weight(records, &candidates[c]));
    }

    /// Contracts the whole graph into a single supervertex.
    ///
    /// Grows a path of chosen incoming edges from an arbitrary start vertex; whenever the
    /// cheapest edge entering the path head comes from a vertex already on the path, the
    /// cycle it closes is collapsed into a fresh supervertex which becomes the new head.
    /// Requires every vertex to have an incoming edge from every other vertex.
    pub(crate) fn contract(&mut self) {
        if self.originals == 0 {
            return;
        }
        let mut a: VertexId = 0;
        while let Some(e) = self.pop_candidate(a) {
            let b = self.find(self.candidates[e].source);
            if a == b {
                continue;
            }
            self.records[a].chosen = Some(e);
            self.records[a].prev = Some(b);
            if self.records[b].chosen.is_none() {
                a = b;
                continue;
            }

            let c = self.add_supervertex();
            let mut cur = a;
            while cur != c && self.records[cur].parent.is_none() {
                let Some(chosen) = self.records[cur].chosen else {
                    debug_assert!(false, "cycle member without a chosen edge");
                    break;
                };
                let offset = -self.weight(chosen);
                let rec = &mut self.records[cur];
                rec.offset = offset;
                rec.parent = Some(c);
                let prev = rec.prev;
                self.records[c].children.push(cur);
                self.meld_into(c, cur);
                let Some(prev) = prev else {
                    debug_assert!(false, "cycle member without a predecessor");
                    break;
                };
                // `prev` may since have been folded into an earlier supervertex.
                cur = self.find(prev);
            }
            tracing::trace!(
                supervertex = c,
                members = self.records[c].children.len(),
                candidates = self.heaps[c].len(),
                "contracted cycle"
            );
            a = c;
        }
    }
}
