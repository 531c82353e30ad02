use crate::Edge;
use rustc_hash::FxHashMap as HashMap;

/// Interns vertex labels into dense `usize` ids.
///
/// Ids are handed out in first-appearance order, so any traversal over `0..len()` is
/// deterministic for a given edge list.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex<'a> {
    labels: Vec<&'a str>,
    ix: HashMap<&'a str, usize>,
}

impl<'a> VertexIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns every endpoint of `edges`, visiting the source before the destination.
    pub fn from_edges<E: Edge>(edges: &'a [E]) -> Self {
        let mut index = Self::new();
        for e in edges {
            index.intern(e.source());
            index.intern(e.destination());
        }
        index
    }

    pub fn intern(&mut self, label: &'a str) -> usize {
        if let Some(&ix) = self.ix.get(label) {
            return ix;
        }
        let ix = self.labels.len();
        self.labels.push(label);
        self.ix.insert(label, ix);
        ix
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.ix.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ix.contains_key(label)
    }

    pub fn label(&self, ix: usize) -> Option<&'a str> {
        self.labels.get(ix).copied()
    }

    pub fn labels(&self) -> &[&'a str] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
