//! Per-session store of search results, keyed by motif.
//!
//! Each motif maps to the positions of its most recent search. Recording a
//! motif again replaces its previous entry; nothing is merged or evicted.
use std::collections::HashMap;

/// Motif -> ascending match positions.
#[derive(Clone, Debug, Default)]
pub struct MatchStore {
    entries: HashMap<String, Vec<usize>>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `positions` for `motif`, replacing any earlier entry.
    pub fn record(&mut self, motif: &str, positions: Vec<usize>) {
        self.entries.insert(motif.to_string(), positions);
    }

    /// Number of stored positions for `motif` (0 if it was never searched).
    pub fn count(&self, motif: &str) -> usize {
        self.entries.get(motif).map_or(0, Vec::len)
    }

    /// Stored positions for `motif`; empty if absent.
    pub fn positions_of(&self, motif: &str) -> &[usize] {
        self.entries.get(motif).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, motif: &str) -> bool {
        self.entries.contains_key(motif)
    }

    /// Drop the entry for `motif`, returning its positions.
    pub fn remove(&mut self, motif: &str) -> Option<Vec<usize>> {
        self.entries.remove(motif)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Searched motifs, in no particular order.
    pub fn motifs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
