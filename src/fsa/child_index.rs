//! Reverse child enumeration for relocation
//!
//! BASE/CHECK alone cannot enumerate a state's children without scanning
//! the whole code range, and relocation needs exactly that enumeration.
//! This index tracks, per state, the set of codes with a live outgoing
//! transition. It must match `{c : check[base[s] + c] == s}` whenever no
//! relocation is in progress.

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::StateId;

/// Per-state sets of outgoing transition codes.
///
/// Code sets are ordered so relocation walks children in a deterministic
/// order for a given alphabet.
#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    children: AHashMap<StateId, BTreeSet<u32>>,
}

impl ChildIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transition `(state, code)`
    pub fn record(&mut self, state: StateId, code: u32) {
        self.children.entry(state).or_default().insert(code);
    }

    /// Drop all recorded children of a vacated state
    pub fn remove_state(&mut self, state: StateId) {
        self.children.remove(&state);
    }

    /// Move a state's registration to its relocated index
    pub fn transfer(&mut self, from: StateId, to: StateId) {
        if let Some(codes) = self.children.remove(&from) {
            self.children.insert(to, codes);
        }
    }

    /// The current child codes of a state, empty if it has none
    pub fn codes(&self, state: StateId) -> impl Iterator<Item = u32> + '_ {
        self.children
            .get(&state)
            .into_iter()
            .flat_map(|codes| codes.iter().copied())
    }

    /// Snapshot of a state's child codes, for iteration across mutation
    pub fn codes_vec(&self, state: StateId) -> Vec<u32> {
        self.codes(state).collect()
    }

    /// Number of children recorded for a state
    pub fn degree(&self, state: StateId) -> usize {
        self.children.get(&state).map_or(0, BTreeSet::len)
    }
}
