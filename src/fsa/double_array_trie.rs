//! Double Array Trie implementation
//!
//! A trie encoded as the BASE/CHECK array pair instead of linked nodes:
//!
//! ```text
//! candidate = base[state] + code
//! if check[candidate] == state then the transition is valid
//! ```
//!
//! Each character transition costs one array read plus one addition, with
//! no pointer indirection. The hard part is construction: a new child slot
//! may already be owned by a different parent, in which case the current
//! state's entire subtree is relocated to a conflict-free region of the
//! arrays while every previously inserted word stays reachable. Relocation
//! has no rollback path; the free-base search is required to make the
//! retried transition succeed, and a second collision on the same symbol is
//! reported as a violated invariant.
//!
//! Words are stored with a trailing reserved terminator code, so exact
//! membership falls out of the arrays alone and the persisted BASE/CHECK
//! pair is the complete state of the structure.

use crate::error::{Result, TrieError};
use crate::fsa::alphabet::Alphabet;
use crate::fsa::array_store::{ArrayStore, FREE, ROOT_STATE};
use crate::fsa::child_index::ChildIndex;
use crate::fsa::traits::{
    FiniteStateAutomaton, StateInspectable, StatisticsProvider, Trie, TrieStats,
};
use crate::StateId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a Double Array Trie
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoubleArrayTrieConfig {
    /// Initial length of the BASE/CHECK arrays. Growth is geometric
    /// (`len * 3 / 2 + 1`) from here, so small values only cost a few
    /// extra growth steps.
    pub initial_capacity: usize,
}

impl Default for DoubleArrayTrieConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

/// Double-array trie with instance-owned alphabet and child index.
///
/// Construction is single-threaded and stateful; queries are read-only and
/// may run concurrently with each other once construction has completed.
///
/// # Examples
///
/// ```rust
/// use datrie::{DoubleArrayTrie, Trie};
///
/// let mut trie = DoubleArrayTrie::new();
/// trie.insert("cat").unwrap();
/// trie.insert("car").unwrap();
/// assert!(trie.contains("cat"));
/// assert!(trie.contains("car"));
/// assert!(!trie.contains("ca"));
/// ```
#[derive(Debug, Clone)]
pub struct DoubleArrayTrie {
    store: ArrayStore,
    children: ChildIndex,
    alphabet: Alphabet,
    config: DoubleArrayTrieConfig,
    num_keys: usize,
    num_relocations: usize,
    /// Forward scan position for the relocation free-base search. Advances
    /// monotonically over the life of the instance and is never reset.
    free_scan_from: StateId,
}

impl DoubleArrayTrie {
    /// Create a trie over the default alphabet with default configuration
    pub fn new() -> Self {
        Self::with_alphabet_and_config(Alphabet::new(), DoubleArrayTrieConfig::default())
    }

    /// Create a trie over the default alphabet with a custom configuration
    pub fn with_config(config: DoubleArrayTrieConfig) -> Self {
        Self::with_alphabet_and_config(Alphabet::new(), config)
    }

    /// Create a trie over a custom alphabet
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self::with_alphabet_and_config(alphabet, DoubleArrayTrieConfig::default())
    }

    /// Create a trie over a custom alphabet with a custom configuration
    pub fn with_alphabet_and_config(alphabet: Alphabet, config: DoubleArrayTrieConfig) -> Self {
        Self {
            store: ArrayStore::with_capacity(config.initial_capacity),
            children: ChildIndex::new(),
            alphabet,
            config,
            num_keys: 0,
            num_relocations: 0,
            free_scan_from: 2,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DoubleArrayTrieConfig {
        &self.config
    }

    /// Get the alphabet this trie encodes symbols with
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Current length of the BASE/CHECK arrays
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// BASE value of a slot, zero beyond the current length
    #[inline]
    pub fn get_base(&self, state: StateId) -> i32 {
        self.store.try_base(state).unwrap_or(0)
    }

    /// CHECK value of a slot, zero beyond the current length
    #[inline]
    pub fn get_check(&self, state: StateId) -> i32 {
        self.store.try_check(state).unwrap_or(0)
    }

    /// Follow one transition; `None` when the candidate slot is beyond the
    /// current length or owned by a different parent. Never grows arrays.
    #[inline]
    pub fn state_move(&self, state: StateId, code: u32) -> Option<StateId> {
        let base = self.store.try_base(state)?;
        if base < 1 {
            return None;
        }
        let candidate = StateId::try_from(base as u64 + code as u64).ok()?;
        let owner = self.store.try_check(candidate)?;
        (owner == state as i32).then_some(candidate)
    }

    /// Advance from `current` on `code`, creating the transition if needed.
    ///
    /// Returns the child state and whether the transition was newly made.
    /// Collision resolution is an explicit retry: relocation picks a base
    /// under which the retried candidate is vacant, so the second pass must
    /// succeed.
    fn advance(&mut self, current: StateId, code: u32) -> Result<(StateId, bool)> {
        for attempt in 0..2 {
            let base = self.store.base(current);
            if base < 1 {
                return Err(TrieError::invariant(format!(
                    "state {current} has unset base {base}"
                )));
            }
            let wide = base as u64 + code as u64;
            self.store.ensure_capacity(wide as usize)?;
            let candidate = wide as StateId;
            debug_assert_ne!(candidate, current);

            let owner = self.store.check(candidate);
            if owner == current as i32 {
                // transition already exists
                return Ok((candidate, false));
            }
            if owner == FREE {
                self.store.set_check(candidate, current as i32);
                self.children.record(current, code);
                // the new state's own index is a valid default base: it is
                // distinct from every live target at this point
                self.store.set_base(candidate, candidate as i32);
                return Ok((candidate, true));
            }
            if owner < 0 {
                return Err(TrieError::invariant(format!(
                    "guard slot {candidate} reached from state {current}"
                )));
            }
            // slot owned by a different parent: move our subtree, retry
            if attempt == 0 {
                self.relocate(current, code)?;
            }
        }
        Err(TrieError::invariant(format!(
            "collision on state {current} persisted after relocation"
        )))
    }

    /// Move `state`'s entire base offset to a conflict-free region.
    ///
    /// The search covers the pending code as well as the existing children,
    /// which is what guarantees the caller's retry succeeds. Children are
    /// copied to their new slots, grandchildren re-pointed at the moved
    /// slots, and the old slots vacated (CHECK only; stale BASE values keep
    /// vacated slots out of the free-base search).
    fn relocate(&mut self, state: StateId, pending_code: u32) -> Result<()> {
        let moved = self.children.codes_vec(state);
        let mut required = moved.clone();
        required.push(pending_code);
        let new_base = self.find_free_base(&required)?;

        let old_base = self.store.base(state) as u32;
        for &code in &moved {
            let old_child = old_base + code;
            let new_child = new_base + code;
            self.store.set_check(new_child, state as i32);
            self.store.set_base(new_child, self.store.base(old_child));
            let child_base = self.store.base(old_child) as u32;
            for grandchild_code in self.children.codes_vec(old_child) {
                self.store
                    .set_check(child_base + grandchild_code, new_child as i32);
            }
            self.children.transfer(old_child, new_child);
            self.store.set_check(old_child, FREE);
        }
        self.store.set_base(state, new_base as i32);
        self.free_scan_from = new_base;
        self.num_relocations += 1;
        log::debug!(
            "relocated state {state}: base {old_base} -> {new_base}, {} children moved",
            moved.len()
        );
        Ok(())
    }

    /// Find a base under which every required code lands on a vacant slot.
    ///
    /// Scans forward from the previous relocation point, growing the arrays
    /// as needed. Every slot at or past the pre-search length is untouched
    /// and therefore vacant, so the scan must succeed before passing that
    /// frontier; going past it is a violated invariant.
    fn find_free_base(&mut self, codes: &[u32]) -> Result<StateId> {
        let max_code = codes
            .iter()
            .max()
            .copied()
            .ok_or_else(|| TrieError::invariant("relocation with no transition codes"))?;
        let frontier = self.store.len() as u64;
        let mut nb = self.free_scan_from.max(2) as u64;
        while nb <= frontier {
            self.store.ensure_capacity((nb + max_code as u64) as usize)?;
            let candidate_base = nb as StateId;
            if codes
                .iter()
                .all(|&code| self.store.is_vacant(candidate_base + code))
            {
                return Ok(candidate_base);
            }
            nb += 1;
        }
        Err(TrieError::invariant(format!(
            "no free base found below the vacant frontier {frontier}"
        )))
    }
}

impl Default for DoubleArrayTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl FiniteStateAutomaton for DoubleArrayTrie {
    fn root(&self) -> StateId {
        ROOT_STATE
    }

    fn transition(&self, state: StateId, code: u32) -> Option<StateId> {
        self.state_move(state, code)
    }

    fn is_final(&self, state: StateId) -> bool {
        self.state_move(state, self.alphabet.terminator()).is_some()
    }
}

impl Trie for DoubleArrayTrie {
    /// Insert a word, creating states as needed.
    ///
    /// The whole word is encoded before any array is touched, so a word
    /// with an unsupported symbol fails cleanly without leaving a partial
    /// path behind. Already-present words are accepted and do not change
    /// [`len`](Trie::len).
    fn insert(&mut self, key: &str) -> Result<StateId> {
        let mut codes: Vec<u32> = Vec::with_capacity(key.len() + 1);
        for symbol in key.chars() {
            codes.push(self.alphabet.encode(symbol)?);
        }
        codes.push(self.alphabet.terminator());

        let mut current = ROOT_STATE;
        let mut created = false;
        for &code in &codes {
            let (next, fresh) = self.advance(current, code)?;
            current = next;
            created = fresh;
        }
        // the word is new exactly when its terminator edge is new
        if created {
            self.num_keys += 1;
        }
        Ok(current)
    }

    /// Exact-membership lookup. Read-only; never grows the arrays.
    ///
    /// A symbol outside the alphabet is an ordinary negative result, as is
    /// a candidate slot beyond the current length.
    fn contains(&self, key: &str) -> bool {
        let mut state = ROOT_STATE;
        for symbol in key.chars() {
            let Some(code) = self.alphabet.try_encode(symbol) else {
                return false;
            };
            let Some(next) = self.state_move(state, code) else {
                return false;
            };
            state = next;
        }
        self.is_final(state)
    }

    fn len(&self) -> usize {
        self.num_keys
    }
}

impl StateInspectable for DoubleArrayTrie {
    fn out_degree(&self, state: StateId) -> usize {
        self.children.degree(state)
    }

    fn out_codes(&self, state: StateId) -> Vec<u32> {
        self.children.codes_vec(state)
    }
}

impl StatisticsProvider for DoubleArrayTrie {
    fn stats(&self) -> TrieStats {
        // every allocated non-root slot is exactly one live transition target
        let allocated = (0..self.store.len())
            .filter(|&i| self.store.check(i as StateId) > 0)
            .count();
        TrieStats {
            num_keys: self.num_keys,
            num_states: allocated + 1,
            num_transitions: allocated,
            num_relocations: self.num_relocations,
            capacity: self.store.len(),
            memory_usage: self.store.len() * 2 * std::mem::size_of::<i32>(),
        }
    }
}
