//! Symbol-to-code mapping for trie transitions
//!
//! Every supported input character gets a dense positive integer code,
//! assigned once at construction by walking the configured symbol groups in
//! order. Codes are what the double array actually indexes with; characters
//! never touch the arrays directly.

use ahash::AHashMap;

use crate::error::{Result, TrieError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps each supported input symbol to a dense positive integer code.
///
/// Codes are contiguous starting at 1 and fixed for the lifetime of the
/// alphabet, so encodings are reproducible across runs for the same group
/// configuration. One extra code past the last symbol is reserved as the
/// word terminator and is never returned by [`encode`](Alphabet::encode).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alphabet {
    /// Symbols in enumeration order; `symbols[i]` has code `i + 1`
    symbols: Vec<char>,
    codes: AHashMap<char, u32>,
}

impl Alphabet {
    /// Create the default alphabet: lowercase letters, uppercase letters,
    /// then the separator symbols space, `-`, `.` and `/`, in that order.
    pub fn new() -> Self {
        let lower: String = ('a'..='z').collect();
        let upper: String = ('A'..='Z').collect();
        Self::from_groups(&[lower.as_str(), upper.as_str(), " -./"])
            .expect("default symbol groups are disjoint")
    }

    /// Build an alphabet from ordered symbol groups.
    ///
    /// Groups are enumerated in the given order and characters within a
    /// group in their string order, so the resulting codes are stable. A
    /// symbol appearing twice is a configuration error.
    pub fn from_groups(groups: &[&str]) -> Result<Self> {
        let mut symbols = Vec::new();
        let mut codes = AHashMap::new();
        for group in groups {
            for ch in group.chars() {
                let code = symbols.len() as u32 + 1;
                if codes.insert(ch, code).is_some() {
                    return Err(TrieError::configuration(format!(
                        "duplicate symbol {ch:?} in alphabet groups"
                    )));
                }
                symbols.push(ch);
            }
        }
        Ok(Self { symbols, codes })
    }

    /// Encode a symbol, failing with `UnsupportedSymbol` if it is outside
    /// the configured set.
    #[inline]
    pub fn encode(&self, symbol: char) -> Result<u32> {
        self.try_encode(symbol)
            .ok_or(TrieError::UnsupportedSymbol { symbol })
    }

    /// Encode a symbol, returning `None` if it has no code.
    #[inline]
    pub fn try_encode(&self, symbol: char) -> Option<u32> {
        self.codes.get(&symbol).copied()
    }

    /// Whether the symbol is part of the configured set
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// The reserved end-of-word code, one past the last symbol code
    #[inline]
    pub fn terminator(&self) -> u32 {
        self.symbols.len() as u32 + 1
    }

    /// Number of configured symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}
