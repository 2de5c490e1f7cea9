//! # datrie: compact double-array trie dictionary
//!
//! A trie (prefix tree) encoded as a pair of parallel integer arrays (a
//! "double-array trie") rather than a graph of linked nodes. Lookup costs
//! one array read plus one addition per character, which is why this
//! representation shows up in tokenizers, dictionary lookup, and
//! search-index front ends where tries must be fast and memory-dense.
//!
//! ## Key features
//!
//! - **Bulk insertion** with automatic collision resolution: when two
//!   parents would claim the same slot, the colliding subtree is relocated
//!   to a conflict-free region with every existing word kept reachable
//! - **Exact-membership lookup** that is read-only and allocation-free
//! - **Configurable alphabet** with dense, reproducible symbol codes
//! - **Plain-array persistence**: the BASE/CHECK pair is the complete
//!   serialized state
//!
//! ## Quick Start
//!
//! ```rust
//! use datrie::{DoubleArrayTrie, Trie};
//!
//! let mut trie = DoubleArrayTrie::new();
//! trie.insert("hello").unwrap();
//! trie.insert("help").unwrap();
//!
//! assert!(trie.contains("hello"));
//! assert!(trie.contains("help"));
//! assert!(!trie.contains("hel"));
//! ```
//!
//! Construction is single-threaded; once it completes, any number of
//! readers may query the structure concurrently.

#![warn(missing_docs)]

pub mod error;
pub mod fsa;
pub mod io;

pub use error::{Result, TrieError};
pub use fsa::{
    Alphabet, DoubleArrayTrie, DoubleArrayTrieConfig, FiniteStateAutomaton, StateInspectable,
    StatisticsProvider, Trie, TrieStats,
};

/// State identifier type: an index into the BASE/CHECK arrays
pub type StateId = u32;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
