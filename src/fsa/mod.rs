//! The double-array trie and its supporting structures
//!
//! Leaves first: [`Alphabet`] turns symbols into dense codes,
//! [`ArrayStore`](array_store::ArrayStore) holds the BASE/CHECK pair,
//! [`ChildIndex`](child_index::ChildIndex) gives relocation its reverse
//! child enumeration, and [`DoubleArrayTrie`] ties them together behind the
//! trait seams in [`traits`].

pub mod alphabet;
pub mod array_store;
pub mod child_index;
pub mod double_array_trie;
pub mod traits;

pub use alphabet::Alphabet;
pub use array_store::{ArrayStore, ROOT_STATE};
pub use child_index::ChildIndex;
pub use double_array_trie::{DoubleArrayTrie, DoubleArrayTrieConfig};
pub use traits::{
    FiniteStateAutomaton, StateInspectable, StatisticsProvider, Trie, TrieStats,
};
