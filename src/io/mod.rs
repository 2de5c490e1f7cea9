//! Dictionary loading and array persistence
//!
//! The trie itself never does I/O; these helpers adapt line-oriented word
//! sources and writable sinks to it. I/O failures propagate and abort the
//! batch they occurred in; words already inserted stay inserted.

pub mod dict;
pub mod serialize;

pub use dict::{load_file, load_words, verify_words, LoadReport};
pub use serialize::{write_arrays, write_arrays_to_file};
