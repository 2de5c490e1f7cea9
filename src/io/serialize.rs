//! Persisted array layout
//!
//! The serialized form of a double-array trie is the array pair itself:
//! `BASE[i]` and `CHECK[i]`, tab-separated, one pair per line, in index
//! order from 0 to the current length minus one. Together with the alphabet
//! configuration this is the complete state of the structure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::fsa::DoubleArrayTrie;

/// Write the BASE/CHECK pairs of the trie to `out`
pub fn write_arrays<W: Write>(trie: &DoubleArrayTrie, mut out: W) -> Result<()> {
    for i in 0..trie.capacity() as u32 {
        writeln!(out, "{}\t{}", trie.get_base(i), trie.get_check(i))?;
    }
    out.flush()?;
    Ok(())
}

/// Write the BASE/CHECK pairs of the trie to a file
pub fn write_arrays_to_file<P: AsRef<Path>>(trie: &DoubleArrayTrie, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_arrays(trie, BufWriter::new(file))
}
