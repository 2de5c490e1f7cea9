//! Line-oriented dictionary loading
//!
//! A dictionary source supplies one word per line; construction consumes it
//! strictly in order. A word carrying a symbol outside the trie's alphabet
//! fails only that word: it is counted, logged, and skipped. An I/O error
//! aborts the rest of the source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TrieError};
use crate::fsa::{DoubleArrayTrie, Trie};

/// Outcome counts of a dictionary load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Words inserted (duplicates count as inserted)
    pub inserted: usize,
    /// Words skipped because a symbol had no alphabet code
    pub skipped: usize,
}

/// Load every line of `reader` into the trie as one word.
///
/// Blank lines are ignored. Returns the insert/skip counts; I/O errors
/// propagate and abort the remaining lines without rolling back words
/// already inserted.
pub fn load_words<R: BufRead>(trie: &mut DoubleArrayTrie, reader: R) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    for line in reader.lines() {
        let word = line?;
        if word.is_empty() {
            continue;
        }
        match trie.insert(&word) {
            Ok(_) => report.inserted += 1,
            Err(err @ TrieError::UnsupportedSymbol { .. }) => {
                log::warn!("skipping {word:?}: {err}");
                report.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(report)
}

/// Load a dictionary file into the trie
pub fn load_file<P: AsRef<Path>>(trie: &mut DoubleArrayTrie, path: P) -> Result<LoadReport> {
    let file = File::open(path)?;
    load_words(trie, BufReader::new(file))
}

/// Check every word of a source against the trie.
///
/// Returns the first word the trie does not contain, `None` when all words
/// are present. Blank lines are ignored.
pub fn verify_words<R: BufRead>(trie: &DoubleArrayTrie, reader: R) -> Result<Option<String>> {
    for line in reader.lines() {
        let word = line?;
        if word.is_empty() {
            continue;
        }
        if !trie.contains(&word) {
            return Ok(Some(word));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsa::Alphabet;
    use std::io::Cursor;

    fn lowercase_trie() -> DoubleArrayTrie {
        DoubleArrayTrie::with_alphabet(
            Alphabet::from_groups(&["abcdefghijklmnopqrstuvwxyz"]).unwrap(),
        )
    }

    #[test]
    fn test_load_words() {
        let mut trie = lowercase_trie();
        let report = load_words(&mut trie, Cursor::new("cat\ncar\n\ndog\n")).unwrap();
        assert_eq!(report, LoadReport { inserted: 3, skipped: 0 });
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("cat"));
        assert!(trie.contains("dog"));
    }

    #[test]
    fn test_load_skips_unsupported_words() {
        let mut trie = lowercase_trie();
        let report = load_words(&mut trie, Cursor::new("cat\nCAT\ncafé\ncar\n")).unwrap();
        assert_eq!(report.inserted, 2);
        assert_eq!(report.skipped, 2);
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert!(!trie.contains("CAT"));
    }

    #[test]
    fn test_verify_words() {
        let mut trie = lowercase_trie();
        load_words(&mut trie, Cursor::new("cat\ncar\n")).unwrap();
        assert_eq!(verify_words(&trie, Cursor::new("cat\ncar\n")).unwrap(), None);
        assert_eq!(
            verify_words(&trie, Cursor::new("cat\ncab\n")).unwrap(),
            Some("cab".to_string())
        );
    }

    #[test]
    fn test_load_file_roundtrip() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta\ngamma").unwrap();
        let mut trie = lowercase_trie();
        let report = load_file(&mut trie, file.path()).unwrap();
        assert_eq!(report.inserted, 3);
        assert!(trie.contains("beta"));
    }

    #[test]
    fn test_missing_file_propagates() {
        let mut trie = lowercase_trie();
        let err = load_file(&mut trie, "/nonexistent/dict.txt").unwrap_err();
        assert!(matches!(err, TrieError::Io(_)));
    }
}
