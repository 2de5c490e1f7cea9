//! Integration tests for the double-array trie
//!
//! Covers the construction/query round trip, collision-forced relocation,
//! growth monotonicity, alphabet rejection, and a property-based comparison
//! against a `HashSet` oracle.

use std::collections::HashSet;

use proptest::prelude::*;

use datrie::io::{load_words, write_arrays, LoadReport};
use datrie::{
    Alphabet, DoubleArrayTrie, DoubleArrayTrieConfig, FiniteStateAutomaton, StateInspectable,
    StatisticsProvider, Trie, TrieError,
};

fn lowercase_alphabet() -> Alphabet {
    Alphabet::from_groups(&["abcdefghijklmnopqrstuvwxyz"]).unwrap()
}

fn lowercase_trie() -> DoubleArrayTrie {
    DoubleArrayTrie::with_alphabet(lowercase_alphabet())
}

fn tiny_trie() -> DoubleArrayTrie {
    DoubleArrayTrie::with_alphabet_and_config(
        lowercase_alphabet(),
        DoubleArrayTrieConfig { initial_capacity: 4 },
    )
}

/// Deterministic lowercase words, distinct for distinct `i`
fn generated_word(i: u32) -> String {
    let mut n = i;
    let mut word = String::new();
    loop {
        word.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
        if n == 0 {
            break;
        }
    }
    word
}

fn prefix_family() -> Vec<&'static str> {
    vec![
        "app",
        "apple",
        "application",
        "apply",
        "banana",
        "band",
        "bandana",
        "cat",
        "catch",
        "dog",
    ]
}

#[test]
fn test_default_construction() {
    let trie = DoubleArrayTrie::new();
    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    assert_eq!(trie.root(), 1);
    assert_eq!(trie.capacity(), 16);
}

#[test]
fn test_config_construction() {
    let config = DoubleArrayTrieConfig {
        initial_capacity: 128,
    };
    let trie = DoubleArrayTrie::with_config(config);
    assert_eq!(trie.capacity(), 128);
    assert_eq!(trie.config().initial_capacity, 128);
}

#[test]
fn test_spec_scenario_lowercase() {
    let mut trie = lowercase_trie();
    assert_eq!(trie.alphabet().encode('a').unwrap(), 1);
    assert_eq!(trie.alphabet().encode('z').unwrap(), 26);

    for word in ["ab", "ac", "abc"] {
        trie.insert(word).unwrap();
    }
    assert!(trie.contains("ab"));
    assert!(trie.contains("ac"));
    assert!(trie.contains("abc"));
    assert!(!trie.contains("a"));
    assert!(!trie.contains("abcd"));
    assert!(!trie.contains("b"));
}

#[test]
fn test_single_character_words() {
    let mut trie = lowercase_trie();
    for c in b'a'..=b'z' {
        trie.insert(std::str::from_utf8(&[c]).unwrap()).unwrap();
    }
    assert_eq!(trie.len(), 26);
    for c in b'a'..=b'z' {
        assert!(trie.contains(std::str::from_utf8(&[c]).unwrap()));
    }
    assert!(!trie.contains("A"));
    assert!(!trie.contains("aa"));
}

#[test]
fn test_prefix_family_round_trip() {
    let mut trie = lowercase_trie();
    for word in prefix_family() {
        trie.insert(word).unwrap();
    }
    assert_eq!(trie.len(), prefix_family().len());
    for word in prefix_family() {
        assert!(trie.contains(word), "missing {word:?}");
    }
    for probe in ["ap", "appl", "applicatio", "applications", "ban", "cats", "do", "dogs"] {
        assert!(!trie.contains(probe), "false positive {probe:?}");
    }
}

#[test]
fn test_insertion_order_independence() {
    let mut sorted = lowercase_trie();
    let mut reversed = lowercase_trie();
    let mut words = prefix_family();
    for word in &words {
        sorted.insert(word).unwrap();
    }
    words.reverse();
    for word in &words {
        reversed.insert(word).unwrap();
    }
    assert_eq!(sorted.len(), reversed.len());
    for word in prefix_family() {
        assert!(sorted.contains(word));
        assert!(reversed.contains(word));
    }
    for probe in ["ap", "bananas", "cart", ""] {
        assert_eq!(sorted.contains(probe), reversed.contains(probe));
    }
}

#[test]
fn test_forced_relocation_keeps_all_words() {
    // "ab" places the root's 'a' child at slot 2 and 'b' at slot 4; the 'c'
    // of "ca" then computes candidate 4, owned by another parent, forcing a
    // root relocation.
    let mut trie = tiny_trie();
    trie.insert("ab").unwrap();
    trie.insert("ca").unwrap();
    assert!(trie.stats().num_relocations >= 1);
    assert!(trie.contains("ab"));
    assert!(trie.contains("ca"));
}

#[test]
fn test_relocation_stress() {
    let mut trie = tiny_trie();
    let words: Vec<String> = (0..500).map(generated_word).collect();
    for word in &words {
        trie.insert(word).unwrap();
    }
    let stats = trie.stats();
    assert!(stats.num_relocations >= 1, "stress set never collided");
    assert_eq!(trie.len(), words.len());
    for word in &words {
        assert!(trie.contains(word), "lost {word:?}");
    }
    for probe in ["zzzzzz", "qqq", "xyzzy"] {
        assert!(!trie.contains(probe));
    }
}

#[test]
fn test_capacity_monotone_across_inserts() {
    let mut trie = tiny_trie();
    let mut last = trie.capacity();
    for i in 0..300 {
        trie.insert(&generated_word(i)).unwrap();
        assert!(trie.capacity() >= last);
        last = trie.capacity();
    }
}

#[test]
fn test_unsupported_symbol_leaves_state_unaffected() {
    let mut trie = lowercase_trie();
    trie.insert("before").unwrap();
    let snapshot: Vec<(i32, i32)> = (0..trie.capacity() as u32)
        .map(|i| (trie.get_base(i), trie.get_check(i)))
        .collect();

    let err = trie.insert("mixed-case").unwrap_err();
    assert!(matches!(err, TrieError::UnsupportedSymbol { symbol: '-' }));
    assert_eq!(trie.len(), 1);
    assert!(trie.contains("before"));

    let after: Vec<(i32, i32)> = (0..trie.capacity() as u32)
        .map(|i| (trie.get_base(i), trie.get_check(i)))
        .collect();
    assert_eq!(snapshot, after, "rejected word touched the arrays");
}

#[test]
fn test_query_with_unencodable_symbol_is_false() {
    let mut trie = lowercase_trie();
    trie.insert("abc").unwrap();
    assert!(!trie.contains("ab9"));
    assert!(!trie.contains("ÿ"));
}

#[test]
fn test_duplicate_inserts() {
    let mut trie = lowercase_trie();
    for _ in 0..3 {
        trie.insert("echo").unwrap();
    }
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_default_alphabet_word_shapes() {
    let mut trie = DoubleArrayTrie::new();
    for word in ["foo bar", "half-baked", "a.b/c", "MixedCase"] {
        trie.insert(word).unwrap();
    }
    for word in ["foo bar", "half-baked", "a.b/c", "MixedCase"] {
        assert!(trie.contains(word));
    }
    assert!(!trie.contains("foo"));
    assert!(!trie.contains("mixedcase"));
}

#[test]
fn test_out_degree_after_construction() {
    let mut trie = lowercase_trie();
    for word in ["ab", "ad", "af"] {
        trie.insert(word).unwrap();
    }
    let root = trie.root();
    assert_eq!(trie.out_degree(root), 1);
    let a_state = trie.transition(root, 1).unwrap();
    // 'b', 'd', 'f'
    assert_eq!(trie.out_codes(a_state), vec![2, 4, 6]);
    assert!(!trie.is_leaf(a_state));
}

#[test]
fn test_load_then_serialize() {
    let mut trie = lowercase_trie();
    let report = load_words(&mut trie, std::io::Cursor::new("cat\ncar\ncard\n")).unwrap();
    assert_eq!(report, LoadReport { inserted: 3, skipped: 0 });

    let mut buffer = Vec::new();
    write_arrays(&trie, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.lines().count(), trie.capacity());
    assert!(text.starts_with("0\t-1\n"));
}

proptest! {
    #[test]
    fn prop_membership_matches_hashset(
        words in proptest::collection::vec("[a-z]{1,8}", 1..40),
        probes in proptest::collection::vec("[a-z]{1,8}", 0..20),
    ) {
        let mut trie = tiny_trie();
        let mut oracle = HashSet::new();
        for word in &words {
            trie.insert(word).unwrap();
            oracle.insert(word.clone());
        }
        prop_assert_eq!(trie.len(), oracle.len());
        for word in &words {
            prop_assert!(trie.contains(word));
        }
        for probe in &probes {
            prop_assert_eq!(trie.contains(probe), oracle.contains(probe));
        }
    }

    #[test]
    fn prop_order_independent_membership(
        mut words in proptest::collection::vec("[a-z]{1,6}", 1..25),
    ) {
        let mut forward = lowercase_trie();
        for word in &words {
            forward.insert(word).unwrap();
        }
        words.sort();
        words.reverse();
        let mut backward = lowercase_trie();
        for word in &words {
            backward.insert(word).unwrap();
        }
        prop_assert_eq!(forward.len(), backward.len());
        for word in &words {
            prop_assert!(forward.contains(word) && backward.contains(word));
        }
    }
}
