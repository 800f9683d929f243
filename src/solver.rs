//! Longest compound-word search.
//!
//! A word is decomposable when it splits into a prefix that is itself a list entry and a
//! suffix that is either a list entry or decomposable in turn. Every fragment is at least
//! `min_len` chars long, so the recursion always works on a shorter suffix and its depth
//! is bounded by the word length.

use crate::config::SearchConfig;
use crate::debug_log;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Exact, case-sensitive membership over a word list.
#[derive(Debug, Clone)]
pub struct WordIndex<'a> {
    words: HashSet<&'a str>,
}

impl<'a> WordIndex<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self {
            words: words.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// A found compound word together with the fragments it was split into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub word: String,
    pub parts: Vec<String>,
}

pub fn is_decomposable(word: &str, index: &WordIndex<'_>, config: &SearchConfig) -> bool {
    decompose(word, index, config).is_some()
}

/// Fragments of the first split found for `word`, in order, or `None`.
pub fn decompose<'w>(
    word: &'w str,
    index: &WordIndex<'_>,
    config: &SearchConfig,
) -> Option<Vec<&'w str>> {
    let mut dead_ends = HashSet::new();
    decompose_with(word, index, config, &mut dead_ends)
}

// `dead_ends` holds words already shown to have no split. Whether a word splits depends
// only on the word, the index and the config, so the set is valid for the whole run.
fn decompose_with<'w>(
    word: &'w str,
    index: &WordIndex<'_>,
    config: &SearchConfig,
    dead_ends: &mut HashSet<&'w str>,
) -> Option<Vec<&'w str>> {
    let boundaries: Vec<usize> = word.char_indices().map(|(offset, _)| offset).collect();
    let len = boundaries.len();
    if len < config.min_len() || dead_ends.contains(word) {
        return None;
    }

    for split in config.min_len()..config.split_end(len) {
        let (prefix, suffix) = word.split_at(boundaries[split]);
        if !index.contains(prefix) {
            continue;
        }
        if index.contains(suffix) {
            debug_log!("{word} = {prefix} + {suffix}");
            return Some(vec![prefix, suffix]);
        }
        if let Some(rest) = decompose_with(suffix, index, config, dead_ends) {
            debug_log!("{word} = {prefix} + {}", rest.join(" + "));
            let mut parts = Vec::with_capacity(rest.len() + 1);
            parts.push(prefix);
            parts.extend(rest);
            return Some(parts);
        }
    }

    dead_ends.insert(word);
    None
}

/// Longest word in `words` built from two or more shorter entries of the same list.
///
/// Candidates are tried longest first. Words of equal length keep their list order, so
/// the earliest one in the list wins a tie. `words` itself is left untouched.
pub fn find_longest_decomposition(words: &[String], config: &SearchConfig) -> Option<Decomposition> {
    let index = WordIndex::new(words);
    let mut candidates: Vec<&str> = words.iter().map(String::as_str).collect();
    candidates.sort_by_cached_key(|word| Reverse(word.chars().count()));

    let mut dead_ends = HashSet::new();
    for word in candidates {
        if word.chars().count() <= config.min_len() {
            continue;
        }
        if let Some(parts) = decompose_with(word, &index, config, &mut dead_ends) {
            return Some(Decomposition {
                word: word.to_string(),
                parts: parts.into_iter().map(str::to_string).collect(),
            });
        }
    }
    None
}

pub fn find_longest_decomposable_word(words: &[String], config: &SearchConfig) -> Option<String> {
    find_longest_decomposition(words, config).map(|found| found.word)
}
