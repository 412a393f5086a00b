//! Word list storage backing the dictionary store.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The set of words considered correctly spelled for one language.
///
/// Words are normalized to lower case on insert and on lookup, so membership
/// is case-insensitive by construction. The distinct normalized words are
/// kept in a derived key set alongside the per-word occurrence counts; both
/// are serialized into snapshots, so restoring one skips recomputing the
/// keys. The list is append-only during load and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    /// Normalized words and their occurrence counts in the source.
    words: HashMap<String, u32>,
    /// Derived key set: the distinct normalized words.
    keys: HashSet<String>,
}

impl WordList {
    /// Create a new empty word list.
    pub fn new() -> Self {
        WordList {
            words: HashMap::new(),
            keys: HashSet::new(),
        }
    }

    /// Insert a word, normalizing it to lower case.
    pub fn insert(&mut self, word: &str) {
        let normalized = word.to_lowercase();
        *self.words.entry(normalized.clone()).or_insert(0) += 1;
        self.keys.insert(normalized);
    }

    /// Check if a word is present, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.keys.contains(&word.to_lowercase())
    }

    /// Get the number of times a word occurred in the source.
    pub fn occurrences(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the derived key set of distinct normalized words.
    pub fn keys(&self) -> &HashSet<String> {
        &self.keys
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Get the total occurrence count across all words.
    pub fn total_occurrences(&self) -> u64 {
        self.words.values().map(|&count| count as u64).sum()
    }

    /// Load a word list from a text source with one word per line.
    ///
    /// Lines are trimmed; blank lines are skipped. Duplicate lines collapse
    /// into one key with a higher occurrence count.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = WordList::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                list.insert(word);
            }
        }
        Ok(list)
    }
}
