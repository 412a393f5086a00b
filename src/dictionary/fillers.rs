//! Filler phrase storage.

use std::io::BufRead;

use rand::seq::IndexedRandom;

use crate::error::Result;

/// A bag of stock phrases for random retrieval.
///
/// Duplicates are permitted and preserved, so a phrase appearing twice in
/// the source is twice as likely to be chosen. Selection is uniform over the
/// loaded entries.
#[derive(Debug, Clone, Default)]
pub struct FillerBag {
    phrases: Vec<String>,
}

impl FillerBag {
    /// Create a new empty bag.
    pub fn new() -> Self {
        FillerBag {
            phrases: Vec::new(),
        }
    }

    /// Add a phrase to the bag.
    pub fn push<S: Into<String>>(&mut self, phrase: S) {
        self.phrases.push(phrase.into());
    }

    /// Get the number of loaded phrases, counting duplicates.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Check whether the bag holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Get all loaded phrases in source order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Choose one phrase uniformly at random, or `None` if the bag is empty.
    pub fn choose(&self) -> Option<&str> {
        self.phrases.choose(&mut rand::rng()).map(String::as_str)
    }

    /// Load a bag from a text source with one phrase per line.
    ///
    /// Lines are trimmed; blank lines are skipped; duplicates are kept.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut bag = FillerBag::new();
        for line in reader.lines() {
            let line = line?;
            let phrase = line.trim();
            if !phrase.is_empty() {
                bag.push(phrase);
            }
        }
        Ok(bag)
    }
}
