//! Tiered candidate lookup against an initialized language store.

use crate::dictionary::store::LanguageStore;
use crate::suggest::edits::edits1;

/// Generates correction candidates by intersecting edit-distance tiers with
/// a store's key set.
///
/// Tier precedence is the only ordering guarantee: a distance-0 hit wins
/// over distance-1 hits, which win over distance-2 hits. Within a tier the
/// result follows set iteration order; callers must not assume any further
/// ranking.
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator<'a> {
    store: &'a LanguageStore,
}

impl<'a> CandidateGenerator<'a> {
    /// Create a generator querying the given store's key set.
    pub fn new(store: &'a LanguageStore) -> Self {
        CandidateGenerator { store }
    }

    /// Return the best available correction tier for `word`.
    ///
    /// The word is normalized to lower case first. When nothing within two
    /// edits is known, the result is the singleton normalized word itself,
    /// which callers can treat as "no correction found". Never fails on an
    /// initialized store.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();

        // Tier 0: the word itself.
        if self.store.is_member(&word) {
            return vec![word];
        }

        // Tier 1: known words one edit away.
        let first = edits1(&word);
        let known = self.known(first.iter());
        if !known.is_empty() {
            return known;
        }

        // Tier 2: one further edit on top of each tier-1 string. Some
        // distance-0 and distance-1 strings are regenerated; the earlier
        // tiers already came up empty, so they cannot resurface here.
        let mut seen = ahash::AHashSet::with_capacity(first.len());
        let mut known = Vec::new();
        for edit in &first {
            for candidate in edits1(edit) {
                if self.store.keys().contains(candidate.as_str()) && seen.insert(candidate.clone())
                {
                    known.push(candidate);
                }
            }
        }
        if !known.is_empty() {
            return known;
        }

        // No known correction.
        vec![word]
    }

    fn known<'b, I>(&self, candidates: I) -> Vec<String>
    where
        I: Iterator<Item = &'b String>,
    {
        let keys = self.store.keys();
        candidates
            .filter(|candidate| keys.contains(candidate.as_str()))
            .cloned()
            .collect()
    }
}
