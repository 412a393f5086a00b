//! Primitive edit expansion over a fixed lowercase ASCII alphabet.

use ahash::AHashSet;

/// All strings reachable from `word` by exactly one primitive edit: a
/// deletion, an adjacent transposition, a replacement, or an insertion.
///
/// The alphabet is fixed to the 26 lowercase ASCII letters. Dictionary
/// entries containing other characters can still be matched for membership,
/// but are unreachable via generated edits.
pub fn edits1(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = AHashSet::with_capacity(54 * len + 26);

    // Deletions
    for i in 0..len {
        let mut new_word = chars.clone();
        new_word.remove(i);
        edits.insert(new_word.into_iter().collect());
    }

    // Transpositions (swapping adjacent characters)
    for i in 0..len.saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        edits.insert(new_word.into_iter().collect());
    }

    // Replacements
    for i in 0..len {
        for ch in 'a'..='z' {
            if ch != chars[i] {
                let mut new_word = chars.clone();
                new_word[i] = ch;
                edits.insert(new_word.into_iter().collect());
            }
        }
    }

    // Insertions
    for i in 0..=len {
        for ch in 'a'..='z' {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.insert(new_word.into_iter().collect());
        }
    }

    edits
}

/// All strings reachable by two primitive edits: [`edits1`] applied to
/// every member of `edits1(word)`, flattened.
///
/// This re-derives some distance-0 and distance-1 strings. That redundancy
/// is harmless under set semantics, and the dictionary intersection happens
/// tier by tier, so precedence is unaffected.
pub fn edits2(word: &str) -> AHashSet<String> {
    let first = edits1(word);
    let mut edits = AHashSet::with_capacity(first.len() * 54);
    for edit in &first {
        edits.extend(edits1(edit));
    }
    edits
}
