//! Language tags identifying which word list and filler list to load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};

/// Maximum accepted tag length in characters.
const MAX_TAG_LEN: usize = 16;

/// A validated language tag, e.g. `en`, `fi`, or `en-us`.
///
/// Tags are lowercase ASCII letters, digits, and `-`, start with a letter,
/// and are at most 16 characters long. A tag selects which word list and
/// filler list a store loads and is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    /// Create a validated language tag.
    pub fn new<S: Into<String>>(tag: S) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(OrthosError::invalid_language("empty tag"));
        }
        if tag.len() > MAX_TAG_LEN {
            return Err(OrthosError::invalid_language(format!(
                "tag longer than {MAX_TAG_LEN} characters: {tag}"
            )));
        }
        let mut chars = tag.chars();
        let first = chars.next().unwrap_or_default();
        if !first.is_ascii_lowercase() {
            return Err(OrthosError::invalid_language(format!(
                "tag must start with a lowercase ASCII letter: {tag}"
            )));
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err(OrthosError::invalid_language(format!(
                "tag may only contain lowercase ASCII letters, digits, and '-': {tag}"
            )));
        }
        Ok(Language(tag))
    }

    /// Get the tag string.
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = OrthosError;

    fn from_str(s: &str) -> Result<Self> {
        Language::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        for tag in ["en", "fi", "pt-br", "x1", "a"] {
            let language = Language::new(tag).unwrap();
            assert_eq!(language.tag(), tag);
            assert_eq!(language.to_string(), tag);
        }
    }

    #[test]
    fn test_invalid_tags() {
        for tag in ["", "EN", "1en", "-en", "en_US", "én", "abcdefghijklmnopq"] {
            assert!(
                Language::new(tag).is_err(),
                "tag should be rejected: {tag:?}"
            );
        }
    }

    #[test]
    fn test_from_str() {
        let language: Language = "en-us".parse().unwrap();
        assert_eq!(language.tag(), "en-us");

        let result: Result<Language> = "No".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::HashSet;

        let a = Language::new("en").unwrap();
        let b = Language::new("en").unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
