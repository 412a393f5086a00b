//! Per-language store handles and configuration.
//!
//! A [`LanguageStore`] is the explicit handle returned by initialization:
//! it owns the word list and filler bag for one language and is read-only
//! afterwards, so it can be shared freely across threads. [`Lexicon`] holds
//! several initialized stores for callers that serve more than one language.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::fillers::FillerBag;
use crate::dictionary::snapshot::{read_snapshot, write_snapshot};
use crate::dictionary::wordlist::WordList;
use crate::error::{OrthosError, Result};
use crate::language::Language;
use crate::suggest::candidates::CandidateGenerator;

/// Derive the storage handle name for a language's dictionary.
///
/// Pure and collision-free for distinct tags; used as the snapshot file
/// stem.
pub fn dictionary_key(language: &Language) -> String {
    format!("dict_{}", language.tag())
}

/// Configuration for locating and loading per-language data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding word lists, filler lists, and snapshots.
    pub data_dir: PathBuf,
    /// Whether initialization may take the snapshot fast path.
    pub use_snapshots: bool,
}

impl StoreConfig {
    /// Create a configuration rooted at the given data directory.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            use_snapshots: true,
        }
    }

    /// Path of the word source file for a language.
    pub fn word_file(&self, language: &Language) -> PathBuf {
        self.data_dir.join(format!("{}_words.txt", language.tag()))
    }

    /// Path of the filler source file for a language.
    pub fn filler_file(&self, language: &Language) -> PathBuf {
        self.data_dir
            .join(format!("{}_fillers.txt", language.tag()))
    }

    /// Path of the dictionary snapshot file for a language.
    pub fn snapshot_file(&self, language: &Language) -> PathBuf {
        self.data_dir
            .join(format!("{}.snapshot", dictionary_key(language)))
    }
}

/// Statistics about an initialized store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of distinct dictionary words.
    pub words: usize,
    /// Total occurrence count across the word source.
    pub total_occurrences: u64,
    /// Number of loaded filler phrases, counting duplicates.
    pub fillers: usize,
}

/// An initialized, read-only dictionary store for one language.
///
/// Built once by [`LanguageStore::open`]; every accessor takes `&self`, so
/// unbounded concurrent readers need no locks.
#[derive(Debug, Clone)]
pub struct LanguageStore {
    language: Language,
    words: WordList,
    fillers: FillerBag,
    snapshot_path: PathBuf,
}

impl LanguageStore {
    /// Load the dictionary and filler list for `language`.
    ///
    /// When `config.use_snapshots` is set and the snapshot file exists, the
    /// word list is restored from it directly; the snapshot already holds
    /// the derived key set, so nothing is recomputed. A malformed snapshot
    /// is an error, never a silent fallback to the text source. Without a
    /// snapshot the word source is read line by line. Fillers always load
    /// from their text source.
    pub fn open(language: Language, config: &StoreConfig) -> Result<Self> {
        let snapshot_path = config.snapshot_file(&language);

        let words = if config.use_snapshots && snapshot_path.exists() {
            read_snapshot(&snapshot_path)?
        } else {
            let path = config.word_file(&language);
            let file = open_source(&path)?;
            WordList::from_reader(BufReader::new(file))?
        };

        let filler_path = config.filler_file(&language);
        let file = open_source(&filler_path)?;
        let fillers = FillerBag::from_reader(BufReader::new(file))?;

        Ok(LanguageStore {
            language,
            words,
            fillers,
            snapshot_path,
        })
    }

    /// Get the language this store serves.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Check whether a word is in the dictionary, ignoring case.
    pub fn is_member(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the dictionary key set for candidate intersection.
    pub fn keys(&self) -> &HashSet<String> {
        self.words.keys()
    }

    /// Get the underlying word list.
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Return one filler phrase chosen uniformly at random.
    pub fn random_filler(&self) -> Result<&str> {
        self.fillers
            .choose()
            .ok_or_else(|| OrthosError::EmptyFillerSet(self.language.clone()))
    }

    /// Get the loaded filler bag.
    pub fn fillers(&self) -> &FillerBag {
        &self.fillers
    }

    /// Serialize the dictionary to its snapshot file for faster future
    /// loads. A failed write is reported but leaves this store intact.
    pub fn persist_snapshot(&self) -> Result<()> {
        write_snapshot(&self.words, &self.snapshot_path)
    }

    /// Get statistics about this store.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            words: self.words.len(),
            total_occurrences: self.words.total_occurrences(),
            fillers: self.fillers.len(),
        }
    }
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OrthosError::source_not_found(path)
        } else {
            OrthosError::Io(e)
        }
    })
}

/// An explicit collection of initialized language stores.
///
/// Replaces a process-global registry: the caller owns the lexicon and
/// passes it to query sites. `initialize` takes `&mut self`, so exactly one
/// writer can populate a language; lookups on a language that was never
/// initialized fail with `UninitializedLanguage`.
#[derive(Debug)]
pub struct Lexicon {
    config: StoreConfig,
    stores: HashMap<Language, LanguageStore>,
}

impl Lexicon {
    /// Create an empty lexicon using the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Lexicon {
            config,
            stores: HashMap::new(),
        }
    }

    /// Load the dictionary and fillers for a language.
    ///
    /// Re-initializing a loaded language is a caller error, not a supported
    /// race: the second call fails and the existing store is untouched.
    pub fn initialize(&mut self, language: Language) -> Result<&LanguageStore> {
        if self.stores.contains_key(&language) {
            return Err(OrthosError::invalid_operation(format!(
                "language already initialized: {language}"
            )));
        }
        let store = LanguageStore::open(language.clone(), &self.config)?;
        Ok(self.stores.entry(language).or_insert(store))
    }

    /// Get the store for an initialized language.
    pub fn store(&self, language: &Language) -> Result<&LanguageStore> {
        self.stores
            .get(language)
            .ok_or_else(|| OrthosError::UninitializedLanguage(language.clone()))
    }

    /// Check whether a word is in a language's dictionary.
    pub fn is_member(&self, word: &str, language: &Language) -> Result<bool> {
        Ok(self.store(language)?.is_member(word))
    }

    /// Return one filler phrase for a language, chosen uniformly at random.
    pub fn random_filler(&self, language: &Language) -> Result<&str> {
        self.store(language)?.random_filler()
    }

    /// Return the best available correction tier for a word.
    pub fn candidates(&self, word: &str, language: &Language) -> Result<Vec<String>> {
        Ok(CandidateGenerator::new(self.store(language)?).candidates(word))
    }

    /// Iterate over the initialized languages.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.stores.keys()
    }

    /// Get the number of initialized languages.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Check whether no language has been initialized.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Get the configuration this lexicon loads from.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
