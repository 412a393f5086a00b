//! # Orthos
//!
//! A spelling-correction support library.
//!
//! Orthos loads a word dictionary and a set of filler phrases for a
//! language, answers membership queries, and, when a word is not found,
//! produces candidate corrections using an edit-distance search.
//!
//! ## Features
//!
//! - Per-language word dictionaries with case-insensitive membership
//! - Binary dictionary snapshots for fast reload
//! - Filler phrase bags with uniform random retrieval
//! - Edit-distance-1/2 candidate generation with tier precedence
//! - Read-only stores that are safe to share across threads
//!
//! ## Example
//!
//! ```no_run
//! use orthos::{CandidateGenerator, Language, LanguageStore, StoreConfig};
//!
//! fn main() -> orthos::Result<()> {
//!     let config = StoreConfig::new("data");
//!     let store = LanguageStore::open(Language::new("en")?, &config)?;
//!
//!     assert!(store.is_member("Hello"));
//!
//!     let generator = CandidateGenerator::new(&store);
//!     for candidate in generator.candidates("wrld") {
//!         println!("did you mean {candidate}?");
//!     }
//!     Ok(())
//! }
//! ```

pub mod dictionary;
pub mod error;
pub mod language;
pub mod suggest;

pub use dictionary::{FillerBag, LanguageStore, Lexicon, StoreConfig, WordList, dictionary_key};
pub use error::{OrthosError, Result};
pub use language::Language;
pub use suggest::{CandidateGenerator, edits1, edits2};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
