//! Dictionary storage for spelling correction.
//!
//! This module owns the per-language word set and filler phrase list:
//! loading from text sources, binary snapshot persistence, membership
//! queries, and random filler retrieval. Stores are initialized once and
//! read-only afterwards.

pub mod fillers;
pub mod snapshot;
pub mod store;
pub mod wordlist;

// Re-export commonly used types
pub use fillers::*;
pub use snapshot::*;
pub use store::*;
pub use wordlist::*;
