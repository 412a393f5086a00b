//! Edit-distance candidate generation for spelling correction.
//!
//! Given a word that failed a dictionary lookup, this module expands it into
//! every string reachable by one or two primitive edits and intersects the
//! result with the store's key set, returning the first non-empty tier.

pub mod candidates;
pub mod edits;

// Re-export commonly used types
pub use candidates::*;
pub use edits::*;
