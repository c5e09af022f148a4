//! Dictionary index for the spell checker.
//!
//! A dictionary is a plain word list, one word per line. Every word is
//! stored with its original spelling and an ASCII case-folded key, and the
//! entries are kept sorted by key so that all spellings sharing a key form
//! one contiguous run that a binary search can find.
//!
//! # Architecture
//!
//! - [`entry`] -- a single word: original spelling plus case-folded key
//! - [`index`] -- building the sorted index and looking up key runs
//! - [`loader`] -- splitting raw word-list bytes into lines, reading files

pub mod entry;
pub mod index;
pub mod loader;

use std::io;
use std::path::PathBuf;

pub use entry::DictionaryEntry;
pub use index::DictionaryIndex;

/// Error type for dictionary loading.
///
/// Building an index from lines cannot fail; only producing the lines can.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("could not open dictionary '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read dictionary '{}': {source}", path.display())]
    Load { path: PathBuf, source: io::Error },
    #[error("failed to read dictionary: {0}")]
    Read(#[from] io::Error),
}
