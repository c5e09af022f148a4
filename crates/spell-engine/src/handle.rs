// SpellHandle: top-level integration point for spell checking.
//
// Owns the dictionary index and exposes tokenizing, single-word checks and
// whole-buffer scans through one type. Spellers are lightweight borrowing
// adapters created on the fly in each method call, so the handle itself
// stays immutable and can be shared between threads.

use std::io::Read;
use std::path::Path;

use spell_core::enums::SpellResult;
use spell_core::token::Token;
use spell_dict::{DictError, DictionaryIndex};

use crate::speller::Speller;
use crate::speller::dictionary::DictionarySpeller;
use crate::speller::scan::{Misspellings, misspellings};
use crate::tokenizer::{self, Tokens};

/// Library version, from the crate manifest.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Top-level handle owning one dictionary.
#[derive(Debug, Clone, Default)]
pub struct SpellHandle {
    index: DictionaryIndex,
}

impl SpellHandle {
    /// Wrap an already built index.
    pub fn new(index: DictionaryIndex) -> Self {
        Self { index }
    }

    /// Create a handle from the raw contents of a word list.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::new(DictionaryIndex::from_bytes(data))
    }

    /// Create a handle from individual words.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        Self::new(DictionaryIndex::build(words))
    }

    /// Read a whole word list and create a handle.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictError> {
        DictionaryIndex::from_reader(reader).map(Self::new)
    }

    /// Load a word list file and create a handle.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictError> {
        DictionaryIndex::load(path).map(Self::new)
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Check whether a single word is correctly spelled.
    ///
    /// The word is used as given; no punctuation is trimmed.
    pub fn spell(&self, word: &str) -> bool {
        self.spell_result(word.as_bytes()).is_ok()
    }

    /// Check a single word and report why it failed.
    pub fn spell_result(&self, word: &[u8]) -> SpellResult {
        self.speller().spell(word)
    }

    /// Split a buffer into raw tokens.
    pub fn tokens<'a>(&self, buffer: &'a [u8]) -> Tokens<'a> {
        tokenizer::tokens(buffer)
    }

    /// Collect the raw tokens of a buffer.
    pub fn token_list<'a>(&self, buffer: &'a [u8]) -> Vec<Token<'a>> {
        self.tokens(buffer).collect()
    }

    /// Lazily find every misspelled word in a buffer.
    pub fn misspellings<'a>(&'a self, buffer: &'a [u8]) -> Misspellings<'a, DictionarySpeller<'a>> {
        misspellings(buffer, self.speller())
    }

    /// A speller borrowing this handle's dictionary.
    pub fn speller(&self) -> DictionarySpeller<'_> {
        DictionarySpeller::new(&self.index)
    }

    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Get the library version string.
    pub fn version() -> &'static str {
        VERSION
    }
}

impl From<DictionaryIndex> for SpellHandle {
    fn from(index: DictionaryIndex) -> Self {
        Self::new(index)
    }
}
