// A single dictionary word

use spell_core::case::fold_case;

/// One dictionary word: its spelling as listed and its lookup key.
///
/// `key` is always the ASCII case-folded form of `original`, so both have
/// the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    original: Box<[u8]>,
    key: Box<[u8]>,
}

impl DictionaryEntry {
    /// Create an entry, deriving the key from the spelling.
    pub fn new(original: impl Into<Vec<u8>>) -> Self {
        let original = original.into();
        let key = fold_case(&original);
        Self {
            original: original.into_boxed_slice(),
            key: key.into_boxed_slice(),
        }
    }

    /// The spelling exactly as it appears in the word list.
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// The case-folded lookup key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}
