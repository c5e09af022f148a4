// Speller backed by a dictionary index

use spell_core::case::fold_case_into;
use spell_core::enums::SpellResult;
use spell_dict::DictionaryIndex;

use crate::speller::Speller;
use crate::speller::capitalization::capitalization_matches;

/// Checks words against a borrowed [`DictionaryIndex`].
#[derive(Debug, Clone, Copy)]
pub struct DictionarySpeller<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> DictionarySpeller<'a> {
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Check a word whose folded key has already been computed.
    ///
    /// Tries every spelling in the key's run, in index order, and stops at
    /// the first one whose capitalization accepts the word.
    pub fn spell_with_key(&self, word: &[u8], key: &[u8]) -> SpellResult {
        let run = self.index.lookup(key);
        if run.is_empty() {
            return SpellResult::Failed;
        }
        if run
            .iter()
            .any(|entry| capitalization_matches(entry.original(), word))
        {
            SpellResult::Ok
        } else {
            SpellResult::CapitalizationError
        }
    }
}

impl Speller for DictionarySpeller<'_> {
    fn spell(&self, word: &[u8]) -> SpellResult {
        let mut key = Vec::with_capacity(word.len());
        self.spell_reusing(word, &mut key)
    }

    fn spell_reusing(&self, word: &[u8], scratch: &mut Vec<u8>) -> SpellResult {
        fold_case_into(word, scratch);
        self.spell_with_key(word, scratch)
    }
}
