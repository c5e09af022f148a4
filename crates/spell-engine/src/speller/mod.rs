// Spell checking module

pub mod capitalization;
pub mod dictionary;
pub mod scan;

use spell_core::enums::SpellResult;

/// Trait for spell checkers.
///
/// `word` is a trimmed token exactly as it appeared in the text, not
/// case-folded: the capitalization rule needs the original casing.
pub trait Speller {
    /// Check whether the given word is correctly spelled.
    fn spell(&self, word: &[u8]) -> SpellResult;

    /// Like [`Speller::spell`], but may use `scratch` for temporary storage.
    ///
    /// A scan passes the same buffer for every token so that checking a
    /// whole text allocates at most once.
    fn spell_reusing(&self, word: &[u8], scratch: &mut Vec<u8>) -> SpellResult {
        let _ = scratch;
        self.spell(word)
    }
}

impl<S: Speller + ?Sized> Speller for &S {
    fn spell(&self, word: &[u8]) -> SpellResult {
        (**self).spell(word)
    }

    fn spell_reusing(&self, word: &[u8], scratch: &mut Vec<u8>) -> SpellResult {
        (**self).spell_reusing(word, scratch)
    }
}
