// Buffer scan: tokens -> trimmed words -> misspellings

use spell_core::character::has_letter;
use spell_core::token::Misspelling;
use spell_dict::DictionaryIndex;

use crate::speller::Speller;
use crate::speller::dictionary::DictionarySpeller;
use crate::tokenizer::punctuation::trim;
use crate::tokenizer::{Tokens, tokens};

/// Find every misspelled word in `buffer`.
///
/// Each raw token is trimmed; tokens that trim to nothing or contain no
/// ASCII letter are skipped. Every other word the speller does not accept
/// is yielded with the position of its first byte after trimming, in buffer
/// order.
pub fn misspellings<S: Speller>(buffer: &[u8], speller: S) -> Misspellings<'_, S> {
    Misspellings {
        tokens: tokens(buffer),
        speller,
        scratch: Vec::new(),
    }
}

/// [`misspellings`] against a dictionary index.
pub fn scan_buffer<'a>(
    buffer: &'a [u8],
    index: &'a DictionaryIndex,
) -> Misspellings<'a, DictionarySpeller<'a>> {
    misspellings(buffer, DictionarySpeller::new(index))
}

/// Lazy iterator over the misspellings of one buffer.
///
/// Holds one scratch buffer, reused for every lookup key.
#[derive(Debug, Clone)]
pub struct Misspellings<'a, S> {
    tokens: Tokens<'a>,
    speller: S,
    scratch: Vec<u8>,
}

impl<'a, S: Speller> Iterator for Misspellings<'a, S> {
    type Item = Misspelling<'a>;

    fn next(&mut self) -> Option<Misspelling<'a>> {
        for token in self.tokens.by_ref() {
            let Some(word) = trim(token) else {
                continue;
            };
            if !has_letter(word.text) {
                continue;
            }
            if !self.speller.spell_reusing(word.text, &mut self.scratch).is_ok() {
                return Some(word.into());
            }
        }
        None
    }
}

impl<S: Speller> std::iter::FusedIterator for Misspellings<'_, S> {}
