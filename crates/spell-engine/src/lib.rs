//! Spell checking engine.
//!
//! Scans a text buffer into whitespace-separated tokens, trims surrounding
//! punctuation, and checks every remaining word that contains a letter
//! against a [`spell_dict::DictionaryIndex`] using a capitalization rule:
//! lowercase dictionary letters accept either case, uppercase dictionary
//! letters and all other bytes must match exactly.
//!
//! - [`tokenizer`] -- raw tokens with line/column positions, punctuation trimming
//! - [`speller`] -- the capitalization matcher, the [`speller::Speller`] seam
//!   and the buffer scan
//! - [`handle`] -- [`handle::SpellHandle`], an owned dictionary with the whole
//!   API on one type

pub mod speller;
pub mod tokenizer;

#[cfg(feature = "handle")]
pub mod handle;
