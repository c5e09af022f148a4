//! Shared leaf types for the spell checker.
//!
//! - [`character`] -- ASCII byte classification (whitespace, letters, punctuation)
//! - [`case`] -- ASCII case folding used for dictionary keys
//! - [`token`] -- raw tokens, trimmed tokens and reported misspellings
//! - [`enums`] -- spell check verdicts

pub mod case;
pub mod character;
pub mod enums;
pub mod token;
