// Token and Misspelling public API types
//
// All positions are 1-based. Columns count bytes, so a tab or a multi-byte
// UTF-8 character each advance the column by their byte length.

use std::borrow::Cow;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A maximal run of non-whitespace bytes in a text buffer.
///
/// `line` and `col` locate the first byte of the raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// The raw token bytes, borrowed from the scanned buffer.
    pub text: &'a [u8],

    /// Line of the first byte (starts at 1).
    pub line: usize,

    /// Column of the first byte (starts at 1, reset after each newline).
    pub col: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a [u8], line: usize, col: usize) -> Self {
        Self { text, line, col }
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TrimmedToken
// ---------------------------------------------------------------------------

/// A token with leading opening punctuation and trailing non-alphanumeric
/// bytes removed.
///
/// `col` is the raw token's column plus the number of bytes stripped from
/// the left. Stripping from the right never moves the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrimmedToken<'a> {
    /// The trimmed bytes. Never empty.
    pub text: &'a [u8],
    pub line: usize,
    pub col: usize,
}

impl<'a> TrimmedToken<'a> {
    pub fn new(text: &'a [u8], line: usize, col: usize) -> Self {
        Self { text, line, col }
    }
}

// ---------------------------------------------------------------------------
// Misspelling
// ---------------------------------------------------------------------------

/// A trimmed word that no dictionary entry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Misspelling<'a> {
    pub line: usize,
    pub col: usize,
    /// The trimmed word, borrowed from the scanned buffer.
    pub word: &'a [u8],
}

impl<'a> Misspelling<'a> {
    pub fn new(line: usize, col: usize, word: &'a [u8]) -> Self {
        Self { line, col, word }
    }

    /// The word as text, replacing invalid UTF-8 with U+FFFD.
    pub fn word_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.word)
    }

    /// Detach from the scanned buffer.
    pub fn into_owned(self) -> OwnedMisspelling {
        OwnedMisspelling {
            line: self.line,
            col: self.col,
            word: self.word.to_vec(),
        }
    }
}

impl<'a> From<TrimmedToken<'a>> for Misspelling<'a> {
    fn from(token: TrimmedToken<'a>) -> Self {
        Self::new(token.line, token.col, token.text)
    }
}

/// A [`Misspelling`] that owns its word, for callers that outlive the
/// scanned buffer (FFI, WASM).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedMisspelling {
    pub line: usize,
    pub col: usize,
    pub word: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Token tests --

    #[test]
    fn token_new() {
        let tok = Token::new(b"apple", 2, 7);
        assert_eq!(tok.text, b"apple");
        assert_eq!(tok.line, 2);
        assert_eq!(tok.col, 7);
        assert_eq!(tok.len(), 5);
        assert!(!tok.is_empty());
    }

    #[test]
    fn token_len_counts_bytes() {
        // "äiti" is 4 characters, 5 bytes in UTF-8
        let tok = Token::new("\u{00E4}iti".as_bytes(), 1, 1);
        assert_eq!(tok.len(), 5);
    }

    // -- Misspelling tests --

    #[test]
    fn misspelling_from_trimmed_token() {
        let trimmed = TrimmedToken::new(b"Aplpe", 1, 10);
        let m = Misspelling::from(trimmed);
        assert_eq!(m, Misspelling::new(1, 10, b"Aplpe"));
    }

    #[test]
    fn word_lossy_replaces_invalid_utf8() {
        let m = Misspelling::new(1, 1, b"ab\xFFc");
        assert_eq!(m.word_lossy(), "ab\u{FFFD}c");
    }

    #[test]
    fn word_lossy_borrows_valid_utf8() {
        let m = Misspelling::new(1, 1, b"word");
        assert!(matches!(m.word_lossy(), Cow::Borrowed("word")));
    }

    #[test]
    fn into_owned_copies_word() {
        let buffer = b"foom".to_vec();
        let owned = Misspelling::new(3, 4, &buffer).into_owned();
        drop(buffer);
        assert_eq!(owned.line, 3);
        assert_eq!(owned.col, 4);
        assert_eq!(owned.word, b"foom");
    }
}
