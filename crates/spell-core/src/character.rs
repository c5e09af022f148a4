// Byte classification for tokenizing and trimming
//
// All classification is ASCII-only. Bytes outside the ASCII range are never
// letters, digits, whitespace or punctuation; they pass through as opaque
// parts of a word and must be matched byte-for-byte.

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a byte separates tokens.
///
/// This is the classic C-locale `isspace` set: space, horizontal tab,
/// newline, vertical tab, form feed and carriage return. Note that
/// [`u8::is_ascii_whitespace`] leaves out the vertical tab (0x0B), so it
/// cannot be used here.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Check whether a byte is an ASCII letter (`A`-`Z`, `a`-`z`).
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Check whether a byte is an ASCII digit.
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

pub fn is_letter_or_digit(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Check whether a byte is an uppercase ASCII letter.
pub fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Opening brackets and quotes stripped from the front of a token.
const OPENING_PUNCTUATION: &[u8] = b"([{'\"";

/// Check whether a byte is opening punctuation: `(`, `[`, `{`, `'` or `"`.
pub fn is_opening_punctuation(b: u8) -> bool {
    OPENING_PUNCTUATION.contains(&b)
}

/// Check whether a word contains at least one ASCII letter.
///
/// Words without letters (numbers, bare punctuation) are never spell
/// checked.
pub fn has_letter(word: &[u8]) -> bool {
    word.iter().copied().any(is_letter)
}
