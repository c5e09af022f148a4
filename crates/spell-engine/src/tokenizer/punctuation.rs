// Punctuation trimming for raw tokens

use spell_core::character::{is_letter_or_digit, is_opening_punctuation};
use spell_core::token::{Token, TrimmedToken};

/// Strip surrounding punctuation from a raw token.
///
/// From the left, opening brackets and quotes (`( [ { ' "`) are removed.
/// From the right, every byte that is not an ASCII letter or digit is
/// removed. The column moves right by the number of bytes stripped on the
/// left.
///
/// Returns `None` when nothing is left; such tokens are dropped entirely.
pub fn trim(token: Token<'_>) -> Option<TrimmedToken<'_>> {
    let text = token.text;

    let start = text
        .iter()
        .position(|&b| !is_opening_punctuation(b))
        .unwrap_or(text.len());
    let end = text[start..]
        .iter()
        .rposition(|&b| is_letter_or_digit(b))
        .map_or(start, |i| start + i + 1);

    if start >= end {
        return None;
    }
    Some(TrimmedToken::new(&text[start..end], token.line, token.col + start))
}
