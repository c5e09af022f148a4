// ASCII case folding for dictionary keys
//
// Only `A`-`Z` are mapped to `a`-`z`; every other byte, including all
// non-ASCII bytes, passes through unchanged. Folding therefore never changes
// the length of a word.

/// Return the case-folded form of a word.
pub fn fold_case(word: &[u8]) -> Vec<u8> {
    word.to_ascii_lowercase()
}

/// Case-fold a word into a reusable buffer.
///
/// The buffer is cleared first. This lets a scan reuse one allocation for
/// every lookup key instead of allocating per token.
pub fn fold_case_into(word: &[u8], buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend(word.iter().map(u8::to_ascii_lowercase));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_upper_and_mixed() {
        assert_eq!(fold_case(b"Paris"), b"paris");
        assert_eq!(fold_case(b"APPLE"), b"apple");
        assert_eq!(fold_case(b"McDonald's"), b"mcdonald's");
    }

    #[test]
    fn fold_leaves_non_letters() {
        assert_eq!(fold_case(b"foo3-BAR!"), b"foo3-bar!");
    }

    #[test]
    fn fold_is_ascii_only() {
        // "Äiti": the two-byte "Ä" is left alone
        let word = "\u{00C4}iti".as_bytes();
        let folded = fold_case(word);
        assert_eq!(folded, "\u{00C4}iti".as_bytes());
        assert_eq!(folded.len(), word.len());
    }

    #[test]
    fn fold_into_reuses_buffer() {
        let mut buf = Vec::new();
        fold_case_into(b"HELLO", &mut buf);
        assert_eq!(buf, b"hello");
        fold_case_into(b"Hi", &mut buf);
        assert_eq!(buf, b"hi");
    }

    #[test]
    fn fold_empty() {
        let mut buf = b"stale".to_vec();
        fold_case_into(b"", &mut buf);
        assert!(buf.is_empty());
        assert!(fold_case(b"").is_empty());
    }
}
