// Tokenizer: whitespace-separated tokens with line/column tracking

pub mod punctuation;

use spell_core::character::is_space;
use spell_core::token::Token;

/// Split a buffer into raw tokens.
///
/// A token is a maximal run of non-whitespace bytes. Positions are 1-based;
/// a `\n` moves to the next line and resets the column to 1, every other
/// byte (including other whitespace) advances the column by one.
pub fn tokens(buffer: &[u8]) -> Tokens<'_> {
    Tokens::new(buffer)
}

/// Iterator over the raw tokens of a buffer.
///
/// Pure and allocation-free. To start over, create a new iterator (or keep
/// a clone of a fresh one).
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    buffer: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Skip whitespace, keeping line and column in step.
    fn skip_whitespace(&mut self) {
        while let Some(&b) = self.buffer.get(self.pos) {
            if !is_space(b) {
                break;
            }
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        if self.pos >= self.buffer.len() {
            return None;
        }

        let start = self.pos;
        let len = self.buffer[start..]
            .iter()
            .position(|&b| is_space(b))
            .unwrap_or(self.buffer.len() - start);

        let token = Token::new(&self.buffer[start..start + len], self.line, self.col);
        self.pos += len;
        self.col += len;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(buffer: &[u8]) -> Vec<(&[u8], usize, usize)> {
        tokens(buffer).map(|t| (t.text, t.line, t.col)).collect()
    }

    // -- basic splitting --

    #[test]
    fn single_word() {
        assert_eq!(spans(b"hello"), [(&b"hello"[..], 1, 1)]);
    }

    #[test]
    fn words_on_one_line() {
        assert_eq!(
            spans(b"I saw an Aplpe"),
            [
                (&b"I"[..], 1, 1),
                (&b"saw"[..], 1, 3),
                (&b"an"[..], 1, 7),
                (&b"Aplpe"[..], 1, 10),
            ]
        );
    }

    #[test]
    fn punctuation_stays_in_token() {
        assert_eq!(spans(b"(Hello) world."), [(&b"(Hello)"[..], 1, 1), (&b"world."[..], 1, 9)]);
    }

    #[test]
    fn empty_and_blank_buffers() {
        assert!(spans(b"").is_empty());
        assert!(spans(b"  \t\n\r\n ").is_empty());
    }

    // -- positions --

    #[test]
    fn newline_resets_column() {
        assert_eq!(
            spans(b"one two\nthree\n  four"),
            [
                (&b"one"[..], 1, 1),
                (&b"two"[..], 1, 5),
                (&b"three"[..], 2, 1),
                (&b"four"[..], 3, 3),
            ]
        );
    }

    #[test]
    fn leading_whitespace_and_blank_lines() {
        assert_eq!(spans(b"\n\n   word"), [(&b"word"[..], 3, 4)]);
    }

    #[test]
    fn tab_advances_one_column() {
        assert_eq!(spans(b"\tx\t\ty"), [(&b"x"[..], 1, 2), (&b"y"[..], 1, 5)]);
    }

    #[test]
    fn carriage_return_is_a_column_not_a_line() {
        assert_eq!(spans(b"a\r\nb\rc"), [(&b"a"[..], 1, 1), (&b"b"[..], 2, 1), (&b"c"[..], 2, 3)]);
    }

    #[test]
    fn vertical_tab_and_form_feed_separate() {
        assert_eq!(spans(b"a\x0Bb\x0Cc"), [(&b"a"[..], 1, 1), (&b"b"[..], 1, 3), (&b"c"[..], 1, 5)]);
    }

    #[test]
    fn columns_count_bytes() {
        // "äx" is three bytes, so "y" starts at byte column 5
        let buffer = "\u{00E4}x y".as_bytes();
        let got = spans(buffer);
        assert_eq!(got[0].2, 1);
        assert_eq!(got[1], (&b"y"[..], 1, 5));
    }

    // -- iterator behavior --

    #[test]
    fn never_yields_empty_tokens() {
        assert!(tokens(b" a  b \n\n c ").all(|t| !t.is_empty()));
    }

    #[test]
    fn fused_after_end() {
        let mut it = tokens(b"x");
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn clone_restarts_from_same_point() {
        let fresh = tokens(b"a b c");
        let mut first = fresh.clone();
        first.next();
        first.next();
        assert_eq!(fresh.count(), 3);
    }

    #[test]
    fn tokens_cover_every_non_whitespace_byte() {
        let buffer = b"  (Hello), world!\n\t42 foo3\x0B\"quoted\"  \r\nend";
        let joined: Vec<u8> = tokens(buffer).flat_map(|t| t.text.iter().copied()).collect();
        let expected: Vec<u8> = buffer.iter().copied().filter(|&b| !is_space(b)).collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn token_positions_point_at_first_byte() {
        let buffer = b"ab  cd\n ef\n\ngh ij";
        for token in tokens(buffer) {
            let mut line = 1;
            let mut col = 1;
            let offset = token.text.as_ptr() as usize - buffer.as_ptr() as usize;
            for &b in &buffer[..offset] {
                if b == b'\n' {
                    line += 1;
                    col = 1;
                } else {
                    col += 1;
                }
            }
            assert_eq!((token.line, token.col), (line, col));
        }
    }
}
