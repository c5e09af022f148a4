// Capitalization matching between a dictionary spelling and a word

use spell_core::character::{is_letter, is_upper};

/// Check whether `word` is an acceptable rendering of the dictionary
/// spelling `dict`.
///
/// Both must have the same length. Position by position:
/// - an uppercase dictionary letter must appear in the word unchanged;
/// - a lowercase dictionary letter may appear in either case;
/// - any other dictionary byte must appear unchanged.
///
/// So the entry `apple` accepts `apple`, `Apple` and `APPLE`. The entry
/// `Paris` accepts `Paris`, `PAris` and `PARIS`, but never `paris`.
pub fn capitalization_matches(dict: &[u8], word: &[u8]) -> bool {
    if dict.len() != word.len() {
        return false;
    }
    dict.iter().zip(word).all(|(&dc, &wc)| {
        if is_letter(dc) && !is_upper(dc) {
            wc.to_ascii_lowercase() == dc
        } else {
            wc == dc
        }
    })
}
