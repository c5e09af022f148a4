// Shared enums

/// Verdict of checking one word against a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// Some dictionary spelling accepts the word as written.
    Ok,
    /// The word is in the dictionary ignoring case, but no dictionary
    /// spelling accepts its capitalization.
    CapitalizationError,
    /// No dictionary entry has this word's case-folded key.
    Failed,
}

impl SpellResult {
    /// Whether the word counts as correctly spelled.
    pub fn is_ok(self) -> bool {
        self == SpellResult::Ok
    }
}
