// Sorted, case-folded dictionary index

use crate::entry::DictionaryEntry;

/// An immutable word list sorted by case-folded key.
///
/// Keys are compared byte-wise. The same key may appear more than once when
/// the word list has several spellings that fold to it (for example both
/// `Paris` and `paris`); those entries always sit next to each other, in
/// the order they were listed.
///
/// The index has no interior mutability, so a single index can be shared by
/// any number of concurrent scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryIndex {
    entries: Vec<DictionaryEntry>,
}

impl DictionaryIndex {
    /// Build an index from dictionary lines.
    ///
    /// Empty lines are skipped. Every other line becomes one entry, taken
    /// verbatim. An empty input gives an empty, valid index.
    pub fn build<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut entries: Vec<DictionaryEntry> = lines
            .into_iter()
            .filter_map(|line| {
                let line: &[u8] = line.as_ref();
                (!line.is_empty()).then(|| DictionaryEntry::new(line))
            })
            .collect();

        // Stable: entries sharing a key keep their word-list order, which is
        // the order `lookup` hands them to the matcher.
        entries.sort_by(|a, b| a.key().cmp(b.key()));

        Self { entries }
    }

    /// Find every entry whose key equals `key`.
    ///
    /// Returns the contiguous run of matching entries in index order, or an
    /// empty slice if the key is absent. `key` must already be case-folded.
    pub fn lookup(&self, key: &[u8]) -> &[DictionaryEntry] {
        let start = self.entries.partition_point(|e| e.key() < key);
        let rest = &self.entries[start..];
        let len = rest.partition_point(|e| e.key() == key);
        &rest[..len]
    }

    /// Number of entries, counting every spelling separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in key order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DictionaryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DictionaryIndex {
    type Item = &'a DictionaryEntry;
    type IntoIter = std::slice::Iter<'a, DictionaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn originals(entries: &[DictionaryEntry]) -> Vec<&[u8]> {
        entries.iter().map(|e| e.original()).collect()
    }

    // -- build tests --

    #[test]
    fn build_sorts_by_folded_key() {
        let index = DictionaryIndex::build(["pear", "Apple", "banana"]);
        let keys: Vec<&[u8]> = index.iter().map(|e| e.key()).collect();
        assert_eq!(keys, [&b"apple"[..], b"banana", b"pear"]);
    }

    #[test]
    fn build_uses_bytewise_order() {
        // Byte order puts '-' (0x2D) before digits and letters, and 'Z'
        // folds to 'z' so it sorts after 'a'.
        let index = DictionaryIndex::build(["a1", "Zed", "a-b", "ab"]);
        assert_eq!(
            originals(index.entries()),
            [&b"a-b"[..], b"a1", b"ab", b"Zed"]
        );
    }

    #[test]
    fn build_skips_empty_lines() {
        let index = DictionaryIndex::build(["", "word", ""]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn build_empty() {
        let index = DictionaryIndex::build(Vec::<&[u8]>::new());
        assert!(index.is_empty());
        assert!(index.lookup(b"anything").is_empty());
    }

    #[test]
    fn build_keeps_duplicate_keys_in_input_order() {
        let index = DictionaryIndex::build(["paris", "zoo", "Paris", "PARIS"]);
        assert_eq!(index.len(), 4);
        assert_eq!(
            originals(index.lookup(b"paris")),
            [&b"paris"[..], b"Paris", b"PARIS"]
        );
    }

    #[test]
    fn build_keeps_exact_duplicates() {
        let index = DictionaryIndex::build(["cat", "cat"]);
        assert_eq!(index.lookup(b"cat").len(), 2);
    }

    #[test]
    fn keys_are_non_decreasing() {
        let index = DictionaryIndex::build(["delta", "Alpha", "charlie", "alpha", "Bravo", "echo"]);
        assert!(index.entries().windows(2).all(|w| w[0].key() <= w[1].key()));
    }

    // -- lookup tests --

    #[test]
    fn lookup_single() {
        let index = DictionaryIndex::build(["apple", "Paris"]);
        assert_eq!(originals(index.lookup(b"apple")), [&b"apple"[..]]);
        assert_eq!(originals(index.lookup(b"paris")), [&b"Paris"[..]]);
    }

    #[test]
    fn lookup_absent_key() {
        let index = DictionaryIndex::build(["apple", "Paris"]);
        assert!(index.lookup(b"aplpe").is_empty());
        // Before the first and after the last entry
        assert!(index.lookup(b"aaa").is_empty());
        assert!(index.lookup(b"zzz").is_empty());
    }

    #[test]
    fn lookup_needs_folded_key() {
        let index = DictionaryIndex::build(["Paris"]);
        assert!(index.lookup(b"Paris").is_empty());
    }

    #[test]
    fn lookup_does_not_match_prefixes() {
        let index = DictionaryIndex::build(["cat", "cats", "ca"]);
        assert_eq!(originals(index.lookup(b"cat")), [&b"cat"[..]]);
        assert_eq!(originals(index.lookup(b"ca")), [&b"ca"[..]]);
    }

    #[test]
    fn lookup_returns_maximal_run() {
        let words = ["a", "b", "B", "b", "c", "C", "d"];
        let index = DictionaryIndex::build(words);
        for key in [&b"a"[..], b"b", b"c", b"d", b"e"] {
            let run = index.lookup(key);
            let expected: Vec<&DictionaryEntry> =
                index.iter().filter(|e| e.key() == key).collect();
            assert_eq!(run.len(), expected.len(), "key {key:?}");
            assert!(run.iter().zip(expected).all(|(a, b)| a == b));
        }
    }

    #[test]
    fn index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DictionaryIndex>();
    }
}
