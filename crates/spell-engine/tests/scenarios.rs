//! Scenario tests: scan fixed inputs against small dictionaries and compare
//! the report lines with the expectations in `tests/fixtures/scenarios.json`.
//!
//! Run: cargo test -p spell-engine --test scenarios

use std::path::PathBuf;

use serde::Deserialize;
use spell_dict::DictionaryIndex;
use spell_engine::handle::SpellHandle;
use spell_engine::speller::scan::scan_buffer;

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    dictionary: Vec<String>,
    input: String,
    expected: Vec<String>,
}

fn load_scenarios() -> Vec<Scenario> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenarios.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

/// Render misspellings the way the command-line tool prints them, minus
/// the file name prefix.
fn report(index: &DictionaryIndex, input: &str) -> Vec<String> {
    scan_buffer(input.as_bytes(), index)
        .map(|m| format!("{}:{} {}", m.line, m.col, m.word_lossy()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn fixture_scenarios() {
    let scenarios = load_scenarios();
    assert!(!scenarios.is_empty());

    let mut failures = Vec::new();
    for scenario in &scenarios {
        let index = DictionaryIndex::build(&scenario.dictionary);
        let got = report(&index, &scenario.input);
        if got != scenario.expected {
            failures.push(format!(
                "{}:\n  expected: {:?}\n  got:      {:?}",
                scenario.name, scenario.expected, got
            ));
        }
    }
    assert!(failures.is_empty(), "{} scenario(s) failed:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn handle_agrees_with_index_scan() {
    for scenario in load_scenarios() {
        let joined = scenario.dictionary.join("\n");
        let handle = SpellHandle::from_bytes(joined.as_bytes());
        let via_handle: Vec<String> = handle
            .misspellings(scenario.input.as_bytes())
            .map(|m| format!("{}:{} {}", m.line, m.col, m.word_lossy()))
            .collect();
        assert_eq!(via_handle, scenario.expected, "scenario {}", scenario.name);
    }
}

#[test]
fn dictionary_line_endings() {
    // CRLF word lists keep the '\r', so those entries never match plain words
    let handle = SpellHandle::from_bytes(b"apple\r\nPear\n");
    assert!(!handle.spell("apple"));
    assert!(!handle.spell("pear"));
    assert!(handle.spell("Pear"));
}

#[test]
fn pure_digit_tokens_are_never_reported() {
    let index = DictionaryIndex::default();
    let input = "0 1 22 333 4444 (55) [66]. 7,777 \"88\" 9.";
    assert!(report(&index, input).is_empty());
}

#[test]
fn non_utf8_bytes_pass_through() {
    let index = DictionaryIndex::build([&b"caf\xE9s"[..]]);
    let found: Vec<_> = scan_buffer(b"caf\xE9s CAF\xE9S caf\xC9s", &index).collect();
    // Only the ASCII letters fold; 0xE9 and 0xC9 are different bytes
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].word, b"caf\xC9s");
    assert_eq!(found[0].col, 13);
}
