// spell-tokenize: Show how stdin is split, trimmed and judged.
//
// Prints one line per raw token:
//   LINE:COL  RAW  TRIMMED  VERDICT
// where VERDICT is OK, CAPS (capitalization error), BAD (not in the
// dictionary) or SKIP (no word left after trimming, or no ASCII letter).
//
// Usage:
//   spell-tokenize DICTIONARY

use std::borrow::Cow;
use std::io::{self, Read, Write};

use clap::Parser;
use spell_cli::args::TokenizeArgs;
use spell_core::character::has_letter;
use spell_core::enums::SpellResult;
use spell_engine::tokenizer::punctuation::trim;

fn main() {
    let args = TokenizeArgs::parse();

    let handle =
        spell_cli::load_handle(&args.dictionary).unwrap_or_else(|e| spell_cli::fatal(&e));

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .unwrap_or_else(|e| spell_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in handle.tokens(&input) {
        let position = format!("{}:{}", token.line, token.col);
        let raw = String::from_utf8_lossy(token.text);
        let (trimmed, verdict): (Cow<'_, str>, &str) = match trim(token) {
            Some(word) if has_letter(word.text) => {
                let verdict = match handle.spell_result(word.text) {
                    SpellResult::Ok => "OK",
                    SpellResult::CapitalizationError => "CAPS",
                    SpellResult::Failed => "BAD",
                };
                (String::from_utf8_lossy(word.text), verdict)
            }
            Some(word) => (String::from_utf8_lossy(word.text), "SKIP"),
            None => (Cow::Borrowed("-"), "SKIP"),
        };
        let _ = writeln!(out, "{position:9} {raw:20} {trimmed:20} {verdict}");
    }

    let _ = out.flush();
}
