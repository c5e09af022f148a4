// spell: Report misspelled words in files, directory trees or stdin.
//
// Each misspelling is printed as `FILE:LINE:COLUMN WORD`. Directories are
// walked recursively, checking files whose name ends with the suffix.
//
// Usage:
//   spell [-s SUFFIX] DICTIONARY [FILE_OR_DIR ...]
//
// Exits with status 1 if any word was misspelled or any input could not be
// read.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use spell_cli::args::SpellArgs;
use spell_cli::check;

fn main() -> ExitCode {
    let args = SpellArgs::parse();

    let handle = spell_cli::load_handle(&args.dictionary).unwrap_or_else(|e| spell_cli::fatal(&e));

    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());

    let summary = check::run(&args, &handle, out)
        .unwrap_or_else(|e| spell_cli::fatal(&format!("failed to write report: {e}")));

    summary.exit_code()
}
