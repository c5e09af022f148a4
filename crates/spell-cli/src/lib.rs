// spell-cli: shared utilities for the command-line tools.

pub mod args;
pub mod check;

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use spell_engine::handle::SpellHandle;

/// Failures while reading the text to check.
///
/// None of these stop a run: the tool reports them, moves on to the next
/// path, and exits with a failure status at the end.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("could not stat '{}': {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },
    #[error("could not open file '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("could not read file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not open directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("error reading stdin: {0}")]
    Stdin(io::Error),
}

/// Load the word list named on the command line.
pub fn load_handle(path: &Path) -> Result<SpellHandle, String> {
    SpellHandle::load(path).map_err(|e| e.to_string())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
