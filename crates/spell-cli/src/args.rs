//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::check::{CheckOptions, DEFAULT_SUFFIX};

/// Report words that are not in a word list.
///
/// Prints one `FILE:LINE:COLUMN WORD` line per misspelling and exits with a
/// failure status if anything was misspelled or could not be read.
#[derive(Parser, Debug, Clone)]
#[command(name = "spell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellArgs {
    /// Only check files with this suffix when walking directories
    #[arg(
        short = 's',
        long,
        value_name = "SUFFIX",
        default_value = DEFAULT_SUFFIX,
        env = "SPELL_SUFFIX"
    )]
    pub suffix: String,

    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Files and directories to check; reads standard input if none are given
    #[arg(value_name = "FILE_OR_DIR")]
    pub paths: Vec<PathBuf>,
}

impl SpellArgs {
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            suffix: self.suffix.clone(),
        }
    }
}

/// Show how text from standard input is tokenized, trimmed and judged.
#[derive(Parser, Debug, Clone)]
#[command(name = "spell-tokenize")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct TokenizeArgs {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}
