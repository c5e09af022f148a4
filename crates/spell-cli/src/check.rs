// Checking files, directory trees and standard input
//
// Every misspelling becomes one report line `NAME:LINE:COLUMN WORD` on the
// output writer. Read failures are printed to stderr and remembered in the
// summary; they never stop the run. Only a failure to write the report
// itself is returned as an error.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use spell_core::token::Misspelling;
use spell_engine::handle::SpellHandle;

use crate::CheckError;
use crate::args::SpellArgs;

/// Suffix of files picked up while walking directories.
pub const DEFAULT_SUFFIX: &str = ".txt";

/// Name shown in report lines for text read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Options that shape which files get checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Files found while walking a directory are checked only if their name
    /// ends with this suffix. Paths named directly are always checked.
    pub suffix: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// What a run found.
#[derive(Debug, Default)]
pub struct Summary {
    pub files_checked: usize,
    pub misspellings: usize,
    pub errors: Vec<CheckError>,
}

impl Summary {
    /// True if nothing was misspelled and every input could be read.
    pub fn is_clean(&self) -> bool {
        self.misspellings == 0 && self.errors.is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Checks inputs against one dictionary and writes report lines to `out`.
pub struct Checker<'a, W: Write> {
    handle: &'a SpellHandle,
    options: &'a CheckOptions,
    out: W,
    summary: Summary,
}

impl<'a, W: Write> Checker<'a, W> {
    pub fn new(handle: &'a SpellHandle, options: &'a CheckOptions, out: W) -> Self {
        Self {
            handle,
            options,
            out,
            summary: Summary::default(),
        }
    }

    /// Check an in-memory buffer. `name` is `None` for standard input.
    pub fn check_buffer(&mut self, name: Option<&Path>, buffer: &[u8]) -> io::Result<()> {
        let handle = self.handle;
        self.summary.files_checked += 1;
        for m in handle.misspellings(buffer) {
            write_report(&mut self.out, name, &m)?;
            self.summary.misspellings += 1;
        }
        Ok(())
    }

    /// Read all of `input` and check it under the standard input name.
    pub fn check_input<R: Read>(&mut self, mut input: R) -> io::Result<()> {
        let mut buffer = Vec::new();
        match input.read_to_end(&mut buffer) {
            Ok(_) => self.check_buffer(None, &buffer),
            Err(e) => {
                self.fail(CheckError::Stdin(e));
                Ok(())
            }
        }
    }

    pub fn check_stdin(&mut self) -> io::Result<()> {
        self.check_input(io::stdin().lock())
    }

    /// Check one regular file, whatever its name.
    pub fn check_file(&mut self, path: &Path) -> io::Result<()> {
        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(source) => {
                self.fail(CheckError::Open {
                    path: path.to_path_buf(),
                    source,
                });
                return Ok(());
            }
        };
        let mut buffer = Vec::new();
        if let Err(source) = file.read_to_end(&mut buffer) {
            self.fail(CheckError::Read {
                path: path.to_path_buf(),
                source,
            });
            return Ok(());
        }
        self.check_buffer(Some(path), &buffer)
    }

    /// Check a path named on the command line.
    ///
    /// Symbolic links are followed here. Directories are walked, regular
    /// files are checked regardless of suffix, anything else is ignored.
    pub fn check_path(&mut self, path: &Path) -> io::Result<()> {
        let meta = match fs::metadata(path) {
            Ok(m) => m,
            Err(source) => {
                self.fail(CheckError::Stat {
                    path: path.to_path_buf(),
                    source,
                });
                return Ok(());
            }
        };
        if meta.is_dir() {
            self.walk_dir(path)
        } else if meta.is_file() {
            self.check_file(path)
        } else {
            Ok(())
        }
    }

    /// Walk a directory tree in name order.
    ///
    /// Hidden entries are skipped and symbolic links inside the tree are
    /// not followed. Regular files are checked when their name carries the
    /// configured suffix.
    fn walk_dir(&mut self, dir: &Path) -> io::Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                self.fail(CheckError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                });
                return Ok(());
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                Err(source) => self.fail(CheckError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                }),
            }
        }
        names.sort();

        for name in names {
            if is_hidden(&name) {
                continue;
            }
            let path = dir.join(&name);
            let file_type = match fs::symlink_metadata(&path) {
                Ok(m) => m.file_type(),
                Err(source) => {
                    self.fail(CheckError::Stat { path, source });
                    continue;
                }
            };
            if file_type.is_dir() {
                self.walk_dir(&path)?;
            } else if file_type.is_file() && has_suffix(&name, &self.options.suffix) {
                self.check_file(&path)?;
            }
        }
        Ok(())
    }

    fn fail(&mut self, error: CheckError) {
        eprintln!("error: {error}");
        self.summary.errors.push(error);
    }

    /// Flush the report and return what the run found.
    pub fn finish(mut self) -> io::Result<Summary> {
        self.out.flush()?;
        Ok(self.summary)
    }
}

/// Check everything `args` names, or standard input if it names nothing.
pub fn run<W: Write>(args: &SpellArgs, handle: &SpellHandle, out: W) -> io::Result<Summary> {
    let options = args.check_options();
    let mut checker = Checker::new(handle, &options, out);
    if args.paths.is_empty() {
        checker.check_stdin()?;
    } else {
        for path in &args.paths {
            checker.check_path(path)?;
        }
    }
    checker.finish()
}

fn write_report<W: Write>(out: &mut W, name: Option<&Path>, m: &Misspelling<'_>) -> io::Result<()> {
    match name {
        Some(path) => out.write_all(path.as_os_str().as_encoded_bytes())?,
        None => out.write_all(STDIN_NAME.as_bytes())?,
    }
    write!(out, ":{}:{} ", m.line, m.col)?;
    out.write_all(m.word)?;
    out.write_all(b"\n")
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}
