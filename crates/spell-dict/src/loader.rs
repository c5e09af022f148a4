// Word list loading: line splitting and file reading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::DictError;
use crate::index::DictionaryIndex;

/// Split raw word-list bytes into dictionary lines.
///
/// Lines end at `\n` only. A last line without a terminator is still
/// returned, and empty lines are dropped. A `\r` before the `\n` is not a
/// terminator and stays part of the word.
pub fn lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split(|&b| b == b'\n').filter(|line| !line.is_empty())
}

impl DictionaryIndex {
    /// Build an index from the raw contents of a word list.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::build(lines(data))
    }

    /// Read a whole word list from `reader` and build an index from it.
    ///
    /// Nothing is built if reading fails part way.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DictError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data))
    }

    /// Load a word list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| DictError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|source| DictError::Load {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_bytes(&data))
    }
}
