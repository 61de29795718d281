use crate::ports::outbound::IndexReader;
use crate::shared::error::GraphError;
use crate::shared::security::{validate_index_file, MAX_INDEX_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Index path that selects standard input
pub const STDIN_PATH: &str = "-";

/// FileSystemReader adapter reading an index file from disk
///
/// The file is validated before it is read: symbolic links, non-regular
/// files and files above [`MAX_INDEX_SIZE`] are rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexReader for FileSystemReader {
    fn read_index(&self, path: &Path) -> Result<String> {
        validate_index_file(path)?;

        fs::read_to_string(path).map_err(|e| {
            GraphError::IndexReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// StdinReader adapter reading the index from standard input
///
/// Used for the `-` path, e.g. `zcat APKINDEX.tar.gz | tar -xO APKINDEX |
/// apk-graph -i - stats`. The same size limit as for files applies.
pub struct StdinReader;

impl StdinReader {
    pub fn new() -> Self {
        Self
    }

    fn read_limited(path: &Path, reader: impl Read, limit: u64) -> Result<String> {
        let mut content = String::new();
        reader
            .take(limit + 1)
            .read_to_string(&mut content)
            .map_err(|e| GraphError::IndexReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        if content.len() as u64 > limit {
            return Err(GraphError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "Input is too large. Maximum allowed size is {} bytes",
                    limit
                ),
                hint: "Split the index or pass a smaller file".to_string(),
            }
            .into());
        }
        Ok(content)
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexReader for StdinReader {
    fn read_index(&self, path: &Path) -> Result<String> {
        Self::read_limited(path, io::stdin().lock(), MAX_INDEX_SIZE)
    }
}
