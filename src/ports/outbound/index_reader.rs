use crate::shared::Result;
use std::path::Path;

/// IndexReader port for obtaining raw APKINDEX text
///
/// This port abstracts where the index comes from (a file on disk,
/// standard input, or an in-memory fixture in tests).
pub trait IndexReader {
    /// Reads the whole index as UTF-8 text
    ///
    /// # Arguments
    /// * `path` - Location of the index; `-` means standard input
    ///
    /// # Errors
    /// Returns an error if:
    /// - The index does not exist or is not a regular file
    /// - The path is a symbolic link or exceeds the size limit
    /// - The content cannot be read as UTF-8
    fn read_index(&self, path: &Path) -> Result<String>;
}
