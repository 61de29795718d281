use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum index file size (100 MB). A full APKINDEX for an Alpine release is
/// a few MB, so anything larger is rejected before it is read into memory.
pub const MAX_INDEX_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that `path` is a readable index file.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// - [`GraphError::IndexNotFound`] if the path does not exist
/// - [`GraphError::SecurityError`] for symbolic links and oversized files
/// - [`GraphError::InvalidIndexPath`] for directories and other non-files
pub fn validate_index_file(path: &Path) -> Result<u64> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GraphError::IndexNotFound {
                path: path.to_path_buf(),
                suggestion: "Download an APKINDEX (e.g. from an Alpine mirror) or pass the correct path with --index".to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(GraphError::IndexReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read metadata: {}", e),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(GraphError::SecurityError {
            path: path.to_path_buf(),
            reason: "Index path is a symbolic link".to_string(),
            hint: "Pass the resolved file path instead of the link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(GraphError::InvalidIndexPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    let size = metadata.len();
    if size > MAX_INDEX_SIZE {
        return Err(GraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                size, MAX_INDEX_SIZE
            ),
            hint: "Make sure the path points at an uncompressed APKINDEX".to_string(),
        }
        .into());
    }

    Ok(size)
}
