use crate::shared::Result;

/// OutputPresenter port for delivering a rendered report
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its parent directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
