use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a failed lookup apart from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Query answered
    Success = 0,
    /// The query ran but found nothing (no path, unknown package)
    NotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, config, output)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// The analytics engine never produces these: an unknown package name is a
/// valid state there and yields an empty result. I/O, configuration, request
/// validation and the `details` lookup report errors.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Index file not found: {path}\n\n💡 Hint: {suggestion}")]
    IndexNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read index file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    IndexReadError { path: PathBuf, details: String },

    #[error("Invalid index path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an APKINDEX file with --index")]
    InvalidIndexPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Package not found in index: {name}\n\n💡 Hint: Try `apk-graph search {name}` to look for similar packages")]
    PackageNotFound { name: String },

    /// Validation error for configuration and requests
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::NotFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::NotFound), "Not Found (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_index_not_found_display() {
        let error = GraphError::IndexNotFound {
            path: PathBuf::from("/srv/APKINDEX"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Index file not found"));
        assert!(display.contains("/srv/APKINDEX"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_package_not_found_display() {
        let error = GraphError::PackageNotFound {
            name: "openssl".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package not found in index: openssl"));
        assert!(display.contains("apk-graph search openssl"));
    }

    #[test]
    fn test_security_error_display() {
        let error = GraphError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Index path is a symbolic link".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_validation_display() {
        let error = GraphError::Validation {
            message: "critical_limit must be greater than 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation error: critical_limit must be greater than 0"
        );
    }
}
