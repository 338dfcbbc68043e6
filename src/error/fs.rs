//! File system errors

use std::path::Path;

use super::CbundleError;

/// Creates an IO error with a custom message
pub fn io_error(message: impl Into<String>, source: std::io::Error) -> CbundleError {
    CbundleError::Io {
        message: message.into(),
        source,
    }
}

/// Wraps an IO error with the operation and the path it failed on
///
/// # Example
/// ```rust,ignore
/// std::fs::remove_file(path).map_err(|e| with_path("Failed to remove", path, e))?;
/// ```
pub fn with_path(operation: &str, path: &Path, source: std::io::Error) -> CbundleError {
    CbundleError::Io {
        message: format!("{operation} {}: {source}", path.display()),
        source,
    }
}
