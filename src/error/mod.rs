//! Error types and handling for configbundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every variant maps to its own process exit code so scripts can tell
//! failures apart without parsing messages.

pub mod fs;

pub use fs::{io_error, with_path};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum CbundleError {
    #[error("Invalid path '{path}': {reason}")]
    #[diagnostic(code(cbundle::invalid_path))]
    InvalidPath { path: String, reason: String },

    #[error("No such file: {path}")]
    #[diagnostic(code(cbundle::not_found))]
    NotFound {
        path: String,
        #[help]
        hint: Option<String>,
    },

    #[error("Not a regular file: {path} ({reason})")]
    #[diagnostic(
        code(cbundle::not_a_regular_file),
        help("Only plain files can be bundled")
    )]
    NotARegularFile { path: String, reason: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(code(cbundle::not_a_directory))]
    NotADirectory { path: String },

    #[error("Already exists: {path}")]
    #[diagnostic(
        code(cbundle::already_exists),
        help("Use --force to overwrite, or choose another target")
    )]
    AlreadyExists { path: String },

    #[error("Directory not empty: {path}")]
    #[diagnostic(
        code(cbundle::directory_not_empty),
        help("Use --force to delete it together with its contents")
    )]
    DirectoryNotEmpty { path: String },

    #[error("'{name}' is already bundled")]
    #[diagnostic(
        code(cbundle::already_bundled),
        help("Pick another name inside the bundle with --as <NAME>")
    )]
    AlreadyBundled { name: String },

    #[error("'{name}' has no backlink, its original location is unknown")]
    #[diagnostic(
        code(cbundle::orphaned_file),
        help("Use 'cb copy {name} <TARGET>' to extract the file by hand")
    )]
    OrphanedFile { name: String },

    #[error("Refusing to replace {path}: it is not a link to '{name}'")]
    #[diagnostic(
        code(cbundle::target_occupied),
        help("Move the existing file away, or pass --force to replace it")
    )]
    TargetOccupied { path: String, name: String },

    #[error("Failed to link {path} to bundled file '{name}': {reason}")]
    #[diagnostic(
        code(cbundle::link_failed),
        help("The content is safe in the bundle. Run 'cb restore {name}' once the problem is fixed")
    )]
    LinkFailed {
        path: String,
        name: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(cbundle::io_error))]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read confirmation: {message}")]
    #[diagnostic(code(cbundle::prompt_failed))]
    Prompt { message: String },

    #[error("Cancelled")]
    #[diagnostic(code(cbundle::cancelled))]
    Cancelled,
}

impl CbundleError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CbundleError::Io { .. } | CbundleError::Prompt { .. } => 1,
            CbundleError::InvalidPath { .. } => 2,
            CbundleError::NotFound { .. } => 3,
            CbundleError::NotARegularFile { .. } => 4,
            CbundleError::NotADirectory { .. } => 5,
            CbundleError::AlreadyExists { .. } => 6,
            CbundleError::AlreadyBundled { .. } => 7,
            CbundleError::OrphanedFile { .. } => 8,
            CbundleError::TargetOccupied { .. } => 9,
            CbundleError::LinkFailed { .. } => 10,
            CbundleError::DirectoryNotEmpty { .. } => 11,
            CbundleError::Cancelled => 130,
        }
    }
}

impl From<std::io::Error> for CbundleError {
    fn from(err: std::io::Error) -> Self {
        CbundleError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<inquire::InquireError> for CbundleError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => CbundleError::Cancelled,
            other => CbundleError::Prompt {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CbundleError>;
