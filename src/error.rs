//! Custom error types and result handling for catalog runs.
//!
//! All fallible operations return a [`Result<T>`] which is a type alias for
//! `std::result::Result<T, Error>`. Files that simply do not follow a known
//! naming convention are never errors; they are skipped by the parser.
//!
use std::path::PathBuf;

/// Type alias for Results with catalog errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all catalog operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O errors from the standard library (e.g. listing the source directory)
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// JSON rendering errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    CatalogBuilder(#[from] crate::catalog::CatalogConfigBuilderError),
    /// The configured source path does not exist or is not a directory
    #[error("Source directory does not exist: {0:?}")]
    DirectoryNotFound(PathBuf),
    /// The output document could not be written
    #[error("Failed to write catalog to {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error for invalid file or directory paths
    #[error("The given path '{0:?}' is invalid: {1}")]
    InvalidPath(PathBuf, String),
    /// Configuration values rejected before a run starts
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Other errors that don't fit into specific categories
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Other(error)
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Error::Other(error.to_string())
    }
}

impl Error {
    /// Returns true when the error means the run never reached the scan stage.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::DirectoryNotFound(_)
                | Error::InvalidConfig(_)
                | Error::InvalidPath(..)
                | Error::CatalogBuilder(_)
        )
    }
}
