//! Catalog error handling
//!
//! Typed errors for catalog operations. The user-facing kinds (unknown id,
//! bad status, empty field) are recoverable; I/O and format errors are not.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, querying or mutating the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No book with the given id
    #[error("Book with ID {id} not found")]
    NotFound { id: u64 },

    /// Status text is not one of the known statuses
    #[error("Invalid status '{0}'. Use \"available\" or \"checked-out\".")]
    InvalidStatus(String),

    /// A required text field was empty
    #[error("The {field} must not be empty")]
    EmptyField { field: &'static str },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the catalog file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the catalog file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog file exists but cannot be parsed
    #[error("Invalid catalog format in '{path}': {details}")]
    InvalidFormat { path: PathBuf, details: String },

    /// Failed to serialize the catalog
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create an error from an I/O error with path context
    ///
    /// `writing` selects between read and write errors for the kinds that
    /// aren't classified more precisely.
    pub fn from_io(error: io::Error, path: PathBuf, writing: bool) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => CatalogError::PermissionDenied {
                path,
                source: error,
            },
            _ if writing => CatalogError::WriteError {
                path,
                source: error,
            },
            _ => CatalogError::ReadError {
                path,
                source: error,
            },
        }
    }

    /// Check if this error is caused by user input rather than the environment
    ///
    /// Interactive front ends report these and carry on.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound { .. }
                | CatalogError::InvalidStatus(_)
                | CatalogError::EmptyField { .. }
        )
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
