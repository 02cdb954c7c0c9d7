//! Error types for pizman library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pizman operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pizman library
///
/// Every variant is an expected, non-fatal condition: the failed operation
/// reports it and leaves the store unchanged.
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Directory Errors
    // -------------------------------------------------------------------------
    #[error("Pizzeria '{0}' not found")]
    PizzeriaNotFound(String),

    #[error("Pizzeria '{0}' already exists")]
    PizzeriaExists(String),

    #[error("No pizza configurations provided")]
    NoConfigs,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("OptionSet '{0}' not found")]
    OptionSetNotFound(String),

    #[error("Option '{option}' not found in OptionSet '{set}'")]
    OptionNotFound { set: String, option: String },

    // -------------------------------------------------------------------------
    // Source Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read config source '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config source: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a "not found" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::PizzeriaNotFound(_) | Error::OptionSetNotFound(_) | Error::OptionNotFound { .. }
        )
    }
}
