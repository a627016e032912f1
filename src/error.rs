//! Error types for field stripping

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while stripping a document
#[derive(Debug, Error)]
pub enum StripError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for strip operations
pub type StripResult<T> = Result<T, StripError>;
