//! Error types for the BPE tokenizer library.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Training and encoding never fail; every variant here comes from
/// decoding, configuration parsing or persistence.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid configuration, such as an unrecognized decode error mode
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Token ID with no entry in the byte table
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Decoded bytes are not valid UTF-8 (strict mode only)
    #[error("Invalid UTF-8 sequence during decoding: {0}")]
    Decode(#[from] FromUtf8Error),

    /// Invalid merge rule
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),

    /// Error loading a saved tokenizer
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a tokenizer
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
