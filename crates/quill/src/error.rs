//! Error types for Quill operations.
//!
//! This module provides the main error type [`QuillError`] which wraps
//! the error conditions that can occur while loading and rendering a
//! markup source.

use std::io;

use thiserror::Error;

/// The main error type for Quill operations.
///
/// # Diagnostic Variants
///
/// The `Source` variant keeps the decoding error together with the source
/// text it was raised for, so callers can report it with source spans.
#[derive(Debug, Error)]
pub enum QuillError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Source { err: toml::de::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuillError {
    /// Create a new `Source` error with the associated source text.
    pub fn new_source_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Source {
            err,
            src: src.into(),
        }
    }
}
