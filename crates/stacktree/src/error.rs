//! Error types for stacktree operations.
//!
//! This module provides the main error type [`StacktreeError`] which wraps
//! the error conditions that can occur while loading and parsing templates.

use std::{io, path::PathBuf};

use thiserror::Error;

use stacktree_parser::error::ParseError;

/// The main error type for stacktree operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the template source and its name next to the
/// structured parser diagnostics, so callers can render source snippets.
#[derive(Debug, Error)]
pub enum StacktreeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unable to read template '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Unable to parse template '{name}': {err}")]
    Parse {
        err: ParseError,
        src: String,
        name: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StacktreeError {
    /// Create a new `Parse` error with the associated source code and
    /// template name.
    pub fn new_parse_error(
        err: ParseError,
        src: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::Parse {
            err,
            src: src.into(),
            name: name.into(),
        }
    }
}
