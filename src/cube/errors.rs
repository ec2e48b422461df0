/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Error types for cube-format I/O

use crate::atoms::AtomError;
use crate::grid::GridError;
use std::path::PathBuf;

/// Errors that can occur while reading or writing cube files
#[derive(Debug, thiserror::Error)]
pub enum CubeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("Output file already exists: {0}")]
    FileExists(PathBuf),

    #[error(transparent)]
    Atom(#[from] AtomError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl CubeError {
    /// Construct a format error for a 1-based line number
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        CubeError::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for cube I/O
pub type Result<T> = std::result::Result<T, CubeError>;
