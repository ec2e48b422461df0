/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Error types for the grid module

/// Error types for the grid module
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Axis {axis} has a zero point count")]
    EmptyAxis { axis: usize },

    #[error("Axis {axis} has a degenerate (zero-length) step vector")]
    DegenerateAxis { axis: usize },

    #[error("Value array shape {actual:?} does not match grid shape {expected:?}")]
    ShapeMismatch {
        expected: [usize; 3],
        actual: [usize; 3],
    },
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
