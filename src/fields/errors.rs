/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Error types for derived-field computation

use crate::atoms::AtomError;
use crate::grid::GridError;

/// Error types for derived-field computation
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("Cannot compute atom-derived fields for an empty molecule")]
    EmptyMolecule,

    #[error("Voxel {index:?} coincides with atom {label}; rep_esp is undefined at zero distance")]
    AtomOnGridPoint { label: usize, index: [usize; 3] },

    #[error("No voxel exceeds the isovalue {isovalue:e}; distance transform is undefined")]
    NoForeground { isovalue: f64 },

    #[error(transparent)]
    Atom(#[from] AtomError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Result type for field computations
pub type Result<T> = std::result::Result<T, FieldError>;
