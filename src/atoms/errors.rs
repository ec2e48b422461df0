/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(u32),

    #[error("Duplicate atom label {0} in molecule")]
    DuplicateLabel(usize),

    #[error("Charge model '{model}' already set on atom {label}")]
    DuplicateChargeModel { label: usize, model: String },

    #[error("Atom {label} carries no charge under model '{model}'")]
    UnknownChargeModel { label: usize, model: String },
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
