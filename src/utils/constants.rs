/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Physical constants used throughout the crate

/// Bohr radius in Angstroms.
///
/// The single length-conversion constant: cube files store geometry in Bohr,
/// every in-memory quantity is in Angstrom.
pub const ANGSTROM_PER_BOHR: f64 = 0.52917721067;
