/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! # cubefield
//!
//! Volumetric scalar-field processing for quantum-chemistry cube files.
//!
//! This crate reads and writes the cube text format used by
//! quantum-chemistry packages and derives secondary fields from the
//! molecular geometry it carries: nearest-atom (Voronoi) assignment,
//! atom-distance fields, a point-charge reproduced electrostatic potential,
//! and thresholded Euclidean distance transforms.
//!
//! On disk all geometry is in Bohr; every in-memory quantity is in
//! Angstrom, converted through a single constant. All computation is
//! synchronous and every type except the per-atom charge map is immutable
//! once constructed.

pub mod atoms;
pub mod cli;
pub mod cube;
pub mod fields;
pub mod grid;
pub mod utils;

pub use atoms::{Atom, AtomError, Molecule, Vector3D};
pub use cube::{write_cube, Cube, CubeError};
pub use fields::{FieldError, GridFieldCalculator};
pub use grid::{
    AssignmentMethod, AtomField, Field, FieldKind, Grid, GridAxis, GridError, ScalarField,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
