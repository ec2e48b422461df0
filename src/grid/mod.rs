/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Grid geometry and field arrays
//!
//! A [`Grid`] describes a regular 3-D lattice; a [`Field`] is a dense,
//! tagged value array over one. Several fields may share one grid.

#[allow(clippy::module_inception)]
pub mod grid;

pub mod errors;
pub mod field;

pub use errors::GridError;
pub use field::{AssignmentMethod, AtomField, Field, FieldKind, ScalarField};
pub use grid::{Grid, GridAxis, GridPoints};
