/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Molecular geometry module
//!
//! This module provides the atom and molecule types shared by the grid
//! calculations and the cube reader/writer.

pub mod atom;
pub mod database;
pub mod errors;
pub mod molecule;
pub mod vector;

pub use atom::Atom;
pub use errors::AtomError;
pub use molecule::Molecule;
pub use vector::Vector3D;
