/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Derived-field computation
//!
//! This module turns a molecule plus a grid into secondary fields:
//! nearest-atom assignment and distance, reproduced electrostatic
//! potential from point charges, and the thresholded Euclidean distance
//! transform of any scalar field.

pub mod calculator;
pub mod distance_transform;
pub mod errors;

pub use calculator::GridFieldCalculator;
pub use errors::FieldError;
