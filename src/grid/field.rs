/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Tagged scalar arrays over a grid

use super::errors::{GridError, Result};
use super::grid::Grid;
use crate::atoms::Vector3D;
use ndarray::Array3;
use std::fmt;

/// How voxels were assigned to atoms in a parent-atom field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentMethod {
    /// Nearest atom by Euclidean distance
    Voronoi,
}

impl fmt::Display for AssignmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentMethod::Voronoi => write!(f, "Voronoi"),
        }
    }
}

/// The type of a field, with its provenance carried in the variant.
///
/// Each variant fixes the shape of the field's provenance data, so a
/// distance-transform field cannot exist without its source tag and
/// isovalue, and a reproduced-ESP field cannot exist without the name of
/// the charge model it was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Electron density as read from a cube file
    ElectronDensity,
    /// Electrostatic potential as read from a cube file
    ElectrostaticPotential,
    /// Distance to the nearest atom
    NearestAtomDistance,
    /// Euclidean distance transform of another field
    DistanceTransform { source_tag: String, isovalue: f64 },
    /// 1-based label of the nearest atom per voxel
    ParentAtom { method: AssignmentMethod },
    /// Reproduced electrostatic potential from per-atom point charges
    RepEsp { charge_model: String },
    /// Caller-defined field type
    Other(String),
}

impl FieldKind {
    /// The short tag naming this field type in cube output
    pub fn tag(&self) -> &str {
        match self {
            FieldKind::ElectronDensity => "ed",
            FieldKind::ElectrostaticPotential => "esp",
            FieldKind::NearestAtomDistance => "dist",
            FieldKind::DistanceTransform { .. } => "dist",
            FieldKind::ParentAtom { .. } => "parent_atom",
            FieldKind::RepEsp { .. } => "rep_esp",
            FieldKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A dense array of per-voxel values over a grid.
///
/// The element type follows the field type: `f64` for continuous fields,
/// `usize` for atom labels. The array shape always equals the grid's
/// per-axis point counts, with the same row-major ordering as the grid's
/// voxel sequence.
#[derive(Debug, Clone)]
pub struct Field<T> {
    grid: Grid,
    kind: FieldKind,
    values: Array3<T>,
}

/// A field of continuous values
pub type ScalarField = Field<f64>;
/// A field of 1-based atom labels
pub type AtomField = Field<usize>;

impl<T> Field<T> {
    /// Create a field from an existing value array, checking its shape
    pub fn new(grid: Grid, kind: FieldKind, values: Array3<T>) -> Result<Self> {
        let expected = grid.points_on_axes();
        let actual_shape = values.dim();
        let actual = [actual_shape.0, actual_shape.1, actual_shape.2];
        if actual != expected {
            return Err(GridError::ShapeMismatch { expected, actual });
        }
        Ok(Self { grid, kind, values })
    }

    /// Build a field by evaluating a function over every voxel.
    ///
    /// The function receives the voxel index and its physical coordinate,
    /// and is evaluated in the grid's row-major order.
    pub fn from_fn<F>(grid: Grid, kind: FieldKind, mut f: F) -> Result<Self>
    where
        F: FnMut([usize; 3], Vector3D) -> T,
    {
        let shape = grid.points_on_axes();
        let mut flat = Vec::with_capacity(grid.point_count());
        for (index, coords) in grid.points() {
            flat.push(f(index, coords));
        }
        let values = Array3::from_shape_vec(shape, flat).map_err(|_| GridError::ShapeMismatch {
            expected: shape,
            actual: shape,
        })?;
        Ok(Self { grid, kind, values })
    }

    /// The grid this field is defined over
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The field type and its provenance
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// The dense value array
    pub fn values(&self) -> &Array3<T> {
        &self.values
    }

    /// The value at voxel (i, j, k)
    pub fn value(&self, index: [usize; 3]) -> &T {
        &self.values[index]
    }
}
