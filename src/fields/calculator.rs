/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Per-voxel fields derived from molecular geometry

use super::errors::{FieldError, Result};
use crate::atoms::Molecule;
use crate::grid::{AssignmentMethod, AtomField, Field, FieldKind, Grid, ScalarField};
use crate::utils::conversions::angstrom_to_bohr;
use ndarray::Array3;

/// Voxels closer to an atom than this are treated as coinciding with it.
const SINGULARITY_EPSILON: f64 = 1e-10;

/// Computes fields over a grid from a molecule's geometry and charges.
///
/// Both computations are direct scans over voxels times atoms; molecules
/// at this scale are small enough that no spatial index is warranted.
#[derive(Debug)]
pub struct GridFieldCalculator<'a> {
    molecule: &'a Molecule,
    grid: &'a Grid,
}

impl<'a> GridFieldCalculator<'a> {
    /// Create a calculator over one molecule and one grid
    pub fn new(molecule: &'a Molecule, grid: &'a Grid) -> Self {
        Self { molecule, grid }
    }

    /// Nearest-atom assignment and distance, in one pass.
    ///
    /// Returns the parent-atom field (1-based label of the nearest atom,
    /// Voronoi assignment, ties broken by molecule order so the lowest
    /// label wins) and the distance field (minimum distance in Angstrom).
    pub fn nearest_atom(&self) -> Result<(AtomField, ScalarField)> {
        if self.molecule.is_empty() {
            return Err(FieldError::EmptyMolecule);
        }
        log::debug!(
            "computing nearest-atom fields over {} voxels and {} atoms",
            self.grid.point_count(),
            self.molecule.len()
        );

        let mut labels = Vec::with_capacity(self.grid.point_count());
        let mut distances = Vec::with_capacity(self.grid.point_count());
        for (_, coords) in self.grid.points() {
            let mut nearest_label = 0;
            let mut nearest_distance = f64::INFINITY;
            for atom in self.molecule {
                let distance = atom.distance_to(&coords);
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest_label = atom.label();
                }
            }
            labels.push(nearest_label);
            distances.push(nearest_distance);
        }

        let shape = self.grid.points_on_axes();
        let parent = Field::new(
            self.grid.clone(),
            FieldKind::ParentAtom {
                method: AssignmentMethod::Voronoi,
            },
            to_array(labels, shape)?,
        )?;
        let dist = Field::new(
            self.grid.clone(),
            FieldKind::NearestAtomDistance,
            to_array(distances, shape)?,
        )?;
        Ok((parent, dist))
    }

    /// Reproduced electrostatic potential from per-atom point charges.
    ///
    /// Per voxel, sums charge/distance over all atoms, with the distance
    /// in Bohr so the result is in atomic units. A missing charge model on
    /// any atom fails the whole request before any voxel is visited; a
    /// voxel coinciding with an atom is an explicit error rather than a
    /// silent infinity.
    pub fn reproduced_esp(&self, charge_model: &str) -> Result<ScalarField> {
        if self.molecule.is_empty() {
            return Err(FieldError::EmptyMolecule);
        }
        let charges: Vec<f64> = self
            .molecule
            .iter()
            .map(|atom| atom.charge(charge_model))
            .collect::<std::result::Result<_, _>>()?;
        log::debug!(
            "computing rep_esp under model '{}' over {} voxels",
            charge_model,
            self.grid.point_count()
        );

        let mut values = Vec::with_capacity(self.grid.point_count());
        for (index, coords) in self.grid.points() {
            let mut esp = 0.0;
            for (atom, charge) in self.molecule.iter().zip(&charges) {
                let distance = atom.distance_to(&coords);
                if distance <= SINGULARITY_EPSILON {
                    return Err(FieldError::AtomOnGridPoint {
                        label: atom.label(),
                        index,
                    });
                }
                esp += charge / angstrom_to_bohr(distance);
            }
            values.push(esp);
        }

        let field = Field::new(
            self.grid.clone(),
            FieldKind::RepEsp {
                charge_model: charge_model.to_string(),
            },
            to_array(values, self.grid.points_on_axes())?,
        )?;
        Ok(field)
    }
}

fn to_array<T>(flat: Vec<T>, shape: [usize; 3]) -> Result<Array3<T>> {
    Array3::from_shape_vec(shape, flat).map_err(|_| {
        crate::grid::GridError::ShapeMismatch {
            expected: shape,
            actual: shape,
        }
        .into()
    })
}
