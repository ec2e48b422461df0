/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Cube text-format I/O
//!
//! The cube format combines a molecular-geometry header with a regular 3-D
//! grid of field values. On disk all geometry is in Bohr; everything this
//! module hands out is converted to Angstrom on the way in and back to Bohr
//! on the way out.

pub mod errors;
pub mod reader;
pub mod writer;

pub use errors::CubeError;
pub use writer::write_cube;

use crate::atoms::Molecule;
use crate::grid::{FieldKind, Grid, ScalarField};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One parsed cube file: title, molecule, grid and a single field.
///
/// Several derived fields may later coexist over the same grid; this type
/// only holds the field that was read from disk.
#[derive(Debug, Clone)]
pub struct Cube {
    title: String,
    comment: String,
    molecule: Molecule,
    field: ScalarField,
    /// Field labels from the extra header line of negative-atom-count files
    dset_labels: Option<Vec<String>>,
}

impl Cube {
    /// Read and parse a cube file
    pub fn from_file<P: AsRef<Path>>(path: P) -> errors::Result<Self> {
        let file = File::open(path.as_ref())?;
        let cube = reader::read_cube(BufReader::new(file))?;
        log::debug!(
            "parsed cube '{}': {} atoms, {} grid points, field type {}",
            cube.title.trim(),
            cube.atom_count(),
            cube.grid().point_count(),
            cube.field.kind()
        );
        Ok(cube)
    }

    /// The title line, verbatim
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The second header line, verbatim
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Number of atoms in the molecule
    pub fn atom_count(&self) -> usize {
        self.molecule.len()
    }

    /// The molecule parsed from the header
    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    /// Mutable molecule access, for adding fitted charge models
    pub fn molecule_mut(&mut self) -> &mut Molecule {
        &mut self.molecule
    }

    /// The grid shared by the molecule's coordinate space and the field
    pub fn grid(&self) -> &Grid {
        self.field.grid()
    }

    /// The scalar field read from the file
    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    /// Field labels from the extra header line, when present
    pub fn dset_labels(&self) -> Option<&[String]> {
        self.dset_labels.as_deref()
    }
}

/// Infer the field type from a cube title line
pub(crate) fn field_kind_from_title(title: &str) -> FieldKind {
    if title.contains("Electron density") {
        FieldKind::ElectronDensity
    } else if title.contains("Electrostatic potential") {
        FieldKind::ElectrostaticPotential
    } else {
        FieldKind::Other("cube".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_from_title() {
        assert_eq!(
            field_kind_from_title(" Electron density from Total MP2 Density"),
            FieldKind::ElectronDensity
        );
        assert_eq!(
            field_kind_from_title(" Electrostatic potential from Total MP2 Density"),
            FieldKind::ElectrostaticPotential
        );
        assert_eq!(
            field_kind_from_title(" Some other scalar"),
            FieldKind::Other("cube".to_string())
        );
    }
}
