/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Atom representation with named charge models

use super::database;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use std::collections::HashMap;
use std::fmt;

/// One nucleus of a molecule.
///
/// Coordinates are stored in Angstrom. Besides its geometry an atom carries
/// an open, string-keyed map of charges, one entry per charge model (the
/// `'cube'` model holds the charge column of the cube file header; fitted
/// models are added by external collaborators). Each model key is
/// write-once: setting it twice is an error, never a silent overwrite.
#[derive(Debug, Clone)]
pub struct Atom {
    /// 1-based label, stable identity within the owning molecule
    label: usize,
    /// Atomic number (Z) of the element
    atomic_no: u32,
    /// Position in Angstrom
    coords: Vector3D,
    /// Charge per named charge model
    charges: HashMap<String, f64>,
}

impl Atom {
    /// Create a new atom with the given label, atomic number and position
    pub fn new(label: usize, atomic_no: u32, coords: Vector3D) -> Result<Self> {
        if atomic_no == 0 || atomic_no > 118 {
            return Err(AtomError::InvalidAtomicNumber(atomic_no));
        }

        Ok(Self {
            label,
            atomic_no,
            coords,
            charges: HashMap::new(),
        })
    }

    /// Get the 1-based label
    pub fn label(&self) -> usize {
        self.label
    }

    /// Get the atomic number
    pub fn atomic_no(&self) -> u32 {
        self.atomic_no
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &'static str {
        // atomic_no is validated on construction
        database::element_symbol(self.atomic_no).unwrap_or("??")
    }

    /// Get the atom's position in Angstrom
    pub fn coords(&self) -> Vector3D {
        self.coords
    }

    /// Record a charge under a named model.
    ///
    /// Fails if the model is already set on this atom.
    pub fn set_charge(&mut self, model: &str, charge: f64) -> Result<()> {
        if self.charges.contains_key(model) {
            return Err(AtomError::DuplicateChargeModel {
                label: self.label,
                model: model.to_string(),
            });
        }
        self.charges.insert(model.to_string(), charge);
        Ok(())
    }

    /// Look up the charge under a named model
    pub fn charge(&self, model: &str) -> Result<f64> {
        self.charges
            .get(model)
            .copied()
            .ok_or_else(|| AtomError::UnknownChargeModel {
                label: self.label,
                model: model.to_string(),
            })
    }

    /// The names of all charge models set on this atom
    pub fn charge_models(&self) -> impl Iterator<Item = &str> {
        self.charges.keys().map(String::as_str)
    }

    /// Calculate the distance in Angstrom to an arbitrary point
    pub fn distance_to(&self, point: &Vector3D) -> f64 {
        self.coords.distance(point)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (Z={}) at {}",
            self.label,
            self.symbol(),
            self.atomic_no,
            self.coords
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atom_creation() {
        let atom = Atom::new(1, 29, Vector3D::new(1.0, 2.0, 3.0)).unwrap();

        assert_eq!(atom.label(), 1);
        assert_eq!(atom.atomic_no(), 29);
        assert_eq!(atom.symbol(), "Cu");
        assert_eq!(atom.coords(), Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_invalid_atomic_number() {
        assert!(Atom::new(1, 0, Vector3D::origin()).is_err());
        assert!(Atom::new(1, 119, Vector3D::origin()).is_err());
    }

    #[test]
    fn test_charge_models() {
        let mut atom = Atom::new(1, 1, Vector3D::origin()).unwrap();
        atom.set_charge("cube", 0.9).unwrap();

        assert_relative_eq!(atom.charge("cube").unwrap(), 0.9, epsilon = 1e-12);
        assert!(atom.charge("mk").is_err());
    }

    #[test]
    fn test_charge_is_write_once() {
        let mut atom = Atom::new(1, 1, Vector3D::origin()).unwrap();
        atom.set_charge("cube", 0.9).unwrap();

        let err = atom.set_charge("cube", 0.5).unwrap_err();
        assert!(matches!(err, AtomError::DuplicateChargeModel { .. }));
        // The original value survives the failed overwrite
        assert_relative_eq!(atom.charge("cube").unwrap(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_atom_distance() {
        let atom = Atom::new(1, 8, Vector3D::new(3.0, 4.0, 0.0)).unwrap();
        assert_relative_eq!(
            atom.distance_to(&Vector3D::origin()),
            5.0,
            epsilon = 1e-12
        );
    }
}
