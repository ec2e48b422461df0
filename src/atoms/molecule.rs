/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Molecule as an ordered, fixed-length sequence of atoms

use super::atom::Atom;
use super::errors::{AtomError, Result};
use std::collections::HashSet;
use std::ops::Index;

/// An ordered collection of atoms.
///
/// The sequence is fixed in length once constructed; only the per-atom
/// charge map admits later additions. Atom labels must be unique.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
}

impl Molecule {
    /// Create a molecule from an ordered list of atoms
    pub fn new(atoms: Vec<Atom>) -> Result<Self> {
        let mut seen = HashSet::new();
        for atom in &atoms {
            if !seen.insert(atom.label()) {
                return Err(AtomError::DuplicateLabel(atom.label()));
            }
        }
        Ok(Self { atoms })
    }

    /// The number of atoms
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the molecule has no atoms
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Iterate over the atoms in order
    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    /// Get an atom by position (0-based)
    pub fn get(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Mutable access for collaborators that add fitted charge models
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }
}

impl Index<usize> for Molecule {
    type Output = Atom;

    fn index(&self, index: usize) -> &Atom {
        &self.atoms[index]
    }
}

impl<'a> IntoIterator for &'a Molecule {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
