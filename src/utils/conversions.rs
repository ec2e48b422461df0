/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Unit conversion utilities

use super::constants;

/// Convert from Bohr radii to Angstroms
pub fn bohr_to_angstrom(bohr: f64) -> f64 {
    bohr * constants::ANGSTROM_PER_BOHR
}

/// Convert from Angstroms to Bohr radii
pub fn angstrom_to_bohr(angstrom: f64) -> f64 {
    angstrom / constants::ANGSTROM_PER_BOHR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_round_trip() {
        let angstrom = 1.0;
        let bohr = angstrom_to_bohr(angstrom);
        assert_relative_eq!(bohr_to_angstrom(bohr), angstrom, epsilon = 1e-12);
    }

    #[test]
    fn test_one_bohr() {
        assert_relative_eq!(bohr_to_angstrom(1.0), 0.52917721067, epsilon = 1e-12);
    }
}
