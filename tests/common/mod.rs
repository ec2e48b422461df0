#![allow(dead_code)]

//! Shared fixture for the integration tests: a single-hydrogen cube on a
//! 3x3x3 grid, with reference arrays computed by an independent ad-hoc
//! script (values in Bohr; convert before comparing).

use cubefield::Cube;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Cube file for one H atom at (0.1, 0.2, 0.4) Bohr carrying charge 0.9,
/// grid origin (0.1, 0.2, 0.3) Bohr, steps (0.2, 0.3, 0.4) Bohr. Exactly
/// two density values (flat indices 15 and 16) exceed `ED_ISOVALUE`.
pub const TEST_CUBE: &str = " Electron density from Total MP2 Density
 Density grid for a single hydrogen test molecule
    1    0.100000    0.200000    0.300000
    3    0.200000    0.000000    0.000000
    3    0.000000    0.300000    0.000000
    3    0.000000    0.000000    0.400000
    1    0.900000    0.100000    0.200000    0.400000
  1.32000E-07  2.15000E-07  8.40000E-08  3.60000E-07  4.10000E-07  1.50000E-07
  5.20000E-07  3.90000E-07  1.10000E-07  2.80000E-07  3.30000E-07  9.70000E-08
  6.10000E-07  5.50000E-07  2.40000E-07  7.90000E-07  8.60000E-07  4.70000E-07
  1.80000E-07  2.60000E-07  7.50000E-08  4.40000E-07  3.10000E-07  1.30000E-07
  2.00000E-07  1.60000E-07  6.20000E-08
";

/// Isovalue above which only the two foreground voxels fall
pub const ED_ISOVALUE: f64 = 7.01e-07;

/// Nearest-atom distances per voxel in row-major order, in Bohr
pub const DIST_BOHR: [f64; 27] = [
    0.1,
    0.3,
    0.7,
    0.316227766,
    0.424264068,
    0.761577310,
    0.608276253,
    0.670820393,
    0.921954445,
    0.223606797,
    0.360555127,
    0.728010988,
    0.374165738,
    0.469041575,
    0.787400787,
    0.640312423,
    0.7,
    0.943398113,
    0.412310562,
    0.5,
    0.806225774,
    0.509901951,
    0.583095189,
    0.860232526,
    0.728010988,
    0.781024967,
    1.004987562,
];

/// Distance-transform result per voxel in row-major order, in Bohr
pub const EDT_BOHR: [f64; 27] = [
    0.63245553, 0.63245553, 0.74833147, 0.36055512, 0.36055512, 0.53851648, 0.2, 0.2, 0.44721359,
    0.6, 0.6, 0.72111025, 0.3, 0.3, 0.5, 0.0, 0.0, 0.4, 0.63245553, 0.63245553, 0.74833147,
    0.36055512, 0.36055512, 0.53851648, 0.2, 0.2, 0.44721359,
];

/// Write the fixture cube under the given directory
pub fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("test_mol_den.cub");
    fs::write(&path, TEST_CUBE).expect("failed to write fixture cube");
    path
}

/// Parse the fixture once per test; the temp dir must outlive the cube
pub fn fixture_cube() -> (TempDir, Cube) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_fixture(dir.path());
    let cube = Cube::from_file(&path).expect("failed to parse fixture cube");
    (dir, cube)
}
