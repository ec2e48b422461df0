mod common;

use approx::assert_relative_eq;
use cubefield::utils::constants::ANGSTROM_PER_BOHR;
use cubefield::{write_cube, Cube, CubeError, FieldKind, Vector3D};
use rstest::rstest;
use std::fs;

#[test]
fn test_parsed_header() {
    let (_dir, cube) = common::fixture_cube();

    assert_eq!(cube.title(), " Electron density from Total MP2 Density");
    assert_eq!(cube.atom_count(), 1);
    assert_eq!(cube.field().kind(), &FieldKind::ElectronDensity);
    assert!(cube.dset_labels().is_none());
}

#[test]
fn test_parsed_grid() {
    let (_dir, cube) = common::fixture_cube();
    let grid = cube.grid();

    let origin = grid.origin();
    assert_relative_eq!(origin.x, 0.1 * ANGSTROM_PER_BOHR, epsilon = 1e-10);
    assert_relative_eq!(origin.y, 0.2 * ANGSTROM_PER_BOHR, epsilon = 1e-10);
    assert_relative_eq!(origin.z, 0.3 * ANGSTROM_PER_BOHR, epsilon = 1e-10);

    let steps = [0.2, 0.3, 0.4];
    for (axis, step_bohr) in grid.axes().iter().zip(steps) {
        assert_eq!(axis.points, 3);
        assert_relative_eq!(
            axis.step.length(),
            step_bohr * ANGSTROM_PER_BOHR,
            epsilon = 1e-10
        );
    }

    assert!(grid.aligned_to_coord());
    assert_eq!(grid.points_on_axes(), [3, 3, 3]);
    assert_eq!(grid.point_count(), 27);
}

#[test]
fn test_parsed_molecule() {
    let (_dir, cube) = common::fixture_cube();
    let atom = &cube.molecule()[0];

    assert_eq!(atom.label(), 1);
    assert_eq!(atom.atomic_no(), 1);
    assert_eq!(atom.symbol(), "H");

    let expected = Vector3D::new(
        0.1 * ANGSTROM_PER_BOHR,
        0.2 * ANGSTROM_PER_BOHR,
        0.4 * ANGSTROM_PER_BOHR,
    );
    assert_relative_eq!(atom.coords().distance(&expected), 0.0, epsilon = 1e-10);
    assert_relative_eq!(atom.charge("cube").unwrap(), 0.9, epsilon = 1e-10);
}

#[test]
fn test_parsed_values_order() {
    let (_dir, cube) = common::fixture_cube();
    let values: Vec<f64> = cube.field().values().iter().copied().collect();

    assert_eq!(values.len(), 27);
    assert_relative_eq!(values[0], 1.32e-07, epsilon = 1e-18);
    assert_relative_eq!(values[26], 6.2e-08, epsilon = 1e-18);
    // Flat index 15 is voxel (1, 2, 0) in row-major order
    assert_relative_eq!(*cube.field().value([1, 2, 0]), 7.9e-07, epsilon = 1e-18);
}

#[test]
fn test_round_trip_is_byte_identical_after_banners() {
    let (dir, cube) = common::fixture_cube();
    let out_path = dir.path().join("round_trip.cub");

    write_cube(&out_path, cube.molecule(), cube.field(), "cube").unwrap();
    let written = fs::read_to_string(&out_path).unwrap();
    let mut written_lines = written.lines();

    assert_eq!(
        written_lines.next(),
        Some(" Cube file generated by cubefield.")
    );
    assert_eq!(
        written_lines.next(),
        Some(" Cube file for field of type ed.")
    );

    let original_lines = common::TEST_CUBE.lines().skip(2);
    for (expected, actual) in original_lines.zip(written_lines.by_ref()) {
        assert_eq!(actual, expected);
    }
    assert_eq!(written_lines.next(), None);
    assert_eq!(
        written.lines().count(),
        common::TEST_CUBE.lines().count(),
        "written and original cube files have different lengths"
    );
}

#[test]
fn test_writer_refuses_existing_file() {
    let (dir, cube) = common::fixture_cube();
    let out_path = dir.path().join("exists.cub");

    write_cube(&out_path, cube.molecule(), cube.field(), "cube").unwrap();
    let err = write_cube(&out_path, cube.molecule(), cube.field(), "cube").unwrap_err();
    assert!(matches!(err, CubeError::FileExists(_)));

    // Removing the stale file is the caller's decision; a retry then works
    fs::remove_file(&out_path).unwrap();
    assert!(write_cube(&out_path, cube.molecule(), cube.field(), "cube").is_ok());
}

#[test]
fn test_writer_requires_the_charge_model() {
    let (dir, cube) = common::fixture_cube();
    let out_path = dir.path().join("missing_model.cub");

    let err = write_cube(&out_path, cube.molecule(), cube.field(), "mk").unwrap_err();
    assert!(matches!(err, CubeError::Atom(_)));
}

#[rstest]
#[case::bad_atom_count(
    "    1    0.100000    0.200000    0.300000",
    "  1.5    0.100000    0.200000    0.300000"
)]
#[case::short_axis_line(
    "    3    0.200000    0.000000    0.000000",
    "    3    0.200000"
)]
#[case::short_atom_line(
    "    1    0.900000    0.100000    0.200000    0.400000",
    "    1    0.900000    0.100000"
)]
#[case::garbage_value("  6.20000E-08", "  6.2junk")]
fn test_malformed_input_rejected(#[case] from: &str, #[case] to: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.cub");
    fs::write(&path, common::TEST_CUBE.replace(from, to)).unwrap();

    let err = Cube::from_file(&path).unwrap_err();
    assert!(matches!(err, CubeError::Format { .. }));
}

#[test]
fn test_truncated_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.cub");
    let truncated: String = common::TEST_CUBE
        .lines()
        .take(10)
        .map(|line| format!("{line}\n"))
        .collect();
    fs::write(&path, truncated).unwrap();

    let err = Cube::from_file(&path).unwrap_err();
    assert!(matches!(err, CubeError::Format { .. }));
}
