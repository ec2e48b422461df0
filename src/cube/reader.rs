/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Parser for the cube text format

use super::errors::{CubeError, Result};
use super::{field_kind_from_title, Cube};
use crate::atoms::{Atom, Molecule, Vector3D};
use crate::grid::{Field, Grid, GridAxis};
use crate::utils::conversions::bohr_to_angstrom;
use ndarray::Array3;
use std::io::BufRead;

/// Line-counting reader so format errors can point at the offending line
struct LineReader<R: BufRead> {
    lines: std::io::Lines<R>,
    current: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            current: 0,
        }
    }

    /// The 1-based number of the last line returned
    fn line_number(&self) -> usize {
        self.current
    }

    /// Next line, or `None` at end of input
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.current += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    /// Next line, failing if the input ends early
    fn expect_line(&mut self, what: &str) -> Result<String> {
        self.next_line()?
            .ok_or_else(|| CubeError::format(self.current + 1, format!("unexpected end of file, expected {what}")))
    }
}

fn parse_f64(token: &str, line: usize) -> Result<f64> {
    token
        .parse()
        .map_err(|_| CubeError::format(line, format!("expected a number, got '{token}'")))
}

fn parse_i64(token: &str, line: usize) -> Result<i64> {
    token
        .parse()
        .map_err(|_| CubeError::format(line, format!("expected an integer, got '{token}'")))
}

/// Split a line into exactly `count` whitespace-separated fields
fn fields<'a>(line: &'a str, count: usize, number: usize) -> Result<Vec<&'a str>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != count {
        return Err(CubeError::format(
            number,
            format!("expected {count} fields, found {}", tokens.len()),
        ));
    }
    Ok(tokens)
}

/// Parse a point count plus a 3-vector in Bohr, converting to Angstrom
fn parse_count_and_vector(line: &str, number: usize) -> Result<(i64, Vector3D)> {
    let tokens = fields(line, 4, number)?;
    let count = parse_i64(tokens[0], number)?;
    let vector = Vector3D::new(
        bohr_to_angstrom(parse_f64(tokens[1], number)?),
        bohr_to_angstrom(parse_f64(tokens[2], number)?),
        bohr_to_angstrom(parse_f64(tokens[3], number)?),
    );
    Ok((count, vector))
}

/// Parse a full cube file.
///
/// Header layout: title line, comment line, atom count + origin, three axis
/// lines, one line per atom, then values in row-major grid order. A
/// negative atom count is a format flag: the real count is its absolute
/// value, and one extra line of field labels follows the origin line.
pub fn read_cube<R: BufRead>(reader: R) -> Result<Cube> {
    let mut lines = LineReader::new(reader);

    let title = lines.expect_line("title line")?;
    let comment = lines.expect_line("comment line")?;

    let origin_line = lines.expect_line("atom count and origin")?;
    let (signed_count, origin) = parse_count_and_vector(&origin_line, lines.line_number())?;
    let atom_count = signed_count.unsigned_abs() as usize;

    let dset_labels = if signed_count < 0 {
        let label_line = lines.expect_line("field label line")?;
        Some(
            label_line
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>(),
        )
    } else {
        None
    };

    let mut axes = Vec::with_capacity(3);
    for _ in 0..3 {
        let axis_line = lines.expect_line("axis line")?;
        let number = lines.line_number();
        let (points, step) = parse_count_and_vector(&axis_line, number)?;
        if points <= 0 {
            return Err(CubeError::format(
                number,
                format!("axis point count must be positive, got {points}"),
            ));
        }
        axes.push(GridAxis::new(points as usize, step));
    }
    let grid = Grid::new(origin, [axes[0], axes[1], axes[2]])?;

    let mut atoms = Vec::with_capacity(atom_count);
    for label in 1..=atom_count {
        let atom_line = lines.expect_line("atom line")?;
        let number = lines.line_number();
        let tokens = fields(&atom_line, 5, number)?;
        let atomic_no = parse_i64(tokens[0], number)?;
        if atomic_no <= 0 {
            return Err(CubeError::format(
                number,
                format!("atomic number must be positive, got {atomic_no}"),
            ));
        }
        let charge = parse_f64(tokens[1], number)?;
        let coords = Vector3D::new(
            bohr_to_angstrom(parse_f64(tokens[2], number)?),
            bohr_to_angstrom(parse_f64(tokens[3], number)?),
            bohr_to_angstrom(parse_f64(tokens[4], number)?),
        );
        let mut atom = Atom::new(label, atomic_no as u32, coords)?;
        atom.set_charge("cube", charge)?;
        atoms.push(atom);
    }
    let molecule = Molecule::new(atoms)?;

    let expected_values = grid.point_count();
    let mut values = Vec::with_capacity(expected_values);
    while let Some(line) = lines.next_line()? {
        let number = lines.line_number();
        for token in line.split_whitespace() {
            values.push(parse_f64(token, number)?);
            if values.len() > expected_values {
                return Err(CubeError::format(
                    number,
                    format!("more than the expected {expected_values} field values"),
                ));
            }
        }
    }
    if values.len() < expected_values {
        return Err(CubeError::format(
            lines.line_number() + 1,
            format!(
                "expected {expected_values} field values, found {}",
                values.len()
            ),
        ));
    }

    let shape = grid.points_on_axes();
    let array = Array3::from_shape_vec(shape, values).map_err(|e| {
        CubeError::format(lines.line_number(), format!("value array shape error: {e}"))
    })?;
    let field = Field::new(grid, field_kind_from_title(&title), array)?;

    Ok(Cube {
        title,
        comment,
        molecule,
        field,
        dset_labels,
    })
}
