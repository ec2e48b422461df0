/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Serializer for the cube text format

use super::errors::{CubeError, Result};
use crate::atoms::Molecule;
use crate::grid::ScalarField;
use crate::utils::conversions::angstrom_to_bohr;
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

/// Values per data line
const VALUES_PER_LINE: usize = 6;

/// Format a value like Fortran's E13.5 edit descriptor: 13 characters,
/// five-digit mantissa, signed two-digit exponent.
fn fortran_e(value: f64) -> String {
    let scientific = format!("{:.5E}", value);
    // Rust renders exponents without a plus sign or zero padding
    let (mantissa, exponent) = scientific
        .split_once('E')
        .unwrap_or((scientific.as_str(), "0"));
    let exp: i32 = exponent.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{:>13}", format!("{mantissa}E{sign}{:02}", exp.abs()))
}

/// Write a header line: a 5-wide integer followed by 12-wide fixed floats
fn write_header_line<W: Write>(out: &mut W, count: i64, floats: &[f64]) -> Result<()> {
    write!(out, "{:5}", count)?;
    for value in floats {
        write!(out, "{:12.6}", value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write a molecule, grid and field as a cube file.
///
/// The first two lines are a generator banner and the field-type line; the
/// remaining header and atom lines reproduce the reader's input byte for
/// byte, with all geometry converted back to Bohr. The atom charge column
/// is taken from `charge_model` (normally `'cube'`). The destination must
/// not exist yet; whether to remove a stale file is the caller's decision.
pub fn write_cube<P: AsRef<Path>>(
    path: P,
    molecule: &Molecule,
    field: &ScalarField,
    charge_model: &str,
) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                CubeError::FileExists(path.to_path_buf())
            } else {
                CubeError::Io(e)
            }
        })?;
    let mut out = BufWriter::new(file);

    writeln!(out, " Cube file generated by cubefield.")?;
    writeln!(out, " Cube file for field of type {}.", field.kind())?;

    let grid = field.grid();
    let origin: Vec<f64> = grid
        .origin()
        .components()
        .iter()
        .map(|c| angstrom_to_bohr(*c))
        .collect();
    write_header_line(&mut out, molecule.len() as i64, &origin)?;

    for axis in grid.axes() {
        let step: Vec<f64> = axis
            .step
            .components()
            .iter()
            .map(|c| angstrom_to_bohr(*c))
            .collect();
        write_header_line(&mut out, axis.points as i64, &step)?;
    }

    for atom in molecule {
        let charge = atom.charge(charge_model)?;
        let coords = atom.coords().components();
        let fields = [
            charge,
            angstrom_to_bohr(coords[0]),
            angstrom_to_bohr(coords[1]),
            angstrom_to_bohr(coords[2]),
        ];
        write_header_line(&mut out, atom.atomic_no() as i64, &fields)?;
    }

    let mut written = 0usize;
    for value in field.values() {
        write!(out, "{}", fortran_e(*value))?;
        written += 1;
        if written % VALUES_PER_LINE == 0 {
            writeln!(out)?;
        }
    }
    if written % VALUES_PER_LINE != 0 {
        writeln!(out)?;
    }

    out.flush()?;
    log::debug!(
        "wrote {} field values of type {} to {}",
        written,
        field.kind(),
        path.display()
    );
    Ok(())
}
