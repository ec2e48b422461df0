/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Command Line Interface (CLI) module
//!
//! Thin wrappers over the library: read a cube, derive a field, write a
//! cube. Output paths must not exist; remove stale files before rerunning.

use crate::cube::{write_cube, Cube};
use crate::fields::GridFieldCalculator;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version,
    about = "Volumetric scalar-field processing for quantum-chemistry cube files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a summary of a cube file
    Info {
        /// Input cube file
        input: PathBuf,
    },
    /// Write the nearest-atom distance field as a cube file
    Dist {
        /// Input cube file
        input: PathBuf,
        /// Output cube file (must not exist)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Write the reproduced ESP from per-atom point charges as a cube file
    Repesp {
        /// Input cube file
        input: PathBuf,
        /// Output cube file (must not exist)
        #[arg(short, long)]
        output: PathBuf,
        /// Charge model to take per-atom charges from
        #[arg(short, long, default_value = "cube")]
        model: String,
    },
    /// Write the Euclidean distance transform of the field as a cube file
    Edt {
        /// Input cube file
        input: PathBuf,
        /// Output cube file (must not exist)
        #[arg(short, long)]
        output: PathBuf,
        /// Isovalue separating foreground from background
        #[arg(short, long)]
        isovalue: f64,
    },
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Info { input } => {
            let cube = Cube::from_file(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let [ni, nj, nk] = cube.grid().points_on_axes();
            println!("title:      {}", cube.title().trim());
            println!("field type: {}", cube.field().kind());
            println!("atoms:      {}", cube.atom_count());
            for atom in cube.molecule() {
                println!("  {atom}");
            }
            println!("grid:       {ni} x {nj} x {nk} points");
            println!("origin:     {}", cube.grid().origin());
            println!("aligned:    {}", cube.grid().aligned_to_coord());
            Ok(())
        }
        Command::Dist { input, output } => {
            let cube = Cube::from_file(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let calculator = GridFieldCalculator::new(cube.molecule(), cube.grid());
            let (_, dist) = calculator.nearest_atom()?;
            write_cube(&output, cube.molecule(), &dist, "cube")
                .with_context(|| format!("failed to write {}", output.display()))?;
            Ok(())
        }
        Command::Repesp {
            input,
            output,
            model,
        } => {
            let cube = Cube::from_file(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let calculator = GridFieldCalculator::new(cube.molecule(), cube.grid());
            let esp = calculator.reproduced_esp(&model)?;
            write_cube(&output, cube.molecule(), &esp, &model)
                .with_context(|| format!("failed to write {}", output.display()))?;
            Ok(())
        }
        Command::Edt {
            input,
            output,
            isovalue,
        } => {
            let cube = Cube::from_file(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let transformed = cube.field().distance_transform(isovalue)?;
            write_cube(&output, cube.molecule(), &transformed, "cube")
                .with_context(|| format!("failed to write {}", output.display()))?;
            Ok(())
        }
    }
}
