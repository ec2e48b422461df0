/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Geometric descriptor of a regular 3-D lattice

use super::errors::{GridError, Result};
use crate::atoms::Vector3D;

/// Components below this magnitude count as zero when classifying axes.
const AXIS_EPSILON: f64 = 1e-10;

/// One axis of a grid: its point count and step vector in Angstrom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxis {
    /// Number of lattice points along this axis
    pub points: usize,
    /// Step between consecutive points, in Angstrom
    pub step: Vector3D,
}

impl GridAxis {
    /// Create a new grid axis
    pub fn new(points: usize, step: Vector3D) -> Self {
        Self { points, step }
    }
}

/// A regular 3-D lattice: origin, three step vectors, three point counts.
///
/// All geometry is in Angstrom. The grid is immutable after construction
/// and shared read-only by every field defined over it. Voxel coordinates
/// are never stored per voxel; they are derived on demand from the origin
/// and steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    origin: Vector3D,
    axes: [GridAxis; 3],
    aligned_to_coord: bool,
}

impl Grid {
    /// Create a new grid, validating that every axis is non-degenerate
    pub fn new(origin: Vector3D, axes: [GridAxis; 3]) -> Result<Self> {
        for (i, axis) in axes.iter().enumerate() {
            if axis.points == 0 {
                return Err(GridError::EmptyAxis { axis: i });
            }
            if axis.step.length() <= AXIS_EPSILON {
                return Err(GridError::DegenerateAxis { axis: i });
            }
        }

        let aligned_to_coord = axes.iter().all(|axis| {
            let nonzero = axis
                .step
                .components()
                .iter()
                .filter(|c| c.abs() > AXIS_EPSILON)
                .count();
            nonzero == 1
        });

        Ok(Self {
            origin,
            axes,
            aligned_to_coord,
        })
    }

    /// The grid origin in Angstrom
    pub fn origin(&self) -> Vector3D {
        self.origin
    }

    /// The three axes
    pub fn axes(&self) -> &[GridAxis; 3] {
        &self.axes
    }

    /// True iff every axis step lies along exactly one coordinate axis
    pub fn aligned_to_coord(&self) -> bool {
        self.aligned_to_coord
    }

    /// The per-axis point counts
    pub fn points_on_axes(&self) -> [usize; 3] {
        [self.axes[0].points, self.axes[1].points, self.axes[2].points]
    }

    /// Total number of lattice points
    pub fn point_count(&self) -> usize {
        self.axes.iter().map(|axis| axis.points).product()
    }

    /// The physical coordinate of voxel (i, j, k)
    pub fn coords(&self, index: [usize; 3]) -> Vector3D {
        self.origin
            + self.axes[0].step * index[0] as f64
            + self.axes[1].step * index[1] as f64
            + self.axes[2].step * index[2] as f64
    }

    /// Lazy sequence of (index, coordinate) pairs in row-major order.
    ///
    /// The i axis is outermost and k innermost. This ordering matches both
    /// the dense value arrays and the on-disk cube value order, so it must
    /// not change.
    pub fn points(&self) -> GridPoints<'_> {
        GridPoints {
            grid: self,
            next: Some([0, 0, 0]),
        }
    }
}

/// Iterator over grid voxels in row-major order
#[derive(Debug)]
pub struct GridPoints<'a> {
    grid: &'a Grid,
    next: Option<[usize; 3]>,
}

impl Iterator for GridPoints<'_> {
    type Item = ([usize; 3], Vector3D);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let coords = self.grid.coords(index);

        let [ni, nj, nk] = self.grid.points_on_axes();
        let [mut i, mut j, mut k] = index;
        k += 1;
        if k == nk {
            k = 0;
            j += 1;
            if j == nj {
                j = 0;
                i += 1;
            }
        }
        self.next = if i < ni { Some([i, j, k]) } else { None };

        Some((index, coords))
    }
}
