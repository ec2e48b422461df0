/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Thresholded Euclidean distance transform

use super::errors::{FieldError, Result};
use crate::atoms::Vector3D;
use crate::grid::{Field, FieldKind, ScalarField};

impl Field<f64> {
    /// Euclidean distance transform against an isovalue threshold.
    ///
    /// Voxels whose value exceeds the isovalue form the foreground and map
    /// to distance 0; every other voxel maps to the exact minimum Euclidean
    /// distance in Angstrom to any foreground voxel, respecting anisotropic
    /// grid steps. The scan is O(voxels x foreground); exactness matters
    /// more than asymptotics at this scale. Fails if no voxel exceeds the
    /// isovalue.
    pub fn distance_transform(&self, isovalue: f64) -> Result<ScalarField> {
        let foreground: Vec<Vector3D> = self
            .grid()
            .points()
            .filter(|(index, _)| *self.value(*index) > isovalue)
            .map(|(_, coords)| coords)
            .collect();
        if foreground.is_empty() {
            return Err(FieldError::NoForeground { isovalue });
        }
        log::debug!(
            "distance transform: {} foreground voxels above {:e}",
            foreground.len(),
            isovalue
        );

        let kind = FieldKind::DistanceTransform {
            source_tag: self.kind().tag().to_string(),
            isovalue,
        };
        let field = Field::from_fn(self.grid().clone(), kind, |index, coords| {
            if *self.value(index) > isovalue {
                return 0.0;
            }
            foreground
                .iter()
                .map(|point| coords.distance(point))
                .fold(f64::INFINITY, f64::min)
        })?;
        Ok(field)
    }
}
