//! Strip parameters and the construction error.

use serde::{Deserialize, Serialize};

/// Failure to set up a strip's sampling grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StripError {
    #[error("resolution must be at least {min} samples per axis (got {resolution})")]
    InvalidResolution { resolution: usize, min: usize },
}

/// Shape and sampling density of a Möbius strip.
///
/// `radius` is the distance from the z axis to the strip's centre line,
/// `width` the extent across the strip and `resolution` the number of samples
/// along each parameter axis. Non-positive radius or width are accepted and
/// produce degenerate (self-intersecting or zero-width) geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParameters {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
}

impl StripParameters {
    /// Smallest resolution for which the grid spacing is defined.
    pub const MIN_RESOLUTION: usize = 2;

    #[must_use]
    pub const fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    pub fn validate(&self) -> Result<(), StripError> {
        if self.resolution < Self::MIN_RESOLUTION {
            return Err(StripError::InvalidResolution {
                resolution: self.resolution,
                min: Self::MIN_RESOLUTION,
            });
        }
        Ok(())
    }

    /// Angular grid spacing, `2π / (n − 1)`.
    #[must_use]
    pub fn du(&self) -> f64 {
        std::f64::consts::TAU / self.intervals()
    }

    /// Width grid spacing, `w / (n − 1)`. Negative when the width is negative.
    #[must_use]
    pub fn dv(&self) -> f64 {
        self.width / self.intervals()
    }

    /// `v` on the two boundary curves, upper edge first.
    #[must_use]
    pub fn boundary_v(&self) -> [f64; 2] {
        [self.width / 2.0, -self.width / 2.0]
    }

    fn intervals(&self) -> f64 {
        self.resolution.saturating_sub(1).max(1) as f64
    }
}

impl Default for StripParameters {
    fn default() -> Self {
        Self::new(3.0, 1.0, 100)
    }
}
