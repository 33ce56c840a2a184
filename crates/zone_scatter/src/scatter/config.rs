//! Per-run configuration.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::grid::DEFAULT_NEIGHBOURHOOD_CELLS;
use crate::sampling::poisson_disk::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_POINTS};
use crate::sampling::PoissonDiskSampling;
use crate::surface::{SurfaceProjector, DEFAULT_PROBE_HALF_HEIGHT};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 123;

/// Settings for one generation run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ScatterConfig {
    /// Minimum distance between placements in world units. Zero disables the check.
    pub spacing: f32,
    /// Seed of the deterministic random stream.
    pub seed: u64,
    /// Candidates tried around a point before it is retired.
    pub max_attempts: usize,
    /// Grid cells scanned around a candidate. Must be at least 2.
    pub neighbourhood_cells: usize,
    /// Cap on placements per run. Unlimited by default; zero-spacing runs stop at
    /// [`ZERO_SPACING_MAX_POINTS`](crate::sampling::poisson_disk::ZERO_SPACING_MAX_POINTS).
    pub max_points: usize,
    /// Vertical reach of surface probes above and below each point.
    pub probe_half_height: f32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            seed: DEFAULT_SEED,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            neighbourhood_cells: DEFAULT_NEIGHBOURHOOD_CELLS,
            max_points: DEFAULT_MAX_POINTS,
            probe_half_height: DEFAULT_PROBE_HALF_HEIGHT,
        }
    }
}

impl ScatterConfig {
    /// Creates a new [`ScatterConfig`] with the given spacing.
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_neighbourhood_cells(mut self, cells: usize) -> Self {
        self.neighbourhood_cells = cells;
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_probe_half_height(mut self, half_height: f32) -> Self {
        self.probe_half_height = half_height;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.sampling().validate()?;
        if !self.probe_half_height.is_finite() || self.probe_half_height <= 0.0 {
            return Err(Error::InvalidConfig(
                "probe_half_height must be finite and > 0".into(),
            ));
        }

        Ok(())
    }

    /// Sampling strategy described by this configuration.
    pub fn sampling(&self) -> PoissonDiskSampling {
        PoissonDiskSampling::new(self.spacing)
            .with_max_attempts(self.max_attempts)
            .with_neighbourhood_cells(self.neighbourhood_cells)
            .with_max_points(self.max_points)
    }

    /// Surface projector described by this configuration.
    pub fn projector(&self) -> SurfaceProjector {
        SurfaceProjector::new(self.probe_half_height)
    }
}
