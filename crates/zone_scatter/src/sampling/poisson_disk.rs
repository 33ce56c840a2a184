//! Poisson disk sampling inside a boundary polygon.
use std::f32::consts::{SQRT_2, TAU};

use glam::Vec3;
use rand::Rng;
use tracing::{debug, warn};

use crate::boundary::{BoundaryPolygon, Bounds2};
use crate::error::{Error, Result};
use crate::sampling::grid::{SpatialGrid, DEFAULT_NEIGHBOURHOOD_CELLS};
use crate::sampling::{rand01, rand_index};

/// Candidates tried around an active point before it is retired.
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// Accepted points per run when no limit is configured. Runs end when no point is active.
pub const DEFAULT_MAX_POINTS: usize = usize::MAX;

/// Limit applied to zero-spacing runs, whose candidates never conflict.
pub const ZERO_SPACING_MAX_POINTS: usize = 100_000;

/// Poisson disk sampling strategy.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between accepted points in world units.
    pub spacing: f32,
    /// Candidates generated per active point and turn.
    pub max_attempts: usize,
    /// Grid cells scanned on each side of a candidate.
    pub neighbourhood_cells: usize,
    /// Sampling stops once this many points were accepted. Zero-spacing runs are further
    /// capped at [`ZERO_SPACING_MAX_POINTS`].
    pub max_points: usize,
}

impl Default for PoissonDiskSampling {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            neighbourhood_cells: DEFAULT_NEIGHBOURHOOD_CELLS,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with the given minimum spacing.
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
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

    /// Checks the settings without sampling.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "spacing must be finite and >= 0, got {}",
                self.spacing
            )));
        }
        if self.neighbourhood_cells < DEFAULT_NEIGHBOURHOOD_CELLS {
            return Err(Error::InvalidConfig(format!(
                "neighbourhood_cells must be >= {DEFAULT_NEIGHBOURHOOD_CELLS}, got {}",
                self.neighbourhood_cells
            )));
        }
        Ok(())
    }

    /// Point limit in effect for this run.
    pub fn point_limit(&self) -> usize {
        if self.spacing == 0.0 {
            self.max_points.min(ZERO_SPACING_MAX_POINTS)
        } else {
            self.max_points
        }
    }

    /// Fills `polygon` with points at least `spacing` apart.
    ///
    /// The first returned point is the seed (see [`select_seed`]); all points have `z = 0`.
    /// The output only depends on the polygon, the settings and the state of `rng`.
    pub fn sample(&self, polygon: &BoundaryPolygon, rng: &mut dyn Rng) -> Result<Vec<Vec3>> {
        self.validate()?;
        let limit = self.point_limit();
        if limit == 0 {
            return Ok(Vec::new());
        }

        let bounds = polygon.validate()?;
        let cell_size = self.spacing / SQRT_2;
        let (width, height) = SpatialGrid::dimensions(&bounds, cell_size);

        let seed = select_seed(polygon)?;
        debug!(
            "Poisson disk sampling: spacing {}, grid {}x{}, seed {:?}",
            self.spacing, width, height, seed
        );

        let mut sampler = PoissonDiskSampler::new(self, polygon, bounds, cell_size, limit);
        sampler.accept(seed);
        let points = sampler.run(rng);

        if points.len() >= limit {
            warn!("Poisson disk sampling stopped at the {} point limit", limit);
        }
        Ok(points)
    }
}

/// Picks the point sampling starts from.
///
/// The first boundary vertex is used when it passes the containment test. Otherwise the
/// first vertex in order that does, then the vertex centroid. The result is on the ground
/// plane (`z = 0`).
pub fn select_seed(polygon: &BoundaryPolygon) -> Result<Vec3> {
    polygon
        .vertices()
        .iter()
        .map(|v| v.with_z(0.0))
        .chain(polygon.centroid())
        .find(|candidate| polygon.contains(*candidate))
        .ok_or(Error::SeedOutsideBoundary {
            vertices: polygon.len(),
        })
}

struct PoissonDiskSampler<'a> {
    settings: &'a PoissonDiskSampling,
    polygon: &'a BoundaryPolygon,
    bounds: Bounds2,
    spacing_squared: f32,
    limit: usize,
    grid: SpatialGrid,
    accepted: Vec<Vec3>,
    active: Vec<usize>,
}

impl<'a> PoissonDiskSampler<'a> {
    fn new(
        settings: &'a PoissonDiskSampling,
        polygon: &'a BoundaryPolygon,
        bounds: Bounds2,
        cell_size: f32,
        limit: usize,
    ) -> Self {
        let grid = SpatialGrid::from_bounds(bounds, cell_size)
            .with_neighbourhood(settings.neighbourhood_cells);
        Self {
            settings,
            polygon,
            bounds,
            spacing_squared: settings.spacing * settings.spacing,
            limit,
            grid,
            accepted: Vec::new(),
            active: Vec::new(),
        }
    }

    fn is_valid_point(&self, candidate: Vec3) -> bool {
        let flat = candidate.truncate();
        self.bounds.contains(flat)
            && !self
                .grid
                .query_conflict(flat, &self.accepted, self.spacing_squared)
            && self.polygon.contains(candidate)
    }

    fn accept(&mut self, point: Vec3) {
        let index = self.accepted.len();
        self.grid.insert(point.truncate(), index);
        self.accepted.push(point);
        self.active.push(index);
    }

    fn generate_around_point(&self, rng: &mut dyn Rng, point: Vec3) -> Option<Vec3> {
        let spacing = self.settings.spacing;
        for _ in 0..self.settings.max_attempts {
            let angle = rand01(rng) * TAU;
            let distance = spacing + rand01(rng) * spacing;

            let candidate = point + Vec3::new(angle.cos(), angle.sin(), 0.0) * distance;
            if self.is_valid_point(candidate) {
                return Some(candidate);
            }
        }

        None
    }

    fn run(mut self, rng: &mut dyn Rng) -> Vec<Vec3> {
        while !self.active.is_empty() && self.accepted.len() < self.limit {
            let slot = rand_index(rng, self.active.len());
            let current = self.accepted[self.active[slot]];

            match self.generate_around_point(rng, current) {
                Some(candidate) => self.accept(candidate),
                None => {
                    self.active.remove(slot);
                }
            }
        }

        self.accepted
    }
}
