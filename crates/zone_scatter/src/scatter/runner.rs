//! High-level runner: capture the boundary, sample, project, emit.
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::boundary::{BoundaryPolygon, BoundarySource};
use crate::error::Result;
use crate::scatter::config::ScatterConfig;
use crate::scatter::sink::{AssetId, InstanceSink, Placement};
use crate::surface::SurfaceQuery;

/// The zone a run scatters into: which asset to place and which outline bounds it.
///
/// Both parts are optional so a half-configured zone can be passed in; such a zone
/// generates nothing.
#[derive(Clone, Copy, Default)]
pub struct ScatterZone<'a> {
    pub asset_id: Option<&'a str>,
    pub boundary: Option<&'a dyn BoundarySource>,
}

impl<'a> ScatterZone<'a> {
    pub fn new(asset_id: &'a str, boundary: &'a dyn BoundarySource) -> Self {
        Self {
            asset_id: Some(asset_id),
            boundary: Some(boundary),
        }
    }

    pub fn with_asset(mut self, asset_id: &'a str) -> Self {
        self.asset_id = Some(asset_id);
        self
    }

    pub fn with_boundary(mut self, boundary: &'a dyn BoundarySource) -> Self {
        self.boundary = Some(boundary);
        self
    }
}

/// Why a run produced nothing without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No asset configured on the zone.
    MissingAsset,
    /// No boundary configured on the zone.
    MissingBoundary,
    /// The boundary has no vertices.
    EmptyBoundary,
}

/// Summary of a generation run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    /// Placements handed to the sink.
    pub placed: usize,
    /// Placements whose surface probe hit.
    pub projected: usize,
    /// Set when the run was skipped.
    pub skipped: Option<SkipReason>,
}

impl GenerationReport {
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Default::default()
        }
    }

    /// Placements whose surface probe missed.
    pub fn unprojected(&self) -> usize {
        self.placed - self.projected
    }
}

/// Executes generation runs with a fixed configuration.
#[derive(Debug, Clone)]
pub struct ScatterRunner {
    /// Run configuration applied to this runner.
    pub config: ScatterConfig,
}

impl ScatterRunner {
    pub fn try_new(config: ScatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: ScatterConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid scatter configuration");
        Self { config }
    }

    /// Sample and project points for `boundary`. See [`sample_points`].
    pub fn sample(
        &self,
        boundary: &(impl BoundarySource + ?Sized),
        surface: &dyn SurfaceQuery,
    ) -> Result<Vec<Vec3>> {
        sample_points(boundary, &self.config, surface)
    }

    /// Replace the contents of `sink` with a fresh scatter of `zone`. See [`generate`].
    pub fn generate(
        &self,
        zone: &ScatterZone<'_>,
        surface: &dyn SurfaceQuery,
        sink: &mut dyn InstanceSink,
    ) -> Result<GenerationReport> {
        generate(zone, &self.config, surface, sink)
    }
}

/// Captures `boundary`, fills it with points and conforms them to `surface`.
///
/// A boundary without vertices yields no points. Points come back in acceptance order and
/// are identical for identical inputs.
pub fn sample_points(
    boundary: &(impl BoundarySource + ?Sized),
    config: &ScatterConfig,
    surface: &dyn SurfaceQuery,
) -> Result<Vec<Vec3>> {
    config.validate()?;
    let polygon = BoundaryPolygon::capture(boundary);
    if polygon.is_empty() {
        return Ok(Vec::new());
    }
    let (points, _) = sample_polygon(&polygon, config, surface)?;
    Ok(points)
}

fn sample_polygon(
    polygon: &BoundaryPolygon,
    config: &ScatterConfig,
    surface: &dyn SurfaceQuery,
) -> Result<(Vec<Vec3>, usize)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut points = config.sampling().sample(polygon, &mut rng)?;
    let projected = config.projector().project(&mut points, surface);
    Ok((points, projected))
}

/// Replaces the contents of `sink` with a fresh scatter of `zone`.
///
/// A zone without asset or boundary is left alone: the sink is not touched and the report
/// carries a [`SkipReason`]. Otherwise the sink is cleared first, so a failed run (for
/// example a [`crate::error::Error::DegenerateBoundary`]) leaves it empty rather than
/// holding a stale scatter.
pub fn generate(
    zone: &ScatterZone<'_>,
    config: &ScatterConfig,
    surface: &dyn SurfaceQuery,
    sink: &mut dyn InstanceSink,
) -> Result<GenerationReport> {
    config.validate()?;

    let Some(asset_id) = zone.asset_id else {
        debug!("No asset configured; skipping generation.");
        return Ok(GenerationReport::skipped(SkipReason::MissingAsset));
    };
    let Some(boundary) = zone.boundary else {
        debug!("No boundary configured for '{}'; skipping generation.", asset_id);
        return Ok(GenerationReport::skipped(SkipReason::MissingBoundary));
    };

    sink.clear_instances();

    let polygon = BoundaryPolygon::capture(boundary);
    if polygon.is_empty() {
        warn!("Boundary for '{}' has no vertices; nothing to generate.", asset_id);
        return Ok(GenerationReport::skipped(SkipReason::EmptyBoundary));
    }

    let (points, projected) = match sample_polygon(&polygon, config, surface) {
        Ok(result) => result,
        Err(e) => {
            warn!("Failed to scatter '{}': {}.", asset_id, e);
            return Err(e);
        }
    };

    let asset_id: AssetId = asset_id.to_owned();
    for position in points.iter().copied() {
        sink.add_instance(Placement::new(asset_id.clone(), position));
    }

    let report = GenerationReport {
        placed: points.len(),
        projected,
        skipped: None,
    };
    info!(
        "Scattered {} instances of '{}' (spacing {}, seed {}, {} on surface).",
        report.placed, asset_id, config.spacing, config.seed, report.projected
    );
    Ok(report)
}
