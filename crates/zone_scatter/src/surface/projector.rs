//! Conforming sampled points to the ground.
use glam::Vec3;
use tracing::trace;

use crate::surface::{Probe, SurfaceQuery};

/// Half of the vertical probe length, above and below each point.
pub const DEFAULT_PROBE_HALF_HEIGHT: f32 = 5000.0;

/// Drops points onto a [`SurfaceQuery`] with vertical probes.
///
/// A hit replaces the whole point with the hit location; a miss leaves the point as it
/// was. Points never influence each other, so the order of projection is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProjector {
    pub half_height: f32,
}

impl Default for SurfaceProjector {
    fn default() -> Self {
        Self {
            half_height: DEFAULT_PROBE_HALF_HEIGHT,
        }
    }
}

impl SurfaceProjector {
    pub fn new(half_height: f32) -> Self {
        Self { half_height }
    }

    /// Projects a single point, returning `None` on a miss.
    pub fn project_point(&self, point: Vec3, surface: &dyn SurfaceQuery) -> Option<Vec3> {
        surface.probe(&Probe::vertical(point, self.half_height))
    }

    /// Projects `points` in place and returns how many probes hit.
    pub fn project(&self, points: &mut [Vec3], surface: &dyn SurfaceQuery) -> usize {
        let mut hits = 0;
        for point in points.iter_mut() {
            match self.project_point(*point, surface) {
                Some(hit) => {
                    *point = hit;
                    hits += 1;
                }
                None => trace!("No surface under {:?}; keeping elevation", point),
            }
        }
        hits
    }
}
