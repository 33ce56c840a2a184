//! Blue-noise point generation inside a boundary polygon.
//!
//! [`PoissonDiskSampling`] grows a point set from a seed with Bridson's algorithm and
//! uses [`SpatialGrid`] to reject candidates that are too close to accepted points.
use rand::Rng;

pub mod grid;
pub mod poisson_disk;

pub use grid::SpatialGrid;
pub use poisson_disk::PoissonDiskSampling;

/// Uniform float in `[0, 1)` built from the top 24 bits of one `u32`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (rng.next_u32() >> 8) as f32 * SCALE
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    let scaled = ((rng.next_u32() as u64) * (len as u64)) >> 32;
    scaled as usize
}
