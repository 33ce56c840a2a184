//! Ground surface queries used to conform points to terrain.
//!
//! The host world answers [`Probe`]s through [`SurfaceQuery`]. A few stock surfaces are
//! provided for tests, previews and heightfield terrain.
use glam::Vec3;

pub mod projector;

pub use projector::{SurfaceProjector, DEFAULT_PROBE_HALF_HEIGHT};

/// A ray segment `origin + direction * t` for `t` in `[0, max_distance]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub origin: Vec3,
    /// Unit direction of the ray.
    pub direction: Vec3,
    pub max_distance: f32,
}

impl Probe {
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction,
            max_distance,
        }
    }

    /// Straight-down probe through `point`, starting `half_height` above it.
    pub fn vertical(point: Vec3, half_height: f32) -> Self {
        Self {
            origin: point + Vec3::Z * half_height,
            direction: Vec3::NEG_Z,
            max_distance: 2.0 * half_height,
        }
    }

    /// Last point covered by the probe.
    pub fn end(&self) -> Vec3 {
        self.origin + self.direction * self.max_distance
    }

    /// Parameter `t` of the probe at elevation `z`, if the probe reaches it.
    pub fn distance_to_elevation(&self, z: f32) -> Option<f32> {
        if self.direction.z == 0.0 {
            return None;
        }
        let t = (z - self.origin.z) / self.direction.z;
        (0.0..=self.max_distance).contains(&t).then_some(t)
    }
}

/// World geometry that can be hit by a probe.
pub trait SurfaceQuery {
    /// Closest hit along `probe`, or `None` if nothing is hit.
    fn probe(&self, probe: &Probe) -> Option<Vec3>;
}

/// A world without ground; every probe misses.
impl SurfaceQuery for () {
    #[inline]
    fn probe(&self, _probe: &Probe) -> Option<Vec3> {
        None
    }
}

impl<S: SurfaceQuery + ?Sized> SurfaceQuery for &S {
    #[inline]
    fn probe(&self, probe: &Probe) -> Option<Vec3> {
        (**self).probe(probe)
    }
}

/// Infinite horizontal plane at a fixed elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatSurface {
    pub height: f32,
}

impl FlatSurface {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl SurfaceQuery for FlatSurface {
    fn probe(&self, probe: &Probe) -> Option<Vec3> {
        let t = probe.distance_to_elevation(self.height)?;
        Some(probe.origin + probe.direction * t)
    }
}

/// Terrain described by a height function `(x, y) -> Option<z>`.
///
/// Only vertical probes are answered: the height is sampled under the probe origin and
/// reported as a hit when it lies on the probe segment.
pub struct HeightFnSurface<F>
where
    F: Fn(f32, f32) -> Option<f32>,
{
    f: F,
}

impl<F> HeightFnSurface<F>
where
    F: Fn(f32, f32) -> Option<f32>,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> SurfaceQuery for HeightFnSurface<F>
where
    F: Fn(f32, f32) -> Option<f32>,
{
    fn probe(&self, probe: &Probe) -> Option<Vec3> {
        if probe.direction.x != 0.0 || probe.direction.y != 0.0 {
            return None;
        }
        let height = (self.f)(probe.origin.x, probe.origin.y)?;
        probe.distance_to_elevation(height)?;
        Some(Vec3::new(probe.origin.x, probe.origin.y, height))
    }
}

/// A surface that forwards every probe to a user-provided closure.
pub struct FnSurface<F>
where
    F: Fn(&Probe) -> Option<Vec3>,
{
    f: F,
}

impl<F> FnSurface<F>
where
    F: Fn(&Probe) -> Option<Vec3>,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> SurfaceQuery for FnSurface<F>
where
    F: Fn(&Probe) -> Option<Vec3>,
{
    #[inline]
    fn probe(&self, probe: &Probe) -> Option<Vec3> {
        (self.f)(probe)
    }
}
