//! Boundary polygons that delimit a scatter zone.
//!
//! A [`BoundarySource`] is whatever the host application uses to describe the zone
//! (a spline, an editor polygon, a plain vertex list). A generation run snapshots it
//! once into a [`BoundaryPolygon`] and never reads the source again.
use glam::{Vec2, Vec3};

use crate::error::{Error, Result};

pub mod containment;

pub use containment::contains;

/// Minimum number of vertices a polygon needs to enclose an area.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Ordered world-space vertices of a closed zone outline.
pub trait BoundarySource {
    /// Number of vertices in the outline.
    fn vertex_count(&self) -> usize;

    /// World-space location of vertex `index`, `0 <= index < vertex_count()`.
    fn vertex_at(&self, index: usize) -> Vec3;
}

impl BoundarySource for [Vec3] {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn vertex_at(&self, index: usize) -> Vec3 {
        self[index]
    }
}

impl BoundarySource for Vec<Vec3> {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn vertex_at(&self, index: usize) -> Vec3 {
        self[index]
    }
}

impl BoundarySource for [mint::Point3<f32>] {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn vertex_at(&self, index: usize) -> Vec3 {
        let p = self[index];
        Vec3::new(p.x, p.y, p.z)
    }
}

/// Axis-aligned bounding box of a polygon in the XY plane. Both edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2 {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Size of the box along each axis.
    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    /// Whether `point` lies inside the closed box.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True if the box has no area.
    pub fn is_degenerate(&self) -> bool {
        let extent = self.extent();
        !(extent.x > 0.0 && extent.y > 0.0)
    }
}

/// Snapshot of a boundary outline taken at the start of a generation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryPolygon {
    vertices: Vec<Vec3>,
}

impl BoundaryPolygon {
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }

    /// Reads every vertex of `source` once, in index order.
    ///
    /// A source without vertices yields an empty polygon; callers treat that as
    /// "nothing to generate".
    pub fn capture(source: &(impl BoundarySource + ?Sized)) -> Self {
        let count = source.vertex_count();
        let vertices = (0..count).map(|i| source.vertex_at(i)).collect();
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of the vertices in XY, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<Bounds2> {
        let first = self.vertices.first()?.truncate();
        let (min, max) = self
            .vertices
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), v| {
                let p = v.truncate();
                (min.min(p), max.max(p))
            });
        Some(Bounds2::new(min, max))
    }

    /// Mean of the vertices, projected onto the ground plane.
    pub fn centroid(&self) -> Option<Vec3> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum: Vec3 = self.vertices.iter().copied().sum();
        let mean = sum / self.vertices.len() as f32;
        Some(mean.with_z(0.0))
    }

    /// Even-odd containment test against this outline.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        containment::contains(point, &self.vertices)
    }

    /// Checks that the polygon can be sampled and returns its bounding box.
    pub fn validate(&self) -> Result<Bounds2> {
        let count = self.vertices.len();
        if count < MIN_POLYGON_VERTICES {
            return Err(Error::degenerate(count, "fewer than 3 vertices"));
        }
        if self.vertices.iter().any(|v| !v.is_finite()) {
            return Err(Error::degenerate(count, "non-finite vertex"));
        }
        let bounds = self
            .bounds()
            .ok_or_else(|| Error::degenerate(count, "no vertices"))?;
        if bounds.is_degenerate() {
            return Err(Error::degenerate(count, "bounding box has no area"));
        }
        Ok(bounds)
    }
}

impl BoundarySource for BoundaryPolygon {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn vertex_at(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }
}

impl From<Vec<Vec3>> for BoundaryPolygon {
    fn from(vertices: Vec<Vec3>) -> Self {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct CountingSource {
        vertices: Vec<Vec3>,
        reads: Cell<usize>,
    }

    impl BoundarySource for CountingSource {
        fn vertex_count(&self) -> usize {
            self.vertices.len()
        }

        fn vertex_at(&self, index: usize) -> Vec3 {
            self.reads.set(self.reads.get() + 1);
            self.vertices[index]
        }
    }

    fn square() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(10.0, 0.0, 3.0),
            Vec3::new(10.0, 10.0, 3.0),
            Vec3::new(0.0, 10.0, 3.0),
        ]
    }

    #[test]
    fn capture_reads_each_vertex_once_in_order() {
        let source = CountingSource {
            vertices: square(),
            reads: Cell::new(0),
        };
        let polygon = BoundaryPolygon::capture(&source);
        assert_eq!(source.reads.get(), 4);
        assert_eq!(polygon.vertices(), square().as_slice());
    }

    #[test]
    fn capture_of_empty_source_is_empty() {
        let polygon = BoundaryPolygon::capture(&Vec::<Vec3>::new());
        assert!(polygon.is_empty());
        assert!(polygon.bounds().is_none());
        assert!(polygon.centroid().is_none());
    }

    #[test]
    fn capture_accepts_mint_points() {
        let points = [
            mint::Point3 { x: 1.0, y: 2.0, z: 3.0 },
            mint::Point3 { x: 4.0, y: 5.0, z: 6.0 },
        ];
        let polygon = BoundaryPolygon::capture(&points[..]);
        assert_eq!(polygon.vertices()[1], Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn bounds_ignore_elevation() {
        let mut vertices = square();
        vertices[2].z = -100.0;
        let bounds = BoundaryPolygon::new(vertices).bounds().unwrap();
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(10.0, 10.0));
        assert!(bounds.contains(Vec2::new(10.0, 10.0)));
        assert!(!bounds.contains(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn centroid_is_on_ground_plane() {
        let centroid = BoundaryPolygon::new(square()).centroid().unwrap();
        assert_eq!(centroid, Vec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn validate_rejects_too_few_vertices() {
        let polygon = BoundaryPolygon::new(vec![Vec3::ZERO, Vec3::X]);
        assert!(matches!(
            polygon.validate(),
            Err(Error::DegenerateBoundary { vertices: 2, .. })
        ));
    }

    #[test]
    fn validate_rejects_collinear_outline() {
        let polygon = BoundaryPolygon::new(vec![
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        ]);
        assert!(matches!(
            polygon.validate(),
            Err(Error::DegenerateBoundary { vertices: 3, .. })
        ));
    }

    #[test]
    fn validate_returns_bounds_for_square() {
        let bounds = BoundaryPolygon::new(square()).validate().unwrap();
        assert_eq!(bounds.extent(), Vec2::new(10.0, 10.0));
    }
}
