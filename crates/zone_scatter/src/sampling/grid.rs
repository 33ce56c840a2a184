//! Uniform acceleration grid for minimum-distance queries.
//!
//! With a cell size of `spacing / sqrt(2)` a cell can hold at most one accepted point, and
//! every point closer than `spacing` to a candidate lies within two cells of it. Each cell
//! therefore stores a single index into the caller's point list.
//!
//! Only occupied cells are stored, keyed by their integer coordinates, so memory follows
//! the number of accepted points rather than the area of the bounding box.
use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::boundary::Bounds2;

/// Cells scanned on each side of the candidate's cell.
pub const DEFAULT_NEIGHBOURHOOD_CELLS: usize = 2;

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    bounds: Bounds2,
    cell_size: f32,
    width: usize,
    height: usize,
    neighbourhood: usize,
    cells: HashMap<(usize, usize), usize>,
}

impl SpatialGrid {
    /// Creates an empty grid covering `[min, max]`.
    ///
    /// A non-positive or non-finite `cell_size` collapses the grid to a single cell; that is
    /// the zero-spacing case where no query can conflict anyway.
    pub fn new(min: Vec2, max: Vec2, cell_size: f32) -> Self {
        let bounds = Bounds2::new(min, max);
        let (width, height) = Self::dimensions(&bounds, cell_size);
        Self {
            bounds,
            cell_size,
            width,
            height,
            neighbourhood: DEFAULT_NEIGHBOURHOOD_CELLS,
            cells: HashMap::new(),
        }
    }

    pub fn from_bounds(bounds: Bounds2, cell_size: f32) -> Self {
        Self::new(bounds.min, bounds.max, cell_size)
    }

    /// Sets how many cells around the candidate's cell are scanned.
    pub fn with_neighbourhood(mut self, cells: usize) -> Self {
        self.neighbourhood = cells;
        self
    }

    /// Cell counts `(width, height)` a grid over `bounds` would need.
    pub fn dimensions(bounds: &Bounds2, cell_size: f32) -> (usize, usize) {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return (1, 1);
        }
        let extent = bounds.extent();
        let width = ((extent.x / cell_size).ceil() as usize).max(1);
        let height = ((extent.y / cell_size).ceil() as usize).max(1);
        (width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of occupied cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Integer cell of `point`, or `None` if it lies outside the bounding box.
    ///
    /// Points on the max edges map into the last row/column.
    pub fn cell_of(&self, point: Vec2) -> Option<(usize, usize)> {
        if !self.bounds.contains(point) {
            return None;
        }
        if self.width == 1 && self.height == 1 {
            return Some((0, 0));
        }
        let local = (point - self.bounds.min) / self.cell_size;
        let x = (local.x.floor() as usize).min(self.width - 1);
        let y = (local.y.floor() as usize).min(self.height - 1);
        Some((x, y))
    }

    /// Index stored in cell `(x, y)`, if any.
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        self.cells.get(&(x, y)).copied()
    }

    /// Records `index` in the cell containing `point`.
    ///
    /// Returns `false` and stores nothing if the point is outside the bounding box.
    pub fn insert(&mut self, point: Vec2, index: usize) -> bool {
        match self.cell_of(point) {
            Some(cell) => {
                self.cells.insert(cell, index);
                true
            }
            None => false,
        }
    }

    /// True if `candidate` is outside the grid or some point stored in its neighbourhood is
    /// closer than `sqrt(spacing_squared)`.
    ///
    /// `points` is the list the stored indices refer to.
    pub fn query_conflict(&self, candidate: Vec2, points: &[Vec3], spacing_squared: f32) -> bool {
        let Some((gx, gy)) = self.cell_of(candidate) else {
            return true;
        };

        let start_x = gx.saturating_sub(self.neighbourhood);
        let end_x = gx.saturating_add(self.neighbourhood).min(self.width - 1);
        let start_y = gy.saturating_sub(self.neighbourhood);
        let end_y = gy.saturating_add(self.neighbourhood).min(self.height - 1);

        let too_close = |existing: usize| {
            points[existing].truncate().distance_squared(candidate) < spacing_squared
        };

        // Windows larger than the occupied set walk the occupied cells instead.
        let window = (end_x - start_x + 1).saturating_mul(end_y - start_y + 1);
        if window > self.cells.len() {
            return self.cells.iter().any(|(&(x, y), &existing)| {
                (start_x..=end_x).contains(&x)
                    && (start_y..=end_y).contains(&y)
                    && too_close(existing)
            });
        }

        (start_y..=end_y).any(|y| {
            (start_x..=end_x).any(|x| self.cells.get(&(x, y)).is_some_and(|&i| too_close(i)))
        })
    }

    /// Empties every cell while keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::sampling::rand01;

    fn brute_force_conflict(candidate: Vec2, points: &[Vec3], spacing_squared: f32) -> bool {
        points
            .iter()
            .any(|p| p.truncate().distance_squared(candidate) < spacing_squared)
    }

    #[test]
    fn grid_dimensions_use_ceil() {
        let grid = SpatialGrid::new(Vec2::ZERO, Vec2::new(10.0, 4.5), 2.0);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn zero_cell_size_collapses_to_single_cell() {
        let grid = SpatialGrid::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 0.0);
        assert_eq!((grid.width(), grid.height()), (1, 1));
        assert_eq!(grid.cell_of(Vec2::new(7.0, 3.0)), Some((0, 0)));
    }

    #[test]
    fn cell_of_uses_offset_from_min() {
        let grid = SpatialGrid::new(Vec2::new(-10.0, 20.0), Vec2::new(10.0, 40.0), 5.0);
        assert_eq!(grid.cell_of(Vec2::new(-10.0, 20.0)), Some((0, 0)));
        assert_eq!(grid.cell_of(Vec2::new(-4.9, 26.0)), Some((1, 1)));
        assert_eq!(grid.cell_of(Vec2::new(10.0, 40.0)), Some((3, 3)));
        assert_eq!(grid.cell_of(Vec2::new(10.1, 30.0)), None);
    }

    #[test]
    fn insert_outside_bounds_is_ignored() {
        let mut grid = SpatialGrid::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 1.0);
        assert!(!grid.insert(Vec2::new(-1.0, 5.0), 0));
        assert!(grid.insert(Vec2::new(2.5, 3.5), 7));
        assert_eq!(grid.get(2, 3), Some(7));
        grid.clear();
        assert_eq!(grid.get(2, 3), None);
    }

    #[test]
    fn out_of_bounds_candidate_conflicts() {
        let grid = SpatialGrid::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 1.0);
        assert!(grid.query_conflict(Vec2::new(11.0, 5.0), &[], 1.0));
        assert!(!grid.query_conflict(Vec2::new(5.0, 5.0), &[], 1.0));
    }

    #[test]
    fn query_rejects_close_neighbours() {
        let spacing = 1.0_f32;
        let mut grid = SpatialGrid::new(
            Vec2::new(-2.0, -2.0),
            Vec2::new(2.0, 2.0),
            spacing / std::f32::consts::SQRT_2,
        );
        let points = vec![Vec3::ZERO];
        grid.insert(Vec2::ZERO, 0);

        assert!(grid.query_conflict(Vec2::new(0.5, 0.0), &points, spacing * spacing));
        assert!(grid.query_conflict(Vec2::new(-0.7, 0.7), &points, spacing * spacing));
        assert!(!grid.query_conflict(Vec2::new(1.5, 1.5), &points, spacing * spacing));
        assert!(!grid.query_conflict(Vec2::new(1.0, 0.0), &points, spacing * spacing));
    }

    #[test]
    fn zero_spacing_never_conflicts_inside_bounds() {
        let mut grid = SpatialGrid::new(Vec2::ZERO, Vec2::new(4.0, 4.0), 0.0);
        let points = vec![Vec3::new(1.0, 1.0, 0.0)];
        grid.insert(Vec2::new(1.0, 1.0), 0);
        assert!(!grid.query_conflict(Vec2::new(1.0, 1.0), &points, 0.0));
    }

    #[test]
    fn huge_zone_allocates_only_occupied_cells() {
        let mut grid = SpatialGrid::new(
            Vec2::ZERO,
            Vec2::splat(20_000.0),
            3.0 / std::f32::consts::SQRT_2,
        );
        assert_eq!(grid.width(), 9429);
        assert!(grid.is_empty());

        let points = vec![Vec3::new(19_999.0, 19_999.0, 0.0)];
        assert!(grid.insert(points[0].truncate(), 0));
        assert_eq!(grid.len(), 1);
        assert!(grid.query_conflict(Vec2::new(19_998.0, 19_999.0), &points, 9.0));
        assert!(!grid.query_conflict(Vec2::new(10.0, 10.0), &points, 9.0));
    }

    #[test]
    fn unbounded_neighbourhood_scans_whole_grid() {
        let mut grid =
            SpatialGrid::new(Vec2::ZERO, Vec2::splat(100.0), 1.0).with_neighbourhood(usize::MAX);
        let points = vec![Vec3::new(90.0, 90.0, 0.0)];
        grid.insert(points[0].truncate(), 0);

        assert!(grid.query_conflict(Vec2::new(5.0, 5.0), &points, 200.0 * 200.0));
        assert!(!grid.query_conflict(Vec2::new(5.0, 5.0), &points, 1.0));
    }

    #[test]
    fn query_matches_brute_force_scan() {
        let spacing = 3.0_f32;
        let spacing_squared = spacing * spacing;
        let extent = 50.0_f32;
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let rng: &mut dyn Rng = &mut rng;

        let mut grid = SpatialGrid::new(
            Vec2::ZERO,
            Vec2::splat(extent),
            spacing / std::f32::consts::SQRT_2,
        );
        let mut points: Vec<Vec3> = Vec::new();

        for _ in 0..400 {
            let p = Vec2::new(rand01(rng) * extent, rand01(rng) * extent);
            if !brute_force_conflict(p, &points, spacing_squared) {
                grid.insert(p, points.len());
                points.push(p.extend(0.0));
            }
        }
        assert!(points.len() > 20);

        for _ in 0..2000 {
            let candidate = Vec2::new(rand01(rng) * extent, rand01(rng) * extent);
            assert_eq!(
                grid.query_conflict(candidate, &points, spacing_squared),
                brute_force_conflict(candidate, &points, spacing_squared),
                "grid and brute force disagree at {candidate:?}"
            );
        }
    }
}
