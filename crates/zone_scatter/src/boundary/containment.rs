//! Point-in-polygon test using even-odd ray casting.
//!
//! A ray is cast from the point toward +X and every edge it crosses flips the
//! inside flag. Edges are half-open in Y (`(p1.y > y) != (p2.y > y)`) so a ray through a
//! shared vertex is counted once. For an axis-aligned rectangle this makes the left and
//! bottom edges inside and the right and top edges outside.
//!
//! Self-intersecting outlines give the even-odd answer, which is rarely what a zone author
//! meant; they are not supported.
use glam::Vec3;

/// Edges whose Y span is at most this are treated as horizontal and skipped.
pub const HORIZONTAL_EDGE_EPSILON: f32 = 1e-6;

/// Returns true if `point` (XY only) is inside the implicitly closed `polygon`.
pub fn contains(point: Vec3, polygon: &[Vec3]) -> bool {
    let n = polygon.len();
    if n < super::MIN_POLYGON_VERTICES {
        return false;
    }

    let mut inside = false;
    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];

        if (p1.y - p2.y).abs() <= HORIZONTAL_EDGE_EPSILON {
            continue;
        }

        let straddles = (p1.y > point.y) != (p2.y > point.y);
        if !straddles {
            continue;
        }

        // f64 keeps the intercept stable for long, nearly horizontal edges.
        let x_intersect = (p2.x as f64 - p1.x as f64) * (point.y as f64 - p1.y as f64)
            / (p2.y as f64 - p1.y as f64)
            + p1.x as f64;

        if (point.x as f64) < x_intersect {
            inside = !inside;
        }
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f32) -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(size, 0.0, 0.0),
            Vec3::new(size, size, 0.0),
            Vec3::new(0.0, size, 0.0),
        ]
    }

    /// A "U" shape opening upward; the notch is x in (4, 6), y in (4, 10).
    fn u_shape() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 10.0, 0.0),
            Vec3::new(6.0, 10.0, 0.0),
            Vec3::new(6.0, 4.0, 0.0),
            Vec3::new(4.0, 4.0, 0.0),
            Vec3::new(4.0, 10.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
        ]
    }

    #[test]
    fn square_interior_and_exterior() {
        let poly = square(10.0);
        assert!(contains(Vec3::new(5.0, 5.0, 0.0), &poly));
        assert!(!contains(Vec3::new(15.0, 5.0, 0.0), &poly));
        assert!(!contains(Vec3::new(-1.0, 5.0, 0.0), &poly));
        assert!(!contains(Vec3::new(5.0, 11.0, 0.0), &poly));
    }

    #[test]
    fn on_edge_convention_left_and_bottom_inside() {
        let poly = square(10.0);
        assert!(contains(Vec3::new(0.0, 5.0, 0.0), &poly));
        assert!(contains(Vec3::new(5.0, 0.0, 0.0), &poly));
        assert!(contains(Vec3::new(0.0, 0.0, 0.0), &poly));
    }

    #[test]
    fn on_edge_convention_right_and_top_outside() {
        let poly = square(10.0);
        assert!(!contains(Vec3::new(10.0, 5.0, 0.0), &poly));
        assert!(!contains(Vec3::new(5.0, 10.0, 0.0), &poly));
        assert!(!contains(Vec3::new(10.0, 10.0, 0.0), &poly));
    }

    #[test]
    fn elevation_is_ignored() {
        let poly = square(10.0);
        assert!(contains(Vec3::new(5.0, 5.0, 1000.0), &poly));
        assert!(contains(Vec3::new(5.0, 5.0, -1000.0), &poly));
    }

    #[test]
    fn concave_notch_is_outside() {
        let poly = u_shape();
        assert!(contains(Vec3::new(2.0, 8.0, 0.0), &poly));
        assert!(contains(Vec3::new(8.0, 8.0, 0.0), &poly));
        assert!(contains(Vec3::new(5.0, 2.0, 0.0), &poly));
        assert!(!contains(Vec3::new(5.0, 8.0, 0.0), &poly));
    }

    #[test]
    fn winding_order_does_not_matter() {
        let mut poly = square(10.0);
        poly.reverse();
        assert!(contains(Vec3::new(5.0, 5.0, 0.0), &poly));
        assert!(!contains(Vec3::new(15.0, 5.0, 0.0), &poly));
    }

    #[test]
    fn fewer_than_three_vertices_contains_nothing() {
        let line = vec![Vec3::ZERO, Vec3::new(10.0, 10.0, 0.0)];
        assert!(!contains(Vec3::new(5.0, 5.0, 0.0), &line));
        assert!(!contains(Vec3::ZERO, &[]));
    }
}
