#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::Vec3;

/// Full-run benches sample large zones; keep the sample count low.
pub fn zone_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(15)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Throughput in placements, never zero so criterion can report a rate.
pub fn placements_throughput(placements: usize) -> Throughput {
    Throughput::Elements(placements.max(1) as u64)
}

/// Counter-clockwise square with its first vertex at the origin.
pub fn square_zone(size: f32) -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(size, 0.0, 0.0),
        Vec3::new(size, size, 0.0),
        Vec3::new(0.0, size, 0.0),
    ]
}
