#![forbid(unsafe_code)]
//! zone_scatter: blue-noise placement points inside a boundary polygon, conformed to a
//! ground surface.
//!
//! Modules:
//! - boundary: boundary sources, captured polygons, even-odd containment
//! - sampling: spatial grid and Poisson disk sampling (Bridson)
//! - surface: surface probes and projection onto the ground
//! - scatter: run configuration, zones, placements, instance sinks, runner
//!
//! ```
//! use glam::Vec3;
//! use zone_scatter::prelude::*;
//!
//! let outline = vec![
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(100.0, 0.0, 0.0),
//!     Vec3::new(100.0, 100.0, 0.0),
//!     Vec3::new(0.0, 100.0, 0.0),
//! ];
//! let config = ScatterConfig::new(10.0).with_seed(42);
//! let mut sink = VecInstanceSink::new();
//! let report = generate(
//!     &ScatterZone::new("tree", &outline),
//!     &config,
//!     &FlatSurface::new(0.0),
//!     &mut sink,
//! )?;
//! assert_eq!(report.placed, sink.len());
//! # Ok::<(), zone_scatter::error::Error>(())
//! ```
pub mod boundary;
pub mod error;
pub mod sampling;
pub mod scatter;
pub mod surface;

/// Convenient re-exports for common types. Import with `use zone_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::boundary::{contains, BoundaryPolygon, BoundarySource, Bounds2};
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{PoissonDiskSampling, SpatialGrid};
    pub use crate::scatter::{
        generate, sample_points, AssetId, FnInstanceSink, GenerationReport, InstanceSink,
        Placement, ScatterConfig, ScatterRunner, ScatterZone, SkipReason, VecInstanceSink,
    };
    pub use crate::surface::{
        FlatSurface, FnSurface, HeightFnSurface, Probe, SurfaceProjector, SurfaceQuery,
    };
}
