//! Generation runs: configuration, target zone, placements and sinks.
pub mod config;
pub mod runner;
pub mod sink;

pub use config::ScatterConfig;
pub use runner::{
    generate, sample_points, GenerationReport, ScatterRunner, ScatterZone, SkipReason,
};
pub use sink::{AssetId, FnInstanceSink, InstanceSink, Placement, VecInstanceSink};
