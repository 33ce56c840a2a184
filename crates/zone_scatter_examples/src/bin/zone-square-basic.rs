use glam::Vec3;
use zone_scatter::prelude::*;
use zone_scatter_examples::{render_zone_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    let outline = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(0.0, 100.0, 0.0),
    ];

    let config = ScatterConfig::new(10.0).with_seed(42);
    let runner = ScatterRunner::try_new(config)?;

    let mut sink = VecInstanceSink::new();
    let report = runner.generate(&ScatterZone::new("tree", &outline), &(), &mut sink)?;
    println!("placed {} trees", report.placed);

    let boundary = BoundaryPolygon::capture(&outline);
    let out = "zone-square-basic.png";
    render_zone_to_png(
        &boundary,
        sink.as_slice(),
        &RenderConfig::new((800, 800)).with_point_radius(6),
        out,
    )?;
    Ok(())
}
