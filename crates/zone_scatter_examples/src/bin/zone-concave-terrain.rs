use glam::Vec3;
use zone_scatter::prelude::*;
use zone_scatter_examples::{render_zone_to_png, RenderConfig};

/// A crescent-shaped clearing with rolling hills underneath.
fn crescent(segments: usize) -> Vec<Vec3> {
    let outer = 120.0_f32;
    let inner = 80.0_f32;
    let inner_offset = 30.0_f32;
    let sweep = std::f32::consts::PI * 1.6;
    let start = -sweep / 2.0;

    let mut vertices = Vec::with_capacity(segments * 2);
    for i in 0..=segments {
        let a = start + sweep * i as f32 / segments as f32;
        vertices.push(Vec3::new(outer * a.cos(), outer * a.sin(), 0.0));
    }
    for i in (0..=segments).rev() {
        let a = start + sweep * i as f32 / segments as f32;
        vertices.push(Vec3::new(
            inner_offset + inner * a.cos(),
            inner * a.sin(),
            0.0,
        ));
    }
    vertices
}

fn hills(x: f32, y: f32) -> Option<f32> {
    // A lake in the widest part of the crescent has no ground to land on.
    if (x + 85.0).powi(2) + y.powi(2) < 20.0_f32.powi(2) {
        return None;
    }
    Some(25.0 * (x * 0.03).sin() * (y * 0.025).cos() + 0.05 * x)
}

fn main() -> anyhow::Result<()> {
    let outline = crescent(48);
    let terrain = HeightFnSurface::new(hills);
    let config = ScatterConfig::new(6.0).with_seed(7);

    let mut sink = VecInstanceSink::new();
    let report = generate(
        &ScatterZone::new("rock", &outline),
        &config,
        &terrain,
        &mut sink,
    )?;
    println!(
        "placed {} rocks, {} on terrain, {} kept at ground level",
        report.placed,
        report.projected,
        report.unprojected()
    );

    let boundary = BoundaryPolygon::capture(&outline);
    render_zone_to_png(
        &boundary,
        sink.as_slice(),
        &RenderConfig::new((1000, 1000)).with_background([210, 220, 230]),
        "zone-concave-terrain.png",
    )?;
    Ok(())
}
