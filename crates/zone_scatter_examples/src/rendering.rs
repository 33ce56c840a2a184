use std::path::Path;

use anyhow::{bail, Context};
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use zone_scatter::prelude::*;

/// How a zone and its placements are drawn.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub outline: [u8; 3],
    /// Colour of placements at the lowest and highest elevation.
    pub low: [u8; 3],
    pub high: [u8; 3],
    pub point_radius: i32,
    /// Empty border around the zone, in pixels.
    pub margin: u32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [235, 235, 225],
            outline: [40, 40, 40],
            low: [30, 110, 40],
            high: [200, 170, 60],
            point_radius: 3,
            margin: 20,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_point_radius(mut self, radius: i32) -> Self {
        self.point_radius = radius;
        self
    }
}

/// Draws the outline of `boundary` and every placement, then writes a PNG to `path`.
pub fn render_zone_to_png(
    boundary: &BoundaryPolygon,
    placements: &[Placement],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let Some(bounds) = boundary.bounds() else {
        bail!("cannot render an empty boundary");
    };
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    let inner = Vec2::new(
        w.saturating_sub(2 * config.margin).max(1) as f32,
        h.saturating_sub(2 * config.margin).max(1) as f32,
    );
    let extent = bounds.extent().max(Vec2::splat(f32::EPSILON));
    let scale = (inner.x / extent.x).min(inner.y / extent.y);
    let to_px = |p: Vec3| -> (i32, i32) {
        let local = (p.truncate() - bounds.min) * scale;
        let x = config.margin as f32 + local.x;
        // Image rows grow downward.
        let y = h as f32 - (config.margin as f32 + local.y);
        (x.round() as i32, y.round() as i32)
    };

    let vertices = boundary.vertices();
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        draw_line(&mut img, to_px(a), to_px(b), config.outline);
    }

    let (z_min, z_max) = placements
        .iter()
        .map(|p| p.position.z)
        .fold((f32::MAX, f32::MIN), |(lo, hi), z| (lo.min(z), hi.max(z)));
    let z_span = (z_max - z_min).max(f32::EPSILON);

    for placement in placements {
        let t = ((placement.position.z - z_min) / z_span).clamp(0.0, 1.0);
        let color = lerp_color(config.low, config.high, t);
        draw_disk(&mut img, to_px(placement.position), config.point_radius, color);
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn lerp_color(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    std::array::from_fn(|i| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8)
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn draw_line(img: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: [u8; 3]) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(img, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_disk(img: &mut RgbImage, center: (i32, i32), radius: i32, color: [u8; 3]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put(img, center.0 + dx, center.1 + dy, color);
            }
        }
    }
}
