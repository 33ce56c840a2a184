#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{render_zone_to_png, RenderConfig};
