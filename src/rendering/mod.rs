//! Icon rendering pipeline
//!
//! The pipeline is layered: `paint` provides the pixel primitives (gradient
//! and circle fills), `glyph` produces coverage bitmaps for the letter badge,
//! and `raster` composes the finished icon for a given size.

pub mod glyph;
pub mod paint;
pub mod raster;

use image::Rgb;

/// Gradient start color (top row), a warm near-white.
pub const BACKGROUND_TOP: Rgb<u8> = Rgb([253, 252, 248]);
/// Gradient end color (bottom row).
pub const BACKGROUND_BOTTOM: Rgb<u8> = Rgb([245, 245, 244]);
/// Fill for the main badge circle (stone-600).
pub const CIRCLE_FILL: Rgb<u8> = Rgb([87, 83, 78]);
/// Fill for the letter glyph.
pub const GLYPH_FILL: Rgb<u8> = Rgb([255, 255, 255]);
/// Fill for the accent dot (lime-500).
pub const ACCENT_FILL: Rgb<u8> = Rgb([132, 204, 22]);

/// The letter drawn inside the badge circle.
pub const GLYPH: char = 'S';

/// Geometry derived from the requested icon size.
///
/// All fields scale linearly with `size`, so two renders at different sizes
/// are identical up to scale (modulo integer rounding and glyph hinting).
/// Recomputed per render; carries no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub size: u32,
    pub center: (f32, f32),
    pub circle_radius: f32,
    pub font_px: f32,
    pub dot_radius: f32,
    pub dot_center: (f32, f32),
}

impl RenderParams {
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let center = (s / 2.0, s / 2.0);
        Self {
            size,
            center,
            circle_radius: s * 0.35,
            font_px: s * 0.55,
            dot_radius: s * 0.045,
            dot_center: (center.0 + s * 0.22, center.1 - s * 0.22),
        }
    }
}
