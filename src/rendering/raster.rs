//! Composes the layered icon render for a single size

use std::path::PathBuf;

use image::RgbImage;

use crate::rendering::{
    glyph, paint, RenderParams, ACCENT_FILL, BACKGROUND_BOTTOM, BACKGROUND_TOP, CIRCLE_FILL,
    GLYPH, GLYPH_FILL,
};

/// Render the badge icon at `size` pixels square using the default font
/// fallback chain. Deterministic for a fixed size and font availability.
pub fn render_icon(size: u32) -> RgbImage {
    render_icon_with_fonts(size, &glyph::default_font_candidates())
}

/// Render with an explicit font candidate list. An empty list skips straight
/// to the built-in letterform, which is identical on every machine.
///
/// Layer order matters: gradient backdrop, badge circle, letter glyph,
/// accent dot.
pub fn render_icon_with_fonts(size: u32, font_candidates: &[PathBuf]) -> RgbImage {
    if size == 0 {
        return RgbImage::new(0, 0);
    }
    let params = RenderParams::for_size(size);
    let mut canvas = RgbImage::from_pixel(size, size, BACKGROUND_TOP);

    paint::fill_vertical_gradient(&mut canvas, BACKGROUND_TOP, BACKGROUND_BOTTOM);
    paint::fill_circle(
        &mut canvas,
        params.center.0,
        params.center.1,
        params.circle_radius,
        CIRCLE_FILL,
    );

    let bitmap = glyph::rasterize(GLYPH, params.font_px, font_candidates);
    glyph::draw_glyph_centered(&mut canvas, &bitmap, params.center.0, params.center.1, GLYPH_FILL);

    paint::fill_circle(
        &mut canvas,
        params.dot_center.0,
        params.dot_center.1,
        params.dot_radius,
        ACCENT_FILL,
    );
    canvas
}
