//! Glyph rasterization with an ordered font fallback chain
//!
//! Font selection walks a list of candidate font files and uses the first one
//! that loads; when none is available, a built-in procedural letterform takes
//! over, so rasterization itself can never fail. The tier that won is logged
//! at debug level.

use std::path::PathBuf;

use cosmic_text::{Attrs, Buffer, Color, FontSystem, Metrics, Shaping, SwashCache};
use image::{Rgb, RgbImage};

/// An alpha-coverage bitmap for a single rasterized glyph, cropped to its
/// ink bounding box. Row-major, one coverage byte per pixel.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Candidate font files tried in order before the built-in letterform.
pub fn default_font_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
        PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
    ]
}

/// Rasterize `ch` at `px` pixels using the first loadable candidate font,
/// falling back to the built-in letterform when none loads (or when the
/// loaded font produces no ink for the character).
pub fn rasterize(ch: char, px: f32, candidates: &[PathBuf]) -> GlyphBitmap {
    if let Some(mut font_system) = font_system_from_candidates(candidates) {
        if let Some(bitmap) = rasterize_with_font(&mut font_system, ch, px) {
            return bitmap;
        }
        log::debug!("loaded font produced no coverage for {:?}", ch);
    }
    log::debug!("using built-in letterform for {:?}", ch);
    builtin_letterform(px)
}

/// Build a font system over a private font database holding the first
/// candidate file that reads and parses. Failures are swallowed; the caller
/// falls back to the built-in letterform.
fn font_system_from_candidates(candidates: &[PathBuf]) -> Option<FontSystem> {
    for path in candidates {
        match std::fs::read(path) {
            Ok(bytes) => {
                let mut db = cosmic_text::fontdb::Database::new();
                db.load_font_data(bytes);
                if db.faces().next().is_some() {
                    log::debug!("using font file {}", path.display());
                    return Some(FontSystem::new_with_locale_and_db("en-US".into(), db));
                }
                log::debug!("no usable faces in {}", path.display());
            }
            Err(err) => {
                log::debug!("font candidate {} unavailable: {}", path.display(), err);
            }
        }
    }
    None
}

/// Shape and draw a single character, collecting coverage spans and cropping
/// them to the ink bounding box. Returns `None` when nothing was inked.
fn rasterize_with_font(font_system: &mut FontSystem, ch: char, px: f32) -> Option<GlyphBitmap> {
    let metrics = Metrics::new(px, px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);
    buffer.set_text(font_system, &ch.to_string(), Attrs::new(), Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);

    let mut cache = SwashCache::new();
    let mut spans: Vec<(i32, i32, u8)> = Vec::new();
    buffer.draw(font_system, &mut cache, Color::rgb(255, 255, 255), |x, y, w, h, color| {
        let alpha = color.a();
        if alpha == 0 {
            return;
        }
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                spans.push((x + dx, y + dy, alpha));
            }
        }
    });
    if spans.is_empty() {
        return None;
    }

    let min_x = spans.iter().map(|s| s.0).min()?;
    let max_x = spans.iter().map(|s| s.0).max()?;
    let min_y = spans.iter().map(|s| s.1).min()?;
    let max_y = spans.iter().map(|s| s.1).max()?;
    let width = (max_x - min_x + 1) as u32;
    let height = (max_y - min_y + 1) as u32;
    let mut coverage = vec![0u8; (width * height) as usize];
    for (x, y, alpha) in spans {
        let idx = ((y - min_y) as u32 * width + (x - min_x) as u32) as usize;
        coverage[idx] = coverage[idx].max(alpha);
    }
    Some(GlyphBitmap { width, height, coverage })
}

// Block letterform on a 26x33 design grid: three bars and two limbs forming
// an "S". Guaranteed-available last tier of the fallback chain.
const LETTERFORM_RECTS: [(f32, f32, f32, f32); 5] = [
    (0.0, 0.0, 26.0, 6.0),
    (0.0, 6.0, 7.0, 8.0),
    (0.0, 14.0, 26.0, 6.0),
    (19.0, 20.0, 7.0, 7.0),
    (0.0, 27.0, 26.0, 6.0),
];
const LETTERFORM_W: f32 = 26.0;
const LETTERFORM_H: f32 = 33.0;

/// Rasterize the built-in letterform. The glyph box height approximates the
/// cap height of a bold face at the same font size.
fn builtin_letterform(px: f32) -> GlyphBitmap {
    let height = ((px * 0.70).round() as u32).max(4);
    let width = ((height as f32 * LETTERFORM_W / LETTERFORM_H).round() as u32).max(3);
    let mut coverage = vec![0u8; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let dx = (x as f32 + 0.5) * LETTERFORM_W / width as f32;
            let dy = (y as f32 + 0.5) * LETTERFORM_H / height as f32;
            let inked = LETTERFORM_RECTS
                .iter()
                .any(|&(rx, ry, rw, rh)| dx >= rx && dx < rx + rw && dy >= ry && dy < ry + rh);
            if inked {
                coverage[(y * width + x) as usize] = 255;
            }
        }
    }
    GlyphBitmap { width, height, coverage }
}

/// Alpha-blend a glyph bitmap onto the canvas so the bitmap's visual center
/// lands on `(cx, cy)`. Out-of-bounds coverage is clipped.
pub fn draw_glyph_centered(
    canvas: &mut RgbImage,
    glyph: &GlyphBitmap,
    cx: f32,
    cy: f32,
    color: Rgb<u8>,
) {
    if glyph.is_empty() {
        return;
    }
    let left = (cx - glyph.width as f32 / 2.0).round() as i32;
    let top = (cy - glyph.height as f32 / 2.0).round() as i32;
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for gy in 0..glyph.height {
        for gx in 0..glyph.width {
            let alpha = glyph.coverage[(gy * glyph.width + gx) as usize];
            if alpha == 0 {
                continue;
            }
            let x = left + gx as i32;
            let y = top + gy as i32;
            if x < 0 || y < 0 || x >= w || y >= h {
                continue;
            }
            let under = *canvas.get_pixel(x as u32, y as u32);
            let blended = Rgb([
                blend_channel(under[0], color[0], alpha),
                blend_channel(under[1], color[1], alpha),
                blend_channel(under[2], color[2], alpha),
            ]);
            canvas.put_pixel(x as u32, y as u32, blended);
        }
    }
}

fn blend_channel(under: u8, over: u8, alpha: u8) -> u8 {
    let a = alpha as u16;
    ((over as u16 * a + under as u16 * (255 - a)) / 255) as u8
}
