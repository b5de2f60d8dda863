//! Badgegen
//!
//! Procedurally draws a two-tone app icon (gradient backdrop, badge circle,
//! centered letter glyph, accent dot) at two fixed resolutions and writes
//! them as PNG files.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> badgegen::Result<()> {
//! let written = badgegen::generate_icons("public")?;
//! for path in &written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub use rendering::raster::render_icon;

/// The two icon resolutions produced by the driver.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// Output directory used by the `badgegen` binary.
pub const OUTPUT_DIR: &str = "public";

/// Render every icon size and write `icon-<size>.png` files into `out_dir`,
/// creating the directory first if it does not exist. Returns the written
/// paths in size order.
pub fn generate_icons<P: AsRef<Path>>(out_dir: P) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for &size in &ICON_SIZES {
        let icon = render_icon(size);
        let path = out_dir.join(format!("icon-{}.png", size));
        icon.save(&path)?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
