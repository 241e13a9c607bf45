//! Aspect-preserving fit and nearest-neighbor blit onto a display surface
//!
//! The display surface is sized to the fitted dimensions rather than padded
//! with bars, matching an on-screen canvas that shrinks to fit its window.
//! Re-invoked on every (debounced) viewport resize.

use crate::io::error::{Result, invalid_parameter};
use crate::raster::source::{Raster, TRANSPARENT};

/// Largest dimensions that fit within a viewport while preserving the
/// source aspect ratio
///
/// Both results are at least 1 so a degenerate viewport still yields a
/// drawable surface.
pub fn fit_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let aspect = f64::from(src_w) / f64::from(src_h);
    let (mut out_w, mut out_h) = (f64::from(max_w), f64::from(max_h));

    if out_w / out_h > aspect {
        out_w = out_h * aspect;
    } else {
        out_h = out_w / aspect;
    }

    ((out_w as u32).max(1), (out_h as u32).max(1))
}

/// Scale a raster into a viewport-fitted display surface
///
/// Nearest-neighbor sampling; the caller chooses whether `source` is the
/// mosaic raster or the raw reference image.
///
/// # Errors
///
/// Returns an error if either viewport dimension is zero.
pub fn composite(source: &Raster, max_w: u32, max_h: u32) -> Result<Raster> {
    for (name, value) in [("max_w", max_w), ("max_h", max_h)] {
        if value == 0 {
            return Err(invalid_parameter(
                name,
                &value,
                &"viewport dimensions must be positive",
            ));
        }
    }

    let (out_w, out_h) = fit_dimensions(source.width(), source.height(), max_w, max_h);

    Raster::from_fn(out_w, out_h, |x, y| {
        let src_x = (u64::from(x) * u64::from(source.width()) / u64::from(out_w)) as u32;
        let src_y = (u64::from(y) * u64::from(source.height()) / u64::from(out_h)) as u32;
        source.pixel(src_x, src_y).copied().unwrap_or(TRANSPARENT)
    })
}
