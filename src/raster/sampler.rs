//! Brightness sampling and grid-to-pixel coordinate mapping
//!
//! Sampling is nearest-neighbor with no filtering: a grid index maps to a
//! single source pixel and brightness is the plain mean of its color
//! channels. The alpha channel never participates.

use crate::math::map_range;
use crate::raster::source::Raster;
use image::Rgba;

/// Brightness of a pixel: the arithmetic mean of R, G, B in `[0, 255]`
pub fn brightness(pixel: &Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
}

/// Sample brightness at integer pixel coordinates
///
/// Callers map grid indices into valid source bounds before sampling, so an
/// out-of-bounds read indicates a caller bug; it reads as brightness 0 rather
/// than aborting the pass.
pub fn sample(source: &Raster, x: u32, y: u32) -> f64 {
    source.pixel(x, y).map_or(0.0, brightness)
}

/// Map a grid index to a source pixel coordinate
///
/// Linearly maps the grid index range `[0, tiles)` onto the pixel range
/// `[0, extent)` and floors to the nearest-neighbor pixel. Applied uniformly
/// on both axes; for `index < tiles` the result is always within bounds.
pub fn grid_to_pixel(index: u32, tiles: u32, extent: u32) -> u32 {
    map_range(
        f64::from(index),
        0.0,
        f64::from(tiles),
        0.0,
        f64::from(extent),
    )
    .floor() as u32
}
