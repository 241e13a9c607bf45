//! Pixel-buffer drawing surface
//!
//! Executes drawing commands immediately against an owned [`Raster`]. Fill
//! geometry is rounded to whole-pixel spans after the transform is applied
//! and clipped to the buffer; fills overwrite with the opaque fill color.

use crate::io::error::Result;
use crate::raster::source::{Raster, TRANSPARENT};
use crate::render::color::Rgb;
use crate::render::surface::{DrawSurface, Translation};
use image::Rgba;

/// The raster mosaic sink
#[derive(Debug, Clone)]
pub struct RasterSurface {
    raster: Raster,
    fill: Rgb,
    transform: Translation,
}

impl RasterSurface {
    /// Create a transparent surface of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            raster: Raster::new(width, height)?,
            fill: Rgb::new(0, 0, 0),
            transform: Translation::default(),
        })
    }

    /// Borrow the backing pixel grid
    pub const fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Consume the surface, yielding the backing pixel grid
    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// Rounded pixel span of a device-space rectangle, clipped to the buffer
    fn pixel_span(&self, x: f64, y: f64, width: f64, height: f64) -> Option<(u32, u32, u32, u32)> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let (x0, y0) = self.transform.apply(x, y);
        let (x1, y1) = (x0 + width, y0 + height);

        let clamp = |v: f64, max: u32| v.round().clamp(0.0, f64::from(max)) as u32;
        let (left, right) = (clamp(x0, self.raster.width()), clamp(x1, self.raster.width()));
        let (top, bottom) = (
            clamp(y0, self.raster.height()),
            clamp(y1, self.raster.height()),
        );

        (left < right && top < bottom).then_some((left, top, right, bottom))
    }

    fn paint(&mut self, x: f64, y: f64, width: f64, height: f64, value: Rgba<u8>) {
        if let Some((left, top, right, bottom)) = self.pixel_span(x, y, width, height) {
            for py in top..bottom {
                for px in left..right {
                    self.raster.put_pixel(px, py, value);
                }
            }
        }
    }
}

impl DrawSurface for RasterSurface {
    fn set_fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let value = self.fill.to_rgba();
        self.paint(x, y, width, height, value);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.paint(x, y, width, height, TRANSPARENT);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
    }

    fn reset_transform(&mut self) {
        self.transform.reset();
    }
}
