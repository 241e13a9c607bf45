//! Retained vector drawing surface with SVG serialization
//!
//! Accumulates drawing commands as device-space rectangle primitives instead
//! of touching pixels. The transform is applied at record time, identically
//! to the raster backend, so the retained list is a lossless description of
//! what the raster sink painted and serializes directly to an SVG document.

use crate::io::error::Result;
use crate::render::color::Rgb;
use crate::render::surface::{DrawSurface, Translation};

/// One retained rectangle primitive in device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
    /// Fill color
    pub fill: Rgb,
}

impl VectorRect {
    /// Whether this rectangle lies entirely inside a device-space region
    fn covered_by(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.x >= x && self.y >= y && self.x + self.width <= x + width
            && self.y + self.height <= y + height
    }
}

/// The vector mosaic sink
#[derive(Debug, Clone)]
pub struct VectorSurface {
    width: u32,
    height: u32,
    fill: Rgb,
    transform: Translation,
    rects: Vec<VectorRect>,
}

impl VectorSurface {
    /// Create an empty surface with the given document dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        // Same dimension validation as the raster sink, so both reject the same inputs
        crate::raster::source::validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            fill: Rgb::new(0, 0, 0),
            transform: Translation::default(),
            rects: Vec::new(),
        })
    }

    /// Document width in user units
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Document height in user units
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The retained primitives, in draw order
    pub fn primitives(&self) -> &[VectorRect] {
        &self.rects
    }

    /// Serialize the retained primitives to a standalone SVG document
    ///
    /// Emits one `<rect>` per primitive in draw order; later rectangles paint
    /// over earlier ones exactly as they did on the raster sink.
    pub fn to_svg(&self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height,
        );
        for rect in &self.rects {
            doc.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                rect.x, rect.y, rect.width, rect.height, rect.fill,
            ));
        }
        doc.push_str("</svg>\n");
        doc
    }
}

impl DrawSurface for VectorSurface {
    fn set_fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (dx, dy) = self.transform.apply(x, y);
        self.rects.push(VectorRect {
            x: dx,
            y: dy,
            width,
            height,
            fill: self.fill,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (dx, dy) = self.transform.apply(x, y);
        self.rects
            .retain(|rect| !rect.covered_by(dx, dy, width, height));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
    }

    fn reset_transform(&mut self) {
        self.transform.reset();
    }
}
