//! The drawing-surface capability shared by both rendering backends
//!
//! The renderer only ever talks to [`DrawSurface`]; pairing two sinks behind
//! [`SurfacePair`] means a single drawing loop feeds both, so their contents
//! cannot diverge mid-pass.

use crate::render::color::Rgb;

/// Translation-only affine state
///
/// The render pass applies exactly one centering translate per pass, so the
/// transform stack has depth 1: translations accumulate until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translation {
    /// Horizontal offset in device units
    pub dx: f64,
    /// Vertical offset in device units
    pub dy: f64,
}

impl Translation {
    /// Map user-space coordinates to device coordinates
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.dx, y + self.dy)
    }

    /// Accumulate a further translation
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.dx += dx;
        self.dy += dy;
    }

    /// Return to the identity transform
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Capability set required of any mosaic sink
pub trait DrawSurface {
    /// Set the fill color for subsequent `fill_rect` calls
    fn set_fill(&mut self, color: Rgb);

    /// Fill an axis-aligned rectangle, honoring the active transform
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Clear a rectangular region back to empty, honoring the active transform
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Accumulate a translation onto the transform state
    fn translate(&mut self, dx: f64, dy: f64);

    /// Reset the transform state to the identity
    fn reset_transform(&mut self);
}

/// Fan-out adapter forwarding every drawing command to two sinks in order
///
/// Each command reaches both sinks before the caller can issue the next one,
/// which is the structural guarantee behind dual-backend consistency: there
/// is one iteration loop, never one per sink.
#[derive(Debug)]
pub struct SurfacePair<'a, A: DrawSurface, B: DrawSurface> {
    first: &'a mut A,
    second: &'a mut B,
}

impl<'a, A: DrawSurface, B: DrawSurface> SurfacePair<'a, A, B> {
    /// Pair two sinks for lock-step drawing
    pub fn new(first: &'a mut A, second: &'a mut B) -> Self {
        Self { first, second }
    }
}

impl<A: DrawSurface, B: DrawSurface> DrawSurface for SurfacePair<'_, A, B> {
    fn set_fill(&mut self, color: Rgb) {
        self.first.set_fill(color);
        self.second.set_fill(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.first.fill_rect(x, y, width, height);
        self.second.fill_rect(x, y, width, height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.first.clear_rect(x, y, width, height);
        self.second.clear_rect(x, y, width, height);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.first.translate(dx, dy);
        self.second.translate(dx, dy);
    }

    fn reset_transform(&mut self) {
        self.first.reset_transform();
        self.second.reset_transform();
    }
}
