//! The mosaic renderer and its drawing-surface backends
//!
//! One drawing loop feeds two sinks through a shared capability trait so the
//! pixel and vector outputs can never diverge mid-pass.

/// RGB color values for fills and backgrounds
pub mod color;
/// The mosaic-generation pass
pub mod mosaic;
/// Grid and style parameters
pub mod params;
/// Pixel-buffer drawing surface
pub mod raster_surface;
/// Coalesced re-render scheduling
pub mod scheduler;
/// The drawing-surface capability and fan-out pairing
pub mod surface;
/// Retained vector drawing surface with SVG serialization
pub mod vector_surface;

pub use color::Rgb;
pub use mosaic::{render, render_into, render_pass};
pub use params::{Direction, GridSpec, StyleParams};
pub use raster_surface::RasterSurface;
pub use surface::{DrawSurface, SurfacePair};
pub use vector_surface::{VectorRect, VectorSurface};
