//! Source rasters and the samplers that read them
//!
//! A [`Raster`] is the pixel grid every mosaic pass reads from, whether it
//! was loaded from an image file or generated as a coherent-noise field.

/// Coherent-noise field generation
pub mod noise_field;
/// Brightness sampling and grid-to-pixel coordinate mapping
pub mod sampler;
/// Owned RGBA pixel grid
pub mod source;

pub use noise_field::NoiseParams;
pub use source::Raster;
