//! Coherent-noise field generation as a synthetic mosaic source
//!
//! Evaluates a seeded 2D Perlin primitive over the full pixel grid and packs
//! the scaled value into an opaque grayscale raster. The field is regenerated
//! wholesale on every parameter change; identical parameters always
//! reproduce an identical field.

use crate::io::configuration::{DEFAULT_NOISE_CONTRAST, DEFAULT_NOISE_SCALE};
use crate::io::error::{Result, invalid_parameter};
use crate::raster::source::Raster;
use image::Rgba;
use ndarray::Array2;
use noise::{NoiseFn, Perlin};

/// Parameters of the procedural noise source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Seed for the coherent-noise primitive
    pub seed: u32,
    /// Spatial frequency divisor; larger values produce smoother fields
    pub spatial_scale: f64,
    /// Post-remap multiplier applied to every channel level (>= 1)
    pub contrast: f64,
    /// Horizontal domain offset in noise-space units
    pub offset_x: f64,
    /// Vertical domain offset in noise-space units
    pub offset_y: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 0,
            spatial_scale: DEFAULT_NOISE_SCALE,
            contrast: DEFAULT_NOISE_CONTRAST,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl NoiseParams {
    /// Check the parameter invariants
    ///
    /// # Errors
    ///
    /// Returns an error if `spatial_scale` is not a positive finite number or
    /// `contrast` is below 1 or non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.spatial_scale.is_finite() || self.spatial_scale <= 0.0 {
            return Err(invalid_parameter(
                "spatial_scale",
                &self.spatial_scale,
                &"spatial scale must be a positive finite number",
            ));
        }
        if !self.contrast.is_finite() || self.contrast < 1.0 {
            return Err(invalid_parameter(
                "contrast",
                &self.contrast,
                &"contrast must be a finite number >= 1",
            ));
        }
        Ok(())
    }
}

/// Generate a full-resolution noise field raster
///
/// Every pixel evaluates the seeded primitive at
/// `(x / spatial_scale + offset_x, y / spatial_scale + offset_y)`, remaps the
/// `[-1, 1]` result to `[0, 256)` via `(n + 1) * 128`, scales by `contrast`,
/// and stores the identical level in R, G, B with alpha fixed at 255. Scaled
/// values beyond the channel range saturate at 255.
///
/// # Errors
///
/// Returns an error if either dimension is zero or the parameters fail
/// [`NoiseParams::validate`].
pub fn generate(width: u32, height: u32, params: &NoiseParams) -> Result<Raster> {
    params.validate()?;
    let perlin = Perlin::new(params.seed);

    let field = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        perlin.get([
            f64::from(col as u32) / params.spatial_scale + params.offset_x,
            f64::from(row as u32) / params.spatial_scale + params.offset_y,
        ])
    });

    Raster::from_fn(width, height, |x, y| {
        let n = field.get((y as usize, x as usize)).copied().unwrap_or(0.0);
        let level = ((n + 1.0) * 128.0 * params.contrast).clamp(0.0, 255.0) as u8;
        Rgba([level, level, level, 255])
    })
}
