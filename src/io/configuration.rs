//! Defaults and limits for grid, style, noise, and display parameters

use std::time::Duration;

use crate::render::color::Rgb;

// Grid settings
/// Default number of grid columns
pub const DEFAULT_TILES_X: u32 = 10;
/// Default number of grid rows
pub const DEFAULT_TILES_Y: u32 = 10;

// Safety limit matching the control surface's slider range
/// Maximum tiles along either axis
pub const MAX_TILES_PER_AXIS: u32 = 400;

// Bar height range in source pixels
/// Default minimum bar length
pub const DEFAULT_MIN_HEIGHT: f64 = 0.0;
/// Default maximum bar length
pub const DEFAULT_MAX_HEIGHT: f64 = 100.0;

// Style settings
/// Default bar fill color
pub const DEFAULT_TILE_COLOR: Rgb = Rgb::new(0x28, 0x28, 0x28);
/// Default background fill color
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);

// Noise source settings
/// Default spatial frequency divisor for the noise field
pub const DEFAULT_NOISE_SCALE: f64 = 100.0;
/// Default contrast multiplier for the noise field
pub const DEFAULT_NOISE_CONTRAST: f64 = 1.0;

// Unspecified noise-field extents are drawn from this range
/// Smallest random source extent (inclusive)
pub const RANDOM_SOURCE_MIN: u32 = 1000;
/// Largest random source extent (exclusive)
pub const RANDOM_SOURCE_MAX: u32 = 2000;

// Display settings
/// Default viewport width for letterboxed previews
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
/// Default viewport height for letterboxed previews
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;

/// Quiescence window before a resize-triggered re-render fires
pub const RESIZE_QUIESCENCE: Duration = Duration::from_millis(250);

// Output settings
/// Suffix added to mosaic output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix added to letterboxed preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Output stem used for generated noise sources
pub const NOISE_OUTPUT_STEM: &str = "noise";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of pipeline stages reported per source (load, render, export)
pub const PIPELINE_STAGES: u64 = 3;
