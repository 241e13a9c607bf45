//! Grid and style parameters for a mosaic pass
//!
//! The control surface hands these in per render call; the renderer never
//! holds ambient mutable state, so every pass is reproducible from its
//! arguments alone.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_TILE_COLOR,
    MAX_TILES_PER_AXIS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::render::color::Rgb;

/// Number of grid columns and rows partitioning the source raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    tiles_x: u32,
    tiles_y: u32,
}

impl GridSpec {
    /// Create a grid specification
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is zero or exceeds
    /// [`MAX_TILES_PER_AXIS`].
    pub fn new(tiles_x: u32, tiles_y: u32) -> Result<Self> {
        for (name, tiles) in [("tiles_x", tiles_x), ("tiles_y", tiles_y)] {
            if tiles == 0 || tiles > MAX_TILES_PER_AXIS {
                return Err(invalid_parameter(
                    name,
                    &tiles,
                    &format!("tile count must be between 1 and {MAX_TILES_PER_AXIS}"),
                ));
            }
        }
        Ok(Self { tiles_x, tiles_y })
    }

    /// Number of columns
    pub const fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    /// Number of rows
    pub const fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Real-valued cell dimensions for a source of the given extent
    ///
    /// Deliberately unrounded; cells may be fractional pixels wide.
    pub fn tile_size(&self, width: u32, height: u32) -> (f64, f64) {
        (
            f64::from(width) / f64::from(self.tiles_x),
            f64::from(height) / f64::from(self.tiles_y),
        )
    }
}

/// Axis along which bar length varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Full cell width, brightness controls bar height
    #[default]
    Horizontal,
    /// Full cell height, brightness controls bar width
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Error raised when a direction string is unrecognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a direction (expected 'horizontal' or 'vertical')",
            self.input
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseDirectionError { input: s.into() }),
        }
    }
}

/// Style decisions for a mosaic pass
///
/// Bar heights keep the invariant `min_height <= max_height`: lowering the
/// maximum clamps the minimum down with it rather than erroring, mirroring
/// how a live control surface resolves the conflict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    min_height: f64,
    max_height: f64,
    /// Axis along which bar length varies
    pub direction: Direction,
    /// Fixed fill color when source coloring is off
    pub tile_color: Rgb,
    /// Fill each bar with its sampled source pixel color
    pub use_source_color: bool,
    /// Background fill color
    pub background: Rgb,
    /// Skip the background fill entirely, leaving it transparent
    pub transparent_background: bool,
    /// Swap which brightness extreme produces the longer bar
    pub invert: bool,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            direction: Direction::default(),
            tile_color: DEFAULT_TILE_COLOR,
            use_source_color: false,
            background: DEFAULT_BACKGROUND,
            transparent_background: false,
            invert: false,
        }
    }
}

impl StyleParams {
    /// Create style parameters with the given bar-height range
    ///
    /// A `min_height` above `max_height` is clamped down to it.
    ///
    /// # Errors
    ///
    /// Returns an error if either height is negative or non-finite.
    pub fn with_heights(min_height: f64, max_height: f64) -> Result<Self> {
        for (name, value) in [("min_height", min_height), ("max_height", max_height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &"bar heights must be non-negative finite numbers",
                ));
            }
        }
        Ok(Self {
            min_height: min_height.min(max_height),
            max_height,
            ..Self::default()
        })
    }

    /// Shortest bar length, in source pixels
    pub const fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Longest bar length, in source pixels
    pub const fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Set the minimum bar height, saturating at the current maximum
    pub fn set_min_height(&mut self, value: f64) {
        self.min_height = value.min(self.max_height);
    }

    /// Set the maximum bar height, clamping the minimum down when it would
    /// otherwise exceed the new maximum
    pub fn set_max_height(&mut self, value: f64) {
        self.max_height = value;
        self.min_height = self.min_height.min(value);
    }
}
