//! The mosaic-generation pass
//!
//! Walks the grid once, samples brightness per cell, maps it to a bar
//! length, and emits one rectangle per cell. All drawing goes through the
//! [`DrawSurface`] capability; the dual-backend variant pairs both sinks
//! behind [`SurfacePair`] so they receive identical commands in identical
//! order.

use crate::io::error::Result;
use crate::math::map_range;
use crate::raster::sampler::{brightness, grid_to_pixel};
use crate::raster::source::{Raster, TRANSPARENT};
use crate::render::color::Rgb;
use crate::render::params::{Direction, GridSpec, StyleParams};
use crate::render::raster_surface::RasterSurface;
use crate::render::surface::{DrawSurface, SurfacePair};
use crate::render::vector_surface::VectorSurface;

/// Run one mosaic pass into a single sink
///
/// The sink is cleared, optionally backgrounded, translated by half a tile
/// so cell (0, 0) lands centered on the top-left tile, and then receives
/// exactly `tiles_x * tiles_y` rectangles in row-major (x outer, y inner)
/// order. Bars are not clipped to their cells; a bar longer than the tile
/// overlaps its neighbors.
pub fn render_into(
    source: &Raster,
    grid: &GridSpec,
    style: &StyleParams,
    sink: &mut impl DrawSurface,
) {
    let (width, height) = (f64::from(source.width()), f64::from(source.height()));
    let (tile_w, tile_h) = grid.tile_size(source.width(), source.height());

    sink.reset_transform();
    sink.clear_rect(0.0, 0.0, width, height);

    if !style.transparent_background {
        sink.set_fill(style.background);
        sink.fill_rect(0.0, 0.0, width, height);
    }

    // Compensates for the half-tile draw anchor used below
    sink.translate(tile_w / 2.0, tile_h / 2.0);

    for x in 0..grid.tiles_x() {
        for y in 0..grid.tiles_y() {
            let img_x = grid_to_pixel(x, grid.tiles_x(), source.width());
            let img_y = grid_to_pixel(y, grid.tiles_y(), source.height());
            let pixel = source.pixel(img_x, img_y).copied().unwrap_or(TRANSPARENT);
            let b_value = brightness(&pixel);

            let radius = if style.invert {
                map_range(b_value, 0.0, 255.0, style.min_height(), style.max_height()) / 2.0
            } else {
                map_range(b_value, 0.0, 255.0, style.max_height(), style.min_height()) / 2.0
            };

            let fill = if style.use_source_color {
                Rgb::from_rgba(&pixel)
            } else {
                style.tile_color
            };
            sink.set_fill(fill);

            let (cell_x, cell_y) = (f64::from(x) * tile_w, f64::from(y) * tile_h);
            match style.direction {
                Direction::Vertical => {
                    sink.fill_rect(cell_x - radius / 2.0, cell_y - tile_h / 2.0, radius, tile_h);
                }
                Direction::Horizontal => {
                    sink.fill_rect(cell_x - tile_w / 2.0, cell_y - radius / 2.0, tile_w, radius);
                }
            }
        }
    }
}

/// Run one mosaic pass into both sinks in lock step
///
/// Executes synchronously; neither sink should be observed until the call
/// returns. Every command reaches the raster sink and then the vector sink
/// before the next command is issued, so the two can never diverge mid-pass.
pub fn render(
    source: &Raster,
    grid: &GridSpec,
    style: &StyleParams,
    raster: &mut RasterSurface,
    vector: &mut VectorSurface,
) {
    let mut pair = SurfacePair::new(raster, vector);
    render_into(source, grid, style, &mut pair);
}

/// Allocate fresh sinks at the source's dimensions and run one pass
///
/// # Errors
///
/// Returns an error if sink allocation fails (zero-sized source), which a
/// validated [`Raster`] rules out.
pub fn render_pass(
    source: &Raster,
    grid: &GridSpec,
    style: &StyleParams,
) -> Result<(RasterSurface, VectorSurface)> {
    let mut raster = RasterSurface::new(source.width(), source.height())?;
    let mut vector = VectorSurface::new(source.width(), source.height())?;
    render(source, grid, style, &mut raster, &mut vector);
    Ok((raster, vector))
}
