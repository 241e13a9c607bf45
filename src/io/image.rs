//! Raster and vector file I/O
//!
//! Loads source images into [`Raster`]s and writes the two render products:
//! the mosaic bitmap as PNG and the serialized vector document as SVG.

use std::path::Path;

use crate::io::error::{MosaicError, Result};
use crate::raster::source::Raster;

/// Load a source image file as an RGBA raster
///
/// Any format the `image` crate recognizes is accepted; pixels are converted
/// to RGBA8.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or if the decoded
/// image has a zero dimension.
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Raster::from_rgba(img.to_rgba8())
}

/// Save a raster as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn export_raster_as_png<P: AsRef<Path>>(raster: &Raster, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    create_parent_dirs(output_path)?;

    raster
        .as_image()
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Write a serialized SVG document, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn export_svg_document<P: AsRef<Path>>(svg: &str, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    create_parent_dirs(output_path)?;

    std::fs::write(output_path, svg).map_err(|e| MosaicError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write SVG document",
        source: e,
    })
}

fn create_parent_dirs(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}
