//! Input/output operations, CLI orchestration, and error handling

/// Command-line interface and per-source processing pipeline
pub mod cli;
/// Defaults and limits for grid, style, and noise parameters
pub mod configuration;
/// Error types for mosaic operations
pub mod error;
/// Raster and vector file I/O
pub mod image;
/// Batch progress display
pub mod progress;
