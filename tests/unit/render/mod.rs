/// Mosaic pass tests
pub mod mosaic;
/// Render scheduling tests
pub mod scheduler;
