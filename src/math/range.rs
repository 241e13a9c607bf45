//! Linear remapping of a scalar from one interval to another
//!
//! Every place a brightness or noise value becomes a pixel dimension goes
//! through this mapping, so both rendering backends share identical geometry
//! arithmetic.

use num_traits::Float;

/// Remap `value` from the interval `[in_min, in_max]` to `[out_min, out_max]`.
///
/// The mapping is affine and deliberately unclamped: a `value` outside the
/// input interval produces an output outside the output interval. Callers
/// that need saturation must clamp themselves.
///
/// A degenerate input interval (`in_min == in_max`) divides by zero and
/// yields a non-finite result. This is accepted passthrough behavior for
/// degenerate sources (for example a single-pixel raster), not an error.
pub fn map_range<T: Float>(value: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    ((value - in_min) / (in_max - in_min)).mul_add(out_max - out_min, out_min)
}
