//! Sigmoid-distributed lightness sampling.
//!
//! Evenly spaced inputs over `[-6, 6]` are pushed through [`sigmoid`] and
//! remapped into `[0.05, 0.95]`, so steeper curves bunch samples near the
//! extremes and flatter curves space them evenly.

use crate::curve::sigmoid;

/// Smallest number of lightness samples ever produced.
pub const MIN_COUNT: usize = 3;
/// Largest number of lightness samples ever produced.
pub const MAX_COUNT: usize = 15;

/// Lower bound of the sigmoid input domain.
pub const SIGMOID_INPUT_MIN: f64 = -6.0;
/// Upper bound of the sigmoid input domain.
pub const SIGMOID_INPUT_MAX: f64 = 6.0;

/// Lightness assigned to a sigmoid output of 0.
pub const LIGHTNESS_FLOOR: f64 = 0.05;
/// Width of the lightness range the sigmoid output is scaled into.
pub const LIGHTNESS_SPAN: f64 = 0.9;
/// Hard upper bound on any sampled lightness.
pub const LIGHTNESS_CEILING: f64 = 0.98;

/// Clamps a requested swatch count into `[MIN_COUNT, MAX_COUNT]`.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT)
}

/// Maps a raw sigmoid output in `(0, 1)` into the lightness range.
///
/// The chart uses this directly; sampled values additionally get the
/// [`LIGHTNESS_CEILING`] clamp.
pub fn remap_sigmoid(value: f64) -> f64 {
    LIGHTNESS_FLOOR + value * LIGHTNESS_SPAN
}

/// Generates `count` lightness values in `[0.05, 0.98]`.
///
/// `count` is clamped to `[3, 15]` first, so asking for one value still
/// yields three. The sequence is strictly increasing for `steepness > 0`.
pub fn generate_lightness_values(count: usize, steepness: f64) -> Vec<f64> {
    let count = clamp_count(count);
    let step = (SIGMOID_INPUT_MAX - SIGMOID_INPUT_MIN) / (count - 1) as f64;

    (0..count)
        .map(|i| {
            let x = SIGMOID_INPUT_MIN + step * i as f64;
            remap_sigmoid(sigmoid(x, steepness)).min(LIGHTNESS_CEILING)
        })
        .collect()
}
