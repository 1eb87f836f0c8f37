//! Chroma attenuation across the palette.
//!
//! The multiplier linearly blends a flat profile (full chroma everywhere)
//! with a [`mountain_curve`] that peaks mid-palette and fades toward both
//! lightness extremes.

use crate::curve::mountain_curve;

/// Position of the chroma peak along the normalized palette axis.
pub const CHROMA_PEAK: f64 = 0.5;

/// Returns the chroma multiplier for a normalized `position` in `[0, 1]`.
///
/// A `chroma_height` of exactly zero is flat (1.0 everywhere); a height of
/// one follows the raw mountain curve. Heights outside `[0, 1]` are used
/// as given, which can push the multiplier outside `[0, 1]`.
pub fn chroma_multiplier(position: f64, chroma_height: f64) -> f64 {
    if chroma_height == 0.0 {
        return 1.0;
    }
    let mountain = mountain_curve(position, CHROMA_PEAK, 1.0);
    (1.0 - chroma_height) * 1.0 + chroma_height * mountain
}

/// Position of sample `index` when `len` shades were requested: `index / (len - 1)`.
///
/// A single sample has no span to divide, so it sits at position 0. Indices
/// beyond `len - 1` land past 1.
pub fn sample_position(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    index as f64 / (len - 1) as f64
}
