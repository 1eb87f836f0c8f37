//! Curve series for the parameter-tuning chart.
//!
//! The chart plots the unclamped lightness sigmoid and the chroma multiplier
//! against normalized palette position, so the user can see how steepness
//! and chroma height reshape the ramp.

use crate::chroma::chroma_multiplier;
use crate::curve::sigmoid;
use crate::lightness::{remap_sigmoid, SIGMOID_INPUT_MAX, SIGMOID_INPUT_MIN};
use crate::params::ShapingParams;
use serde::Serialize;

/// Number of points the chart samples over [0, 1].
pub const CHART_RESOLUTION: usize = 101;

/// Two curves sampled at the same positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSeries {
    /// Normalized positions, evenly spaced from 0 to 1.
    pub positions: Vec<f64>,
    /// Lightness curve value at each position.
    pub lightness: Vec<f64>,
    /// Chroma multiplier at each position.
    pub chroma: Vec<f64>,
}

impl CurveSeries {
    /// Samples both curves at [`CHART_RESOLUTION`] points.
    pub fn sample(params: &ShapingParams) -> Self {
        Self::sample_with_resolution(params, CHART_RESOLUTION)
    }

    /// Samples both curves at `points` evenly spaced positions (at least two).
    pub fn sample_with_resolution(params: &ShapingParams, points: usize) -> Self {
        let points = points.max(2);
        let last = (points - 1) as f64;

        let positions: Vec<f64> = (0..points).map(|i| i as f64 / last).collect();
        let lightness = positions
            .iter()
            .map(|&t| {
                let x = SIGMOID_INPUT_MIN + (SIGMOID_INPUT_MAX - SIGMOID_INPUT_MIN) * t;
                remap_sigmoid(sigmoid(x, params.steepness))
            })
            .collect();
        let chroma = positions
            .iter()
            .map(|&t| chroma_multiplier(t, params.chroma_height))
            .collect();

        Self {
            positions,
            lightness,
            chroma,
        }
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no points were sampled. (Always false for sampled series.)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
