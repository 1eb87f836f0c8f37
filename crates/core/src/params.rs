//! Shaping parameters and the JSON helpers used to read them.
//!
//! Parameters arrive from the UI as a loose JSON object. Each helper takes a
//! JSON value, a key name, and a default; missing or mistyped keys fall back
//! to the default, so reading parameters never fails. Range violations are
//! clamped rather than rejected.

use crate::lightness::{clamp_count, MAX_COUNT, MIN_COUNT};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default number of swatches, original color included.
pub const DEFAULT_COUNT: usize = 12;
/// Default sigmoid steepness for the lightness ramp.
pub const DEFAULT_STEEPNESS: f64 = 0.5;
/// Default blend toward the mountain chroma profile.
pub const DEFAULT_CHROMA_HEIGHT: f64 = 1.0;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is a non-negative integer that fits in `u64`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
        .unwrap_or(default)
}

/// User-tunable controls governing one palette generation.
///
/// Use [`Default`] for the initial UI state (12 swatches, steepness 0.5,
/// full mountain chroma).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapingParams {
    /// Requested swatch count including the original, clamped to [3, 15].
    pub count: usize,
    /// Sigmoid steepness of the lightness distribution.
    pub steepness: f64,
    /// Blend between flat (0) and mountain (1) chroma. Not clamped.
    pub chroma_height: f64,
}

impl Default for ShapingParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            steepness: DEFAULT_STEEPNESS,
            chroma_height: DEFAULT_CHROMA_HEIGHT,
        }
    }
}

impl ShapingParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// Accepts both `chromaHeight` and `chroma_height`.
    pub fn from_json(params: &Value) -> Self {
        let chroma_height = param_f64(
            params,
            "chromaHeight",
            param_f64(params, "chroma_height", DEFAULT_CHROMA_HEIGHT),
        );
        Self {
            count: param_usize(params, "count", DEFAULT_COUNT),
            steepness: param_f64(params, "steepness", DEFAULT_STEEPNESS),
            chroma_height,
        }
        .clamped()
    }

    /// Returns a copy with `count` clamped to [3, 15].
    ///
    /// `steepness` and `chroma_height` pass through untouched.
    pub fn clamped(self) -> Self {
        let count = clamp_count(self.count);
        if count != self.count {
            log::warn!("swatch count {} clamped to {count}", self.count);
        }
        Self { count, ..self }
    }

    /// Current parameter values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "count": self.count,
            "steepness": self.steepness,
            "chromaHeight": self.chroma_height,
        })
    }

    /// Schema describing every parameter: type, range, default, description.
    pub fn param_schema() -> Value {
        json!({
            "count": {
                "type": "integer",
                "default": DEFAULT_COUNT,
                "min": MIN_COUNT,
                "max": MAX_COUNT,
                "description": "Number of swatches including the original color"
            },
            "steepness": {
                "type": "number",
                "default": DEFAULT_STEEPNESS,
                "min": 0.1,
                "max": 2.0,
                "description": "Sigmoid steepness: higher values push shades toward the extremes"
            },
            "chromaHeight": {
                "type": "number",
                "default": DEFAULT_CHROMA_HEIGHT,
                "min": 0.0,
                "max": 1.0,
                "description": "Blend from flat chroma (0) to a mid-palette chroma peak (1)"
            }
        })
    }
}
