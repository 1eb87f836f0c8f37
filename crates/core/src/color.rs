//! Color parsing and OKLCh conversion.
//!
//! Parsing is delegated to `csscolorparser` (hex, `rgb()`, `hsl()`, named
//! colors) and the color math to the `palette` crate. This module only adapts
//! both to the engine's plain [`OkLch`] triple and maps out-of-gamut results
//! back into sRGB for display.
//!
//! OKLCh is perceptually uniform: equal lightness steps look evenly spaced,
//! which is why ramps are built here rather than in sRGB.

use crate::error::PaletteError;
use once_cell::sync::Lazy;
use palette::convert::FromColorUnclamped;
use palette::{Clamp, Oklab, Oklch, Srgb};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Just-noticeable difference in deltaEOK used by CSS gamut mapping.
const GAMUT_JND: f64 = 0.02;
/// Chroma resolution of the gamut-mapping binary search.
const GAMUT_CHROMA_EPSILON: f64 = 0.0001;
/// Tolerance when deciding whether an sRGB component is in gamut.
const GAMUT_TOLERANCE: f64 = 0.000075;

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#[0-9a-f]{6}$").expect("hex pattern is a valid regex"));

/// OKLCh (cylindrical form of OKLab).
///
/// `l` is lightness in [0, 1], `c` chroma (unbounded, sRGB tops out near
/// 0.37), `h` hue in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// A parsed base color: its display hex, 8-bit sRGB channels and OKLCh
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseColor {
    hex: String,
    rgb: [u8; 3],
    oklch: OkLch,
}

impl BaseColor {
    /// Builds a base color directly from OKLCh coordinates.
    ///
    /// The hex and channels are the gamut-mapped display rendition; the
    /// coordinates are kept as given.
    pub fn from_oklch(oklch: OkLch) -> Self {
        let srgb = gamut_map(oklch);
        Self {
            hex: srgb_to_hex(srgb),
            rgb: quantize(srgb),
            oklch,
        }
    }

    /// Lowercase `#rrggbb` of the parsed color.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// 8-bit sRGB channels of the parsed color.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// OKLCh coordinates of the parsed color.
    pub fn oklch(&self) -> OkLch {
        self.oklch
    }
}

/// Parses any CSS color string and converts it to OKLCh.
///
/// Surrounding whitespace is ignored and alpha is discarded. Returns
/// `PaletteError::InvalidColor` if the string is not a color.
pub fn parse(input: &str) -> Result<BaseColor, PaletteError> {
    let trimmed = input.trim();
    let parsed = csscolorparser::parse(trimmed)
        .map_err(|e| PaletteError::InvalidColor(format!("{trimmed:?}: {e}")))?;

    let srgb = Srgb::new(parsed.r, parsed.g, parsed.b).clamp();
    let lch: Oklch<f64> = Oklch::from_color_unclamped(srgb);
    let oklch = OkLch {
        l: lch.l,
        c: lch.chroma,
        h: if lch.chroma < 1e-10 {
            0.0
        } else {
            lch.hue.into_positive_degrees()
        },
    };

    Ok(BaseColor {
        hex: srgb_to_hex(srgb),
        rgb: quantize(srgb),
        oklch,
    })
}

/// Returns true for a `#rrggbb` string (case insensitive).
pub fn is_valid_hex(value: &str) -> bool {
    HEX_PATTERN.is_match(value)
}

/// Converts an OKLCh color to a displayable `#rrggbb` string.
///
/// Colors outside the sRGB gamut are brought inside by reducing chroma at
/// constant lightness and hue (CSS Color 4 gamut mapping).
pub fn to_display_hex(color: OkLch) -> String {
    srgb_to_hex(gamut_map(color))
}

/// Formats a base color as `rgb(r, g, b)` with 8-bit channels.
pub fn to_rgb_string(color: &BaseColor) -> String {
    let [r, g, b] = color.rgb;
    format!("rgb({r}, {g}, {b})")
}

fn to_palette(color: OkLch) -> Oklch<f64> {
    Oklch::new(color.l, color.c, color.h)
}

fn to_srgb_unclamped(color: OkLch) -> Srgb<f64> {
    Srgb::from_color_unclamped(to_palette(color))
}

fn in_gamut(c: Srgb<f64>) -> bool {
    [c.red, c.green, c.blue]
        .iter()
        .all(|&v| (-GAMUT_TOLERANCE..=1.0 + GAMUT_TOLERANCE).contains(&v))
}

fn delta_e_ok(srgb: Srgb<f64>, reference: OkLch) -> f64 {
    let a: Oklab<f64> = Oklab::from_color_unclamped(srgb);
    let b: Oklab<f64> = Oklab::from_color_unclamped(to_palette(reference));
    ((a.l - b.l).powi(2) + (a.a - b.a).powi(2) + (a.b - b.b).powi(2)).sqrt()
}

/// Binary-searches the largest chroma whose clipped sRGB rendition is
/// within one JND of the unclipped color.
fn gamut_map(origin: OkLch) -> Srgb<f64> {
    if origin.l >= 1.0 {
        return Srgb::new(1.0, 1.0, 1.0);
    }
    if origin.l <= 0.0 {
        return Srgb::new(0.0, 0.0, 0.0);
    }

    let direct = to_srgb_unclamped(origin);
    if in_gamut(direct) {
        return direct;
    }

    let mut clipped = direct.clamp();
    if delta_e_ok(clipped, origin) < GAMUT_JND {
        return clipped;
    }

    let mut min = 0.0;
    let mut max = origin.c;
    let mut min_in_gamut = true;

    while max - min > GAMUT_CHROMA_EPSILON {
        let chroma = (min + max) / 2.0;
        let current = OkLch { c: chroma, ..origin };
        let candidate = to_srgb_unclamped(current);

        if min_in_gamut && in_gamut(candidate) {
            min = chroma;
            continue;
        }

        clipped = candidate.clamp();
        let e = delta_e_ok(clipped, current);
        if e < GAMUT_JND {
            if GAMUT_JND - e < GAMUT_CHROMA_EPSILON {
                break;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    clipped
}

fn quantize(c: Srgb<f64>) -> [u8; 3] {
    [c.red, c.green, c.blue].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn srgb_to_hex(c: Srgb<f64>) -> String {
    let [r, g, b] = quantize(c);
    format!("#{r:02x}{g:02x}{b:02x}")
}
