//! Palette assembly: a lightness ramp around one base color.
//!
//! The base color's hue and chroma are held fixed while lightness follows the
//! sigmoid sampler and chroma follows the mountain profile. The original
//! color is inserted into the ramp and everything is sorted dark to light.

use crate::chroma::{chroma_multiplier, sample_position};
use crate::color::{parse, to_display_hex, BaseColor, OkLch};
use crate::error::PaletteError;
use crate::lightness::generate_lightness_values;
use crate::params::ShapingParams;
use serde::Serialize;

/// One swatch of a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSample {
    hex: String,
    lightness: f64,
    chroma: f64,
    #[serde(rename = "isOriginal")]
    is_original: bool,
}

impl ColorSample {
    /// Display color as lowercase `#rrggbb`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// OKLCh lightness in [0, 1].
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// OKLCh chroma before gamut mapping.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// True for the base color the palette was built from.
    pub fn is_original(&self) -> bool {
        self.is_original
    }

    /// Lightness as a rounded percentage, the label used by swatches and exports.
    pub fn lightness_percent(&self) -> i64 {
        (self.lightness * 100.0).round() as i64
    }

    /// Chroma as a rounded percentage.
    pub fn chroma_percent(&self) -> i64 {
        (self.chroma * 100.0).round() as i64
    }
}

/// An ordered set of swatches, sorted ascending by lightness.
///
/// Exactly one sample is the original color. Palettes are never patched:
/// every regeneration builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    samples: Vec<ColorSample>,
}

impl Palette {
    /// Parses `color` and assembles its palette.
    ///
    /// Returns `PaletteError::InvalidColor` without assembling anything if
    /// the color does not parse.
    pub fn generate(color: &str, params: &ShapingParams) -> Result<Self, PaletteError> {
        let base = parse(color)?;
        Ok(assemble_palette(&base, params))
    }

    /// Swatches in display order.
    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    /// Iterates over swatches in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorSample> {
        self.samples.iter()
    }

    /// Returns the number of swatches.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the palette has no swatches. (Always false for assembled palettes.)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The swatch holding the base color.
    pub fn original(&self) -> Option<&ColorSample> {
        self.samples.iter().find(|s| s.is_original)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorSample;
    type IntoIter = std::slice::Iter<'a, ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Builds the palette for `base` under `params`.
///
/// The original occupies one of the `count` slots, so `count - 1` shades are
/// sampled and positioned over that many slots. Because the sampler never
/// returns fewer than three values, a count of 3 yields four swatches and the
/// last shade sits past position 1. Ties in lightness keep generated shades
/// ahead of the original; duplicates are kept.
pub fn assemble_palette(base: &BaseColor, params: &ShapingParams) -> Palette {
    let params = params.clamped();
    let origin = base.oklch();

    let additional = params.count.saturating_sub(1).max(1);
    let lightness = generate_lightness_values(additional, params.steepness);

    let mut samples: Vec<ColorSample> = lightness
        .iter()
        .enumerate()
        .map(|(i, &l)| {
            let position = sample_position(i, additional);
            let chroma = origin.c * chroma_multiplier(position, params.chroma_height);
            let hex = to_display_hex(OkLch {
                l,
                c: chroma,
                h: origin.h,
            });
            log::trace!("shade {i}: position {position:.3} L {l:.4} C {chroma:.4} -> {hex}");
            ColorSample {
                hex,
                lightness: l,
                chroma,
                is_original: false,
            }
        })
        .collect();

    samples.push(ColorSample {
        hex: base.hex().to_string(),
        lightness: origin.l,
        chroma: origin.c,
        is_original: true,
    });

    // Stable: equal lightness keeps generation order.
    samples.sort_by(|a, b| a.lightness.total_cmp(&b.lightness));

    log::debug!(
        "assembled {} swatches for {} (steepness {}, chroma height {})",
        samples.len(),
        base.hex(),
        params.steepness,
        params.chroma_height
    );

    Palette { samples }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::mountain_curve;

    fn params(count: usize, steepness: f64, chroma_height: f64) -> ShapingParams {
        ShapingParams {
            count,
            steepness,
            chroma_height,
        }
    }

    fn generated(palette: &Palette) -> Vec<&ColorSample> {
        palette.iter().filter(|s| !s.is_original()).collect()
    }

    #[test]
    fn reference_color_produces_twelve_sorted_swatches() {
        let palette = Palette::generate("#f64466", &params(12, 0.5, 1.0)).unwrap();
        assert_eq!(palette.len(), 12);

        let originals: Vec<_> = palette.iter().filter(|s| s.is_original()).collect();
        assert_eq!(originals.len(), 1);
        assert_eq!(originals[0].hex(), "#f64466");

        for pair in palette.samples().windows(2) {
            assert!(pair[0].lightness() <= pair[1].lightness());
        }

        let first = palette.samples()[0].lightness();
        let last = palette.samples()[11].lightness();
        assert!((0.05..0.1).contains(&first), "darkest: {first}");
        assert!((0.9..=0.98).contains(&last), "lightest: {last}");
    }

    #[test]
    fn reference_color_chroma_tapers_toward_both_ends() {
        let palette = Palette::generate("#f64466", &params(12, 0.5, 1.0)).unwrap();
        let base_chroma = palette.original().unwrap().chroma();
        let shades = generated(&palette);
        assert_eq!(shades.len(), 11);

        let middle = shades[5].chroma();
        assert!((middle - base_chroma).abs() < 1e-12, "mid-ramp keeps full chroma");
        assert!(shades[0].chroma() < middle);
        assert!(shades[10].chroma() < middle);

        let edge = base_chroma * mountain_curve(0.0, 0.5, 1.0);
        assert!((shades[0].chroma() - edge).abs() < 1e-12);
    }

    #[test]
    fn flat_chroma_keeps_base_chroma_everywhere() {
        let palette = Palette::generate("#3b82f6", &params(8, 1.0, 0.0)).unwrap();
        let base_chroma = palette.original().unwrap().chroma();
        for shade in generated(&palette) {
            assert_eq!(shade.chroma(), base_chroma);
        }
    }

    #[test]
    fn assembling_twice_is_identical() {
        let base = parse("#10b981").unwrap();
        let p = params(10, 0.8, 0.6);
        assert_eq!(assemble_palette(&base, &p), assemble_palette(&base, &p));
    }

    #[test]
    fn count_three_yields_four_swatches() {
        let palette = Palette::generate("#ff0000", &params(3, 1.0, 1.0)).unwrap();
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn count_three_positions_run_past_the_peak() {
        // Two requested shades, three sampled: positions 0, 1, 2.
        let palette = Palette::generate("#f64466", &params(3, 0.5, 1.0)).unwrap();
        let base_chroma = palette.original().unwrap().chroma();
        let shades = generated(&palette);
        assert_eq!(shades.len(), 3);

        for (shade, position) in shades.iter().zip([0.0, 1.0, 2.0]) {
            let expected = base_chroma * mountain_curve(position, 0.5, 1.0);
            assert!(
                (shade.chroma() - expected).abs() < 1e-12,
                "position {position}: {} vs {expected}",
                shade.chroma()
            );
        }
        assert!(shades[2].chroma() < shades[1].chroma());
        assert!((shades[0].chroma() - shades[1].chroma()).abs() < 1e-12);
    }

    #[test]
    fn count_below_range_is_clamped() {
        let palette = Palette::generate("#ff0000", &params(0, 1.0, 1.0)).unwrap();
        assert_eq!(palette.len(), 4);
        let palette = Palette::generate("#ff0000", &params(40, 1.0, 1.0)).unwrap();
        assert_eq!(palette.len(), 15);
    }

    #[test]
    fn lightness_tie_keeps_generated_shade_first_and_both_swatches() {
        // Middle of a three-value ramp; the original lands on exactly the same lightness.
        let tie = generate_lightness_values(3, 1.0)[1];
        let base = BaseColor::from_oklch(OkLch {
            l: tie,
            c: 0.1,
            h: 30.0,
        });
        let palette = assemble_palette(&base, &params(3, 1.0, 1.0));
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.samples()[1].lightness(), tie);
        assert_eq!(palette.samples()[2].lightness(), tie);
        assert!(!palette.samples()[1].is_original());
        assert!(palette.samples()[2].is_original());
    }

    #[test]
    fn invalid_color_is_an_error() {
        let result = Palette::generate("not a color", &ShapingParams::default());
        assert!(matches!(result, Err(PaletteError::InvalidColor(_))));
    }

    #[test]
    fn serializes_as_array_of_samples() {
        let palette = Palette::generate("#ff0000", &params(4, 1.0, 1.0)).unwrap();
        let json = serde_json::to_value(&palette).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 4);
        assert!(arr[0].get("isOriginal").is_some());
        assert!(arr[0].get("hex").is_some());
    }

    #[test]
    fn lightness_percent_rounds() {
        let palette = Palette::generate("#ff0000", &params(12, 0.5, 1.0)).unwrap();
        for s in &palette {
            assert_eq!(s.lightness_percent(), (s.lightness() * 100.0).round() as i64);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn palette_is_sorted_with_one_original(
                r in 0_u8..=255,
                g in 0_u8..=255,
                b in 0_u8..=255,
                count in 3_usize..=15,
                steepness in 0.05_f64..3.0,
                chroma_height in 0.0_f64..=1.0,
            ) {
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                let palette = Palette::generate(&hex, &params(count, steepness, chroma_height)).unwrap();

                prop_assert_eq!(palette.len(), count.max(4));
                prop_assert_eq!(palette.iter().filter(|s| s.is_original()).count(), 1);
                for pair in palette.samples().windows(2) {
                    prop_assert!(pair[0].lightness() <= pair[1].lightness());
                }
                for shade in palette.iter().filter(|s| !s.is_original()) {
                    prop_assert!((0.05..=0.98).contains(&shade.lightness()));
                    prop_assert!(shade.chroma() >= 0.0);
                }
            }
        }
    }
}
