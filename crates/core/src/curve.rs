//! Shaping curves shared by the palette engine and the parameter chart.
//!
//! Both functions are pure scalar math with no error conditions.

/// Width of the mountain curve (Gaussian standard deviation).
pub const MOUNTAIN_SIGMA: f64 = 0.3;

/// Logistic function `1 / (1 + e^(-steepness * x))`.
///
/// Monotonically increasing in `x` for `steepness > 0`. A steepness of zero
/// flattens the curve to a constant 0.5.
pub fn sigmoid(x: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (-steepness * x).exp())
}

/// Unnormalized Gaussian bump centered on `peak`, reaching `height` there.
///
/// Returns values in `[0, height]` for non-negative `height`.
pub fn mountain_curve(x: f64, peak: f64, height: f64) -> f64 {
    let d = x - peak;
    height * (-(d * d) / (2.0 * MOUNTAIN_SIGMA * MOUNTAIN_SIGMA)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn sigmoid_at_zero_is_one_half() {
        for s in [0.0, 0.5, 1.0, 3.0, -2.0] {
            assert!(approx_eq(sigmoid(0.0, s), 0.5), "steepness {s}");
        }
    }

    #[test]
    fn sigmoid_with_zero_steepness_is_constant() {
        for x in [-6.0, -1.0, 0.0, 2.5, 100.0] {
            assert!(approx_eq(sigmoid(x, 0.0), 0.5), "x {x}");
        }
    }

    #[test]
    fn sigmoid_saturates_at_extremes() {
        assert!(sigmoid(50.0, 1.0) > 0.999_999);
        assert!(sigmoid(-50.0, 1.0) < 1e-6);
    }

    #[test]
    fn sigmoid_known_value() {
        // 1 / (1 + e^-1)
        assert!((sigmoid(1.0, 1.0) - 0.731_058_578_630_004_9).abs() < 1e-12);
    }

    #[test]
    fn mountain_curve_peaks_at_height() {
        assert!(approx_eq(mountain_curve(0.5, 0.5, 1.0), 1.0));
        assert!(approx_eq(mountain_curve(0.2, 0.2, 0.7), 0.7));
    }

    #[test]
    fn mountain_curve_at_one_sigma() {
        let expected = (-0.5_f64).exp();
        assert!(approx_eq(mountain_curve(0.8, 0.5, 1.0), expected));
    }

    #[test]
    fn mountain_curve_zero_height_is_flat_zero() {
        assert_eq!(mountain_curve(0.1, 0.5, 0.0), 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sigmoid_is_strictly_inside_unit_interval(
                x in -10.0_f64..10.0,
                s in 0.0_f64..2.0,
            ) {
                let v = sigmoid(x, s);
                prop_assert!(v > 0.0 && v < 1.0, "sigmoid({x}, {s}) = {v}");
            }

            #[test]
            fn sigmoid_is_monotonic_for_positive_steepness(
                x in -5.0_f64..5.0,
                dx in 0.01_f64..3.0,
                s in 0.05_f64..3.0,
            ) {
                prop_assert!(sigmoid(x + dx, s) > sigmoid(x, s));
            }

            #[test]
            fn mountain_curve_at_peak_equals_height(
                peak in -2.0_f64..2.0,
                h in -5.0_f64..5.0,
            ) {
                prop_assert!((mountain_curve(peak, peak, h) - h).abs() < 1e-12);
            }

            #[test]
            fn mountain_curve_is_symmetric_about_peak(
                peak in 0.0_f64..1.0,
                d in 0.0_f64..2.0,
                h in 0.0_f64..3.0,
            ) {
                let left = mountain_curve(peak - d, peak, h);
                let right = mountain_curve(peak + d, peak, h);
                prop_assert!((left - right).abs() < 1e-12, "{left} vs {right}");
            }

            #[test]
            fn mountain_curve_stays_within_zero_and_height(
                x in -3.0_f64..3.0,
                h in 0.0_f64..3.0,
            ) {
                let v = mountain_curve(x, 0.5, h);
                prop_assert!(v >= 0.0 && v <= h, "{v} outside [0, {h}]");
            }
        }
    }
}
