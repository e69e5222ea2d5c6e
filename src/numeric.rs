//! Numeric conversion helpers used across the solvers.
//!
//! Vectors are integrated in `f64` while angles and damage are tracked in
//! `f32`; these helpers guard the narrowing step and the angle wrap.

use std::f32::consts::TAU;

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Wrap an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` may round a tiny negative input up to exactly `2π`, which is
/// folded back to zero.
///
/// # Examples
///
/// ```
/// use cartwright::numeric::wrap_radians;
/// use std::f32::consts::{PI, TAU};
/// assert!((wrap_radians(-PI) - PI).abs() < 1e-6);
/// assert!(wrap_radians(-1.0e-9) < TAU);
/// ```
#[must_use]
pub fn wrap_radians(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 1.0)]
    #[case(TAU + 1.0, 1.0)]
    #[case(-1.0, TAU - 1.0)]
    #[case(-3.0 * TAU - 0.5, TAU - 0.5)]
    fn wraps_into_one_turn(#[case] input: f32, #[case] expected: f32) {
        let wrapped = wrap_radians(input);
        assert!((0.0..TAU).contains(&wrapped));
        assert_relative_eq!(wrapped, expected, epsilon = 1e-4);
    }

    #[rstest]
    fn narrows_finite_values() {
        assert_relative_eq!(expect_f32(0.25), 0.25_f32);
    }
}
