//! Basic vector math helper functions.
//! Small helpers for normalising offsets and measuring horizontal speed.
use glam::DVec3;

use crate::NORMALIZE_EPSILON;

/// Returns the unit vector pointing along `vector`.
///
/// Non-finite vectors and vectors shorter than [`NORMALIZE_EPSILON`] yield
/// [`DVec3::ZERO`], matching the host engine's normalisation.
///
/// # Examples
///
/// ```
/// use cartwright::vec_normalize;
/// use glam::DVec3;
/// let unit = vec_normalize(DVec3::new(3.0, 0.0, 4.0));
/// assert!((unit.x - 0.6).abs() < 1e-9);
/// assert!((unit.z - 0.8).abs() < 1e-9);
///
/// assert_eq!(vec_normalize(DVec3::splat(1.0e-6)), DVec3::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: DVec3) -> DVec3 {
    if !vector.is_finite() {
        return DVec3::ZERO;
    }
    let length = vector.length();
    if length < NORMALIZE_EPSILON {
        DVec3::ZERO
    } else {
        vector / length
    }
}

/// Returns the length of the horizontal (XZ) component of `vector`.
///
/// # Examples
/// ```
/// use cartwright::horizontal_length;
/// use glam::DVec3;
/// assert!((horizontal_length(DVec3::new(3.0, -9.0, 4.0)) - 5.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn horizontal_length(vector: DVec3) -> f64 {
    vector.x.hypot(vector.z)
}
