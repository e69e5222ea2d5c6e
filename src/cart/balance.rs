//! Advisory body tilt.
//!
//! The tilt depends only on the profile geometry, the tow state and the
//! ground flag. It is meant for presentation and never feeds back into the
//! solvers.

use crate::numeric::expect_f32;
use crate::profile::CartProfile;

/// Body tilt in radians.
///
/// `towed_pitch` is the current pitch in degrees when a driver is attached,
/// `None` for an idle cart. An idle cart rests on its front point. A towed cart
/// on the ground follows its pitch, clamped between resting on the front point
/// and resting on the back point; in the air it follows its pitch freely.
///
/// # Examples
///
/// ```
/// use cartwright::{balance_angle, CartProfile};
/// let profile = CartProfile::supply_cart();
/// let idle = balance_angle(&profile, None, true);
/// assert!(idle < 0.0);
/// assert_eq!(balance_angle(&profile, None, false), idle);
/// ```
#[must_use]
pub fn balance_angle(profile: &CartProfile, towed_pitch: Option<f32>, on_ground: bool) -> f32 {
    let offset = f64::from(profile.wheel_y_offset());
    let max_front_slope = slope_to(-offset, profile.first_point, offset);
    let Some(pitch) = towed_pitch else {
        return expect_f32(max_front_slope);
    };
    let max_back_slope = slope_to(offset, profile.last_point, offset);
    let desired = f64::from(-pitch).to_radians();
    if on_ground {
        expect_f32(desired.min(max_back_slope).max(max_front_slope))
    } else {
        expect_f32(desired)
    }
}

fn slope_to(rise: f64, point: f32, offset: f64) -> f64 {
    let reach = f64::from(point);
    rise.atan2((reach * reach - offset * offset).sqrt())
}
