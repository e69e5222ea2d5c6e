//! Facing toward the driver.
//!
//! Yaw follows the block-game convention: 0° faces +Z and positive yaw turns
//! toward -X. Pitch is positive when looking down.

use glam::DVec3;

use crate::numeric::expect_f32;
use crate::vector_math::vec_normalize;

/// Yaw and pitch in degrees for a cart at `position` facing `target`.
pub(super) fn look_at(position: DVec3, target: DVec3) -> (f32, f32) {
    let look = vec_normalize(target - position);
    let yaw = (-look.x).atan2(look.z);
    let pitch = (-look.y).atan2(look.x.hypot(look.z));
    (expect_f32(yaw.to_degrees()), expect_f32(pitch.to_degrees()))
}
