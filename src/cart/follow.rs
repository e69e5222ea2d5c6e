//! Trailing pursuit of the driver.

use glam::DVec3;

use super::VehicleState;
use crate::vector_math::vec_normalize;
use crate::{FOLLOW_WEIGHT, GRAVITY_PULL, PURSUIT_DAMPING};

/// Point `hold_offset` behind the driver along the cart's trailing direction.
pub(super) fn desired_position(
    last_known: DVec3,
    position: DVec3,
    driver: DVec3,
    hold_offset: f64,
) -> DVec3 {
    let cart_delta = (position - last_known) * FOLLOW_WEIGHT;
    let driver_delta = -(driver - last_known) * FOLLOW_WEIGHT;
    driver + vec_normalize(driver_delta + cart_delta) * hold_offset
}

/// Velocity after steering toward the trailing point.
///
/// The cart only accelerates when its current speed cannot close the gap at
/// the damped rate, so a cart already closing in keeps its velocity.
pub(super) fn pursue(state: &VehicleState, driver: DVec3, hold_offset: f64) -> DVec3 {
    let target = desired_position(state.last_known_position, state.position, driver, hold_offset);
    let move_vec = target - state.position;
    let gap = move_vec.length();
    if state.velocity.length() + (move_vec * PURSUIT_DAMPING).length() < gap {
        (state.velocity + move_vec) * PURSUIT_DAMPING
    } else {
        state.velocity
    }
}

pub(super) fn apply_gravity(velocity: DVec3) -> DVec3 {
    velocity - DVec3::new(0.0, GRAVITY_PULL, 0.0)
}
