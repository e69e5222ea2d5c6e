//! Wheel roll integration.
//!
//! The roll rate is divided by the airborne warm-up counter: a cart that just
//! left the ground spins its wheels quickly, then the spin tapers off as the
//! counter climbs towards [`MAX_GROUND_WARMUP`].

use super::VehicleState;
use crate::numeric::{expect_f32, wrap_radians};
use crate::vector_math::horizontal_length;
use crate::{GROUNDED_WARMUP, MAX_GROUND_WARMUP, ROLL_SPEED_THRESHOLD};

/// Advance the wheel angle from the current velocity, then update the
/// warm-up counter from the ground flag.
pub(super) fn roll(state: &mut VehicleState, wheel_radius: f32) {
    let xz_speed = expect_f32(horizontal_length(state.velocity));
    if xz_speed > ROLL_SPEED_THRESHOLD && state.ground_warmup <= MAX_GROUND_WARMUP {
        let angle_per_tick = (xz_speed / wheel_radius) / f32::from(state.ground_warmup);
        state.wheel_angle = wrap_radians(state.wheel_angle - angle_per_tick);
    }

    state.ground_warmup = if state.on_ground {
        GROUNDED_WARMUP
    } else {
        state
            .ground_warmup
            .saturating_add(1)
            .min(MAX_GROUND_WARMUP)
    };
}
