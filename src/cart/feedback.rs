//! Movement feedback: wheel particles and rolling sound.
//!
//! Feedback is best effort. Refused requests are logged and dropped; they
//! never touch the kinematic state.

use glam::DVec3;
use log::debug;
use rand::Rng;

use super::VehicleState;
use crate::host::{CartHost, ParticleBurst, SoundCue, SoundId};
use crate::profile::CartProfile;
use crate::{
    GROUND_PROBE_DEPTH, MOVEMENT_FEEDBACK_THRESHOLD, MOVEMENT_SOUND_COOLDOWN,
    MOVEMENT_SOUND_PITCH, MOVEMENT_SOUND_VOLUME, WHEEL_PARTICLE_LIFT, WHEEL_PARTICLE_SAMPLES,
    WHEEL_PARTICLE_SPEED, WHEEL_PARTICLE_SPREAD_Y,
};

/// Request particles and sound when the cart moved noticeably since the last
/// snapshot.
pub(super) fn emit_movement_feedback<H, R>(
    state: &mut VehicleState,
    profile: &CartProfile,
    rng: &mut R,
    host: &mut H,
) where
    H: CartHost + ?Sized,
    R: Rng,
{
    let moved = state.position.distance(state.last_known_position);
    if moved <= MOVEMENT_FEEDBACK_THRESHOLD {
        return;
    }
    spawn_wheel_particles(state.position, profile.width, rng, host);
    play_movement_sound(state, host);
}

fn spawn_wheel_particles<H, R>(position: DVec3, width: f64, rng: &mut R, host: &mut H)
where
    H: CartHost + ?Sized,
    R: Rng,
{
    let below = position - DVec3::new(0.0, GROUND_PROBE_DEPTH, 0.0);
    if host.is_air_at(below) {
        return;
    }
    for _ in 0..WHEEL_PARTICLE_SAMPLES {
        let burst = ParticleBurst {
            position: DVec3::new(
                position.x + (rng.gen::<f64>() - 0.5) * width * 0.5,
                position.y + WHEEL_PARTICLE_LIFT,
                position.z + (rng.gen::<f64>() - 0.5) * width * 0.5,
            ),
            count: 1,
            spread: DVec3::new(0.0, WHEEL_PARTICLE_SPREAD_Y, 0.0),
            speed: WHEEL_PARTICLE_SPEED,
        };
        if let Err(err) = host.spawn_particles(burst) {
            debug!("wheel particles skipped: {err}");
            return;
        }
    }
}

fn play_movement_sound<H: CartHost + ?Sized>(state: &mut VehicleState, host: &mut H) {
    if state.sound_cooldown > 0 {
        return;
    }
    let cue = SoundCue {
        sound: SoundId::CartMoving,
        position: state.position,
        volume: MOVEMENT_SOUND_VOLUME,
        pitch: MOVEMENT_SOUND_PITCH,
    };
    if let Err(err) = host.play_sound(cue) {
        debug!("movement sound skipped: {err}");
    }
    state.sound_cooldown = MOVEMENT_SOUND_COOLDOWN;
}
