//! Towed cart controller.
//!
//! [`TowedVehicleController`] owns the mutable state of one cart and advances
//! it once per host tick. The per-tick pipeline mirrors the host entity
//! update:
//!
//! 1. the sound cooldown ticks down,
//! 2. movement feedback compares the current position with the previous
//!    snapshot and requests particles and sound,
//! 3. the snapshot is refreshed,
//! 4. the follow solver and gravity produce a velocity that the host moves,
//! 5. the wheels roll according to the new velocity,
//! 6. the cart turns to face its driver.
//!
//! Impacts arrive through [`TowedVehicleController::hurt`] and may destroy the
//! cart, after which every entry point becomes a no-op.

mod balance;
mod damage;
mod feedback;
mod follow;
mod orientation;
mod wheels;

pub use balance::balance_angle;
pub use damage::HurtOutcome;

use glam::DVec3;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::host::{CartEvent, CartHost, EntityId};
use crate::profile::{CartProfile, ProfileError};
use crate::GROUNDED_WARMUP;

/// Mutable per-tick state of a live cart.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    /// Position reported by the host after the last move.
    pub position: DVec3,
    /// Delta applied to the position each tick.
    pub velocity: DVec3,
    /// Heading in degrees.
    pub yaw: f32,
    /// Pitch in degrees.
    pub pitch: f32,
    /// Wheel rotation in radians, within `[0, 2π)`.
    pub wheel_angle: f32,
    /// Ticks since the last ground contact, within `[1, 10]`.
    pub ground_warmup: u8,
    /// Accumulated impact damage.
    pub damage: f32,
    /// Ticks before the next movement sound may play.
    pub sound_cooldown: u16,
    /// Position snapshot taken at the start of the previous tick.
    pub last_known_position: DVec3,
    /// Entity currently towing the cart.
    pub driver: Option<EntityId>,
    /// Whether the cart rested on the ground after the last move.
    pub on_ground: bool,
}

impl VehicleState {
    fn spawn(position: DVec3, on_ground: bool) -> Self {
        Self {
            position,
            velocity: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            wheel_angle: 0.0,
            ground_warmup: GROUNDED_WARMUP,
            damage: 0.0,
            sound_cooldown: 0,
            last_known_position: position,
            driver: None,
            on_ground,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Lifecycle {
    Active(VehicleState),
    Destroyed,
}

/// Answer to a player interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The interaction changed the tow state.
    Success,
    /// Nothing happened; the host may offer the interaction elsewhere.
    Pass,
}

/// Reasons a driver cannot be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttachError {
    /// Another driver already tows the cart.
    #[error("cart is already towed by entity {}", .current.0)]
    AlreadyTowed {
        /// The attached driver.
        current: EntityId,
    },
    /// The host does not allow this actor to tow.
    #[error("entity {} may not tow this cart", .actor.0)]
    Refused {
        /// The rejected actor.
        actor: EntityId,
    },
    /// The cart has been destroyed.
    #[error("cart has been destroyed")]
    Destroyed,
}

/// Drives one cart entity on behalf of the host.
#[derive(Debug, Clone)]
pub struct TowedVehicleController {
    profile: CartProfile,
    rng: StdRng,
    lifecycle: Lifecycle,
}

impl TowedVehicleController {
    /// Create the controller for a cart the host just spawned at `position`.
    ///
    /// `seed` feeds the particle placement RNG.
    ///
    /// # Errors
    /// Returns the [`CartProfile::validate`] error when the geometry would
    /// leave the wheel roll or balance undefined.
    pub fn spawn(
        profile: CartProfile,
        position: DVec3,
        on_ground: bool,
        seed: u64,
    ) -> Result<Self, ProfileError> {
        profile.validate()?;
        debug!("spawning {} at {position:?}", profile.name);
        Ok(Self {
            profile,
            rng: StdRng::seed_from_u64(seed),
            lifecycle: Lifecycle::Active(VehicleState::spawn(position, on_ground)),
        })
    }

    /// Create the controller for a cart at the host's current position.
    ///
    /// # Errors
    /// Same as [`TowedVehicleController::spawn`].
    pub fn spawn_at_host<H: CartHost + ?Sized>(
        profile: CartProfile,
        host: &H,
        seed: u64,
    ) -> Result<Self, ProfileError> {
        Self::spawn(profile, host.position(), host.on_ground(), seed)
    }

    /// Geometry of this cart.
    #[must_use]
    pub const fn profile(&self) -> &CartProfile {
        &self.profile
    }

    /// Live state, or `None` once destroyed.
    #[must_use]
    pub const fn state(&self) -> Option<&VehicleState> {
        match &self.lifecycle {
            Lifecycle::Active(state) => Some(state),
            Lifecycle::Destroyed => None,
        }
    }

    /// Whether the cart has been destroyed.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Destroyed)
    }

    /// The entity towing the cart, if any.
    #[must_use]
    pub fn driver(&self) -> Option<EntityId> {
        self.state().and_then(|state| state.driver)
    }

    /// Whether a driver is attached.
    #[must_use]
    pub fn is_towed(&self) -> bool {
        self.driver().is_some()
    }

    /// Toggle towing for `actor`.
    ///
    /// A towed cart is released whoever interacts with it. An idle cart tries
    /// to attach `actor`, answering [`Interaction::Pass`] when the host
    /// refuses.
    pub fn interact<H: CartHost + ?Sized>(&mut self, actor: EntityId, host: &mut H) -> Interaction {
        if self.is_towed() {
            self.detach_driver(host);
            return Interaction::Success;
        }
        match self.attach_driver(actor, host) {
            Ok(()) => Interaction::Success,
            Err(err) => {
                debug!("interaction ignored: {err}");
                Interaction::Pass
            }
        }
    }

    /// Attach `actor` as the driver.
    ///
    /// # Errors
    /// Returns [`AttachError::AlreadyTowed`] while another driver is attached,
    /// [`AttachError::Refused`] when the host rejects `actor`, and
    /// [`AttachError::Destroyed`] for a destroyed cart.
    pub fn attach_driver<H: CartHost + ?Sized>(
        &mut self,
        actor: EntityId,
        host: &mut H,
    ) -> Result<(), AttachError> {
        let Lifecycle::Active(state) = &mut self.lifecycle else {
            return Err(AttachError::Destroyed);
        };
        if let Some(current) = state.driver {
            return Err(AttachError::AlreadyTowed { current });
        }
        if !host.accepts_driver(actor) {
            return Err(AttachError::Refused { actor });
        }
        state.driver = Some(actor);
        info!("{} attached to entity {}", self.profile.name, actor.0);
        host.emit_event(CartEvent::DriverAttached { driver: actor });
        Ok(())
    }

    /// Release the current driver, returning it.
    pub fn detach_driver<H: CartHost + ?Sized>(&mut self, host: &mut H) -> Option<EntityId> {
        let Lifecycle::Active(state) = &mut self.lifecycle else {
            return None;
        };
        let driver = state.driver.take()?;
        info!("{} detached from entity {}", self.profile.name, driver.0);
        host.emit_event(CartEvent::DriverDetached { driver });
        Some(driver)
    }

    /// Notify the cart that `entity` left the world.
    ///
    /// Detaches it when it is the current driver and returns whether it was.
    pub fn driver_removed<H: CartHost + ?Sized>(&mut self, entity: EntityId, host: &mut H) -> bool {
        if self.driver() != Some(entity) {
            return false;
        }
        self.detach_driver(host).is_some()
    }

    /// Advance the cart by one simulation tick.
    pub fn tick<H: CartHost + ?Sized>(&mut self, host: &mut H) {
        if host.is_removed() {
            return;
        }
        let Lifecycle::Active(state) = &mut self.lifecycle else {
            return;
        };

        state.position = host.position();
        state.on_ground = host.on_ground();
        state.sound_cooldown = state.sound_cooldown.saturating_sub(1);

        feedback::emit_movement_feedback(state, &self.profile, &mut self.rng, host);
        state.last_known_position = state.position;

        let driver_position = state.driver.and_then(|driver| {
            let position = host.entity_position(driver);
            if position.is_none() {
                warn!(
                    "{} cannot locate driver {}; holding course",
                    self.profile.name, driver.0
                );
            }
            position
        });

        if let Some(driver_position) = driver_position {
            state.velocity = follow::pursue(state, driver_position, self.profile.hold_offset);
        }
        if !host.is_no_gravity() {
            state.velocity = follow::apply_gravity(state.velocity);
        }
        let outcome = host.move_self(state.velocity);
        state.position = outcome.position;
        state.velocity = outcome.velocity;
        state.on_ground = outcome.on_ground;

        wheels::roll(state, self.profile.wheel_radius);

        if let Some(driver_position) = driver_position {
            let (yaw, pitch) = orientation::look_at(state.position, driver_position);
            state.yaw = yaw;
            state.pitch = pitch;
        }

        debug!(
            "{} tick: pos={:?} vel={:?} wheel={:.3} warmup={}",
            self.profile.name, state.position, state.velocity, state.wheel_angle, state.ground_warmup
        );
    }

    /// Advisory tilt of the cart body in radians, using the ground flag
    /// from the last move.
    ///
    /// Destroyed carts answer with the idle tilt.
    #[must_use]
    pub fn balance(&self) -> f32 {
        match self.state() {
            Some(state) => balance_angle(
                &self.profile,
                state.driver.map(|_| state.pitch),
                state.on_ground,
            ),
            None => balance_angle(&self.profile, None, false),
        }
    }
}

#[cfg(test)]
mod tests;
