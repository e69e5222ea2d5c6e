//! Capability contract between a cart and the game host.
//!
//! The host owns the world: collision, terrain, other entities, sound and
//! particle output, and entity removal. The cart controller only ever talks to
//! it through [`CartHost`], so any engine can drive a cart by implementing
//! this trait for its own entity record.

use glam::DVec3;
use thiserror::Error;

/// Host-assigned identifier of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub i64);

/// Result of a self-propelled move resolved against world collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Position after collision resolution.
    pub position: DVec3,
    /// Whether the cart rests on the ground after the move.
    pub on_ground: bool,
    /// Velocity after collision; axes blocked by terrain are zeroed.
    pub velocity: DVec3,
}

/// Origin of an impact delivered to [`crate::TowedVehicleController::hurt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImpactSource {
    /// Entity responsible for the impact, if any.
    pub attacker: Option<EntityId>,
}

impl ImpactSource {
    /// An impact with no responsible entity, such as a fall or explosion.
    #[must_use]
    pub const fn environment() -> Self {
        Self { attacker: None }
    }

    /// An impact caused by `attacker`.
    #[must_use]
    pub const fn by(attacker: EntityId) -> Self {
        Self {
            attacker: Some(attacker),
        }
    }
}

/// Sound cues a cart can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    /// Rolling noise played while the cart moves.
    CartMoving,
}

/// A sound request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    /// Sound to play.
    pub sound: SoundId,
    /// Where to play it.
    pub position: DVec3,
    /// Playback volume.
    pub volume: f32,
    /// Playback pitch.
    pub pitch: f32,
}

/// A ground-material particle request near the wheels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBurst {
    /// Spawn point.
    pub position: DVec3,
    /// Number of particles.
    pub count: u32,
    /// Random spread per axis.
    pub spread: DVec3,
    /// Initial particle speed.
    pub speed: f64,
}

/// Notifications the cart raises for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// A driver started towing the cart.
    DriverAttached {
        /// The new driver.
        driver: EntityId,
    },
    /// The driver let go of the cart or was removed.
    DriverDetached {
        /// The former driver.
        driver: EntityId,
    },
    /// Accumulated damage changed; the host replicates the new total.
    Damaged {
        /// Accumulated damage after the impact.
        damage: f32,
        /// Entity responsible for the impact.
        attacker: Option<EntityId>,
    },
    /// The cart broke and is about to be removed.
    Destroyed {
        /// Entity responsible for the final impact.
        attacker: Option<EntityId>,
        /// Whether a drop item was spawned.
        dropped: bool,
    },
}

/// A best-effort host request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// The host does not render or play feedback in this context.
    #[error("feedback is unavailable on this side")]
    Unavailable,
    /// The host rejected the request.
    #[error("host refused request: {0}")]
    Refused(String),
}

/// Capabilities the host exposes to a cart.
///
/// Queries without a target refer to the cart entity itself.
pub trait CartHost {
    /// Current position of the cart.
    fn position(&self) -> DVec3;
    /// Whether the cart rests on the ground.
    fn on_ground(&self) -> bool;
    /// Whether the cart ignores gravity.
    fn is_no_gravity(&self) -> bool;
    /// Move the cart by `delta`, resolving collisions.
    fn move_self(&mut self, delta: DVec3) -> MoveOutcome;
    /// Current position of another entity, or `None` when it is unknown.
    fn entity_position(&self, entity: EntityId) -> Option<DVec3>;
    /// Whether `actor` may tow the cart.
    fn accepts_driver(&self, actor: EntityId) -> bool;
    /// Whether the block containing `position` is air.
    fn is_air_at(&self, position: DVec3) -> bool;
    /// Spawn ground particles.
    ///
    /// # Errors
    /// Returns [`FeedbackError`] when the host refuses the request.
    fn spawn_particles(&mut self, burst: ParticleBurst) -> Result<(), FeedbackError>;
    /// Play a sound.
    ///
    /// # Errors
    /// Returns [`FeedbackError`] when the host refuses the request.
    fn play_sound(&mut self, cue: SoundCue) -> Result<(), FeedbackError>;
    /// Spawn `item` at the cart position.
    ///
    /// # Errors
    /// Returns [`FeedbackError`] when the host refuses the request.
    fn spawn_drop(&mut self, item: &str) -> Result<(), FeedbackError>;
    /// Remove the cart entity from the world.
    fn remove_self(&mut self);
    /// Whether the host already removed or unloaded the cart.
    fn is_removed(&self) -> bool;
    /// Deliver a cart notification.
    fn emit_event(&mut self, event: CartEvent);
    /// Whether the cart ignores impacts from `source`.
    fn is_invulnerable_to(&self, source: &ImpactSource) -> bool;
    /// Whether `source` breaks blocks and entities instantly.
    fn is_privileged_actor(&self, source: &ImpactSource) -> bool;
    /// Whether destroyed entities leave a drop item.
    fn entity_drops_enabled(&self) -> bool;
}
