//! Cart physics and feedback constants shared across the solvers.
//!
//! Distances are in blocks and durations in simulation ticks.

/// Downward acceleration applied every tick unless the cart ignores gravity.
pub const GRAVITY_PULL: f64 = 0.08;
/// Weight applied to the cart and driver deltas when picking a trailing direction.
pub const FOLLOW_WEIGHT: f64 = 0.5;
/// Damping applied to the pursuit velocity.
pub const PURSUIT_DAMPING: f64 = 0.2;
/// Default trailing distance kept behind the driver.
pub const DEFAULT_HOLD_OFFSET: f64 = 2.0;
/// Default bounding box width used for the particle footprint.
pub const DEFAULT_CART_WIDTH: f64 = 1.0;
/// Vectors shorter than this normalise to zero.
pub const NORMALIZE_EPSILON: f64 = 1.0e-4;

/// Horizontal speed below which the wheels are considered still.
pub const ROLL_SPEED_THRESHOLD: f32 = 0.01;
/// Ceiling of the airborne warm-up counter.
pub const MAX_GROUND_WARMUP: u8 = 10;
/// Value the warm-up counter resets to on ground contact.
pub const GROUNDED_WARMUP: u8 = 1;

/// Minimum per-tick displacement that produces movement feedback.
pub const MOVEMENT_FEEDBACK_THRESHOLD: f64 = 0.1;
/// Ticks between two movement sounds.
pub const MOVEMENT_SOUND_COOLDOWN: u16 = 55;
/// Volume of the movement sound.
pub const MOVEMENT_SOUND_VOLUME: f32 = 0.1;
/// Pitch of the movement sound.
pub const MOVEMENT_SOUND_PITCH: f32 = 1.0;
/// Particle bursts requested per moving tick.
pub const WHEEL_PARTICLE_SAMPLES: usize = 4;
/// Depth below the cart origin probed for the ground material.
pub const GROUND_PROBE_DEPTH: f64 = 0.5;
/// Height above the cart origin at which wheel particles spawn.
pub const WHEEL_PARTICLE_LIFT: f64 = 0.1;
/// Vertical spread of each wheel particle burst.
pub const WHEEL_PARTICLE_SPREAD_Y: f64 = 0.05;
/// Speed of each wheel particle burst.
pub const WHEEL_PARTICLE_SPEED: f64 = 0.1;

/// Multiplier converting impact magnitude into accumulated damage.
pub const DAMAGE_SCALE: f32 = 10.0;
/// Accumulated damage above which the cart breaks.
pub const DESTRUCTION_THRESHOLD: f32 = 40.0;
