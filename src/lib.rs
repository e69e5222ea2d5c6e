#![cfg_attr(docsrs, feature(doc_cfg))]
//! Towed farm cart kinematics for a block-building sandbox host.
//!
//! The crate advances one cart per host tick: it trails a driver, turns to
//! face it, rolls its wheels, raises movement feedback and breaks under
//! enough damage. Everything the cart needs from the world goes through the
//! [`CartHost`] capability trait; [`sandbox::FlatWorld`] is a headless
//! implementation for tools and tests.
pub mod cart;
pub mod constants;
pub mod host;
pub mod logging;
pub mod numeric;
pub mod profile;
pub mod sandbox;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use cart::{
    balance_angle, AttachError, HurtOutcome, Interaction, TowedVehicleController, VehicleState,
};
pub use host::{
    CartEvent, CartHost, EntityId, FeedbackError, ImpactSource, MoveOutcome, ParticleBurst,
    SoundCue, SoundId,
};
pub use logging::init as init_logging;
pub use profile::{CartProfile, ProfileError};
pub use vector_math::{horizontal_length, vec_normalize};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use cartwright::prelude::*;
    //! ```

    pub use crate::sandbox::FlatWorld;
    pub use crate::CartHost;
    pub use crate::CartProfile;
    pub use crate::EntityId;
    pub use crate::ImpactSource;
    pub use crate::TowedVehicleController;
    pub use glam::DVec3;
}
