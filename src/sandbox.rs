//! Headless host with an infinite flat floor.
//!
//! [`FlatWorld`] implements [`CartHost`] for a single cart without any game
//! engine. It resolves moves against a horizontal plane, tracks other
//! entities by id and records every feedback request so callers can inspect
//! what the cart asked for.

use glam::DVec3;
use hashbrown::{HashMap, HashSet};

use crate::host::{
    CartEvent, CartHost, EntityId, FeedbackError, ImpactSource, MoveOutcome, ParticleBurst,
    SoundCue,
};

#[derive(Debug, Clone, Default)]
/// In-memory world hosting one cart.
pub struct FlatWorld {
    /// Height of the floor plane.
    pub floor: f64,
    /// Cart position.
    pub cart_position: DVec3,
    /// Whether the cart touched the floor during the last move.
    pub cart_on_ground: bool,
    /// Disables gravity for the cart.
    pub no_gravity: bool,
    /// Positions of other entities, such as drivers.
    pub entities: HashMap<EntityId, DVec3>,
    /// Actors that may not tow the cart.
    pub refused_drivers: HashSet<EntityId>,
    /// Actors with instant-break permissions.
    pub privileged: HashSet<EntityId>,
    /// Makes the cart ignore every impact.
    pub invulnerable: bool,
    /// Whether destroyed entities leave drops.
    pub entity_drops: bool,
    /// Refuse particle and sound requests.
    pub feedback_unavailable: bool,
    /// Refuse drop requests.
    pub drops_refused: bool,
    /// Set once the cart removed itself.
    pub removed: bool,
    /// Recorded particle requests.
    pub particles: Vec<ParticleBurst>,
    /// Recorded sound requests.
    pub sounds: Vec<SoundCue>,
    /// Recorded drop requests.
    pub drops: Vec<String>,
    /// Recorded cart events.
    pub events: Vec<CartEvent>,
}

impl FlatWorld {
    /// Create a world whose floor sits at `floor`, with the cart resting on it
    /// at the origin and entity drops enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartwright::sandbox::FlatWorld;
    /// use cartwright::CartHost;
    /// let world = FlatWorld::new(0.0);
    /// assert!(world.on_ground());
    /// ```
    #[must_use]
    pub fn new(floor: f64) -> Self {
        Self {
            floor,
            cart_position: DVec3::new(0.0, floor, 0.0),
            cart_on_ground: true,
            entity_drops: true,
            ..Self::default()
        }
    }

    /// Place or move another entity.
    pub fn place_entity(&mut self, entity: EntityId, position: DVec3) {
        self.entities.insert(entity, position);
    }

    /// Remove another entity, returning its last position.
    pub fn remove_entity(&mut self, entity: EntityId) -> Option<DVec3> {
        self.entities.remove(&entity)
    }

    /// Translate another entity by `delta`; unknown entities are ignored.
    pub fn shift_entity(&mut self, entity: EntityId, delta: DVec3) {
        if let Some(position) = self.entities.get_mut(&entity) {
            *position += delta;
        }
    }

    fn feedback_gate(&self) -> Result<(), FeedbackError> {
        if self.feedback_unavailable {
            Err(FeedbackError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl CartHost for FlatWorld {
    fn position(&self) -> DVec3 {
        self.cart_position
    }

    fn on_ground(&self) -> bool {
        self.cart_on_ground
    }

    fn is_no_gravity(&self) -> bool {
        self.no_gravity
    }

    fn move_self(&mut self, delta: DVec3) -> MoveOutcome {
        let mut position = self.cart_position + delta;
        let mut velocity = delta;
        let on_ground = position.y <= self.floor;
        if on_ground {
            position.y = self.floor;
            velocity.y = 0.0;
        }
        self.cart_position = position;
        self.cart_on_ground = on_ground;
        MoveOutcome {
            position,
            on_ground,
            velocity,
        }
    }

    fn entity_position(&self, entity: EntityId) -> Option<DVec3> {
        self.entities.get(&entity).copied()
    }

    fn accepts_driver(&self, actor: EntityId) -> bool {
        !self.refused_drivers.contains(&actor)
    }

    fn is_air_at(&self, position: DVec3) -> bool {
        position.y >= self.floor
    }

    fn spawn_particles(&mut self, burst: ParticleBurst) -> Result<(), FeedbackError> {
        self.feedback_gate()?;
        self.particles.push(burst);
        Ok(())
    }

    fn play_sound(&mut self, cue: SoundCue) -> Result<(), FeedbackError> {
        self.feedback_gate()?;
        self.sounds.push(cue);
        Ok(())
    }

    fn spawn_drop(&mut self, item: &str) -> Result<(), FeedbackError> {
        if self.drops_refused {
            return Err(FeedbackError::Refused(format!("drop of {item}")));
        }
        self.drops.push(item.to_owned());
        Ok(())
    }

    fn remove_self(&mut self) {
        self.removed = true;
    }

    fn is_removed(&self) -> bool {
        self.removed
    }

    fn emit_event(&mut self, event: CartEvent) {
        self.events.push(event);
    }

    fn is_invulnerable_to(&self, _source: &ImpactSource) -> bool {
        self.invulnerable
    }

    fn is_privileged_actor(&self, source: &ImpactSource) -> bool {
        source
            .attacker
            .is_some_and(|attacker| self.privileged.contains(&attacker))
    }

    fn entity_drops_enabled(&self) -> bool {
        self.entity_drops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn world() -> FlatWorld {
        FlatWorld::new(1.0)
    }

    #[rstest]
    fn falling_move_lands_on_floor(mut world: FlatWorld) {
        world.cart_position = DVec3::new(0.0, 1.5, 0.0);
        let outcome = world.move_self(DVec3::new(0.3, -1.0, 0.0));
        assert!(outcome.on_ground);
        assert_eq!(outcome.position, DVec3::new(0.3, 1.0, 0.0));
        assert_eq!(outcome.velocity, DVec3::new(0.3, 0.0, 0.0));
    }

    #[rstest]
    fn rising_move_leaves_floor(mut world: FlatWorld) {
        let outcome = world.move_self(DVec3::new(0.0, 0.5, 0.0));
        assert!(!outcome.on_ground);
        assert!(!world.on_ground());
        assert_eq!(outcome.velocity, DVec3::new(0.0, 0.5, 0.0));
    }

    #[rstest]
    fn ground_below_floor_is_solid(world: FlatWorld) {
        assert!(!world.is_air_at(DVec3::new(0.0, 0.5, 0.0)));
        assert!(world.is_air_at(DVec3::new(0.0, 1.5, 0.0)));
    }

    #[rstest]
    fn unavailable_feedback_is_refused(mut world: FlatWorld) {
        world.feedback_unavailable = true;
        let burst = ParticleBurst {
            position: DVec3::ZERO,
            count: 1,
            spread: DVec3::ZERO,
            speed: 0.0,
        };
        assert_eq!(world.spawn_particles(burst), Err(FeedbackError::Unavailable));
        assert!(world.particles.is_empty());
    }

    #[rstest]
    fn privilege_requires_a_listed_attacker(mut world: FlatWorld) {
        world.privileged.insert(EntityId(7));
        assert!(world.is_privileged_actor(&ImpactSource::by(EntityId(7))));
        assert!(!world.is_privileged_actor(&ImpactSource::by(EntityId(8))));
        assert!(!world.is_privileged_actor(&ImpactSource::environment()));
    }
}
