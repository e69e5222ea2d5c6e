//! Impact damage and destruction.

use log::{debug, info, warn};

use super::{Lifecycle, TowedVehicleController};
use crate::host::{CartEvent, CartHost, ImpactSource};
use crate::{DAMAGE_SCALE, DESTRUCTION_THRESHOLD};

/// What an impact did to the cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HurtOutcome {
    /// The cart was invulnerable, removed or already destroyed, or the impact
    /// magnitude was negative or not a number.
    Ignored,
    /// Damage accumulated and the cart survived.
    Damaged {
        /// Accumulated damage after the impact.
        damage: f32,
    },
    /// The cart broke and was removed.
    Destroyed {
        /// Whether a drop item was spawned.
        dropped: bool,
    },
}

impl HurtOutcome {
    /// Whether the host should treat the impact as consumed.
    ///
    /// Always `true`, including for ignored impacts; collision resolution in
    /// the host expects every hit on a cart to be acknowledged. Match on the
    /// variant to tell the paths apart.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        true
    }
}

impl TowedVehicleController {
    /// Apply an impact of magnitude `amount` from `source`.
    ///
    /// Negative and NaN magnitudes are ignored so accumulated damage never
    /// decreases.
    pub fn hurt<H: CartHost + ?Sized>(
        &mut self,
        source: &ImpactSource,
        amount: f32,
        host: &mut H,
    ) -> HurtOutcome {
        if host.is_invulnerable_to(source) || host.is_removed() {
            return HurtOutcome::Ignored;
        }
        let Lifecycle::Active(state) = &mut self.lifecycle else {
            return HurtOutcome::Ignored;
        };
        if amount.is_nan() || amount < 0.0 {
            warn!("{} ignored impact of magnitude {amount}", self.profile.name);
            return HurtOutcome::Ignored;
        }

        state.damage += amount * DAMAGE_SCALE;
        let damage = state.damage;
        debug!("{} took {amount} impact, damage now {damage}", self.profile.name);
        host.emit_event(CartEvent::Damaged {
            damage,
            attacker: source.attacker,
        });

        let privileged = host.is_privileged_actor(source);
        let destroyed = privileged || damage > DESTRUCTION_THRESHOLD;
        if !destroyed {
            return HurtOutcome::Damaged { damage };
        }

        let driver = state.driver.take();
        let dropped = !privileged && host.entity_drops_enabled() && self.spawn_drop(host);
        if let Some(driver) = driver {
            host.emit_event(CartEvent::DriverDetached { driver });
        }
        host.emit_event(CartEvent::Destroyed {
            attacker: source.attacker,
            dropped,
        });
        host.remove_self();
        self.lifecycle = Lifecycle::Destroyed;
        info!("{} destroyed (dropped: {dropped})", self.profile.name);
        HurtOutcome::Destroyed { dropped }
    }

    fn spawn_drop<H: CartHost + ?Sized>(&self, host: &mut H) -> bool {
        match host.spawn_drop(&self.profile.drop_item) {
            Ok(()) => true,
            Err(err) => {
                warn!("{} drop refused: {err}", self.profile.name);
                false
            }
        }
    }
}
