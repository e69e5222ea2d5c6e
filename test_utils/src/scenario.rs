//! Towing scenarios over [`FlatWorld`].

use cartwright::sandbox::FlatWorld;
use cartwright::{CartHost, CartProfile, EntityId, Interaction, TowedVehicleController};
use glam::DVec3;

/// Entity id used for the driver in every scenario.
pub const DRIVER: EntityId = EntityId(1);

/// Spawn a cart on a floor at height zero with [`DRIVER`] standing at
/// `driver_at` and hitched to it.
///
/// # Panics
/// Panics if `profile` fails validation or the sandbox refuses the driver.
///
/// # Examples
/// ```
/// use cartwright::CartProfile;
/// use glam::DVec3;
/// use test_utils::hitched_cart;
/// let (_world, cart) = hitched_cart(CartProfile::plow(), DVec3::ZERO);
/// assert!(cart.is_towed());
/// ```
pub fn hitched_cart(
    profile: CartProfile,
    driver_at: DVec3,
) -> (FlatWorld, TowedVehicleController) {
    let mut world = FlatWorld::new(0.0);
    world.place_entity(DRIVER, driver_at);
    let mut cart = match TowedVehicleController::spawn_at_host(profile, &world, 0) {
        Ok(cart) => cart,
        Err(err) => panic!("invalid cart profile: {err}"),
    };
    assert_eq!(
        cart.interact(DRIVER, &mut world),
        Interaction::Success,
        "driver refused"
    );
    (world, cart)
}

/// Move [`DRIVER`] by `step` and tick the cart, `ticks` times.
///
/// Returns the driver-to-cart distance after each tick. Stops early if the
/// cart is destroyed.
pub fn drive_straight(
    world: &mut FlatWorld,
    cart: &mut TowedVehicleController,
    step: DVec3,
    ticks: usize,
) -> Vec<f64> {
    let mut gaps = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        world.shift_entity(DRIVER, step);
        cart.tick(world);
        let Some(state) = cart.state() else {
            break;
        };
        if let Some(driver) = world.entity_position(DRIVER) {
            gaps.push(driver.distance(state.position));
        }
    }
    gaps
}
