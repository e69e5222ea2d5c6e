//! Controller-level tests driven through the flat sandbox host.

use super::*;
use crate::host::ImpactSource;
use crate::sandbox::FlatWorld;
use crate::{GRAVITY_PULL, MOVEMENT_SOUND_COOLDOWN};
use approx::assert_relative_eq;
use rstest::{fixture, rstest};

const DRIVER: EntityId = EntityId(10);
const STRANGER: EntityId = EntityId(11);

#[fixture]
fn world() -> FlatWorld {
    let mut world = FlatWorld::new(0.0);
    world.place_entity(DRIVER, DVec3::new(3.0, 0.0, 0.0));
    world.place_entity(STRANGER, DVec3::new(-3.0, 0.0, 0.0));
    world
}

#[fixture]
fn cart(world: FlatWorld) -> TowedVehicleController {
    TowedVehicleController::spawn_at_host(CartProfile::supply_cart(), &world, 42)
        .expect("valid preset")
}

fn active_state(cart: &mut TowedVehicleController) -> Option<&mut VehicleState> {
    match &mut cart.lifecycle {
        Lifecycle::Active(state) => Some(state),
        Lifecycle::Destroyed => None,
    }
}

#[rstest]
fn spawn_state_is_at_rest(cart: TowedVehicleController) {
    let state = cart.state().expect("live cart");
    assert_eq!(state.ground_warmup, GROUNDED_WARMUP);
    assert_eq!(state.last_known_position, state.position);
    assert_eq!(state.velocity, DVec3::ZERO);
    assert!(state.driver.is_none());
}

#[rstest]
fn interact_toggles_towing(mut world: FlatWorld, mut cart: TowedVehicleController) {
    assert_eq!(cart.interact(DRIVER, &mut world), Interaction::Success);
    assert_eq!(cart.driver(), Some(DRIVER));
    assert_eq!(cart.interact(STRANGER, &mut world), Interaction::Success);
    assert_eq!(cart.driver(), None);
    assert_eq!(
        world.events,
        vec![
            CartEvent::DriverAttached { driver: DRIVER },
            CartEvent::DriverDetached { driver: DRIVER },
        ]
    );
}

#[rstest]
fn refused_actor_passes(mut world: FlatWorld, mut cart: TowedVehicleController) {
    world.refused_drivers.insert(STRANGER);
    assert_eq!(cart.interact(STRANGER, &mut world), Interaction::Pass);
    assert!(!cart.is_towed());
    assert!(world.events.is_empty());
}

#[rstest]
fn second_attach_is_rejected(mut world: FlatWorld, mut cart: TowedVehicleController) {
    assert_eq!(cart.attach_driver(DRIVER, &mut world), Ok(()));
    assert_eq!(
        cart.attach_driver(STRANGER, &mut world),
        Err(AttachError::AlreadyTowed { current: DRIVER })
    );
    assert_eq!(cart.driver(), Some(DRIVER));
}

#[rstest]
fn removed_driver_is_detached(mut world: FlatWorld, mut cart: TowedVehicleController) {
    cart.attach_driver(DRIVER, &mut world).expect("attach");
    assert!(!cart.driver_removed(STRANGER, &mut world));
    assert!(cart.is_towed());
    world.remove_entity(DRIVER);
    assert!(cart.driver_removed(DRIVER, &mut world));
    assert!(!cart.is_towed());
}

#[rstest]
fn unresolved_driver_holds_course(mut world: FlatWorld, mut cart: TowedVehicleController) {
    cart.attach_driver(DRIVER, &mut world).expect("attach");
    world.remove_entity(DRIVER);
    cart.tick(&mut world);
    let state = cart.state().expect("live cart");
    assert_eq!(state.driver, Some(DRIVER));
    assert_eq!(state.position, DVec3::ZERO);
    assert_relative_eq!(state.yaw, 0.0);
}

#[rstest]
fn towed_tick_moves_toward_driver_and_faces_it(
    mut world: FlatWorld,
    mut cart: TowedVehicleController,
) {
    cart.attach_driver(DRIVER, &mut world).expect("attach");
    world.place_entity(DRIVER, DVec3::new(5.0, 0.0, 0.0));
    cart.tick(&mut world);
    let state = cart.state().expect("live cart");
    // Trailing point (3, 0, 0) pulls the cart by 0.6 along X.
    assert_relative_eq!(state.position.x, 0.6, epsilon = 1e-9);
    assert_relative_eq!(state.position.y, 0.0);
    assert_relative_eq!(state.yaw, -90.0, epsilon = 1e-4);
    assert_relative_eq!(state.pitch, 0.0, epsilon = 1e-4);
    assert!(state.wheel_angle > 0.0);
}

#[rstest]
fn idle_tick_keeps_orientation(mut world: FlatWorld, mut cart: TowedVehicleController) {
    if let Some(state) = active_state(&mut cart) {
        state.yaw = 33.0;
        state.pitch = -12.0;
    }
    cart.tick(&mut world);
    let state = cart.state().expect("live cart");
    assert_relative_eq!(state.yaw, 33.0);
    assert_relative_eq!(state.pitch, -12.0);
}

#[rstest]
fn idle_cart_falls_under_gravity(mut cart: TowedVehicleController) {
    let mut world = FlatWorld::new(-10.0);
    world.cart_position = DVec3::ZERO;
    world.cart_on_ground = false;
    cart.tick(&mut world);
    cart.tick(&mut world);
    let state = cart.state().expect("live cart");
    assert_relative_eq!(state.velocity.y, -2.0 * GRAVITY_PULL, epsilon = 1e-12);
    assert_relative_eq!(state.position.y, -3.0 * GRAVITY_PULL, epsilon = 1e-12);
    assert_eq!(state.ground_warmup, 3);
}

#[rstest]
fn no_gravity_cart_hovers(mut cart: TowedVehicleController) {
    let mut world = FlatWorld::new(-10.0);
    world.no_gravity = true;
    world.cart_position = DVec3::ZERO;
    cart.tick(&mut world);
    let state = cart.state().expect("live cart");
    assert_eq!(state.velocity, DVec3::ZERO);
    assert_eq!(state.position, DVec3::ZERO);
}

#[rstest]
fn sound_cooldown_counts_down_each_tick(mut world: FlatWorld, mut cart: TowedVehicleController) {
    if let Some(state) = active_state(&mut cart) {
        state.sound_cooldown = MOVEMENT_SOUND_COOLDOWN;
    }
    for _ in 0..5 {
        cart.tick(&mut world);
    }
    let state = cart.state().expect("live cart");
    assert_eq!(state.sound_cooldown, MOVEMENT_SOUND_COOLDOWN - 5);
}

#[rstest]
fn idle_balance_ignores_pitch_and_ground(mut cart: TowedVehicleController) {
    let mut tilted = cart.clone();
    if let Some(state) = active_state(&mut tilted) {
        state.pitch = 45.0;
    }
    let expected = balance_angle(cart.profile(), None, true);
    for on_ground in [true, false] {
        for candidate in [&mut cart, &mut tilted] {
            if let Some(state) = active_state(candidate) {
                state.on_ground = on_ground;
            }
            assert_relative_eq!(candidate.balance(), expected);
        }
    }
}

#[rstest]
fn towed_balance_follows_pitch(mut world: FlatWorld, mut cart: TowedVehicleController) {
    cart.attach_driver(DRIVER, &mut world).expect("attach");
    if let Some(state) = active_state(&mut cart) {
        state.pitch = 5.0;
        state.on_ground = false;
    }
    assert_relative_eq!(cart.balance(), (-5.0_f32).to_radians(), epsilon = 1e-6);
}

#[rstest]
fn towed_balance_clamps_with_the_recorded_ground_flag(
    mut world: FlatWorld,
    mut cart: TowedVehicleController,
) {
    cart.attach_driver(DRIVER, &mut world).expect("attach");
    if let Some(state) = active_state(&mut cart) {
        state.pitch = -80.0;
        state.on_ground = true;
    }
    let grounded = cart.balance();
    assert_relative_eq!(
        grounded,
        balance_angle(cart.profile(), Some(-80.0), true),
        epsilon = 1e-6
    );
    assert!(grounded < 80.0_f32.to_radians());

    if let Some(state) = active_state(&mut cart) {
        state.on_ground = false;
    }
    assert_relative_eq!(cart.balance(), 80.0_f32.to_radians(), epsilon = 1e-6);
}

#[rstest]
#[case::flat_wheel(CartProfile { wheel_radius: 0.0, ..CartProfile::supply_cart() })]
#[case::short_front(CartProfile { first_point: 0.1, ..CartProfile::supply_cart() })]
#[case::nan_hold(CartProfile { hold_offset: f64::NAN, ..CartProfile::plow() })]
fn spawn_rejects_degenerate_geometry(world: FlatWorld, #[case] profile: CartProfile) {
    assert!(TowedVehicleController::spawn_at_host(profile.clone(), &world, 0).is_err());
    assert!(TowedVehicleController::spawn(profile, DVec3::ZERO, true, 0).is_err());
}

#[rstest]
fn destroyed_cart_ignores_everything(mut world: FlatWorld, mut cart: TowedVehicleController) {
    cart.attach_driver(DRIVER, &mut world).expect("attach");
    let outcome = cart.hurt(&ImpactSource::environment(), 10.0, &mut world);
    assert_eq!(outcome, HurtOutcome::Destroyed { dropped: true });
    assert!(world.removed);
    assert!(world
        .events
        .contains(&CartEvent::DriverDetached { driver: DRIVER }));

    let events = world.events.len();
    world.removed = false;
    cart.tick(&mut world);
    assert_eq!(cart.interact(DRIVER, &mut world), Interaction::Pass);
    assert_eq!(
        cart.attach_driver(DRIVER, &mut world),
        Err(AttachError::Destroyed)
    );
    assert_eq!(
        cart.hurt(&ImpactSource::environment(), 1.0, &mut world),
        HurtOutcome::Ignored
    );
    assert_eq!(world.events.len(), events);
    assert_eq!(world.drops.len(), 1);
    assert_relative_eq!(cart.balance(), balance_angle(cart.profile(), None, false));
}
