//! End-to-end flight scenarios against the full engine.

use cosmoflight_core::SimulationEngine;
use cosmoflight_logic::{LifeSupportStatus, ShipType, Spacecraft, SpacecraftSpec, Vector3};

fn explorer() -> Spacecraft {
    let mut craft = Spacecraft::new(
        "ship-001",
        "Explorer",
        ShipType::Scout,
        SpacecraftSpec {
            dry_mass: 4000.0,
            max_fuel_capacity: 1000.0,
            max_thrust: 10_000.0,
            specific_impulse: 300.0,
            cruise_speed: 7800.0,
        },
    );
    craft.set_fuel(500.0);
    craft
}

#[test]
fn one_second_burn_matches_the_flow_formula() {
    let mut engine = SimulationEngine::with_standard_system();
    let entity = engine.spawn_spacecraft(explorer(), "earth");
    engine.set_throttle(entity, 50.0);

    // One simulated second at 60 Hz.
    for _ in 0..60 {
        engine.update(1.0 / 60.0).unwrap();
    }

    let consumed = engine.stats(entity).unwrap().fuel_consumed;
    let expected = 0.5 * 10_000.0 / (300.0 * 9.81);
    assert!(
        (consumed - expected).abs() < 1e-9,
        "consumed {consumed}, expected {expected}"
    );

    let craft = engine.spacecraft(entity).unwrap();
    assert!((craft.current_fuel() - (500.0 - consumed)).abs() < 1e-9);
    assert!((craft.current_mass() - (4000.0 + (500.0 - consumed) * 0.75)).abs() < 1e-9);
}

#[test]
fn trajectories_are_reproducible() {
    let run = || {
        let mut engine = SimulationEngine::with_standard_system();
        let mut craft = explorer();
        let earth = engine.system.body("earth").unwrap().position;
        craft.position = earth + Vector3::new(7.0e6, 0.0, 0.0);
        craft.velocity = Vector3::new(0.0, 7.5e3, 0.0);
        let entity = engine.spawn_spacecraft(craft, "earth");
        engine.set_throttle(entity, 25.0);

        for _ in 0..3600 {
            engine.update(1.0 / 60.0).unwrap();
        }
        let position = engine.spacecraft(entity).unwrap().position;
        position
    };

    // Semi-implicit Euler is part of the public contract: identical
    // inputs produce bit-identical trajectories.
    assert_eq!(run(), run());
}

#[test]
fn long_idle_flight_degrades_life_support() {
    let mut engine = SimulationEngine::with_standard_system();
    let entity = engine.spawn_spacecraft(explorer(), "earth");

    // 10 simulated minutes at 1 Hz: oxygen 100 -> 40.
    for _ in 0..600 {
        engine.update(1.0).unwrap();
    }

    let craft = engine.spacecraft(entity).unwrap();
    assert!((craft.oxygen_level - 40.0).abs() < 1e-6);
    assert_eq!(craft.life_support_status, LifeSupportStatus::Warning);
    // No throttle was commanded, so the tanks are untouched.
    assert_eq!(craft.current_fuel(), 500.0);
}

#[test]
fn boosted_run_burns_exactly_double() {
    let consumed_after = |boost: bool| {
        let mut engine = SimulationEngine::with_standard_system();
        let mut craft = explorer();
        craft.boost_active = boost;
        let entity = engine.spawn_spacecraft(craft, "earth");
        engine.set_throttle(entity, 40.0);
        for _ in 0..120 {
            engine.update(1.0 / 60.0).unwrap();
        }
        let fuel_consumed = engine.stats(entity).unwrap().fuel_consumed;
        fuel_consumed
    };

    let plain = consumed_after(false);
    let boosted = consumed_after(true);
    assert!(plain > 0.0);
    assert_eq!(boosted, plain * 2.0);
}

#[test]
fn two_spacecraft_step_independently() {
    let mut engine = SimulationEngine::with_standard_system();

    let mut near_earth = explorer();
    let earth = engine.system.body("earth").unwrap().position;
    near_earth.position = earth + Vector3::new(7.0e6, 0.0, 0.0);
    let a = engine.spawn_spacecraft(near_earth, "earth");

    let mut near_mars = explorer();
    near_mars.id = "ship-002".to_string();
    let mars = engine.system.body("mars").unwrap().position;
    near_mars.position = mars + Vector3::new(4.0e6, 0.0, 0.0);
    let b = engine.spawn_spacecraft(near_mars, "mars");

    engine.set_throttle(a, 100.0);
    // b coasts.

    for _ in 0..60 {
        engine.update(1.0 / 60.0).unwrap();
    }

    assert!(engine.stats(a).unwrap().fuel_consumed > 0.0);
    assert_eq!(engine.stats(b).unwrap().fuel_consumed, 0.0);
    // Each craft accelerates toward its own reference body.
    let accel_a = engine.spacecraft(a).unwrap().acceleration;
    let accel_b = engine.spacecraft(b).unwrap().acceleration;
    assert!(accel_b.dot(&(mars - engine.spacecraft(b).unwrap().position)) > 0.0);
    assert!(accel_a.magnitude() > 0.0);
}
