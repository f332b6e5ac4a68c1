//! Gravity system — adds single-source gravitational acceleration.

use hecs::World;

use cosmoflight_logic::{PhysicsEngine, SolarSystem, Spacecraft};

use crate::components::FlightController;

/// Add gravitational acceleration from each craft's selected reference
/// body. A controller pointing at an unregistered body leaves the craft
/// in free drift (thrust-only acceleration) and logs once per tick.
pub fn gravity_system(world: &mut World, system: &SolarSystem, physics: &PhysicsEngine) {
    for (_, (craft, controller)) in world.query_mut::<(&mut Spacecraft, &FlightController)>() {
        let Some(body) = system.body(&controller.reference_body) else {
            log::warn!(
                "{}: reference body '{}' not in registry",
                craft.id,
                controller.reference_body
            );
            continue;
        };

        let force = physics.gravitational_force(craft, body);
        let gravity = physics.acceleration(force, craft.current_mass());
        craft.acceleration = craft.acceleration + gravity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FlightStats;
    use cosmoflight_logic::{BodyType, CelestialBody, ShipType, SpacecraftSpec, Vector3};

    fn earth_system() -> SolarSystem {
        let star = CelestialBody::new("sol", "Sol", BodyType::Star)
            .with_physical(1.9891e30, 6.9634e8, 5778.0)
            .with_position(Vector3::new(1.496e11, 0.0, 0.0), Vector3::ZERO);
        let mut system = SolarSystem::new(star);
        system.add_body(
            CelestialBody::new("earth", "Earth", BodyType::Planet)
                .with_physical(5.972e24, 6.371e6, 288.0),
        );
        system
    }

    fn spawn_craft(world: &mut World, reference: &str) -> hecs::Entity {
        let mut craft = Spacecraft::new(
            "probe",
            "Probe",
            ShipType::Scout,
            SpacecraftSpec {
                dry_mass: 1000.0,
                max_fuel_capacity: 0.0,
                max_thrust: 0.0,
                specific_impulse: 300.0,
                cruise_speed: 0.0,
            },
        );
        craft.position = Vector3::new(7.0e6, 0.0, 0.0);
        world.spawn((craft, FlightController::new(reference), FlightStats::default()))
    }

    #[test]
    fn test_acceleration_toward_reference_body() {
        let mut world = World::new();
        let entity = spawn_craft(&mut world, "earth");
        let system = earth_system();

        gravity_system(&mut world, &system, &PhysicsEngine::default());

        let craft = world.get::<&Spacecraft>(entity).unwrap();
        // Earth sits at the origin; the craft is on +x, so gravity pulls -x.
        assert!(craft.acceleration.x < 0.0);
        let expected = 6.674_30e-11 * 5.972e24 / (7.0e6_f64 * 7.0e6);
        assert!((craft.acceleration.magnitude() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_gravity_adds_to_existing_acceleration() {
        let mut world = World::new();
        let entity = spawn_craft(&mut world, "earth");
        world.get::<&mut Spacecraft>(entity).unwrap().acceleration = Vector3::new(0.0, 1.0, 0.0);
        let system = earth_system();

        gravity_system(&mut world, &system, &PhysicsEngine::default());

        let craft = world.get::<&Spacecraft>(entity).unwrap();
        assert_eq!(craft.acceleration.y, 1.0);
        assert!(craft.acceleration.x < 0.0);
    }

    #[test]
    fn test_unknown_reference_body_free_drift() {
        let mut world = World::new();
        let entity = spawn_craft(&mut world, "nibiru");
        let system = earth_system();

        gravity_system(&mut world, &system, &PhysicsEngine::default());

        let craft = world.get::<&Spacecraft>(entity).unwrap();
        assert_eq!(craft.acceleration, Vector3::ZERO);
    }
}
