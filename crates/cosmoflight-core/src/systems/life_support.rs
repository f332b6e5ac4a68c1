//! Life-support system — drains cabin oxygen and logs status changes.

use hecs::World;

use cosmoflight_logic::{SimError, Spacecraft};

/// Advance life support for every spacecraft. Status transitions are
/// logged so a session log shows when a cabin went from nominal to
/// warning to critical.
pub fn life_support_system(world: &mut World, dt: f64) -> Result<(), SimError> {
    for (_, craft) in world.query_mut::<&mut Spacecraft>() {
        let before = craft.life_support_status;
        craft.update_life_support(dt)?;
        if craft.life_support_status != before {
            log::info!(
                "{}: life support {:?} -> {:?} (oxygen {:.1}%)",
                craft.id,
                before,
                craft.life_support_status,
                craft.oxygen_level
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmoflight_logic::{LifeSupportStatus, ShipType, SpacecraftSpec};

    fn spawn_craft(world: &mut World) -> hecs::Entity {
        world.spawn((Spacecraft::new(
            "probe",
            "Probe",
            ShipType::Scout,
            SpacecraftSpec {
                dry_mass: 1000.0,
                max_fuel_capacity: 100.0,
                max_thrust: 1000.0,
                specific_impulse: 300.0,
                cruise_speed: 100.0,
            },
        ),))
    }

    #[test]
    fn test_oxygen_drains_at_fixed_rate() {
        let mut world = World::new();
        let entity = spawn_craft(&mut world);

        // 0.1 points/s for 200 s.
        life_support_system(&mut world, 200.0).unwrap();

        let craft = world.get::<&Spacecraft>(entity).unwrap();
        assert!((craft.oxygen_level - 80.0).abs() < 1e-9);
        assert_eq!(craft.life_support_status, LifeSupportStatus::Nominal);
    }

    #[test]
    fn test_status_degrades_over_time() {
        let mut world = World::new();
        let entity = spawn_craft(&mut world);

        // 600 s drains 60 points: 100 -> 40, inside the warning band.
        life_support_system(&mut world, 600.0).unwrap();
        {
            let craft = world.get::<&Spacecraft>(entity).unwrap();
            assert_eq!(craft.life_support_status, LifeSupportStatus::Warning);
        }

        // Another 300 s: 40 -> 10, critical.
        life_support_system(&mut world, 300.0).unwrap();
        let craft = world.get::<&Spacecraft>(entity).unwrap();
        assert_eq!(craft.life_support_status, LifeSupportStatus::Critical);
    }

    #[test]
    fn test_negative_dt_rejected() {
        let mut world = World::new();
        spawn_craft(&mut world);
        assert!(life_support_system(&mut world, -1.0).is_err());
    }
}
