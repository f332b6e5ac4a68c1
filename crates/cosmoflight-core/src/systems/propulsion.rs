//! Propulsion system — burns propellant and seeds the tick's
//! acceleration with hull-oriented thrust.

use hecs::World;

use cosmoflight_logic::{PhysicsEngine, SimError, Spacecraft};

use crate::components::FlightStats;

/// Burn propellant for every spacecraft and write its thrust
/// acceleration. This runs first in the tick, so it *assigns* the
/// acceleration; later systems add to it.
pub fn propulsion_system(
    world: &mut World,
    physics: &PhysicsEngine,
    dt: f64,
) -> Result<(), SimError> {
    for (_, (craft, stats)) in world.query_mut::<(&mut Spacecraft, &mut FlightStats)>() {
        let burned = craft.consume_fuel(dt)?;
        stats.fuel_consumed += burned;

        if burned > 0.0 && craft.current_fuel() == 0.0 {
            log::warn!("{}: propellant exhausted", craft.id);
        }

        // An idle or dry engine thrusts the zero vector, so this also
        // clears last tick's acceleration.
        let thrust_world = craft.orientation.rotate(craft.current_thrust());
        craft.acceleration = physics.acceleration(thrust_world, craft.current_mass());
    }
    Ok(())
}
