//! Integration system — advances kinematic state and flight statistics.

use hecs::World;

use cosmoflight_logic::{integrator, SimError, Spacecraft};

use crate::components::FlightStats;

/// Step every spacecraft with semi-implicit Euler and accumulate its
/// flight statistics. Runs last in the tick, after the acceleration
/// passes have written this tick's net acceleration.
pub fn integration_system(world: &mut World, dt: f64) -> Result<(), SimError> {
    for (_, (craft, stats)) in world.query_mut::<(&mut Spacecraft, &mut FlightStats)>() {
        let travelled = integrator::integrate(craft, dt)?;
        stats.elapsed_time += dt;
        stats.distance_traveled += travelled;
    }
    Ok(())
}
