//! Save/Load functionality for persisting simulation state.
//!
//! Uses bincode for compact binary snapshots. A snapshot captures the
//! simulation clock, the full body registry, and every spacecraft entity
//! with its engine-side components; loading rebuilds a fresh world, so
//! entity handles are not stable across a save/load cycle.

use std::io::{Read, Write};

use hecs::World;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cosmoflight_logic::{SolarSystem, Spacecraft};

use crate::components::{FlightController, FlightStats};
use crate::engine::SimulationEngine;

/// Version number for the snapshot format (increment when it changes).
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of the whole simulation.
#[derive(Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub sim_time: f64,
    pub system: SolarSystem,
    pub ships: Vec<SavedShip>,
}

/// One spacecraft entity with its engine-side components.
#[derive(Serialize, Deserialize)]
pub struct SavedShip {
    pub craft: Spacecraft,
    pub controller: FlightController,
    pub stats: FlightStats,
}

/// Errors that can occur during save/load.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Bincode(#[from] Box<bincode::ErrorKind>),
    #[error("snapshot version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

fn serialize_ships(world: &World) -> Vec<SavedShip> {
    let mut ships = Vec::new();
    for (_, (craft, controller, stats)) in world
        .query::<(&Spacecraft, &FlightController, &FlightStats)>()
        .iter()
    {
        ships.push(SavedShip {
            craft: craft.clone(),
            controller: controller.clone(),
            stats: *stats,
        });
    }
    ships
}

/// Snapshot an engine into a writer.
pub fn save_engine<W: Write>(writer: W, engine: &SimulationEngine) -> Result<(), SaveError> {
    let save_data = SaveData {
        version: SAVE_VERSION,
        sim_time: engine.sim_time,
        system: engine.system.clone(),
        ships: serialize_ships(&engine.world),
    };
    bincode::serialize_into(writer, &save_data)?;
    Ok(())
}

/// Rebuild an engine from a snapshot.
pub fn load_engine<R: Read>(reader: R) -> Result<SimulationEngine, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    let mut engine = SimulationEngine::new(save_data.system);
    engine.sim_time = save_data.sim_time;
    for ship in save_data.ships {
        engine.world.spawn((ship.craft, ship.controller, ship.stats));
    }
    Ok(engine)
}
