//! Simulation engine - main entry point for running the simulation.

use hecs::{Entity, World};

use cosmoflight_logic::{PhysicsEngine, SimError, SolarSystem, Spacecraft};

use crate::components::{FlightController, FlightStats};
use crate::generation;
use crate::persistence::{self, SaveError};
use crate::systems::*;

/// Owns the world of spacecraft entities, the body registry, and the
/// simulation clock. A caller drives it at a fixed timestep (a 60 Hz
/// front end uses dt ≈ 0.016 s) and applies player input between ticks
/// via [`set_throttle`](Self::set_throttle) or `spacecraft_mut`.
pub struct SimulationEngine {
    /// ECS world containing all spacecraft entities.
    pub world: World,
    /// Celestial-body registry; read-only during ticks.
    pub system: SolarSystem,
    /// Gravity model shared by every craft.
    pub physics: PhysicsEngine,
    /// Simulated seconds since the engine started.
    pub sim_time: f64,
}

impl SimulationEngine {
    /// New engine over an explicit body registry.
    pub fn new(system: SolarSystem) -> Self {
        Self {
            world: World::new(),
            system,
            physics: PhysicsEngine::default(),
            sim_time: 0.0,
        }
    }

    /// New engine over the standard Sol system.
    pub fn with_standard_system() -> Self {
        Self::new(generation::standard_system())
    }

    /// Spawn a spacecraft with its gravity source and zeroed flight
    /// statistics. The returned entity is the craft's handle for the
    /// rest of the session.
    pub fn spawn_spacecraft(
        &mut self,
        craft: Spacecraft,
        reference_body: impl Into<String>,
    ) -> Entity {
        self.world.spawn((
            craft,
            FlightController::new(reference_body),
            FlightStats::default(),
        ))
    }

    /// Advance the whole simulation by `dt` seconds.
    ///
    /// Tick order: propellant consumption and thrust, life support,
    /// gravity from each craft's reference body, then semi-implicit
    /// Euler integration. Negative `dt` is rejected before any state
    /// changes.
    pub fn update(&mut self, dt: f64) -> Result<(), SimError> {
        if dt < 0.0 {
            return Err(SimError::InvalidTimestep { dt });
        }

        propulsion_system(&mut self.world, &self.physics, dt)?;
        life_support_system(&mut self.world, dt)?;
        gravity_system(&mut self.world, &self.system, &self.physics);
        integration_system(&mut self.world, dt)?;

        self.sim_time += dt;
        Ok(())
    }

    /// Command a craft's throttle. Returns false for a dead handle.
    pub fn set_throttle(&mut self, entity: Entity, percentage: f64) -> bool {
        match self.world.get::<&mut Spacecraft>(entity) {
            Ok(mut craft) => {
                craft.set_throttle(percentage);
                true
            }
            Err(_) => false,
        }
    }

    /// Re-point a craft's gravity source. Returns false for a dead handle.
    pub fn set_reference_body(&mut self, entity: Entity, body_id: impl Into<String>) -> bool {
        match self.world.get::<&mut FlightController>(entity) {
            Ok(mut controller) => {
                controller.reference_body = body_id.into();
                true
            }
            Err(_) => false,
        }
    }

    pub fn spacecraft(&self, entity: Entity) -> Option<hecs::Ref<'_, Spacecraft>> {
        self.world.get::<&Spacecraft>(entity).ok()
    }

    pub fn spacecraft_mut(&mut self, entity: Entity) -> Option<hecs::RefMut<'_, Spacecraft>> {
        self.world.get::<&mut Spacecraft>(entity).ok()
    }

    pub fn stats(&self, entity: Entity) -> Option<hecs::Ref<'_, FlightStats>> {
        self.world.get::<&FlightStats>(entity).ok()
    }

    pub fn spacecraft_count(&self) -> usize {
        self.world.query::<&Spacecraft>().iter().count()
    }

    /// Snapshot the engine into a writer (bincode, versioned).
    pub fn save<W: std::io::Write>(&self, writer: W) -> Result<(), SaveError> {
        persistence::save_engine(writer, self)
    }

    /// Replace this engine's state with a snapshot from a reader.
    pub fn load<R: std::io::Read>(&mut self, reader: R) -> Result<(), SaveError> {
        let loaded = persistence::load_engine(reader)?;
        *self = loaded;
        Ok(())
    }
}
