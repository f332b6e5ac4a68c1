//! Cosmoflight simulation engine.
//!
//! Drives the pure logic in `cosmoflight-logic` through a fixed-timestep
//! loop: spacecraft live as entities in a hecs [`World`](hecs::World),
//! celestial bodies in a [`SolarSystem`](cosmoflight_logic::SolarSystem)
//! owned by the engine, and each `update(dt)` runs the tick systems in a
//! fixed order (propulsion → life support → gravity → integration).
//!
//! The engine performs no I/O of its own; [`persistence`] produces
//! versioned binary snapshots for whoever owns storage.

pub mod components;
pub mod engine;
pub mod generation;
pub mod persistence;
pub mod systems;

pub use components::{FlightController, FlightStats};
pub use engine::SimulationEngine;
pub use persistence::SaveError;
