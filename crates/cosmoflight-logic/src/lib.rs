//! Pure flight-simulation logic for Cosmoflight.
//!
//! This crate contains the numerical core that is independent of any
//! engine, database, or runtime: functions take plain data and return
//! results, making them unit-testable and portable across the native
//! engine, headless tools, and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`body`] | Celestial bodies — mass, radius, atmosphere, orbit data |
//! | [`constants`] | Physical constants and life-support thresholds |
//! | [`error`] | Caller-misuse errors (`SimError`) |
//! | [`integrator`] | Semi-implicit Euler timestep integration |
//! | [`physics`] | Gravitational force and force→acceleration |
//! | [`quaternion`] | Orientation algebra and Euler conversions |
//! | [`solar_system`] | Body registry with nearest-body queries |
//! | [`spacecraft`] | Spacecraft propulsion and life-support state |
//! | [`vector`] | 3D vector algebra |

pub mod body;
pub mod constants;
pub mod error;
pub mod integrator;
pub mod physics;
pub mod quaternion;
pub mod solar_system;
pub mod spacecraft;
pub mod vector;

pub use body::{BodyType, CelestialBody, OrbitalElements};
pub use error::SimError;
pub use physics::PhysicsEngine;
pub use quaternion::Quaternion;
pub use solar_system::SolarSystem;
pub use spacecraft::{LifeSupportStatus, ShipType, Spacecraft, SpacecraftSpec};
pub use vector::Vector3;
