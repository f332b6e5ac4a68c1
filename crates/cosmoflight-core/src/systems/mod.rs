//! Simulation tick systems, run by the engine in a fixed order each
//! `update(dt)`: propulsion → life support → gravity → integration.

mod gravity;
mod integration;
mod life_support;
mod propulsion;

pub use gravity::gravity_system;
pub use integration::integration_system;
pub use life_support::life_support_system;
pub use propulsion::propulsion_system;
