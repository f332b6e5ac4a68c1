//! Engine-side components attached to spacecraft entities.
//!
//! The spacecraft itself (from `cosmoflight-logic`) is one component;
//! these carry the per-entity state that only the engine cares about.

use serde::{Deserialize, Serialize};

/// Which celestial body the driver selected as this craft's gravity
/// source. Gravity is computed against exactly one body per tick; the
/// caller (typically a front end tracking the nearest body) decides
/// which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightController {
    pub reference_body: String,
}

impl FlightController {
    pub fn new(reference_body: impl Into<String>) -> Self {
        Self {
            reference_body: reference_body.into(),
        }
    }
}

/// Accumulated flight outputs, polled by external mission trackers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightStats {
    /// Simulated seconds this craft has been stepped.
    pub elapsed_time: f64,
    /// Path length covered (m), accumulated per integration step.
    pub distance_traveled: f64,
    /// Propellant burned over the craft's lifetime (L).
    pub fuel_consumed: f64,
}
