//! Gravitational force and force→acceleration conversion.
//!
//! The engine is stateless apart from the gravitational constant. It
//! computes forces; advancing state from them belongs to the
//! [`integrator`](crate::integrator).

use serde::{Deserialize, Serialize};

use crate::body::CelestialBody;
use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::spacecraft::Spacecraft;
use crate::vector::Vector3;

/// Newtonian point-mass gravity between a spacecraft and one body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsEngine {
    pub gravitational_constant: f64,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
        }
    }
}

impl PhysicsEngine {
    /// Gravitational force (N) on the spacecraft from one body, pointing
    /// toward the body. Zero separation yields the zero vector rather
    /// than a singularity.
    pub fn gravitational_force(&self, craft: &Spacecraft, body: &CelestialBody) -> Vector3 {
        let r = craft.position - body.position;
        let distance_squared = r.magnitude_squared();
        if distance_squared == 0.0 {
            return Vector3::ZERO;
        }

        let magnitude =
            self.gravitational_constant * body.mass * craft.current_mass() / distance_squared;
        -r.normalize() * magnitude
    }

    /// Acceleration (m/s²) produced by a force on a given mass. A
    /// zero-mass input yields the zero vector.
    pub fn acceleration(&self, force: Vector3, mass: f64) -> Vector3 {
        if mass == 0.0 {
            return Vector3::ZERO;
        }
        force * (1.0 / mass)
    }
}
