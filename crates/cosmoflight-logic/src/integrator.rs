//! Fixed-timestep integration — semi-implicit (symplectic) Euler.
//!
//! The update order is part of the public contract: velocity first from
//! the stored acceleration, then position from the *new* velocity. That
//! ordering is what keeps near-circular trajectories from spiralling the
//! way explicit Euler does, and it makes trajectories reproducible: two
//! simulations stepped with identical inputs produce identical state.
//!
//! Orientation advances by the first-order quaternion update
//! `q' = normalize(q + ½·ω⊗q·dt)` from the inertial-frame angular
//! velocity.

use crate::error::SimError;
use crate::quaternion::Quaternion;
use crate::spacecraft::Spacecraft;

/// Advance a spacecraft's kinematic state by `dt` seconds using the
/// acceleration already stored on it. Returns the distance covered this
/// step (m) so drivers can accumulate flight statistics.
pub fn integrate(craft: &mut Spacecraft, dt: f64) -> Result<f64, SimError> {
    if dt < 0.0 {
        return Err(SimError::InvalidTimestep { dt });
    }

    // Semi-implicit Euler: velocity before position.
    craft.velocity = craft.velocity + craft.acceleration * dt;
    let displacement = craft.velocity * dt;
    craft.position = craft.position + displacement;

    // Attitude kinematics: dq/dt = ½·ω⊗q with ω as a pure quaternion.
    let omega = craft.angular_velocity;
    if omega != crate::vector::Vector3::ZERO {
        let omega_q = Quaternion::new(0.0, omega.x, omega.y, omega.z);
        let dq = (omega_q * craft.orientation).scale(0.5 * dt);
        craft.orientation = craft.orientation.add(dq).normalize();
    }

    Ok(displacement.magnitude())
}
