//! Orientation algebra — unit quaternions and Euler conversions.
//!
//! Construction does not enforce the unit-norm invariant; `normalize` is
//! an explicit operation, and a zero-norm quaternion normalizes to the
//! identity. Euler angles are (pitch, yaw, roll) in radians, composed in
//! yaw-pitch-roll (ZYX) order.

use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// Orientation quaternion: `w` scalar part, `(x, y, z)` vector part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// No rotation.
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Build from Euler angles (radians), yaw-pitch-roll composition.
    pub fn from_euler(pitch: f64, yaw: f64, roll: f64) -> Self {
        let cy = (yaw * 0.5).cos();
        let sy = (yaw * 0.5).sin();
        let cp = (pitch * 0.5).cos();
        let sp = (pitch * 0.5).sin();
        let cr = (roll * 0.5).cos();
        let sr = (roll * 0.5).sin();

        Self {
            w: cy * cp * cr + sy * sp * sr,
            x: cy * cp * sr - sy * sp * cr,
            y: sy * cp * sr + cy * sp * cr,
            z: sy * cp * cr - cy * sp * sr,
        }
    }

    /// Extract (pitch, yaw, roll) in radians.
    ///
    /// The pitch argument to `asin` is clamped to [-1, 1] so accumulated
    /// rounding near the poles cannot push it out of the trig domain.
    pub fn to_euler(&self) -> (f64, f64, f64) {
        let sin_pitch = (2.0 * (self.w * self.y - self.z * self.x)).clamp(-1.0, 1.0);
        let pitch = sin_pitch.asin();
        let yaw = (2.0 * (self.w * self.z + self.x * self.y))
            .atan2(1.0 - 2.0 * (self.y * self.y + self.z * self.z));
        let roll = (2.0 * (self.w * self.x + self.y * self.z))
            .atan2(1.0 - 2.0 * (self.x * self.x + self.y * self.y));
        (pitch, yaw, roll)
    }

    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit quaternion in the same direction. A zero-norm quaternion
    /// normalizes to the identity, mirroring the vector policy.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        if mag == 0.0 {
            return Self::IDENTITY;
        }
        Self {
            w: self.w / mag,
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Rotate a vector by this quaternion (q·v·q⁻¹ for unit q).
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        let qv = Self { w: 0.0, x: v.x, y: v.y, z: v.z };
        let rotated = *self * qv * self.conjugate();
        Vector3::new(rotated.x, rotated.y, rotated.z)
    }

    /// Component-wise scale. Used by the integrator on raw (non-unit)
    /// quaternion derivatives.
    pub fn scale(&self, s: f64) -> Self {
        Self {
            w: self.w * s,
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Component-wise sum. Produces a non-unit quaternion; callers
    /// normalize after integrating.
    pub fn add(&self, other: Self) -> Self {
        Self {
            w: self.w + other.w,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Components as an ordered (w, x, y, z) tuple, for snapshot consumers.
    pub fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    /// Hamilton product.
    fn mul(self, r: Self) -> Self {
        Self {
            w: self.w * r.w - self.x * r.x - self.y * r.y - self.z * r.z,
            x: self.w * r.x + self.x * r.w + self.y * r.z - self.z * r.y,
            y: self.w * r.y - self.x * r.z + self.y * r.w + self.z * r.x,
            z: self.w * r.z + self.x * r.y - self.y * r.x + self.z * r.w,
        }
    }
}
