//! Celestial bodies — physical attributes, atmosphere, and orbit data.
//!
//! Orbital elements are stored for consumers (and for an external orbit
//! driver that repositions bodies between ticks) but are never propagated
//! here. Position and velocity are plain mutable state.

use serde::{Deserialize, Serialize};

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::vector::Vector3;

/// Classification of a celestial body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Star,
    Planet,
    Moon,
    Asteroid,
}

/// Orbital elements, stored but not propagated by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Parent body id; `None` for the system's star.
    pub parent_id: Option<String>,
    /// Semi-major axis (m).
    pub semi_major_axis: f64,
    /// Eccentricity, 0–1.
    pub eccentricity: f64,
    /// Inclination (rad).
    pub inclination: f64,
    /// Orbital period (s).
    pub orbital_period: f64,
    /// Sidereal rotation period (s).
    pub rotation_period: f64,
    /// Mean orbital velocity (m/s).
    pub orbital_velocity: f64,
}

/// A star, planet, moon, or asteroid with gravitational and atmospheric
/// properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    // Identity
    pub id: String,
    pub name: String,
    pub body_type: BodyType,

    // Physical properties
    /// Mass (kg).
    pub mass: f64,
    /// Mean radius (m).
    pub radius: f64,
    /// Surface atmospheric pressure (kPa).
    pub atmosphere_pressure: f64,
    /// Atmospheric shell height above the surface (m).
    pub atmosphere_depth: f64,
    /// Surface temperature (K).
    pub temperature: f64,
    pub has_atmosphere: bool,
    pub has_water: bool,

    // Orbit
    pub orbit: OrbitalElements,

    // Mutable state, repositioned by an external orbit driver
    pub position: Vector3,
    pub velocity: Vector3,
}

impl CelestialBody {
    /// New body at the origin with no atmosphere and no orbit data.
    pub fn new(id: impl Into<String>, name: impl Into<String>, body_type: BodyType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body_type,
            mass: 0.0,
            radius: 0.0,
            atmosphere_pressure: 0.0,
            atmosphere_depth: 0.0,
            temperature: 0.0,
            has_atmosphere: false,
            has_water: false,
            orbit: OrbitalElements::default(),
            position: Vector3::ZERO,
            velocity: Vector3::ZERO,
        }
    }

    pub fn with_physical(mut self, mass: f64, radius: f64, temperature: f64) -> Self {
        self.mass = mass;
        self.radius = radius;
        self.temperature = temperature;
        self
    }

    pub fn with_atmosphere(mut self, pressure: f64, depth: f64) -> Self {
        self.has_atmosphere = true;
        self.atmosphere_pressure = pressure;
        self.atmosphere_depth = depth;
        self
    }

    pub fn with_water(mut self) -> Self {
        self.has_water = true;
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitalElements) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn with_position(mut self, position: Vector3, velocity: Vector3) -> Self {
        self.position = position;
        self.velocity = velocity;
        self
    }

    /// Gravitational acceleration at the nominal radius (m/s²).
    ///
    /// A zero-radius body reports zero rather than dividing by zero.
    pub fn surface_gravity(&self) -> f64 {
        if self.radius == 0.0 {
            return 0.0;
        }
        GRAVITATIONAL_CONSTANT * self.mass / (self.radius * self.radius)
    }

    /// Whether a point sits inside the body's atmospheric shell.
    pub fn is_in_atmosphere(&self, point: &Vector3) -> bool {
        if !self.has_atmosphere {
            return false;
        }
        point.distance(&self.position) <= self.radius + self.atmosphere_depth
    }

    /// Distance from a point to the nominal surface (m). Negative when
    /// the point is below the surface.
    pub fn distance_to_surface(&self, point: &Vector3) -> f64 {
        point.distance(&self.position) - self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> CelestialBody {
        CelestialBody::new("earth", "Earth", BodyType::Planet)
            .with_physical(5.972e24, 6.371e6, 288.0)
            .with_atmosphere(101.3, 1.0e5)
            .with_water()
    }

    #[test]
    fn test_surface_gravity_earth() {
        let g = earth().surface_gravity();
        assert!(g > 9.7 && g < 9.9, "earth surface gravity {g}");
    }

    #[test]
    fn test_surface_gravity_zero_radius() {
        let b = CelestialBody::new("point", "Point", BodyType::Asteroid)
            .with_physical(1.0e20, 0.0, 100.0);
        assert_eq!(b.surface_gravity(), 0.0);
    }

    #[test]
    fn test_in_atmosphere_boundaries() {
        let e = earth();
        // On the surface
        assert!(e.is_in_atmosphere(&Vector3::new(6.371e6, 0.0, 0.0)));
        // Exactly at the top of the shell
        assert!(e.is_in_atmosphere(&Vector3::new(6.371e6 + 1.0e5, 0.0, 0.0)));
        // Above the shell
        assert!(!e.is_in_atmosphere(&Vector3::new(6.371e6 + 1.1e5, 0.0, 0.0)));
    }

    #[test]
    fn test_no_atmosphere_flag_wins() {
        let rock = CelestialBody::new("rock", "Rock", BodyType::Asteroid)
            .with_physical(1.0e18, 1.0e4, 150.0);
        // Point dead centre: still not "in atmosphere" without the flag.
        assert!(!rock.is_in_atmosphere(&Vector3::ZERO));
    }

    #[test]
    fn test_distance_to_surface_sign() {
        let e = earth();
        assert!((e.distance_to_surface(&Vector3::new(7.0e6, 0.0, 0.0)) - 6.29e5).abs() < 1.0);
        // Below the nominal surface: negative, not an error.
        assert!(e.distance_to_surface(&Vector3::new(1.0e6, 0.0, 0.0)) < 0.0);
    }
}
