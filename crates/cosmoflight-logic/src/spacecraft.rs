//! Spacecraft state — propulsion, kinematics, damage, and life support.
//!
//! Everything here is continuous state with derived categorical status;
//! there is no mode enum. Mutators clamp: fuel stays in
//! [0, max_fuel_capacity], throttle in [0, 100], oxygen floors at 0.
//! Timestep operations reject negative `dt` and are otherwise total.

use serde::{Deserialize, Serialize};

use crate::constants::{life_support, FUEL_DENSITY, STANDARD_GRAVITY};
use crate::error::SimError;
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

/// Hull class of a spacecraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipType {
    Scout,
    Freighter,
    Fighter,
}

/// Derived cabin-health indicator, recomputed from the oxygen level on
/// every life-support update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeSupportStatus {
    /// Oxygen above 50%.
    Nominal,
    /// Oxygen above 20%, up to and including 50%.
    Warning,
    /// Oxygen at or below 20%.
    Critical,
}

impl LifeSupportStatus {
    pub fn from_oxygen(level: f64) -> Self {
        if level > life_support::NOMINAL_OXYGEN {
            Self::Nominal
        } else if level > life_support::WARNING_OXYGEN {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

/// Propulsion constants fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacecraftSpec {
    /// Mass without propellant (kg).
    pub dry_mass: f64,
    /// Tank capacity (L).
    pub max_fuel_capacity: f64,
    /// Maximum engine thrust (N).
    pub max_thrust: f64,
    /// Specific impulse (s).
    pub specific_impulse: f64,
    /// Nominal cruising speed (m/s).
    pub cruise_speed: f64,
}

/// A player- or AI-controlled spacecraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacecraft {
    // Identity
    pub id: String,
    pub name: String,
    pub ship_type: ShipType,

    // Propulsion constants
    pub spec: SpacecraftSpec,
    /// Propellant on board (L), kept within [0, max_fuel_capacity].
    current_fuel: f64,

    // Kinematic state
    pub position: Vector3,
    /// m/s
    pub velocity: Vector3,
    /// m/s², written each tick by the acceleration pass
    pub acceleration: Vector3,
    pub orientation: Quaternion,
    /// rad/s, inertial frame
    pub angular_velocity: Vector3,

    // Propulsion state
    /// Commanded fraction of max thrust, 0–1. Derived from throttle.
    pub thrust_level: f64,
    /// Body-frame thrust axis; need not be unit length.
    pub thrust_vector: Vector3,
    /// UI-facing throttle percentage, 0–100.
    pub throttle: f64,
    /// Doubles propellant consumption while set.
    pub boost_active: bool,

    // Damage & defense
    pub shields_active: bool,
    /// 0 (destroyed) to 1 (pristine).
    pub hull_integrity: f64,

    // Life support
    /// 0–100 percentage points.
    pub oxygen_level: f64,
    /// kPa
    pub cabin_pressure: f64,
    /// °C
    pub cabin_temp: f64,
    pub life_support_status: LifeSupportStatus,
}

impl Spacecraft {
    /// New spacecraft at the origin with full tanks and nominal cabin.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ship_type: ShipType,
        spec: SpacecraftSpec,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ship_type,
            current_fuel: spec.max_fuel_capacity,
            spec,
            position: Vector3::ZERO,
            velocity: Vector3::ZERO,
            acceleration: Vector3::ZERO,
            orientation: Quaternion::IDENTITY,
            angular_velocity: Vector3::ZERO,
            thrust_level: 0.0,
            thrust_vector: Vector3::new(1.0, 0.0, 0.0),
            throttle: 0.0,
            boost_active: false,
            shields_active: false,
            hull_integrity: 1.0,
            oxygen_level: 100.0,
            cabin_pressure: life_support::DEFAULT_CABIN_PRESSURE,
            cabin_temp: life_support::DEFAULT_CABIN_TEMP,
            life_support_status: LifeSupportStatus::Nominal,
        }
    }

    /// Total mass including propellant (kg): dry mass plus tank volume
    /// converted at the fixed fuel density.
    pub fn current_mass(&self) -> f64 {
        self.spec.dry_mass + self.current_fuel * FUEL_DENSITY
    }

    /// Propellant on board (L).
    pub fn current_fuel(&self) -> f64 {
        self.current_fuel
    }

    /// Set the propellant level directly, clamped to the tank.
    pub fn set_fuel(&mut self, litres: f64) {
        self.current_fuel = litres.clamp(0.0, self.spec.max_fuel_capacity);
    }

    /// Fuel as a percentage of capacity. Zero-capacity tanks report 0.
    pub fn fuel_percent(&self) -> f64 {
        if self.spec.max_fuel_capacity == 0.0 {
            return 0.0;
        }
        self.current_fuel / self.spec.max_fuel_capacity * 100.0
    }

    /// Burn propellant for `dt` seconds at the commanded thrust level.
    ///
    /// Flow rate is `thrust_level · max_thrust / (Isp · g)`, doubled under
    /// boost and capped at the propellant actually on board. Returns the
    /// litres consumed. Thrust level, not throttle, drives consumption.
    pub fn consume_fuel(&mut self, dt: f64) -> Result<f64, SimError> {
        if dt < 0.0 {
            return Err(SimError::InvalidTimestep { dt });
        }
        if self.thrust_level <= 0.0 {
            return Ok(0.0);
        }

        let fuel_per_second =
            self.thrust_level * self.spec.max_thrust / (self.spec.specific_impulse * STANDARD_GRAVITY);
        let mut consumed = fuel_per_second * dt;
        if self.boost_active {
            consumed *= 2.0;
        }
        consumed = consumed.min(self.current_fuel);
        self.current_fuel -= consumed;
        Ok(consumed)
    }

    /// Command a throttle percentage. Clamped to [0, 100]; the thrust
    /// level is derived from it.
    pub fn set_throttle(&mut self, percentage: f64) {
        self.throttle = percentage.clamp(0.0, 100.0);
        self.thrust_level = self.throttle / 100.0;
    }

    /// Advance life support by `dt` seconds: oxygen drains at a fixed
    /// rate, floored at zero, and the derived status is recomputed.
    pub fn update_life_support(&mut self, dt: f64) -> Result<(), SimError> {
        if dt < 0.0 {
            return Err(SimError::InvalidTimestep { dt });
        }
        self.oxygen_level = (self.oxygen_level - life_support::OXYGEN_DRAIN_RATE * dt).max(0.0);
        self.life_support_status = LifeSupportStatus::from_oxygen(self.oxygen_level);
        Ok(())
    }

    /// Set the oxygen level directly (resupply, cabin breach), clamped to
    /// [0, 100]; the derived status is recomputed.
    pub fn set_oxygen_level(&mut self, level: f64) {
        self.oxygen_level = level.clamp(0.0, 100.0);
        self.life_support_status = LifeSupportStatus::from_oxygen(self.oxygen_level);
    }

    /// Set hull integrity, clamped to [0, 1].
    pub fn set_hull_integrity(&mut self, integrity: f64) {
        self.hull_integrity = integrity.clamp(0.0, 1.0);
    }

    /// Body-frame thrust force (N) at the current command: the normalized
    /// thrust axis scaled by commanded thrust. Zero when the engine is
    /// idle, the tanks are dry, or the thrust axis degenerates.
    pub fn current_thrust(&self) -> Vector3 {
        if self.thrust_level <= 0.0 || self.current_fuel <= 0.0 {
            return Vector3::ZERO;
        }
        self.thrust_vector.normalize() * (self.thrust_level * self.spec.max_thrust)
    }
}
