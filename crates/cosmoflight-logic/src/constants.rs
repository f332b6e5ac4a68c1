//! Physical constants and life-support thresholds.
//!
//! Plain `f64` constants with no dependencies. Units are SI throughout
//! (kg, m, s, N, kPa) except where a field is explicitly documented
//! otherwise (fuel in litres, cabin temperature in °C).

/// Newtonian gravitational constant (m³·kg⁻¹·s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Standard gravity used in the fuel-rate formula (m/s²).
///
/// Kept at exactly 9.81; the propellant flow model is calibrated against
/// this value, not the 9.80665 convention.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Liquid-propellant density (kg/L) used to convert tank volume to mass.
pub const FUEL_DENSITY: f64 = 0.75;

/// Life-support thresholds and rates.
pub mod life_support {
    /// Oxygen drain in percentage points per second.
    pub const OXYGEN_DRAIN_RATE: f64 = 0.1;

    /// Above this oxygen level the cabin is nominal.
    pub const NOMINAL_OXYGEN: f64 = 50.0;

    /// Above this level (and at or below [`NOMINAL_OXYGEN`]) the cabin is
    /// in warning; at or below it the cabin is critical.
    pub const WARNING_OXYGEN: f64 = 20.0;

    /// Default cabin pressure (kPa).
    pub const DEFAULT_CABIN_PRESSURE: f64 = 101.3;

    /// Default cabin temperature (°C).
    pub const DEFAULT_CABIN_TEMP: f64 = 20.0;
}
