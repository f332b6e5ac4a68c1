//! Errors for caller misuse outside the documented domain.
//!
//! The simulation core favours total functions: degenerate numerical
//! inputs (zero vectors, zero masses, zero separations) produce defined
//! zero/identity results instead of faults. The only thing that errors is
//! a caller handing in arguments no timestep loop should ever produce.

use thiserror::Error;

/// Rejected caller input.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// A time delta below zero was supplied to a timestep operation.
    #[error("invalid timestep: dt must be non-negative, got {dt}")]
    InvalidTimestep { dt: f64 },
}
