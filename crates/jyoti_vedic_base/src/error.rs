//! Error types for Vedic calculations.

use jyoti_core::EngineError;
use jyoti_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris.
    #[error("ephemeris error: {0}")]
    Engine(#[from] EngineError),
    /// Error from civil-time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Malformed or out-of-range input.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A graha needed by a rule or dasha is absent from the chart.
    #[error("incomplete chart: {0} is missing")]
    IncompleteChart(&'static str),
    /// Iterative algorithm did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
