//! Error types for searches and chart casting.

use jyoti_core::EngineError;
use jyoti_time::TimeError;
use jyoti_vedic_base::VedicError;
use thiserror::Error;

/// Errors from position, panchang and muhurat computations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the ephemeris.
    #[error("ephemeris error: {0}")]
    Engine(#[from] EngineError),
    /// Error from the Vedic rule layer.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Error from civil-time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid search parameters.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// A boundary search did not bracket its target.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// The Sun does not rise or set on the requested date.
    #[error("no sunrise: {0}")]
    NoSunrise(&'static str),
}
