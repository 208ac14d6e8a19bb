//! Facade error type.
//!
//! Lower layers each carry their own error enum; callers of the facade see
//! one flat set of categories.

use jyoti_config::ConfigError;
use jyoti_core::EngineError;
use jyoti_search::SearchError;
use jyoti_time::TimeError;
use jyoti_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JyotiError {
    /// Bad birth data, coordinates, dates, or an epoch the ephemeris does not cover.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A graha needed for the computation is missing from the chart.
    #[error("{0}")]
    IncompleteChart(String),
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),
    /// Polar day or night on the requested date.
    #[error("no sunrise: {0}")]
    NoSunrise(String),
    #[error("no convergence: {0}")]
    NoConvergence(String),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("global jyotish instance not initialized; call jyoti_rs::init() first")]
    NotInitialized,
    #[error("global jyotish instance already initialized")]
    AlreadyInitialized,
}

impl From<EngineError> for JyotiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::EpochOutOfRange { .. } => Self::InvalidInput(e.to_string()),
            _ => Self::EphemerisUnavailable(e.to_string()),
        }
    }
}

impl From<TimeError> for JyotiError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<VedicError> for JyotiError {
    fn from(e: VedicError) -> Self {
        match &e {
            VedicError::Engine(inner) => inner.clone().into(),
            VedicError::IncompleteChart(_) => Self::IncompleteChart(e.to_string()),
            VedicError::NoConvergence(what) => Self::NoConvergence((*what).to_string()),
            _ => Self::InvalidInput(e.to_string()),
        }
    }
}

impl From<SearchError> for JyotiError {
    fn from(e: SearchError) -> Self {
        match &e {
            SearchError::Engine(inner) => inner.clone().into(),
            SearchError::Vedic(inner) => inner.clone().into(),
            SearchError::NoSunrise(what) => Self::NoSunrise((*what).to_string()),
            SearchError::NoConvergence(what) => Self::NoConvergence((*what).to_string()),
            _ => Self::InvalidInput(e.to_string()),
        }
    }
}
