//! Ephemeris seam for the jyoti engine.
//!
//! Everything downstream reads planetary positions through the
//! [`Ephemeris`] trait: geocentric ecliptic coordinates referred to the mean
//! ecliptic and equinox of J2000, evaluated at a Julian Date in TT. The
//! bundled [`AnalyticEphemeris`] satisfies the trait without external data
//! files; a kernel-backed source can be dropped in behind the same trait.

pub mod analytic;
pub mod kepler;
pub mod moon;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analytic::{AnalyticConfig, AnalyticEphemeris};

/// Astronomical bodies an ephemeris must provide.
///
/// Lunar nodes are not bodies; they are derived in `jyoti_vedic_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies in a fixed order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

/// Geocentric ecliptic position (mean ecliptic and equinox of J2000).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Ephemeris errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid ephemeris config: {0}")]
    InvalidConfig(&'static str),
    #[error("epoch JD {epoch_tt_jd} (TT) is outside the supported range {start_jd}..{end_jd}")]
    EpochOutOfRange {
        epoch_tt_jd: f64,
        start_jd: f64,
        end_jd: f64,
    },
    #[error("body {0:?} is not provided by this ephemeris")]
    UnsupportedBody(Body),
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}

/// A source of geocentric planetary positions.
///
/// Implementations must be deterministic and free of interior mutability
/// visible to callers, so one instance can serve concurrent requests.
pub trait Ephemeris: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Inclusive JD (TT) range this source can evaluate.
    fn supported_range(&self) -> (f64, f64);

    /// Geocentric ecliptic position of `body` at `jd_tt`.
    fn ecliptic_j2000(&self, body: Body, jd_tt: f64) -> Result<EclipticPosition, EngineError>;

    /// Fail with [`EngineError::EpochOutOfRange`] when `jd_tt` is not covered.
    fn check_epoch(&self, jd_tt: f64) -> Result<(), EngineError> {
        let (start_jd, end_jd) = self.supported_range();
        if !(start_jd..=end_jd).contains(&jd_tt) {
            return Err(EngineError::EpochOutOfRange {
                epoch_tt_jd: jd_tt,
                start_jd,
                end_jd,
            });
        }
        Ok(())
    }
}
