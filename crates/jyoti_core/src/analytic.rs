//! Self-contained analytic ephemeris.
//!
//! - Sun: reflected Earth–Moon barycentre, with annual aberration.
//! - Mercury..Saturn: Keplerian elements, geocentric via the barycentre,
//!   one light-time iteration.
//! - Moon: truncated ELP-2000/82 series, carried from the equinox of date
//!   back to J2000 by removing general precession.
//!
//! Typical accuracy is under 0.01° for the Sun and Moon and a few
//! hundredths of a degree for the planets across 1800–2050, well inside one
//! nakshatra pada (3°20′).

use jyoti_frames::{cartesian_to_spherical, general_precession_longitude_deg};
use jyoti_time::{calendar_to_jd, jd_to_centuries, DAYS_PER_CENTURY};

use crate::kepler::{heliocentric_au, Orbit, AU_KM, LIGHT_DAYS_PER_AU};
use crate::moon::moon_of_date;
use crate::{Body, EclipticPosition, EngineError, Ephemeris};

/// Aberration constant κ in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.495_52;

/// Coverage settings for [`AnalyticEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticConfig {
    /// First covered JD (TT).
    pub start_jd: f64,
    /// Last covered JD (TT).
    pub end_jd: f64,
}

impl Default for AnalyticConfig {
    fn default() -> Self {
        Self {
            start_jd: calendar_to_jd(1800, 1, 1.0),
            end_jd: calendar_to_jd(2100, 1, 1.0),
        }
    }
}

impl AnalyticConfig {
    fn validate(&self) -> Result<(), EngineError> {
        if !(self.start_jd.is_finite() && self.end_jd.is_finite()) {
            return Err(EngineError::InvalidConfig("coverage bounds must be finite"));
        }
        if self.start_jd >= self.end_jd {
            return Err(EngineError::InvalidConfig("start_jd must precede end_jd"));
        }
        Ok(())
    }
}

/// Analytic ephemeris. Cheap to construct and `Send + Sync`.
#[derive(Debug, Clone, Default)]
pub struct AnalyticEphemeris {
    config: AnalyticConfig,
}

impl AnalyticEphemeris {
    /// Create an ephemeris with custom coverage.
    pub fn new(config: AnalyticConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticConfig {
        &self.config
    }
}

fn orbit_for(body: Body) -> Option<Orbit> {
    match body {
        Body::Mercury => Some(Orbit::Mercury),
        Body::Venus => Some(Orbit::Venus),
        Body::Mars => Some(Orbit::Mars),
        Body::Jupiter => Some(Orbit::Jupiter),
        Body::Saturn => Some(Orbit::Saturn),
        Body::Sun | Body::Moon => None,
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn sun_position(t: f64) -> EclipticPosition {
    let earth = heliocentric_au(Orbit::EarthMoonBary, t);
    let s = cartesian_to_spherical(&[-earth[0], -earth[1], -earth[2]]);
    let aberration = ABERRATION_ARCSEC / 3600.0 / s.distance;
    EclipticPosition {
        lon_deg: (s.lon_deg - aberration).rem_euclid(360.0),
        lat_deg: s.lat_deg,
        distance_km: s.distance * AU_KM,
    }
}

fn planet_position(orbit: Orbit, t: f64) -> EclipticPosition {
    let earth = heliocentric_au(Orbit::EarthMoonBary, t);
    let geometric = cartesian_to_spherical(&sub(heliocentric_au(orbit, t), earth));
    let light_time_centuries = geometric.distance * LIGHT_DAYS_PER_AU / DAYS_PER_CENTURY;
    let s = cartesian_to_spherical(&sub(heliocentric_au(orbit, t - light_time_centuries), earth));
    EclipticPosition {
        lon_deg: s.lon_deg,
        lat_deg: s.lat_deg,
        distance_km: s.distance * AU_KM,
    }
}

fn moon_position(t: f64) -> EclipticPosition {
    let p = moon_of_date(t);
    EclipticPosition {
        lon_deg: (p.lon_deg - general_precession_longitude_deg(t)).rem_euclid(360.0),
        lat_deg: p.lat_deg,
        distance_km: p.distance_km,
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn supported_range(&self) -> (f64, f64) {
        (self.config.start_jd, self.config.end_jd)
    }

    fn ecliptic_j2000(&self, body: Body, jd_tt: f64) -> Result<EclipticPosition, EngineError> {
        self.check_epoch(jd_tt)?;
        let t = jd_to_centuries(jd_tt);
        let pos = match body {
            Body::Sun => sun_position(t),
            Body::Moon => moon_position(t),
            other => match orbit_for(other) {
                Some(orbit) => planet_position(orbit, t),
                None => return Err(EngineError::UnsupportedBody(other)),
            },
        };
        tracing::trace!(body = body.name(), jd_tt, lon = pos.lon_deg, "analytic position");
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_covers_modern_era() {
        let eph = AnalyticEphemeris::default();
        let (start, end) = eph.supported_range();
        assert!(start < 2_415_020.5 && end > 2_460_000.5);
    }

    #[test]
    fn inverted_range_rejected() {
        let cfg = AnalyticConfig { start_jd: 10.0, end_jd: 5.0 };
        assert!(matches!(
            AnalyticEphemeris::new(cfg),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn sun_near_one_au() {
        let p = sun_position(0.2);
        assert!((p.distance_km / AU_KM - 1.0).abs() < 0.02);
        assert!(p.lat_deg.abs() < 0.01);
    }
}
