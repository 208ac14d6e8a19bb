//! Types for sunrise/sunset and moonrise/moonset.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Mean Earth radius for the horizon dip.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude, north positive, [-90, 90].
    pub latitude_deg: f64,
    /// Longitude, east positive, [-180, 180].
    pub longitude_deg: f64,
    /// Height above sea level in metres.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self { latitude_deg, longitude_deg, altitude_m }
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(VedicError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Rise/set event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
    Moonrise,
    Moonset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise | Self::Moonrise)
    }
}

/// Horizon model for solar rise/set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon, arcminutes.
    pub refraction_arcmin: f64,
    /// Solar semidiameter, arcminutes.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observers above sea level.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Depression of the solar centre below the geometric horizon at the event.
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            // dip = sqrt(2h/R) rad
            base + (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            base
        }
    }

    /// Moon-rise depression: refraction less the parallax-adjusted semidiameter.
    pub fn lunar_target_altitude_deg(&self, horizontal_parallax_deg: f64) -> f64 {
        0.7275 * horizontal_parallax_deg - self.refraction_arcmin / 60.0
    }
}

/// Outcome of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RiseSetResult {
    /// The event occurs at this JD (UT).
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Body stays below the horizon all day.
    NeverRises,
    /// Body stays above the horizon all day.
    NeverSets,
}

impl RiseSetResult {
    pub fn jd_ut(&self) -> Option<f64> {
        match *self {
            Self::Event { jd_ut, .. } => Some(jd_ut),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_depression_is_50_arcmin() {
        let d = RiseSetConfig::default().horizon_depression_deg(0.0);
        assert!((d - 50.0 / 60.0).abs() < 1e-10);
    }

    #[test]
    fn dip_at_1000m_about_one_degree() {
        let d = RiseSetConfig::default().horizon_depression_deg(1000.0);
        let extra = d - 50.0 / 60.0;
        assert!((0.9..1.2).contains(&extra), "extra = {extra}");
    }

    #[test]
    fn dip_disabled() {
        let c = RiseSetConfig { altitude_correction: false, ..Default::default() };
        assert!((c.horizon_depression_deg(5000.0) - 50.0 / 60.0).abs() < 1e-10);
    }

    #[test]
    fn lunar_target_near_zero_for_mean_parallax() {
        // mean parallax 57' puts the target at about +7.5'
        let h0 = RiseSetConfig::default().lunar_target_altitude_deg(57.0 / 60.0);
        assert!((h0 - 0.1245).abs() < 0.01, "h0 = {h0}");
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(28.6, 77.2, 0.0).validate().is_ok());
        assert!(GeoLocation::new(91.0, 0.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -180.5, 0.0).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn rising_flags() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(RiseSetEvent::Moonrise.is_rising());
        assert!(!RiseSetEvent::Moonset.is_rising());
    }
}
