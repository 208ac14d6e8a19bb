//! The configuration document. Every section and field has a default, so
//! an empty file is a valid config.

use jyoti_search::{ChartConfig, MIN_WINDOW_MINUTES, MuhuratConfig, PanchangConfig};
use jyoti_time::validate_tz_offset;
use jyoti_vedic_base::dasha::{DEFAULT_DASHA_DEPTH, MAX_DASHA_DEPTH};
use jyoti_vedic_base::{
    AyanamshaSystem, DashaSystem, DetectionConfig, GeoLocation, HouseSystem, MangalReference,
    NodeMode, ObservationMode, RiseSetConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `[chart]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSection {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    pub house_system: HouseSystem,
    pub observation: ObservationMode,
}

/// `[dosha]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoshaSection {
    pub mangal_reference: MangalReference,
}

/// `[dasha]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashaSection {
    pub system: DashaSystem,
    /// 0 = Mahadasha only, 2 = down to Pratyantardasha.
    pub depth: u8,
}

impl Default for DashaSection {
    fn default() -> Self {
        Self { system: DashaSystem::default(), depth: DEFAULT_DASHA_DEPTH }
    }
}

/// `[muhurat]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MuhuratSection {
    pub min_window_minutes: f64,
}

impl Default for MuhuratSection {
    fn default() -> Self {
        Self { min_window_minutes: MIN_WINDOW_MINUTES }
    }
}

/// `[location]`: where muhurat searches run when no place is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationSection {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub tz_offset_hours: f64,
}

impl Default for LocationSection {
    /// Ujjain, the traditional prime meridian of Indian astronomy.
    fn default() -> Self {
        Self { latitude_deg: 23.1765, longitude_deg: 75.7885, altitude_m: 491.0, tz_offset_hours: 5.5 }
    }
}

impl LocationSection {
    pub fn geo(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg, self.altitude_m)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JyotiConfig {
    pub chart: ChartSection,
    pub dosha: DoshaSection,
    pub dasha: DashaSection,
    pub riseset: RiseSetConfig,
    pub muhurat: MuhuratSection,
    pub location: LocationSection,
}

impl JyotiConfig {
    /// Reject values no computation can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dasha.depth > MAX_DASHA_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "dasha.depth must be 0-{MAX_DASHA_DEPTH}, got {}",
                self.dasha.depth
            )));
        }
        let rs = &self.riseset;
        if !(0.0..=120.0).contains(&rs.refraction_arcmin) {
            return Err(ConfigError::Invalid(format!(
                "riseset.refraction_arcmin must be 0-120, got {}",
                rs.refraction_arcmin
            )));
        }
        if !(0.0..=60.0).contains(&rs.semidiameter_arcmin) {
            return Err(ConfigError::Invalid(format!(
                "riseset.semidiameter_arcmin must be 0-60, got {}",
                rs.semidiameter_arcmin
            )));
        }
        let m = self.muhurat.min_window_minutes;
        if !(0.0..=720.0).contains(&m) {
            return Err(ConfigError::Invalid(format!("muhurat.min_window_minutes must be 0-720, got {m}")));
        }
        let loc = &self.location;
        self.location
            .geo()
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("location: {e}")))?;
        validate_tz_offset(loc.tz_offset_hours)
            .map_err(|e| ConfigError::Invalid(format!("location.tz_offset_hours: {e}")))?;
        Ok(())
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            node_mode: self.chart.node_mode,
            house_system: self.chart.house_system,
            detection: DetectionConfig { mangal_reference: self.dosha.mangal_reference },
        }
    }

    pub fn panchang_config(&self) -> PanchangConfig {
        PanchangConfig { ayanamsha: self.chart.ayanamsha, riseset: self.riseset }
    }

    pub fn muhurat_config(&self) -> MuhuratConfig {
        MuhuratConfig {
            panchang: self.panchang_config(),
            min_window_minutes: self.muhurat.min_window_minutes,
        }
    }
}
