//! Types for panchang results. All instants are local civil date-times at
//! the requested timezone offset.

use chrono::{NaiveDate, NaiveDateTime};
use jyoti_vedic_base::{
    AyanamshaSystem, GeoLocation, Karana, Nakshatra, Paksha, RiseSetConfig, Tithi, Vaar, Yoga,
};
use serde::{Deserialize, Serialize};

/// Options for the panchang and muhurat searches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangConfig {
    /// Sidereal reference for the nakshatra and yoga.
    pub ayanamsha: AyanamshaSystem,
    pub riseset: RiseSetConfig,
}

/// A local time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Tithi prevailing at sunrise with its start/end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    pub start: NaiveDateTime,
    /// May fall on the next calendar date.
    pub end: NaiveDateTime,
}

/// Moon's nakshatra at sunrise with its start/end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchangNakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada at sunrise (1-4).
    pub pada: u8,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Luni-solar yoga at sunrise with its start/end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Karana at sunrise with its start/end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based slot in the synodic month (0-59).
    pub karana_index: u8,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The five limbs and daylight windows of one civil day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanchangDay {
    pub date: NaiveDate,
    pub location: GeoLocation,
    pub tz_offset_hours: f64,
    pub vaar: Vaar,
    pub tithi: TithiInfo,
    pub nakshatra: PanchangNakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub moonrise: Option<NaiveDateTime>,
    pub moonset: Option<NaiveDateTime>,
    pub rahu_kaal: TimeWindow,
    pub yamagandam: TimeWindow,
    pub gulika_kaal: TimeWindow,
    pub abhijit: TimeWindow,
    /// False for Rikta tithis, Amavasya, Vishti karana or an inauspicious yoga.
    pub auspicious: bool,
}
