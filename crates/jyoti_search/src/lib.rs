//! Ephemeris-driven Vedic computations.
//!
//! This crate provides:
//! - Sidereal graha positions, ascendant and house cusps for a birth moment
//! - Birth chart casting with dosha and yoga detection
//! - Dasha timelines and snapshots straight from birth data
//! - Panchang for a civil date: the five limbs with start/end times,
//!   sunrise/sunset, moonrise/moonset and the daylight windows
//! - Muhurat search for life events over a date range or calendar month

pub mod dasha;
pub mod error;
pub mod jyotish;
pub mod muhurat;
pub mod muhurat_types;
pub mod panchang;
pub mod panchang_types;
pub mod positions;
pub(crate) mod search_util;

pub use dasha::{ActivePeriod, DashaSnapshot, dasha_snapshot_at, dasha_timeline_for_birth, snapshot};
pub use error::SearchError;
pub use jyotish::{ChartConfig, build_chart, graha_sidereal_longitudes};
pub use muhurat::{find_muhurat, monthly_auspicious_dates};
pub use muhurat_types::{MIN_WINDOW_MINUTES, MuhuratConfig, MuhuratWindow};
pub use panchang::{
    elongation_at, moon_sidereal_longitude_at, panchang_for_date, sidereal_sum_at,
    vedic_day_sunrises,
};
pub use panchang_types::{
    KaranaInfo, PanchangConfig, PanchangDay, PanchangNakshatraInfo, TimeWindow, TithiInfo, YogaInfo,
};
pub use positions::{
    ascendant_longitude, ayanamsha_deg, graha_sidereal_longitude, house_cusps, positions,
};
