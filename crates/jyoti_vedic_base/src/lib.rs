//! Vedic primitives and rule engines built on ephemeris outputs.
//!
//! This crate provides:
//! - Graha, rashi, nakshatra and panchang element tables
//! - Ayanamsha for eight sidereal reference systems, lunar nodes, lagna
//! - Sunrise/sunset and moonrise/moonset
//! - The birth chart assembler and its dosha and yoga detectors
//! - Vimshottari and Yogini dasha trees
//! - Ashtakoot compatibility scoring and muhurat event rules
//!
//! Nothing here queries an ephemeris except the rise/set routines, which
//! take one as `&dyn Ephemeris`.

pub mod ashtakoot;
pub mod ayanamsha;
pub mod birth;
pub mod chart;
pub mod chart_yoga;
pub mod dasha;
pub mod dosha;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod karana;
pub mod lagna;
pub mod lunar_nodes;
pub mod muhurat_rules;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use ashtakoot::{
    CompatibilityLevel, CompatibilityResult, CriticalDosha, CriticalDoshaKind, GunaInputs,
    GunaSet, Koota, MAX_GUNA_TOTAL, score,
};
pub use ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg, ayanamsha_true_deg};
pub use birth::{BirthInput, BirthInputBuilder, ObservationMode};
pub use chart::{BirthChart, HouseSystem, PlanetPosition, RawPosition, assemble};
pub use chart_yoga::{ChartYoga, ChartYogaKind, detect_yogas};
pub use dasha::{
    DashaBalance, DashaEntity, DashaLevel, DashaPeriod, DashaSystem, DashaTimeline, Yogini,
    timeline_for_chart,
};
pub use dosha::{
    DetectionConfig, Dosha, DoshaKind, KaalSarpVariant, MangalReference, detect, detect_doshas,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use karana::{Karana, KaranaPosition, karana_from_elongation};
pub use lagna::{lagna_mc_from_lst, tropical_ascendant_deg, tropical_lagna_mc_deg};
pub use lunar_nodes::{LunarNode, NodeMode, lunar_node_deg};
pub use muhurat_rules::{ALL_MUHURAT_EVENTS, MuhuratEvent, MuhuratRule};
pub use nakshatra::{NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{ALL_RASHIS, Rashi};
pub use riseset::{approximate_local_noon_jd, compute_moon_rise_set, compute_sun_rise_set};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use tithi::{Paksha, Tithi, TithiPosition, tithi_from_elongation};
pub use util::{normalize_360, normalize_to_pm180};
pub use vaar::{Vaar, abhijit_window, day_segment, vaar_from_jd};
pub use yoga::{Yoga, YogaPosition, yoga_from_sum};
