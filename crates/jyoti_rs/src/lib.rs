//! High-level facade for the jyoti Vedic astrology engine.
//!
//! Wraps an ephemeris and a [`JyotiConfig`] in one [`Jyotish`] handle whose
//! methods take civil dates and places directly. A process-wide instance
//! can also be installed for the free functions in [`convenience`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use jyoti_rs::*;
//!
//! let jyotish = Jyotish::new(JyotiConfig::default())?;
//! let input = jyotish
//!     .birth_input()
//!     .date(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
//!     .time(10, 30, 0)
//!     .location(28.6139, 77.2090)
//!     .tz_offset_hours(5.5)
//!     .build()?;
//! let chart = jyotish.build_chart(&input)?;
//! let dashas = jyotish.build_dasha_timeline(DashaSystem::Vimshottari, &chart)?;
//! println!("lagna {}, first mahadasha {:?}", chart.lagna().name(), dashas.mahadashas[0].entity);
//! ```

pub mod convenience;
pub mod error;
pub mod global;
pub mod jyotish;

pub use convenience::{auspicious_dates, chart, compatibility, dasha, muhurat, panchang};
pub use error::JyotiError;
pub use global::{init, is_initialized};
pub use jyotish::Jyotish;

// Re-exports so callers need only `use jyoti_rs::*`.
pub use jyoti_config::{ConfigError, JyotiConfig};
pub use jyoti_core::{AnalyticEphemeris, Ephemeris};
pub use jyoti_time::{jd_ut_to_local, naive_date_to_jd};
pub use jyoti_search::{
    ActivePeriod, DashaSnapshot, KaranaInfo, MuhuratWindow, PanchangDay, PanchangNakshatraInfo,
    TimeWindow, TithiInfo, YogaInfo,
};
pub use jyoti_vedic_base::{
    AyanamshaSystem, BirthChart, BirthInput, CompatibilityLevel, CompatibilityResult,
    DashaSystem, DashaTimeline, GeoLocation, Graha, GunaInputs, HouseSystem, MuhuratEvent,
    Nakshatra, NodeMode, ObservationMode, Rashi,
};
