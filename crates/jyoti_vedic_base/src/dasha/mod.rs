//! Dasha (planetary period) timelines.
//!
//! Two systems: Vimshottari (nine graha lords, 120 years) and Yogini (eight
//! yoginis, 36 years). Each timeline is an owned tree of up to three levels,
//! Mahadasha through Pratyantardasha.

pub mod balance;
pub mod data;
pub mod generate;
pub mod query;
pub mod subperiod;
pub mod types;

pub use data::{DashaCycle, VIMSHOTTARI_SEQUENCE, YOGINI_SEQUENCE, yogini_graha};
pub use generate::{generate, timeline_for_chart};
pub use query::find_active_period;
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_DEPTH, DashaBalance, DashaEntity, DashaLevel, DashaPeriod,
    DashaSystem, DashaTimeline, MAX_DASHA_DEPTH, Yogini,
};
