//! Dasha timelines straight from birth data.

use jyoti_core::Ephemeris;
use jyoti_vedic_base::dasha::generate;
use jyoti_vedic_base::{
    BirthInput, DashaEntity, DashaLevel, DashaSystem, DashaTimeline, Graha, NodeMode,
    nakshatra_from_longitude,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::positions::positions;

/// One running period in a [`DashaSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePeriod {
    pub entity: DashaEntity,
    pub level: DashaLevel,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Periods running at one instant, Mahadasha first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSnapshot {
    pub system: DashaSystem,
    pub query_jd: f64,
    pub periods: Vec<ActivePeriod>,
    /// Elapsed share of the running Mahadasha, 0-100.
    pub progression_percent: Option<f64>,
}

fn moon_longitude(engine: &dyn Ephemeris, input: &BirthInput) -> Result<f64, SearchError> {
    positions(engine, input, NodeMode::Mean)?
        .into_iter()
        .find(|p| p.graha == Graha::Chandra)
        .map(|p| p.longitude)
        .ok_or(SearchError::Vedic(jyoti_vedic_base::VedicError::IncompleteChart("Chandra")))
}

/// Dasha timeline for a birth without casting the full chart.
#[tracing::instrument(skip(engine), level = "debug")]
pub fn dasha_timeline_for_birth(
    engine: &dyn Ephemeris,
    input: &BirthInput,
    system: DashaSystem,
    depth: u8,
) -> Result<DashaTimeline, SearchError> {
    let info = nakshatra_from_longitude(moon_longitude(engine, input)?);
    Ok(generate(system, info.nakshatra, info.degrees_in_nakshatra, input.jd_ut(), depth)?)
}

/// Running periods at `query_jd` (JD UT).
pub fn dasha_snapshot_at(
    engine: &dyn Ephemeris,
    input: &BirthInput,
    system: DashaSystem,
    depth: u8,
    query_jd: f64,
) -> Result<DashaSnapshot, SearchError> {
    let timeline = dasha_timeline_for_birth(engine, input, system, depth)?;
    Ok(snapshot(&timeline, query_jd))
}

/// Snapshot of an existing timeline.
pub fn snapshot(timeline: &DashaTimeline, query_jd: f64) -> DashaSnapshot {
    let periods = timeline
        .active_periods(query_jd)
        .into_iter()
        .map(|p| ActivePeriod { entity: p.entity, level: p.level, start_jd: p.start_jd, end_jd: p.end_jd })
        .collect();
    DashaSnapshot {
        system: timeline.system,
        query_jd,
        periods,
        progression_percent: timeline.progression_percent(query_jd),
    }
}
