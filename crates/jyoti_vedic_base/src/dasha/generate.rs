//! Timeline generation from the Moon's nakshatra.

use tracing::debug;

use crate::chart::BirthChart;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::balance::{balance_days, elapsed_fraction};
use super::data::DashaCycle;
use super::subperiod::{Span, build_period, nominal_days};
use super::types::{DashaBalance, DashaLevel, DashaSystem, DashaTimeline, MAX_DASHA_DEPTH, DAYS_PER_YEAR};

/// Generate a full dasha timeline.
///
/// The first Mahadasha belongs to the lord of the Moon's nakshatra and runs
/// for the unspent share of its years. Full periods follow in cyclic order.
/// When the Moon was past the start of its nakshatra, a truncated period of
/// the starting lord closes the cycle so the Mahadashas span exactly the
/// system's total years.
#[tracing::instrument(level = "debug")]
pub fn generate(
    system: DashaSystem,
    moon_nakshatra: Nakshatra,
    moon_longitude_within_nakshatra: f64,
    birth_jd: f64,
    depth: u8,
) -> Result<DashaTimeline, VedicError> {
    if depth > MAX_DASHA_DEPTH {
        return Err(VedicError::InvalidInput("dasha depth must be 0-2"));
    }
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth JD must be finite"));
    }
    let elapsed = elapsed_fraction(moon_longitude_within_nakshatra)?;

    let cycle = DashaCycle::for_system(system);
    let first = cycle.starting_index(moon_nakshatra);
    let entry_days = nominal_days(&cycle, first);

    let mut mahadashas = Vec::with_capacity(cycle.len() + 1);
    let nominal_start = birth_jd - elapsed * entry_days;
    let mut cursor = nominal_start + entry_days;
    mahadashas.push(build_period(
        &cycle,
        cycle.entity_at(first),
        DashaLevel::Mahadasha,
        Span { nominal_start, nominal_end: cursor, start: birth_jd, end: cursor },
        depth,
    ));

    for k in 1..cycle.len() {
        let idx = first + k;
        let end = cursor + nominal_days(&cycle, idx);
        mahadashas.push(build_period(
            &cycle,
            cycle.entity_at(idx),
            DashaLevel::Mahadasha,
            Span::full(cursor, end),
            depth,
        ));
        cursor = end;
    }

    let closing_end = cursor + elapsed * entry_days;
    if closing_end > cursor {
        let span = Span {
            nominal_start: cursor,
            nominal_end: cursor + entry_days,
            start: cursor,
            end: closing_end,
        };
        mahadashas.push(build_period(&cycle, cycle.entity_at(first), DashaLevel::Mahadasha, span, depth));
    }

    let entry_years = cycle.years_of(first);
    let balance = DashaBalance {
        entity: cycle.entity_at(first),
        elapsed_fraction: elapsed,
        remaining_years: balance_days(entry_years, elapsed, DAYS_PER_YEAR) / DAYS_PER_YEAR,
    };
    debug!(
        lord = balance.entity.name(),
        remaining_years = balance.remaining_years,
        periods = mahadashas.len(),
        "dasha timeline generated"
    );

    Ok(DashaTimeline {
        system,
        birth_jd,
        total_years: cycle.total_years,
        balance,
        mahadashas,
    })
}

/// Timeline for a built chart, from its Moon position and birth moment.
pub fn timeline_for_chart(
    system: DashaSystem,
    chart: &BirthChart,
    depth: u8,
) -> Result<DashaTimeline, VedicError> {
    let moon = chart.require(Graha::Chandra)?;
    let info = nakshatra_from_longitude(moon.longitude);
    generate(system, info.nakshatra, info.degrees_in_nakshatra, chart.input().jd_ut(), depth)
}
