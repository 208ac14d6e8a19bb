//! Free functions over the global instance installed with [`crate::init`].

use chrono::NaiveDate;
use jyoti_search::{MuhuratWindow, PanchangDay};
use jyoti_vedic_base::{
    BirthChart, BirthInput, CompatibilityResult, DashaSystem, DashaTimeline, MuhuratEvent,
};

use crate::error::JyotiError;
use crate::global::jyotish;

pub fn chart(input: &BirthInput) -> Result<BirthChart, JyotiError> {
    jyotish()?.build_chart(input)
}

pub fn dasha(system: DashaSystem, chart: &BirthChart) -> Result<DashaTimeline, JyotiError> {
    jyotish()?.build_dasha_timeline(system, chart)
}

/// Ashtakoot match of two charts.
pub fn compatibility(groom: &BirthChart, bride: &BirthChart) -> Result<CompatibilityResult, JyotiError> {
    jyotish()?.match_charts(groom, bride)
}

pub fn panchang(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz_offset_hours: f64,
) -> Result<PanchangDay, JyotiError> {
    jyotish()?.compute_panchang(date, latitude_deg, longitude_deg, tz_offset_hours)
}

/// Windows at the configured default location.
pub fn muhurat(
    event: MuhuratEvent,
    start: NaiveDate,
    duration_days: u32,
) -> Result<Vec<MuhuratWindow>, JyotiError> {
    jyotish()?.find_muhurat(event, start, duration_days)
}

pub fn auspicious_dates(
    event: MuhuratEvent,
    year: i32,
    month: u32,
) -> Result<Vec<NaiveDate>, JyotiError> {
    jyotish()?.monthly_auspicious_dates(event, year, month)
}
