//! The configured engine handle.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use jyoti_config::JyotiConfig;
use jyoti_core::{AnalyticEphemeris, Ephemeris};
use jyoti_search::{
    DashaSnapshot, MuhuratWindow, PanchangDay, build_chart, find_muhurat,
    monthly_auspicious_dates, panchang_for_date, snapshot,
};
use jyoti_vedic_base::{
    BirthChart, BirthInput, BirthInputBuilder, CompatibilityResult, DashaSystem, DashaTimeline,
    GeoLocation, GunaInputs, MuhuratEvent, score, timeline_for_chart,
};
use tracing::info;

use crate::error::JyotiError;

/// An ephemeris plus the options every computation runs with.
///
/// Immutable once built; share it across threads by reference.
pub struct Jyotish {
    engine: Box<dyn Ephemeris>,
    config: JyotiConfig,
}

impl fmt::Debug for Jyotish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jyotish")
            .field("engine", &self.engine.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Jyotish {
    /// Bundled analytic ephemeris with `config`.
    pub fn new(config: JyotiConfig) -> Result<Self, JyotiError> {
        Self::with_engine(Box::new(AnalyticEphemeris::default()), config)
    }

    /// Any ephemeris implementation with `config`.
    pub fn with_engine(engine: Box<dyn Ephemeris>, config: JyotiConfig) -> Result<Self, JyotiError> {
        config.validate()?;
        info!(
            engine = engine.name(),
            ayanamsha = %config.chart.ayanamsha,
            node_mode = ?config.chart.node_mode,
            "jyotish ready"
        );
        Ok(Self { engine, config })
    }

    /// Layered config load (file, `JYOTI_*` env) and the analytic ephemeris.
    pub fn load(config_path: Option<&Path>) -> Result<Self, JyotiError> {
        Self::new(JyotiConfig::load(config_path)?)
    }

    pub fn engine(&self) -> &dyn Ephemeris {
        self.engine.as_ref()
    }

    pub fn config(&self) -> &JyotiConfig {
        &self.config
    }

    /// Birth-input builder carrying the configured ayanamsha and observation mode.
    pub fn birth_input(&self) -> BirthInputBuilder {
        BirthInput::builder()
            .ayanamsha(self.config.chart.ayanamsha)
            .observation(self.config.chart.observation)
    }

    /// Sidereal chart with houses, doshas and yogas.
    pub fn build_chart(&self, input: &BirthInput) -> Result<BirthChart, JyotiError> {
        Ok(build_chart(self.engine(), input, &self.config.chart_config())?)
    }

    /// Dasha tree to the configured depth.
    pub fn build_dasha_timeline(
        &self,
        system: DashaSystem,
        chart: &BirthChart,
    ) -> Result<DashaTimeline, JyotiError> {
        Ok(timeline_for_chart(system, chart, self.config.dasha.depth)?)
    }

    /// Periods running at `query_jd` (UT), one per level.
    pub fn dasha_snapshot(
        &self,
        system: DashaSystem,
        chart: &BirthChart,
        query_jd: f64,
    ) -> Result<DashaSnapshot, JyotiError> {
        let timeline = self.build_dasha_timeline(system, chart)?;
        Ok(snapshot(&timeline, query_jd))
    }

    /// Ashtakoot score, out of 36.
    pub fn score_compatibility(&self, groom: &GunaInputs, bride: &GunaInputs) -> CompatibilityResult {
        score(groom, bride)
    }

    /// Ashtakoot score from two cast charts.
    pub fn match_charts(
        &self,
        groom: &BirthChart,
        bride: &BirthChart,
    ) -> Result<CompatibilityResult, JyotiError> {
        let groom = GunaInputs::from_chart(groom)?;
        let bride = GunaInputs::from_chart(bride)?;
        Ok(score(&groom, &bride))
    }

    /// Panchang at a sea-level location.
    pub fn compute_panchang(
        &self,
        date: NaiveDate,
        latitude_deg: f64,
        longitude_deg: f64,
        tz_offset_hours: f64,
    ) -> Result<PanchangDay, JyotiError> {
        let location = GeoLocation::new(latitude_deg, longitude_deg, 0.0);
        Ok(panchang_for_date(
            self.engine(),
            date,
            &location,
            tz_offset_hours,
            &self.config.panchang_config(),
        )?)
    }

    /// Muhurat windows at the configured default location.
    pub fn find_muhurat(
        &self,
        event: MuhuratEvent,
        start: NaiveDate,
        duration_days: u32,
    ) -> Result<Vec<MuhuratWindow>, JyotiError> {
        let loc = &self.config.location;
        self.find_muhurat_at(event, start, duration_days, &loc.geo(), loc.tz_offset_hours)
    }

    pub fn find_muhurat_at(
        &self,
        event: MuhuratEvent,
        start: NaiveDate,
        duration_days: u32,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<Vec<MuhuratWindow>, JyotiError> {
        Ok(find_muhurat(
            self.engine(),
            event,
            start,
            duration_days,
            location,
            tz_offset_hours,
            &self.config.muhurat_config(),
        )?)
    }

    /// Every window in a calendar month at the default location.
    pub fn monthly_muhurat_windows(
        &self,
        event: MuhuratEvent,
        year: i32,
        month: u32,
    ) -> Result<Vec<MuhuratWindow>, JyotiError> {
        let loc = &self.config.location;
        Ok(monthly_auspicious_dates(
            self.engine(),
            event,
            year,
            month,
            &loc.geo(),
            loc.tz_offset_hours,
            &self.config.muhurat_config(),
        )?)
    }

    /// Distinct dates in a calendar month with at least one window.
    pub fn monthly_auspicious_dates(
        &self,
        event: MuhuratEvent,
        year: i32,
        month: u32,
    ) -> Result<Vec<NaiveDate>, JyotiError> {
        let mut dates: Vec<NaiveDate> = self
            .monthly_muhurat_windows(event, year, month)?
            .into_iter()
            .map(|w| w.date)
            .collect();
        dates.dedup();
        Ok(dates)
    }
}
