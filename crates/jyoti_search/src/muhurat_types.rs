//! Types for muhurat search results.

use chrono::{NaiveDate, NaiveDateTime};
use jyoti_vedic_base::MuhuratEvent;
use serde::{Deserialize, Serialize};

use crate::panchang_types::PanchangConfig;

/// Shortest window worth reporting: one muhurta (1/30 of a day).
pub const MIN_WINDOW_MINUTES: f64 = 24.0;

/// Score of a window that satisfies the event's rule.
pub const BASE_SCORE: u8 = 60;

/// Added for each favourable factor.
pub const BONUS_SCORE: u8 = 10;

pub const MAX_SCORE: u8 = 100;

/// Options for the muhurat finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuhuratConfig {
    pub panchang: PanchangConfig,
    pub min_window_minutes: f64,
}

impl Default for MuhuratConfig {
    fn default() -> Self {
        Self { panchang: PanchangConfig::default(), min_window_minutes: MIN_WINDOW_MINUTES }
    }
}

/// One auspicious interval for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuhuratWindow {
    pub event: MuhuratEvent,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// 0-100.
    pub score: u8,
    /// Predicates the window satisfied, in evaluation order.
    pub reasons: Vec<String>,
}

impl MuhuratWindow {
    pub fn duration_minutes(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 60.0
    }
}
