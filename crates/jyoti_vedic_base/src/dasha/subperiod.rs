//! Proportional sub-period generation.
//!
//! Children are laid out across the parent's nominal (full) span in cyclic
//! order starting from the parent's own entity, then clipped to the span the
//! parent actually runs. The last surviving child ends exactly at the
//! parent's end.

use super::data::DashaCycle;
use super::types::{DAYS_PER_YEAR, DashaEntity, DashaLevel, DashaPeriod};

/// A period's full length and the part of it that actually runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub nominal_start: f64,
    pub nominal_end: f64,
    pub start: f64,
    pub end: f64,
}

impl Span {
    /// A period that runs in full.
    pub fn full(start: f64, end: f64) -> Self {
        Self { nominal_start: start, nominal_end: end, start, end }
    }

    pub fn nominal_days(&self) -> f64 {
        self.nominal_end - self.nominal_start
    }
}

/// Build one period and its descendants down to `depth` more levels.
pub fn build_period(
    cycle: &DashaCycle,
    entity: DashaEntity,
    level: DashaLevel,
    span: Span,
    depth: u8,
) -> DashaPeriod {
    let children = match level.child_level() {
        Some(child_level) if depth > 0 => children(cycle, entity, child_level, span, depth - 1),
        _ => Vec::new(),
    };
    DashaPeriod {
        entity,
        level,
        start_jd: span.start,
        end_jd: span.end,
        nominal_start_jd: span.nominal_start,
        nominal_end_jd: span.nominal_end,
        children,
    }
}

fn children(
    cycle: &DashaCycle,
    parent: DashaEntity,
    level: DashaLevel,
    parent_span: Span,
    depth: u8,
) -> Vec<DashaPeriod> {
    let first = cycle.position_of(parent).unwrap_or(0);
    let nominal_days = parent_span.nominal_days();
    let mut out = Vec::with_capacity(cycle.len());
    let mut cursor = parent_span.nominal_start;

    for k in 0..cycle.len() {
        let idx = first + k;
        let days = nominal_days * cycle.years_of(idx) / cycle.total_years;
        let nominal_end = if k + 1 == cycle.len() { parent_span.nominal_end } else { cursor + days };
        let start = cursor.max(parent_span.start);
        let end = nominal_end.min(parent_span.end);
        let nominal_start = cursor;
        cursor = nominal_end;
        if end <= start {
            continue;
        }
        let span = Span { nominal_start, nominal_end, start, end };
        out.push(build_period(cycle, cycle.entity_at(idx), level, span, depth));
    }

    if let Some(last) = out.last_mut() {
        last.end_jd = parent_span.end;
    }
    out
}

/// Full nominal length of `entity` at the top level, in days.
pub fn nominal_days(cycle: &DashaCycle, index: usize) -> f64 {
    cycle.years_of(index) * DAYS_PER_YEAR
}
