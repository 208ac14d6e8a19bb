//! Point-in-time queries over a generated timeline.

use super::types::{DashaPeriod, DashaTimeline};

/// Index of the period containing `jd` (half-open), by binary search.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

impl DashaTimeline {
    /// Running periods at `jd`, Mahadasha first, down to the deepest level
    /// generated. Empty outside the timeline.
    pub fn active_periods(&self, jd: f64) -> Vec<&DashaPeriod> {
        let mut chain = Vec::with_capacity(3);
        let mut level = self.mahadashas.as_slice();
        while let Some(idx) = find_active_period(level, jd) {
            let period = &level[idx];
            chain.push(period);
            level = period.children.as_slice();
        }
        chain
    }

    /// Elapsed share of the running Mahadasha, 0-100, measured over the
    /// lord's full years even when birth or the cycle's end cuts it short.
    pub fn progression_percent(&self, jd: f64) -> Option<f64> {
        let idx = find_active_period(&self.mahadashas, jd)?;
        Some(self.mahadashas[idx].elapsed_percent(jd))
    }
}
