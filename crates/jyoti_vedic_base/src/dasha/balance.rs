//! Birth balance from the Moon's progress through its nakshatra.

use crate::error::VedicError;
use crate::nakshatra::NAKSHATRA_SPAN_27;

/// Share of the nakshatra already traversed, [0, 1).
///
/// `within_deg` is the Moon's distance past the start of its nakshatra and
/// must lie in `[0, 13°20′)`.
pub fn elapsed_fraction(within_deg: f64) -> Result<f64, VedicError> {
    if !within_deg.is_finite() || !(0.0..NAKSHATRA_SPAN_27).contains(&within_deg) {
        return Err(VedicError::InvalidInput(
            "moon longitude within nakshatra must be in [0, 13.333)",
        ));
    }
    Ok(within_deg / NAKSHATRA_SPAN_27)
}

/// Days still to run in the entry period.
pub fn balance_days(entry_years: f64, elapsed: f64, days_per_year: f64) -> f64 {
    entry_years * (1.0 - elapsed) * days_per_year
}
