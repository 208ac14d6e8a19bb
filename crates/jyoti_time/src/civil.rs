//! Bridging between local civil time and Julian Dates (UT).
//!
//! Civil inputs are a `chrono::NaiveDate`, a decimal clock time in hours,
//! and a fixed UTC offset in hours. All date arithmetic is done on Julian
//! Dates so that leap days never need special casing.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Largest civil UTC offset in use (Line Islands, +14:00).
pub const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Check that a UTC offset lies within the civil range.
pub fn validate_tz_offset(tz_offset_hours: f64) -> Result<(), TimeError> {
    if !tz_offset_hours.is_finite() || tz_offset_hours.abs() > MAX_TZ_OFFSET_HOURS {
        return Err(TimeError::InvalidTzOffset(tz_offset_hours));
    }
    Ok(())
}

/// Julian Date at 0h of a calendar date (no timezone applied).
pub fn naive_date_to_jd(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64)
}

/// Convert a local civil moment to JD UT.
pub fn local_to_jd_ut(
    date: NaiveDate,
    time_hours: f64,
    tz_offset_hours: f64,
) -> Result<f64, TimeError> {
    if !(0.0..24.0).contains(&time_hours) {
        return Err(TimeError::InvalidClockTime(time_hours));
    }
    validate_tz_offset(tz_offset_hours)?;
    Ok(naive_date_to_jd(date) + (time_hours - tz_offset_hours) / 24.0)
}

/// JD UT of local midnight at the start of `date`.
pub fn local_midnight_jd_ut(date: NaiveDate, tz_offset_hours: f64) -> f64 {
    naive_date_to_jd(date) - tz_offset_hours / 24.0
}

/// Convert JD UT to a local civil date-time, rounded to the nearest millisecond.
pub fn jd_ut_to_local(jd_ut: f64, tz_offset_hours: f64) -> Result<NaiveDateTime, TimeError> {
    let local_jd = jd_ut + tz_offset_hours / 24.0;
    let (year, month, day_frac) = jd_to_calendar(local_jd);
    let day = day_frac.floor();
    let date = NaiveDate::from_ymd_opt(year, month, day as u32)
        .ok_or(TimeError::Unrepresentable(jd_ut))?;
    let millis = ((day_frac - day) * 86_400_000.0).round() as i64;
    Ok(NaiveDateTime::new(date, NaiveTime::MIN) + TimeDelta::milliseconds(millis))
}
