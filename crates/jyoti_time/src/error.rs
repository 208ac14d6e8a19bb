//! Error types for calendar and civil-time conversion.

use thiserror::Error;

/// Errors from calendar arithmetic and civil-time bridging.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day triple that does not exist in the Gregorian calendar.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    /// Local clock time outside [0, 24) hours.
    #[error("clock time {0} h is outside [0, 24)")]
    InvalidClockTime(f64),
    /// Timezone offset outside the civil range.
    #[error("timezone offset {0} h is outside [-14, +14]")]
    InvalidTzOffset(f64),
    /// Julian Date that cannot be represented as a civil date-time.
    #[error("julian date {0} cannot be represented as a civil date")]
    Unrepresentable(f64),
}
