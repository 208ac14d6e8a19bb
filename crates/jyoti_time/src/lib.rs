//! Time handling for the jyoti engine.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Delta T (TT − UT) from the Espenak–Meeus polynomials
//! - Bridging between local civil time (`chrono`) and JD UT
//! - Earth Rotation Angle, GMST, and local sidereal time

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    jd_ut_to_local, local_midnight_jd_ut, local_to_jd_ut, naive_date_to_jd, validate_tz_offset,
    MAX_TZ_OFFSET_HOURS,
};
pub use delta_t::{delta_t_seconds, tt_to_ut_jd, ut_to_tt_jd};
pub use error::TimeError;
pub use julian::{
    calendar_to_jd, jd_to_calendar, jd_to_centuries, J2000_JD, DAYS_PER_CENTURY, SECONDS_PER_DAY,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad, SIDEREAL_RATE};
