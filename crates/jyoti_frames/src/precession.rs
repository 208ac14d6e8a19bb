//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated motion of the equinox along the ecliptic since
//! J2000.0. Adding it to a J2000 ecliptic longitude gives the longitude
//! referred to the mean equinox of date (to first order in the small
//! ecliptic tilt, well under an arcsecond over the supported range).
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567, table 1.

/// General precession in longitude, arcseconds, for `t` Julian centuries (TT)
/// from J2000.0.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    t * (5028.796_195 + t * (1.105_434_8 + t * (0.000_079_64 + t * (-0.000_023_857 - t * 0.000_000_038_3))))
}

/// General precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Carry a J2000 ecliptic longitude to the mean equinox of date, [0, 360).
pub fn j2000_to_date_longitude_deg(lon_j2000_deg: f64, t: f64) -> f64 {
    (lon_j2000_deg + general_precession_longitude_deg(t)).rem_euclid(360.0)
}
