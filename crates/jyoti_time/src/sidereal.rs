//! Earth Rotation Angle and sidereal time.
//!
//! ERA: IERS Conventions 2010, eq. 5.15.
//! GMST polynomial: Capitaine et al. 2003, table 2.
//!
//! Inputs are JD UT. The engine does not model UT1 − UTC (< 0.9 s).

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / 648_000.0;

/// Rate of sidereal rotation relative to the mean Sun, in rad per solar day.
pub const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / 36_525.0;
    let poly = 0.014_506
        + t * (4612.156_534 + t * (1.391_581_7 + t * (-0.000_000_44 + t * (-0.000_029_956 - t * 0.000_000_036_8))));
    (earth_rotation_angle_rad(jd_ut) + poly * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000() {
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.46).abs() < 0.01, "ERA = {deg}");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 Apr 10 0h UT: GMST = 13h10m46.3668s = 197.693195°
        let gmst = gmst_rad(2_446_895.5).to_degrees();
        assert!((gmst - 197.693195).abs() < 0.001, "GMST = {gmst}");
    }

    #[test]
    fn lst_wraps() {
        let lst = local_sidereal_time_rad(6.0, 1.0);
        assert!((0.0..TAU).contains(&lst));
        assert!((lst - (7.0 - TAU)).abs() < 1e-12);
    }
}
