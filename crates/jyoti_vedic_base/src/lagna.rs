//! Lagna (ascendant) and MC from local sidereal time.
//!
//! Meeus, *Astronomical Algorithms* ch. 13 and 14. Longitudes are tropical,
//! referred to the mean equinox of date; callers subtract the ayanamsha.

use std::f64::consts::TAU;

use jyoti_frames::mean_obliquity_deg;
use jyoti_time::{gmst_rad, jd_to_centuries, local_sidereal_time_rad, ut_to_tt_jd};

use crate::riseset_types::GeoLocation;

/// Ascendant and MC from LST, latitude and obliquity (all radians).
///
/// Returns `(ascendant, mc)` in radians, [0, 2π).
pub fn lagna_mc_from_lst(lst_rad: f64, latitude_rad: f64, obliquity_rad: f64) -> (f64, f64) {
    let (sin_t, cos_t) = lst_rad.sin_cos();
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    let asc = f64::atan2(cos_t, -(sin_t * cos_e + latitude_rad.tan() * sin_e));
    let mc = f64::atan2(sin_t, cos_t * cos_e);
    (asc.rem_euclid(TAU), mc.rem_euclid(TAU))
}

/// Local sidereal time in radians at `jd_ut` for an observer.
pub fn local_sidereal_time(jd_ut: f64, location: &GeoLocation) -> f64 {
    local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad()).rem_euclid(TAU)
}

/// Tropical ascendant longitude (mean equinox of date) in degrees.
pub fn tropical_ascendant_deg(jd_ut: f64, location: &GeoLocation) -> f64 {
    tropical_lagna_mc_deg(jd_ut, location).0
}

/// Tropical ascendant and MC in degrees.
pub fn tropical_lagna_mc_deg(jd_ut: f64, location: &GeoLocation) -> (f64, f64) {
    let t = jd_to_centuries(ut_to_tt_jd(jd_ut));
    let eps = mean_obliquity_deg(t).to_radians();
    let lst = local_sidereal_time(jd_ut, location);
    let (asc, mc) = lagna_mc_from_lst(lst, location.latitude_rad(), eps);
    (asc.to_degrees(), mc.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 0.409_092_6;

    #[test]
    fn equator_lst_zero_rises_cancer_point() {
        let (asc, mc) = lagna_mc_from_lst(0.0, 0.0, EPS);
        assert!((asc - FRAC_PI_2).abs() < 1e-12, "asc = {asc}");
        assert!(mc.abs() < 1e-12 || (mc - TAU).abs() < 1e-12);
    }

    #[test]
    fn equator_lst_180_rises_capricorn_point() {
        let (asc, mc) = lagna_mc_from_lst(PI, 0.0, EPS);
        assert!((asc - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((mc - PI).abs() < 1e-12);
    }

    #[test]
    fn ascendant_is_90_deg_ahead_of_mc_on_equator_at_equinox_points() {
        for lst in [0.0, PI] {
            let (asc, mc) = lagna_mc_from_lst(lst, 0.0, EPS);
            let d = (asc - mc).rem_euclid(TAU);
            assert!((d - FRAC_PI_2).abs() < 1e-9);
        }
    }

    #[test]
    fn ascendant_lies_on_eastern_horizon() {
        // The ecliptic point at the ascendant must have zero altitude and
        // an hour angle on the eastern side.
        let lat = 28.6_f64.to_radians();
        for i in 0..24 {
            let lst = f64::from(i) * TAU / 24.0;
            let (asc, _) = lagna_mc_from_lst(lst, lat, EPS);
            let ra = f64::atan2(asc.sin() * EPS.cos(), asc.cos());
            let dec = (EPS.sin() * asc.sin()).asin();
            let h = lst - ra;
            let alt = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * h.cos()).asin();
            assert!(alt.abs() < 1e-9, "alt = {alt} at lst {lst}");
            assert!(h.sin() < 0.0, "ascendant must be east of the meridian");
        }
    }
}
