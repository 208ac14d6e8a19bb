//! Sunrise/sunset and moonrise/moonset.
//!
//! The Sun uses the iterative hour-angle method: estimate transit from the
//! noon hour angle, offset by the semi-diurnal arc, then refine with fresh
//! positions until the correction drops below 0.1 s. The Moon moves too fast
//! for that to converge reliably at high latitudes, so its altitude is
//! scanned in 10-minute steps and each sign change is bisected.

use std::f64::consts::{PI, TAU};

use jyoti_core::{Body, Ephemeris};
use jyoti_frames::{ecliptic_to_equatorial, general_precession_longitude_deg, mean_obliquity_deg};
use jyoti_time::{SIDEREAL_RATE, gmst_rad, jd_to_centuries, local_sidereal_time_rad, ut_to_tt_jd};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};

const MAX_ITERATIONS: usize = 5;

const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Moon altitude scan step (10 minutes).
const MOON_SCAN_STEP_DAYS: f64 = 10.0 / 1440.0;

const MOON_BISECT_ITERATIONS: usize = 40;

/// Approximate UT of local apparent noon for the day starting at `jd_ut_midnight`.
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Geocentric right ascension, declination (radians) and distance (km),
/// referred to the mean equator and equinox of date.
pub fn equatorial_of_date(
    engine: &dyn Ephemeris,
    body: Body,
    jd_ut: f64,
) -> Result<(f64, f64, f64), VedicError> {
    let jd_tt = ut_to_tt_jd(jd_ut);
    let t = jd_to_centuries(jd_tt);
    let pos = engine.ecliptic_j2000(body, jd_tt)?;
    let lon = pos.lon_deg + general_precession_longitude_deg(t);
    let (ra, dec) = ecliptic_to_equatorial(lon, pos.lat_deg, mean_obliquity_deg(t));
    Ok((ra.to_radians(), dec.to_radians(), pos.distance_km))
}

fn wrap_pi(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

fn cos_hour_angle(h0_rad: f64, phi: f64, dec: f64) -> f64 {
    (h0_rad.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Sunrise or sunset nearest the given local noon (JD UT).
pub fn compute_sun_rise_set(
    engine: &dyn Ephemeris,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    if !matches!(event, RiseSetEvent::Sunrise | RiseSetEvent::Sunset) {
        return Err(VedicError::InvalidInput("solar rise/set requires Sunrise or Sunset"));
    }
    location.validate()?;
    let phi = location.latitude_rad();
    let h0_rad = (-config.horizon_depression_deg(location.altitude_m)).to_radians();

    let (ra, dec, _) = equatorial_of_date(engine, Body::Sun, jd_ut_noon)?;
    let cos_h0 = cos_hour_angle(h0_rad, phi, dec);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    let lst_noon = local_sidereal_time_rad(gmst_rad(jd_ut_noon), location.longitude_rad());
    let jd_transit = jd_ut_noon - wrap_pi(lst_noon - ra) / SIDEREAL_RATE;
    let h0_days = cos_h0.acos() / SIDEREAL_RATE;
    let mut jd_event = if event.is_rising() { jd_transit - h0_days } else { jd_transit + h0_days };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i, _) = equatorial_of_date(engine, Body::Sun, jd_event)?;
        let cos_h = cos_hour_angle(h0_rad, phi, dec_i);
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let ha_target = if event.is_rising() { -cos_h.acos() } else { cos_h.acos() };
        let lst = local_sidereal_time_rad(gmst_rad(jd_event), location.longitude_rad());
        let ha_actual = wrap_pi(lst - ra_i);
        let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RATE;
        jd_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    tracing::trace!(?event, jd_event, "solar event converged");
    Ok(RiseSetResult::Event { jd_ut: jd_event, event })
}

/// Moon altitude above its rise/set target altitude, in degrees.
fn moon_altitude_margin(
    engine: &dyn Ephemeris,
    location: &GeoLocation,
    jd_ut: f64,
    config: &RiseSetConfig,
) -> Result<f64, VedicError> {
    let (ra, dec, dist) = equatorial_of_date(engine, Body::Moon, jd_ut)?;
    let phi = location.latitude_rad();
    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad());
    let h = lst - ra;
    let alt = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin().to_degrees();
    let parallax = jyoti_core::moon::horizontal_parallax_deg(dist);
    Ok(alt - config.lunar_target_altitude_deg(parallax))
}

/// First moonrise or moonset within `[jd_ut_start, jd_ut_end)`, if any.
pub fn compute_moon_rise_set(
    engine: &dyn Ephemeris,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_start: f64,
    jd_ut_end: f64,
    config: &RiseSetConfig,
) -> Result<Option<f64>, VedicError> {
    if !matches!(event, RiseSetEvent::Moonrise | RiseSetEvent::Moonset) {
        return Err(VedicError::InvalidInput("lunar rise/set requires Moonrise or Moonset"));
    }
    location.validate()?;
    let rising = event.is_rising();
    let crosses = |a: f64, b: f64| if rising { a < 0.0 && b >= 0.0 } else { a >= 0.0 && b < 0.0 };

    let mut t0 = jd_ut_start;
    let mut f0 = moon_altitude_margin(engine, location, t0, config)?;
    while t0 < jd_ut_end {
        let t1 = (t0 + MOON_SCAN_STEP_DAYS).min(jd_ut_end);
        let f1 = moon_altitude_margin(engine, location, t1, config)?;
        if crosses(f0, f1) {
            let (mut lo, mut hi, mut flo) = (t0, t1, f0);
            for _ in 0..MOON_BISECT_ITERATIONS {
                let mid = 0.5 * (lo + hi);
                let fm = moon_altitude_margin(engine, location, mid, config)?;
                if (fm < 0.0) == (flo < 0.0) {
                    lo = mid;
                    flo = fm;
                } else {
                    hi = mid;
                }
            }
            return Ok(Some(0.5 * (lo + hi)));
        }
        t0 = t1;
        f0 = f1;
    }
    tracing::debug!(?event, jd_ut_start, "no lunar event in interval");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_core::AnalyticEphemeris;

    #[test]
    fn local_noon_offsets() {
        let jd0 = 2_460_000.5;
        assert!((approximate_local_noon_jd(jd0, 0.0) - (jd0 + 0.5)).abs() < 1e-12);
        assert!((approximate_local_noon_jd(jd0, 90.0) - (jd0 + 0.25)).abs() < 1e-12);
        assert!((approximate_local_noon_jd(jd0, -90.0) - (jd0 + 0.75)).abs() < 1e-12);
    }

    #[test]
    fn wrap_pi_range() {
        assert!((wrap_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap_pi(-0.1) + 0.1).abs() < 1e-12);
    }

    #[test]
    fn sunrise_precedes_sunset() {
        let eph = AnalyticEphemeris::default();
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        // 2024-03-20 0h UT
        let noon = approximate_local_noon_jd(2_460_389.5, loc.longitude_deg);
        let cfg = RiseSetConfig::default();
        let rise = compute_sun_rise_set(&eph, &loc, RiseSetEvent::Sunrise, noon, &cfg)
            .unwrap()
            .jd_ut()
            .unwrap();
        let set = compute_sun_rise_set(&eph, &loc, RiseSetEvent::Sunset, noon, &cfg)
            .unwrap()
            .jd_ut()
            .unwrap();
        let day_hours = (set - rise) * 24.0;
        // near equinox, daylight is slightly over 12 h
        assert!((12.0..12.4).contains(&day_hours), "day = {day_hours} h");
    }

    #[test]
    fn polar_night() {
        let eph = AnalyticEphemeris::default();
        let loc = GeoLocation::new(80.0, 0.0, 0.0);
        // 2024-12-21
        let noon = approximate_local_noon_jd(2_460_665.5, 0.0);
        let r = compute_sun_rise_set(&eph, &loc, RiseSetEvent::Sunrise, noon, &RiseSetConfig::default())
            .unwrap();
        assert_eq!(r, RiseSetResult::NeverRises);
    }

    #[test]
    fn midnight_sun() {
        let eph = AnalyticEphemeris::default();
        let loc = GeoLocation::new(80.0, 0.0, 0.0);
        // 2024-06-21
        let noon = approximate_local_noon_jd(2_460_482.5, 0.0);
        let r = compute_sun_rise_set(&eph, &loc, RiseSetEvent::Sunset, noon, &RiseSetConfig::default())
            .unwrap();
        assert_eq!(r, RiseSetResult::NeverSets);
    }

    #[test]
    fn wrong_event_kind_rejected() {
        let eph = AnalyticEphemeris::default();
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let cfg = RiseSetConfig::default();
        assert!(compute_sun_rise_set(&eph, &loc, RiseSetEvent::Moonrise, 2_460_000.0, &cfg).is_err());
        assert!(
            compute_moon_rise_set(&eph, &loc, RiseSetEvent::Sunset, 2_460_000.0, 2_460_001.0, &cfg)
                .is_err()
        );
    }

    #[test]
    fn moon_rises_once_in_a_lunar_day() {
        let eph = AnalyticEphemeris::default();
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        let cfg = RiseSetConfig::default();
        // lunar day is ~24h50m, so a 25.5 h window always holds a moonrise
        let start = 2_460_389.5;
        let rise = compute_moon_rise_set(&eph, &loc, RiseSetEvent::Moonrise, start, start + 1.0625, &cfg)
            .unwrap();
        assert!(rise.is_some());
        let jd = rise.unwrap();
        assert!(moon_altitude_margin(&eph, &loc, jd, &cfg).unwrap().abs() < 1e-3);
    }
}
