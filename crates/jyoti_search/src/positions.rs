//! Sidereal graha positions and the ascendant for a birth moment.
//!
//! Every longitude goes through the same chain: JD UT → JD TT (Delta T),
//! J2000 ecliptic → mean ecliptic of date (general precession), optional
//! nutation for true-equinox systems, then the ayanamsha of the same epoch
//! is subtracted. Nodes and the ascendant are computed of date and join the
//! chain at the nutation step.

use jyoti_core::Ephemeris;
use jyoti_frames::{general_precession_longitude_deg, mean_obliquity_deg, nutation_lon_obl_arcsec};
use jyoti_time::{jd_to_centuries, ut_to_tt_jd};
use jyoti_vedic_base::chart::{equal_house_cusps, whole_sign_cusps};
use jyoti_vedic_base::lagna::local_sidereal_time;
use jyoti_vedic_base::{
    ALL_GRAHAS, AyanamshaSystem, BirthInput, GeoLocation, Graha, HouseSystem, LunarNode, NodeMode,
    ObservationMode, RawPosition, ayanamsha_true_deg, lunar_node_deg, normalize_360,
    normalize_to_pm180, tropical_ascendant_deg,
};

use crate::error::SearchError;

/// Half-width of the symmetric difference used for longitude speed.
pub const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Equatorial Earth radius in km.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Polar/equatorial axis ratio (1 − f).
const EARTH_AXIS_RATIO: f64 = 0.996_647_19;

/// Epoch-dependent quantities shared by every body at one instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SiderealFrame {
    pub jd_tt: f64,
    pub t: f64,
    precession_deg: f64,
    nutation_deg: f64,
    ayanamsha_deg: f64,
}

impl SiderealFrame {
    pub fn at(jd_ut: f64, system: AyanamshaSystem) -> Self {
        let jd_tt = ut_to_tt_jd(jd_ut);
        let t = jd_to_centuries(jd_tt);
        let dpsi_arcsec = if system.uses_true_equinox() { nutation_lon_obl_arcsec(t).0 } else { 0.0 };
        Self {
            jd_tt,
            t,
            precession_deg: general_precession_longitude_deg(t),
            nutation_deg: dpsi_arcsec / 3600.0,
            ayanamsha_deg: ayanamsha_true_deg(system, t, dpsi_arcsec),
        }
    }

    /// Mean-of-date longitude from a J2000 longitude.
    pub fn of_date(&self, lon_j2000_deg: f64) -> f64 {
        lon_j2000_deg + self.precession_deg
    }

    /// Sidereal longitude from a mean-of-date tropical longitude.
    pub fn sidereal(&self, lon_of_date_deg: f64) -> f64 {
        normalize_360(lon_of_date_deg + self.nutation_deg - self.ayanamsha_deg)
    }
}

/// Ayanamsha in degrees at a UT instant.
pub fn ayanamsha_deg(jd_ut: f64, system: AyanamshaSystem) -> f64 {
    SiderealFrame::at(jd_ut, system).ayanamsha_deg
}

/// Geocentric sidereal longitude of a graha. Nodes follow `node_mode`.
pub fn graha_sidereal_longitude(
    engine: &dyn Ephemeris,
    graha: Graha,
    jd_ut: f64,
    system: AyanamshaSystem,
    node_mode: NodeMode,
) -> Result<f64, SearchError> {
    let frame = SiderealFrame::at(jd_ut, system);
    let lon_of_date = match (graha, graha.body()) {
        (_, Some(body)) => frame.of_date(engine.ecliptic_j2000(body, frame.jd_tt)?.lon_deg),
        (Graha::Ketu, None) => {
            engine.check_epoch(frame.jd_tt)?;
            lunar_node_deg(LunarNode::Ketu, frame.t, node_mode)
        }
        (_, None) => {
            engine.check_epoch(frame.jd_tt)?;
            lunar_node_deg(LunarNode::Rahu, frame.t, node_mode)
        }
    };
    Ok(frame.sidereal(lon_of_date))
}

/// Symmetric-difference longitude speed in deg/day.
fn longitude_speed(
    engine: &dyn Ephemeris,
    graha: Graha,
    jd_ut: f64,
    system: AyanamshaSystem,
    node_mode: NodeMode,
) -> Result<f64, SearchError> {
    let h = SPEED_HALF_STEP_DAYS;
    let ahead = graha_sidereal_longitude(engine, graha, jd_ut + h, system, node_mode)?;
    let behind = graha_sidereal_longitude(engine, graha, jd_ut - h, system, node_mode)?;
    Ok(normalize_to_pm180(ahead - behind) / (2.0 * h))
}

/// Observer's geocentric `(ρ sin φ′, ρ cos φ′)` in Earth radii.
fn observer_terms(location: &GeoLocation) -> (f64, f64) {
    let phi = location.latitude_rad();
    let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
    let h = location.altitude_m / (EARTH_RADIUS_KM * 1000.0);
    (EARTH_AXIS_RATIO * u.sin() + h * phi.sin(), u.cos() + h * phi.cos())
}

/// Shift an ecliptic-of-date position from the geocentre to the observer.
///
/// Meeus, *Astronomical Algorithms*, ch. 40 (ecliptical coordinates).
fn topocentric_ecliptic(
    lon_deg: f64,
    lat_deg: f64,
    distance_km: f64,
    lst_rad: f64,
    obliquity_deg: f64,
    location: &GeoLocation,
) -> (f64, f64) {
    let (s, c) = observer_terms(location);
    let sin_pi = EARTH_RADIUS_KM / distance_km;
    let (lam, beta) = (lon_deg.to_radians(), lat_deg.to_radians());
    let eps = obliquity_deg.to_radians();
    let n = lam.cos() * beta.cos() - c * sin_pi * lst_rad.cos();
    let lam_t = f64::atan2(
        lam.sin() * beta.cos() - sin_pi * (s * eps.sin() + c * eps.cos() * lst_rad.sin()),
        n,
    );
    let beta_t = (lam_t.cos() * (beta.sin() - sin_pi * (s * eps.cos() - c * eps.sin() * lst_rad.sin()))
        / n)
        .atan();
    (lam_t.to_degrees(), beta_t.to_degrees())
}

/// Sidereal positions of all nine grahas at the birth moment.
///
/// Speeds are geocentric even in topocentric mode; the diurnal term would
/// only add a daily wobble to the Moon's rate.
#[tracing::instrument(skip(engine), level = "debug")]
pub fn positions(
    engine: &dyn Ephemeris,
    input: &BirthInput,
    node_mode: NodeMode,
) -> Result<Vec<RawPosition>, SearchError> {
    let location = input.location();
    location.validate()?;
    let jd_ut = input.jd_ut();
    let system = input.ayanamsha();
    let frame = SiderealFrame::at(jd_ut, system);
    engine.check_epoch(frame.jd_tt)?;

    let topo = (input.observation() == ObservationMode::Topocentric).then(|| {
        (local_sidereal_time(jd_ut, &location), mean_obliquity_deg(frame.t))
    });

    let mut out = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let (longitude, latitude) = match graha.body() {
            Some(body) => {
                let pos = engine.ecliptic_j2000(body, frame.jd_tt)?;
                let lon = frame.of_date(pos.lon_deg);
                let (lon, lat) = match topo {
                    Some((lst, eps)) => {
                        topocentric_ecliptic(lon, pos.lat_deg, pos.distance_km, lst, eps, &location)
                    }
                    None => (lon, pos.lat_deg),
                };
                (frame.sidereal(lon), lat)
            }
            None => (graha_sidereal_longitude(engine, graha, jd_ut, system, node_mode)?, 0.0),
        };
        let speed = longitude_speed(engine, graha, jd_ut, system, node_mode)?;
        tracing::trace!(graha = graha.name(), longitude, speed, "sidereal position");
        out.push(RawPosition { graha, longitude, latitude, speed });
    }
    Ok(out)
}

/// Sidereal ascendant longitude for the birth moment and place.
pub fn ascendant_longitude(engine: &dyn Ephemeris, input: &BirthInput) -> Result<f64, SearchError> {
    let location = input.location();
    location.validate()?;
    let jd_ut = input.jd_ut();
    let frame = SiderealFrame::at(jd_ut, input.ayanamsha());
    engine.check_epoch(frame.jd_tt)?;
    Ok(frame.sidereal(tropical_ascendant_deg(jd_ut, &location)))
}

/// House cusps (sidereal) for the birth moment under `system`.
pub fn house_cusps(
    engine: &dyn Ephemeris,
    input: &BirthInput,
    system: HouseSystem,
) -> Result<[f64; 12], SearchError> {
    let asc = ascendant_longitude(engine, input)?;
    Ok(match system {
        HouseSystem::WholeSign => whole_sign_cusps(asc),
        HouseSystem::Equal => equal_house_cusps(asc),
    })
}
