//! Panchang for a civil date: the five limbs at sunrise, each with its
//! start and end, plus sunrise/sunset, moonrise/moonset and the daylight
//! windows.
//!
//! Element boundaries are found by stepping the relevant angle away from
//! sunrise and bisecting the first crossing of the segment edge.

use chrono::NaiveDate;
use jyoti_core::{Body, Ephemeris};
use jyoti_time::{jd_ut_to_local, local_midnight_jd_ut, naive_date_to_jd, ut_to_tt_jd, validate_tz_offset};
use jyoti_vedic_base::karana::KARANA_SEGMENT_DEG;
use jyoti_vedic_base::tithi::TITHI_SEGMENT_DEG;
use jyoti_vedic_base::yoga::YOGA_SEGMENT_DEG;
use jyoti_vedic_base::{
    AyanamshaSystem, GeoLocation, Karana, NAKSHATRA_SPAN_27, Nakshatra, RiseSetConfig,
    RiseSetEvent, RiseSetResult, Tithi, Vaar, Yoga, abhijit_window, approximate_local_noon_jd,
    compute_moon_rise_set, compute_sun_rise_set, day_segment, karana_from_elongation,
    nakshatra_from_longitude, normalize_360, tithi_from_elongation, yoga_from_sum,
};

use crate::error::SearchError;
use crate::panchang_types::{
    KaranaInfo, PanchangConfig, PanchangDay, PanchangNakshatraInfo, TimeWindow, TithiInfo, YogaInfo,
};
use crate::positions::SiderealFrame;
use crate::search_util::find_angle_boundary;

/// Moon − Sun elongation in degrees [0, 360) at a UT instant.
///
/// Both bodies share the J2000 frame, so precession and ayanamsha cancel.
pub fn elongation_at(engine: &dyn Ephemeris, jd_ut: f64) -> Result<f64, SearchError> {
    let jd_tt = ut_to_tt_jd(jd_ut);
    let moon = engine.ecliptic_j2000(Body::Moon, jd_tt)?;
    let sun = engine.ecliptic_j2000(Body::Sun, jd_tt)?;
    Ok(normalize_360(moon.lon_deg - sun.lon_deg))
}

/// Sidereal longitude of the Moon.
pub fn moon_sidereal_longitude_at(
    engine: &dyn Ephemeris,
    jd_ut: f64,
    system: AyanamshaSystem,
) -> Result<f64, SearchError> {
    let frame = SiderealFrame::at(jd_ut, system);
    let moon = engine.ecliptic_j2000(Body::Moon, frame.jd_tt)?;
    Ok(frame.sidereal(frame.of_date(moon.lon_deg)))
}

/// Sidereal Moon + Sun, mod 360.
pub fn sidereal_sum_at(
    engine: &dyn Ephemeris,
    jd_ut: f64,
    system: AyanamshaSystem,
) -> Result<f64, SearchError> {
    let frame = SiderealFrame::at(jd_ut, system);
    let moon = engine.ecliptic_j2000(Body::Moon, frame.jd_tt)?;
    let sun = engine.ecliptic_j2000(Body::Sun, frame.jd_tt)?;
    Ok(normalize_360(
        frame.sidereal(frame.of_date(moon.lon_deg)) + frame.sidereal(frame.of_date(sun.lon_deg)),
    ))
}

/// Sunrise and sunset (JD UT) of a local civil date.
pub fn vedic_day_sunrises(
    engine: &dyn Ephemeris,
    date: NaiveDate,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<(f64, f64), SearchError> {
    let noon = approximate_local_noon_jd(naive_date_to_jd(date), location.longitude_deg);
    let event_jd = |event| -> Result<f64, SearchError> {
        match compute_sun_rise_set(engine, location, event, noon, config)? {
            RiseSetResult::Event { jd_ut, .. } => Ok(jd_ut),
            RiseSetResult::NeverRises => Err(SearchError::NoSunrise("sun stays below the horizon")),
            RiseSetResult::NeverSets => Err(SearchError::NoSunrise("sun stays above the horizon")),
        }
    };
    Ok((event_jd(RiseSetEvent::Sunrise)?, event_jd(RiseSetEvent::Sunset)?))
}

/// Start and end (JD UT) of the angular segment `[index, index + 1) × width`
/// containing `f(jd)`.
fn segment_bounds(
    f: &dyn Fn(f64) -> Result<f64, SearchError>,
    jd: f64,
    index: u8,
    width_deg: f64,
    step: f64,
    what: (&'static str, &'static str),
) -> Result<(f64, f64), SearchError> {
    let start_target = f64::from(index) * width_deg;
    let end_target = (f64::from(index) + 1.0) * width_deg;
    let start = find_angle_boundary(f, jd, start_target, -step, 20)?
        .ok_or(SearchError::NoConvergence(what.0))?;
    let end = find_angle_boundary(f, jd, end_target, step, 20)?
        .ok_or(SearchError::NoConvergence(what.1))?;
    tracing::trace!(start, end, what = what.0, "segment bounds");
    Ok((start, end))
}

/// The panchang of one day in JD UT, before conversion to local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VedicDay {
    pub sunrise: f64,
    pub sunset: f64,
    pub vaar: Vaar,
    pub tithi: Tithi,
    pub tithi_span: (f64, f64),
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub nakshatra_span: (f64, f64),
    pub yoga: Yoga,
    pub yoga_span: (f64, f64),
    pub karana: Karana,
    pub karana_index: u8,
    pub karana_span: (f64, f64),
}

impl VedicDay {
    pub fn rahu_kaal(&self) -> (f64, f64) {
        day_segment(self.sunrise, self.sunset, self.vaar.rahu_kaal_segment())
    }

    pub fn yamagandam(&self) -> (f64, f64) {
        day_segment(self.sunrise, self.sunset, self.vaar.yamagandam_segment())
    }

    pub fn gulika_kaal(&self) -> (f64, f64) {
        day_segment(self.sunrise, self.sunset, self.vaar.gulika_segment())
    }

    pub fn abhijit(&self) -> (f64, f64) {
        abhijit_window(self.sunrise, self.sunset)
    }

    /// End of the stretch in which every sunrise limb still holds.
    pub fn prevailing_until(&self) -> f64 {
        self.tithi_span
            .1
            .min(self.nakshatra_span.1)
            .min(self.yoga_span.1)
            .min(self.karana_span.1)
    }

    pub fn is_auspicious(&self) -> bool {
        !(self.tithi.is_rikta()
            || self.tithi == Tithi::Amavasya
            || self.karana == Karana::Vishti
            || self.yoga.is_inauspicious())
    }
}

/// Evaluate the five limbs at sunrise of `date`.
pub(crate) fn vedic_day(
    engine: &dyn Ephemeris,
    date: NaiveDate,
    location: &GeoLocation,
    tz_offset_hours: f64,
    config: &PanchangConfig,
) -> Result<VedicDay, SearchError> {
    let (sunrise, sunset) = vedic_day_sunrises(engine, date, location, &config.riseset)?;
    let vaar = Vaar::from_date(jd_ut_to_local(sunrise, tz_offset_hours)?.date());
    let system = config.ayanamsha;

    let elong_fn = |t: f64| elongation_at(engine, t);
    let moon_fn = |t: f64| moon_sidereal_longitude_at(engine, t, system);
    let sum_fn = |t: f64| sidereal_sum_at(engine, t, system);

    let elongation = elong_fn(sunrise)?;
    let tithi = tithi_from_elongation(elongation).tithi;
    let tithi_span = segment_bounds(
        &elong_fn,
        sunrise,
        tithi.index(),
        TITHI_SEGMENT_DEG,
        0.25,
        ("could not find tithi start", "could not find tithi end"),
    )?;

    let karana = karana_from_elongation(elongation);
    let karana_span = segment_bounds(
        &elong_fn,
        sunrise,
        karana.karana_index,
        KARANA_SEGMENT_DEG,
        0.25,
        ("could not find karana start", "could not find karana end"),
    )?;

    let nak = nakshatra_from_longitude(moon_fn(sunrise)?);
    let nakshatra_span = segment_bounds(
        &moon_fn,
        sunrise,
        nak.nakshatra.index(),
        NAKSHATRA_SPAN_27,
        0.5,
        ("could not find nakshatra start", "could not find nakshatra end"),
    )?;

    let yoga = yoga_from_sum(sum_fn(sunrise)?).yoga;
    let yoga_span = segment_bounds(
        &sum_fn,
        sunrise,
        yoga.index(),
        YOGA_SEGMENT_DEG,
        0.25,
        ("could not find yoga start", "could not find yoga end"),
    )?;

    Ok(VedicDay {
        sunrise,
        sunset,
        vaar,
        tithi,
        tithi_span,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        nakshatra_span,
        yoga,
        yoga_span,
        karana: karana.karana,
        karana_index: karana.karana_index,
        karana_span,
    })
}

/// Full panchang for a local civil date at a place.
#[tracing::instrument(skip(engine), level = "debug")]
pub fn panchang_for_date(
    engine: &dyn Ephemeris,
    date: NaiveDate,
    location: &GeoLocation,
    tz_offset_hours: f64,
    config: &PanchangConfig,
) -> Result<PanchangDay, SearchError> {
    location.validate()?;
    validate_tz_offset(tz_offset_hours)?;
    let day = vedic_day(engine, date, location, tz_offset_hours, config)?;

    let local = |jd: f64| jd_ut_to_local(jd, tz_offset_hours);
    let window = |(s, e): (f64, f64)| -> Result<TimeWindow, SearchError> {
        Ok(TimeWindow { start: local(s)?, end: local(e)? })
    };

    let midnight = local_midnight_jd_ut(date, tz_offset_hours);
    let moon_event = |event| {
        compute_moon_rise_set(engine, location, event, midnight, midnight + 1.0, &config.riseset)
    };
    let moonrise = moon_event(RiseSetEvent::Moonrise)?.map(local).transpose()?;
    let moonset = moon_event(RiseSetEvent::Moonset)?.map(local).transpose()?;

    let tithi = TithiInfo {
        tithi: day.tithi,
        paksha: day.tithi.paksha(),
        tithi_in_paksha: day.tithi.number_in_paksha(),
        start: local(day.tithi_span.0)?,
        end: local(day.tithi_span.1)?,
    };
    let nakshatra = PanchangNakshatraInfo {
        nakshatra: day.nakshatra,
        pada: day.pada,
        start: local(day.nakshatra_span.0)?,
        end: local(day.nakshatra_span.1)?,
    };
    let yoga = YogaInfo {
        yoga: day.yoga,
        start: local(day.yoga_span.0)?,
        end: local(day.yoga_span.1)?,
    };
    let karana = KaranaInfo {
        karana: day.karana,
        karana_index: day.karana_index,
        start: local(day.karana_span.0)?,
        end: local(day.karana_span.1)?,
    };

    let auspicious = day.is_auspicious();
    tracing::debug!(
        tithi = day.tithi.name(),
        nakshatra = day.nakshatra.name(),
        vaar = day.vaar.name(),
        auspicious,
        "panchang computed"
    );

    Ok(PanchangDay {
        date,
        location: *location,
        tz_offset_hours,
        vaar: day.vaar,
        tithi,
        nakshatra,
        yoga,
        karana,
        sunrise: local(day.sunrise)?,
        sunset: local(day.sunset)?,
        moonrise,
        moonset,
        rahu_kaal: window(day.rahu_kaal())?,
        yamagandam: window(day.yamagandam())?,
        gulika_kaal: window(day.gulika_kaal())?,
        abhijit: window(day.abhijit())?,
        auspicious,
    })
}
