//! Golden-value tests for sunrise/sunset and the panchang limbs.
//!
//! Reference instants come from published almanacs; tolerances cover the
//! analytic ephemeris and the rise/set horizon model.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use jyoti_core::AnalyticEphemeris;
use jyoti_search::{PanchangConfig, panchang_for_date, positions, vedic_day_sunrises};
use jyoti_time::jd_ut_to_local;
use jyoti_vedic_base::{
    BirthInput, GeoLocation, Graha, NodeMode, Paksha, RiseSetConfig, Tithi, Vaar,
    nakshatra_from_longitude, normalize_360, tithi_from_elongation, yoga_from_sum,
};

const IST: f64 = 5.5;

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.209, 0.0)
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

fn minutes_apart(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    (a - b).num_seconds().abs() as f64 / 60.0
}

#[test]
fn delhi_equinox_sunrise_sunset() {
    let eph = AnalyticEphemeris::default();
    let date = ymd(2024, 3, 20);
    let (rise, set) = vedic_day_sunrises(&eph, date, &delhi(), &RiseSetConfig::default()).unwrap();
    let rise = jd_ut_to_local(rise, IST).unwrap();
    let set = jd_ut_to_local(set, IST).unwrap();
    assert!(minutes_apart(rise, at(date, 6, 25)) < 10.0, "sunrise {rise}");
    assert!(minutes_apart(set, at(date, 18, 33)) < 10.0, "sunset {set}");
    let hours = (set - rise).num_seconds() as f64 / 3600.0;
    assert!((hours - 12.13).abs() < 0.1, "daylight {hours} h");
}

#[test]
fn amavasya_before_the_april_2024_eclipse() {
    let eph = AnalyticEphemeris::default();
    let date = ymd(2024, 4, 8);
    let p = panchang_for_date(&eph, date, &delhi(), IST, &PanchangConfig::default()).unwrap();
    assert_eq!(p.vaar, Vaar::Somvaar);
    assert_eq!(p.tithi.tithi, Tithi::Amavasya);
    assert_eq!(p.tithi.paksha, Paksha::Krishna);
    assert_eq!(p.tithi.tithi_in_paksha, 15);
    // conjunction at 18:21 UT = 23:51 IST
    assert!(minutes_apart(p.tithi.end, at(date, 23, 51)) < 10.0, "end {}", p.tithi.end);
    assert!(!p.auspicious);
}

#[test]
fn purnima_ends_on_the_next_date() {
    let eph = AnalyticEphemeris::default();
    let date = ymd(2024, 4, 23);
    let p = panchang_for_date(&eph, date, &delhi(), IST, &PanchangConfig::default()).unwrap();
    assert_eq!(p.tithi.tithi, Tithi::Purnima);
    // full moon at 23:49 UT = 05:19 IST on the 24th
    assert_eq!(p.tithi.end.date(), ymd(2024, 4, 24));
    assert!(minutes_apart(p.tithi.end, at(ymd(2024, 4, 24), 5, 19)) < 10.0);
    assert!(p.tithi.start < p.sunrise);
}

#[test]
fn limbs_bracket_sunrise_and_windows_sit_in_daylight() {
    let eph = AnalyticEphemeris::default();
    let p = panchang_for_date(&eph, ymd(2023, 10, 2), &delhi(), IST, &PanchangConfig::default())
        .unwrap();
    for (s, e) in [
        (p.tithi.start, p.tithi.end),
        (p.nakshatra.start, p.nakshatra.end),
        (p.yoga.start, p.yoga.end),
        (p.karana.start, p.karana.end),
    ] {
        assert!(s <= p.sunrise && p.sunrise < e);
    }
    for w in [p.rahu_kaal, p.yamagandam, p.gulika_kaal, p.abhijit] {
        assert!(w.start >= p.sunrise && w.end <= p.sunset && w.start < w.end);
    }
    // Abhijit straddles local noon in Delhi (±40 min for the equation of time)
    let mid = p.abhijit.start + (p.abhijit.end - p.abhijit.start) / 2;
    assert!((mid.hour() as i32 - 12).abs() <= 1);
}

#[test]
fn moon_events_stay_within_the_civil_day() {
    let eph = AnalyticEphemeris::default();
    let date = ymd(2024, 1, 17);
    let p = panchang_for_date(&eph, date, &delhi(), IST, &PanchangConfig::default()).unwrap();
    for t in [p.moonrise, p.moonset].into_iter().flatten() {
        assert_eq!(t.date(), date);
    }
    assert!(p.moonrise.is_some() || p.moonset.is_some());
}

#[test]
fn panchang_serializes() {
    let eph = AnalyticEphemeris::default();
    let p = panchang_for_date(&eph, ymd(2024, 3, 20), &delhi(), IST, &PanchangConfig::default())
        .unwrap();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["vaar"], "Budhvaar");
    assert!(json["sunrise"].as_str().unwrap().starts_with("2024-03-20T06:"));
}

#[test]
fn limbs_agree_with_a_chart_cast_at_sunrise() {
    let eph = AnalyticEphemeris::default();
    let margin = Duration::minutes(2);
    let clear = |start: NaiveDateTime, end: NaiveDateTime, at: NaiveDateTime| {
        at - start > margin && end - at > margin
    };
    for day in 0..12 {
        let date = ymd(2024, 1, 5) + Duration::days(day * 29);
        let p = panchang_for_date(&eph, date, &delhi(), IST, &PanchangConfig::default()).unwrap();
        let rise = p.sunrise;
        let input = BirthInput::builder()
            .date(rise.date())
            .time(rise.hour(), rise.minute(), rise.second())
            .location(28.6139, 77.209)
            .tz_offset_hours(IST)
            .build()
            .unwrap();
        let raw = positions(&eph, &input, NodeMode::Mean).unwrap();
        let lon = |g: Graha| raw.iter().find(|r| r.graha == g).unwrap().longitude;
        let (moon, sun) = (lon(Graha::Chandra), lon(Graha::Surya));

        if clear(p.nakshatra.start, p.nakshatra.end, rise) {
            assert_eq!(nakshatra_from_longitude(moon).nakshatra, p.nakshatra.nakshatra, "{date}");
        }
        if clear(p.tithi.start, p.tithi.end, rise) {
            assert_eq!(tithi_from_elongation(normalize_360(moon - sun)).tithi, p.tithi.tithi, "{date}");
        }
        if clear(p.yoga.start, p.yoga.end, rise) {
            assert_eq!(yoga_from_sum(normalize_360(moon + sun)).yoga, p.yoga.yoga, "{date}");
        }
    }
}
