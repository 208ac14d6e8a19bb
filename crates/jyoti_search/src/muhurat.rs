//! Muhurat search over a run of civil days.
//!
//! Each day is judged by its sunrise elements against the event's rule.
//! A qualifying day's daylight is clipped to the span in which all four
//! sunrise limbs (tithi, nakshatra, yoga, karana) still prevail. Rahu Kaal,
//! Yamagandam and Gulika are cut out, and every remaining piece long enough
//! becomes a window.

use chrono::{Days, Months, NaiveDate};
use jyoti_core::Ephemeris;
use jyoti_time::{jd_ut_to_local, validate_tz_offset};
use jyoti_vedic_base::muhurat_rules::is_excluded;
use jyoti_vedic_base::{GeoLocation, MuhuratEvent, MuhuratRule, Paksha};

use crate::error::SearchError;
use crate::muhurat_types::{BASE_SCORE, BONUS_SCORE, MAX_SCORE, MuhuratConfig, MuhuratWindow};
use crate::panchang::{VedicDay, vedic_day};

const MINUTES_PER_DAY: f64 = 1440.0;

/// Remove `cuts` from `span`, returning the pieces left in time order.
pub(crate) fn subtract_intervals(span: (f64, f64), cuts: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut cuts = cuts.to_vec();
    cuts.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut pieces = Vec::new();
    let mut cursor = span.0;
    for (s, e) in cuts {
        if e <= cursor || s >= span.1 {
            continue;
        }
        if s > cursor {
            pieces.push((cursor, s));
        }
        cursor = cursor.max(e);
    }
    if cursor < span.1 {
        pieces.push((cursor, span.1));
    }
    pieces
}

/// Rule predicates met by the day, or `None` when the day fails the rule.
fn qualifying_reasons(rule: &MuhuratRule, day: &VedicDay) -> Option<Vec<String>> {
    if !rule.allows_tithi(day.tithi)
        || !rule.allows_nakshatra(day.nakshatra)
        || !rule.allows_vaar(day.vaar)
        || is_excluded(day.karana, day.yoga)
    {
        return None;
    }
    Some(vec![
        format!("tithi {} {} allowed", paksha_name(day.tithi.paksha()), day.tithi.name()),
        format!("nakshatra {} allowed", day.nakshatra.name()),
        format!("{} allowed", day.vaar.name()),
        format!("karana {} and yoga {} are not excluded", day.karana.name(), day.yoga.name()),
    ])
}

fn paksha_name(paksha: Paksha) -> &'static str {
    match paksha {
        Paksha::Shukla => "Shukla",
        Paksha::Krishna => "Krishna",
    }
}

/// Score a window and extend its reasons with the bonuses earned.
fn score_window(
    rule: &MuhuratRule,
    day: &VedicDay,
    piece: (f64, f64),
    reasons: &mut Vec<String>,
) -> u8 {
    let mut score = BASE_SCORE;
    let abhijit = day.abhijit();
    let bonuses = [
        (day.tithi.paksha() == Paksha::Shukla, "Shukla paksha".to_string()),
        (rule.prefers_nakshatra(day.nakshatra), format!("preferred nakshatra {}", day.nakshatra.name())),
        (rule.prefers_vaar(day.vaar), format!("preferred weekday {}", day.vaar.name())),
        (piece.0 <= abhijit.0 && piece.1 >= abhijit.1, "contains Abhijit muhurta".to_string()),
    ];
    for (earned, reason) in bonuses {
        if earned {
            score = score.saturating_add(BONUS_SCORE);
            reasons.push(reason);
        }
    }
    score.min(MAX_SCORE)
}

fn windows_for_day(
    event: MuhuratEvent,
    date: NaiveDate,
    day: &VedicDay,
    tz_offset_hours: f64,
    config: &MuhuratConfig,
) -> Result<Vec<MuhuratWindow>, SearchError> {
    let rule = event.rule();
    let Some(reasons) = qualifying_reasons(rule, day) else {
        tracing::trace!(%event, %date, "day fails rule");
        return Ok(Vec::new());
    };
    let end = day.sunset.min(day.prevailing_until());
    let cuts = [day.rahu_kaal(), day.yamagandam(), day.gulika_kaal()];

    let mut out = Vec::new();
    for piece in subtract_intervals((day.sunrise, end), &cuts) {
        if (piece.1 - piece.0) * MINUTES_PER_DAY < config.min_window_minutes {
            continue;
        }
        let mut reasons = reasons.clone();
        let score = score_window(rule, day, piece, &mut reasons);
        out.push(MuhuratWindow {
            event,
            date,
            start: jd_ut_to_local(piece.0, tz_offset_hours)?,
            end: jd_ut_to_local(piece.1, tz_offset_hours)?,
            score,
            reasons,
        });
    }
    Ok(out)
}

/// Auspicious windows for `event` on `duration_days` days from `start`.
///
/// Days without a sunrise are skipped. Windows are ordered by date, then
/// start time.
#[tracing::instrument(skip(engine, config), level = "debug")]
pub fn find_muhurat(
    engine: &dyn Ephemeris,
    event: MuhuratEvent,
    start: NaiveDate,
    duration_days: u32,
    location: &GeoLocation,
    tz_offset_hours: f64,
    config: &MuhuratConfig,
) -> Result<Vec<MuhuratWindow>, SearchError> {
    location.validate()?;
    validate_tz_offset(tz_offset_hours)?;
    if !(config.min_window_minutes.is_finite() && config.min_window_minutes >= 0.0) {
        return Err(SearchError::InvalidConfig("min_window_minutes must be non-negative"));
    }

    let mut windows = Vec::new();
    for offset in 0..duration_days {
        let date = start
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or(SearchError::InvalidConfig("date range overflows the calendar"))?;
        let day = match vedic_day(engine, date, location, tz_offset_hours, &config.panchang) {
            Ok(day) => day,
            Err(SearchError::NoSunrise(why)) => {
                tracing::debug!(%date, why, "skipping day without sunrise");
                continue;
            }
            Err(e) => return Err(e),
        };
        windows.extend(windows_for_day(event, date, &day, tz_offset_hours, config)?);
    }
    windows.sort_by_key(|w| (w.date, w.start));
    tracing::debug!(found = windows.len(), "muhurat search done");
    Ok(windows)
}

/// Windows for `event` across one calendar month.
pub fn monthly_auspicious_dates(
    engine: &dyn Ephemeris,
    event: MuhuratEvent,
    year: i32,
    month: u32,
    location: &GeoLocation,
    tz_offset_hours: f64,
    config: &MuhuratConfig,
) -> Result<Vec<MuhuratWindow>, SearchError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(SearchError::InvalidConfig("invalid year or month"))?;
    let days = first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days())
        .ok_or(SearchError::InvalidConfig("month overflows the calendar"))?;
    find_muhurat(engine, event, first, days as u32, location, tz_offset_hours, config)
}
