//! Vaar (weekday) and the weekday-keyed inauspicious eighths of daylight.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

// 1-based eighth of daylight, indexed Sunday..Saturday.
const RAHU_KAAL_SEGMENT: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
const YAMAGANDAM_SEGMENT: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];
const GULIKA_SEGMENT: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

impl Vaar {
    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        ALL_VAARS[weekday.num_days_from_sunday() as usize]
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// Ruling graha of the day.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }

    pub const fn rahu_kaal_segment(self) -> u8 {
        RAHU_KAAL_SEGMENT[self.index() as usize]
    }

    pub const fn yamagandam_segment(self) -> u8 {
        YAMAGANDAM_SEGMENT[self.index() as usize]
    }

    pub const fn gulika_segment(self) -> u8 {
        GULIKA_SEGMENT[self.index() as usize]
    }
}

/// Weekday of the civil day containing a Julian Date (any UT offset already applied).
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let d = ((jd + 1.5).floor() as i64).rem_euclid(7);
    ALL_VAARS[d as usize]
}

/// Start and end of a 1-based eighth of the interval `[start, end]`.
pub fn day_segment(start: f64, end: f64, segment: u8) -> (f64, f64) {
    let len = (end - start) / 8.0;
    let s = start + len * f64::from(segment.clamp(1, 8) - 1);
    (s, s + len)
}

/// Abhijit muhurta: the 8th of 15 equal daytime muhurtas.
pub fn abhijit_window(sunrise: f64, sunset: f64) -> (f64, f64) {
    let m = (sunset - sunrise) / 15.0;
    (sunrise + 7.0 * m, sunrise + 8.0 * m)
}
