//! Rashi (zodiac sign) lookup on the sidereal ecliptic.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting
//! from Mesha at 0 deg sidereal.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Span of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Rashi containing a sidereal longitude.
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let idx = (normalize_360(sidereal_lon_deg) / RASHI_SPAN_DEG).floor() as u8;
        Self::from_index(idx.min(11))
    }

    /// The rashi `n` signs onward, counting this one as the 1st.
    pub const fn nth(self, n: u8) -> Self {
        Self::from_index(self.index() + (n + 11) % 12)
    }

    /// Inclusive count from `self` to `other` (same sign = 1, next = 2, ... 12).
    pub const fn count_to(self, other: Rashi) -> u8 {
        (other.index() + 12 - self.index()) % 12 + 1
    }
}

/// Degrees elapsed within the rashi containing `sidereal_lon_deg`.
pub fn degree_in_rashi(sidereal_lon_deg: f64) -> f64 {
    normalize_360(sidereal_lon_deg) % RASHI_SPAN_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(Rashi::from_longitude(0.0), Rashi::Mesha);
        assert_eq!(Rashi::from_longitude(29.999), Rashi::Mesha);
        assert_eq!(Rashi::from_longitude(30.0), Rashi::Vrishabha);
        assert_eq!(Rashi::from_longitude(359.9), Rashi::Meena);
        assert_eq!(Rashi::from_longitude(-0.5), Rashi::Meena);
    }

    #[test]
    fn counting_is_inclusive() {
        assert_eq!(Rashi::Mesha.count_to(Rashi::Mesha), 1);
        assert_eq!(Rashi::Mesha.count_to(Rashi::Tula), 7);
        assert_eq!(Rashi::Meena.count_to(Rashi::Mesha), 2);
        assert_eq!(Rashi::Mesha.count_to(Rashi::Meena), 12);
    }

    #[test]
    fn nth_matches_count() {
        for r in ALL_RASHIS {
            for n in 1..=12 {
                assert_eq!(r.count_to(r.nth(n)), n);
            }
        }
    }

    #[test]
    fn degree_within_sign() {
        assert!((degree_in_rashi(45.5) - 15.5).abs() < 1e-12);
    }
}
