//! Panchang yoga: the sum of sidereal Sun and Moon longitudes in 27 parts.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

impl Yoga {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_YOGAS[(index % 27) as usize]
    }

    pub const fn name(self) -> &'static str {
        YOGA_NAMES[self as usize]
    }

    /// The nine yogas avoided for auspicious work.
    pub const fn is_inauspicious(self) -> bool {
        matches!(
            self,
            Self::Vishkambha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    pub degrees_in_yoga: f64,
}

/// Yoga from the sum of sidereal Sun and Moon longitudes.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let s = normalize_360(sum_deg);
    let idx = ((s / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    YogaPosition {
        yoga: Yoga::from_index(idx),
        degrees_in_yoga: s - f64::from(idx) * YOGA_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_order() {
        assert_eq!(Yoga::Vishkambha.name(), "Vishkambha");
        assert_eq!(Yoga::from_index(15).name(), "Siddhi");
        assert_eq!(Yoga::Vaidhriti.name(), "Vaidhriti");
    }

    #[test]
    fn ends_of_cycle() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(359.9).yoga, Yoga::Vaidhriti);
        assert_eq!(yoga_from_sum(370.0).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(14.0).yoga, Yoga::Priti);
    }

    #[test]
    fn nine_inauspicious() {
        assert_eq!(ALL_YOGAS.iter().filter(|y| y.is_inauspicious()).count(), 9);
    }
}
