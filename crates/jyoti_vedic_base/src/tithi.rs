//! Tithi (lunar day): each 12 degrees of Moon-Sun elongation.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing.
    Shukla,
    /// Waning.
    Krishna,
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

const PAKSHA_TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

impl Tithi {
    /// 0-based index (Shukla Pratipada = 0, Amavasya = 29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_TITHIS[(index % 30) as usize]
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 { Paksha::Shukla } else { Paksha::Krishna }
    }

    /// 1-based number within the paksha (1-15).
    pub const fn number_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_TITHI_NAMES[(self.index() % 15) as usize],
        }
    }

    /// Chaturthi, Navami and Chaturdashi of either paksha.
    pub const fn is_rikta(self) -> bool {
        matches!(self.number_in_paksha(), 4 | 9 | 14)
    }
}

/// Tithi placement of an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// 1-15.
    pub tithi_in_paksha: u8,
    /// Degrees of elongation elapsed in this tithi.
    pub degrees_in_tithi: f64,
}

/// Tithi from Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let e = normalize_360(elongation_deg);
    let idx = ((e / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let tithi = Tithi::from_index(idx);
    TithiPosition {
        tithi,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.number_in_paksha(),
        degrees_in_tithi: e - f64::from(idx) * TITHI_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(tithi_from_elongation(0.0).tithi, Tithi::ShuklaPratipada);
        assert_eq!(tithi_from_elongation(11.99).tithi, Tithi::ShuklaPratipada);
        assert_eq!(tithi_from_elongation(12.0).tithi, Tithi::ShuklaDwitiya);
        assert_eq!(tithi_from_elongation(179.0).tithi, Tithi::Purnima);
        assert_eq!(tithi_from_elongation(180.0).tithi, Tithi::KrishnaPratipada);
        assert_eq!(tithi_from_elongation(359.9).tithi, Tithi::Amavasya);
    }

    #[test]
    fn paksha_numbers() {
        let p = tithi_from_elongation(200.0);
        assert_eq!(p.paksha, Paksha::Krishna);
        assert_eq!(p.tithi_in_paksha, 2);
        assert!((p.degrees_in_tithi - 8.0).abs() < 1e-12);
    }

    #[test]
    fn rikta() {
        let rikta: Vec<_> = ALL_TITHIS.iter().filter(|t| t.is_rikta()).collect();
        assert_eq!(rikta.len(), 6);
        assert!(Tithi::KrishnaChaturdashi.is_rikta());
        assert!(!Tithi::Amavasya.is_rikta());
    }

    #[test]
    fn names() {
        assert_eq!(Tithi::ShuklaEkadashi.name(), "Ekadashi");
        assert_eq!(Tithi::KrishnaEkadashi.name(), "Ekadashi");
        assert_eq!(Tithi::Amavasya.name(), "Amavasya");
    }
}
