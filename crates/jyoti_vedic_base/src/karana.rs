//! Karana: half a tithi, 6 degrees of elongation, 60 per synodic month.
//!
//! Slot 0 is Kimstughna, slots 1-56 cycle through the seven movable
//! karanas, and slots 57-59 are Shakuni, Chatushpada and Naga.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

pub const KARANA_SEGMENT_DEG: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    /// Bhadra; inauspicious.
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Karana occupying a 0-based slot of the synodic month.
    pub const fn from_slot(slot: u8) -> Self {
        match slot % 60 {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            s => MOVABLE[((s - 1) % 7) as usize],
        }
    }

    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-59.
    pub karana_index: u8,
    pub degrees_in_karana: f64,
}

pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let e = normalize_360(elongation_deg);
    let slot = ((e / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    KaranaPosition {
        karana: Karana::from_slot(slot),
        karana_index: slot,
        degrees_in_karana: e - f64::from(slot) * KARANA_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_slots() {
        assert_eq!(karana_from_elongation(1.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(343.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(349.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(355.0).karana, Karana::Naga);
    }

    #[test]
    fn movable_cycle() {
        assert_eq!(Karana::from_slot(1), Karana::Bava);
        assert_eq!(Karana::from_slot(7), Karana::Vishti);
        assert_eq!(Karana::from_slot(8), Karana::Bava);
        assert_eq!(Karana::from_slot(56), Karana::Vishti);
    }

    #[test]
    fn vishti_occurs_eight_times() {
        let n = (0..60).filter(|&s| Karana::from_slot(s) == Karana::Vishti).count();
        assert_eq!(n, 8);
    }
}
