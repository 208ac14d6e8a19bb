//! Event rules for muhurat selection.
//!
//! A day qualifies for an event when its sunrise tithi, nakshatra and vaar are
//! all allowed. Vishti karana and the nine inauspicious yogas disqualify every
//! event and are checked by the finder, not stored per rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::karana::Karana;
use crate::nakshatra::Nakshatra;
use crate::tithi::{Paksha, Tithi};
use crate::vaar::Vaar;
use crate::yoga::Yoga;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuhuratEvent {
    Marriage,
    GrihaPravesh,
    VehiclePurchase,
    PropertyPurchase,
    BusinessOpening,
    Namakarana,
}

pub const ALL_MUHURAT_EVENTS: [MuhuratEvent; 6] = [
    MuhuratEvent::Marriage,
    MuhuratEvent::GrihaPravesh,
    MuhuratEvent::VehiclePurchase,
    MuhuratEvent::PropertyPurchase,
    MuhuratEvent::BusinessOpening,
    MuhuratEvent::Namakarana,
];

impl MuhuratEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::GrihaPravesh => "griha_pravesh",
            Self::VehiclePurchase => "vehicle_purchase",
            Self::PropertyPurchase => "property_purchase",
            Self::BusinessOpening => "business_opening",
            Self::Namakarana => "namakarana",
        }
    }

    pub const fn rule(self) -> &'static MuhuratRule {
        &MUHURAT_RULES[self as usize]
    }
}

impl fmt::Display for MuhuratEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuhuratEvent {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        ALL_MUHURAT_EVENTS
            .into_iter()
            .find(|e| e.as_str().replace('_', "") == key)
            .ok_or(VedicError::InvalidInput("unknown muhurat event"))
    }
}

/// Allowed and preferred sunrise elements for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuhuratRule {
    pub event: MuhuratEvent,
    /// Tithi numbers within the paksha (1-15).
    pub tithis: &'static [u8],
    /// Highest Krishna paksha tithi still allowed; 0 admits none.
    pub krishna_limit: u8,
    pub nakshatras: &'static [Nakshatra],
    pub vaars: &'static [Vaar],
    pub preferred_nakshatras: &'static [Nakshatra],
    pub preferred_vaars: &'static [Vaar],
}

impl MuhuratRule {
    pub fn allows_tithi(&self, tithi: Tithi) -> bool {
        let n = tithi.number_in_paksha();
        if tithi == Tithi::Amavasya || !self.tithis.contains(&n) {
            return false;
        }
        match tithi.paksha() {
            Paksha::Shukla => true,
            Paksha::Krishna => n <= self.krishna_limit,
        }
    }

    pub fn allows_nakshatra(&self, nakshatra: Nakshatra) -> bool {
        self.nakshatras.contains(&nakshatra)
    }

    pub fn allows_vaar(&self, vaar: Vaar) -> bool {
        self.vaars.contains(&vaar)
    }

    pub fn prefers_nakshatra(&self, nakshatra: Nakshatra) -> bool {
        self.preferred_nakshatras.contains(&nakshatra)
    }

    pub fn prefers_vaar(&self, vaar: Vaar) -> bool {
        self.preferred_vaars.contains(&vaar)
    }
}

/// Disqualifies a day for any event.
pub fn is_excluded(karana: Karana, yoga: Yoga) -> bool {
    karana == Karana::Vishti || yoga.is_inauspicious()
}

use Nakshatra as N;
use Vaar as V;

const WEEKDAYS_BENEFIC: &[Vaar] = &[V::Somvaar, V::Budhvaar, V::Guruvaar, V::Shukravaar];

const MUHURAT_RULES: [MuhuratRule; 6] = [
    MuhuratRule {
        event: MuhuratEvent::Marriage,
        tithis: &[2, 3, 5, 7, 10, 11, 12, 13, 15],
        krishna_limit: 10,
        nakshatras: &[
            N::Rohini,
            N::Mrigashira,
            N::Magha,
            N::UttaraPhalguni,
            N::Hasta,
            N::Swati,
            N::Anuradha,
            N::Mula,
            N::UttaraAshadha,
            N::UttaraBhadrapada,
            N::Revati,
        ],
        vaars: WEEKDAYS_BENEFIC,
        preferred_nakshatras: &[
            N::Rohini,
            N::UttaraPhalguni,
            N::UttaraAshadha,
            N::UttaraBhadrapada,
            N::Revati,
        ],
        preferred_vaars: &[V::Guruvaar, V::Shukravaar],
    },
    MuhuratRule {
        event: MuhuratEvent::GrihaPravesh,
        tithis: &[2, 3, 5, 7, 10, 11, 13],
        krishna_limit: 7,
        nakshatras: &[
            N::Rohini,
            N::Mrigashira,
            N::UttaraPhalguni,
            N::Chitra,
            N::Anuradha,
            N::UttaraAshadha,
            N::Dhanishtha,
            N::Shatabhisha,
            N::UttaraBhadrapada,
            N::Revati,
        ],
        vaars: WEEKDAYS_BENEFIC,
        preferred_nakshatras: &[
            N::Rohini,
            N::UttaraPhalguni,
            N::UttaraAshadha,
            N::UttaraBhadrapada,
        ],
        preferred_vaars: &[V::Guruvaar],
    },
    MuhuratRule {
        event: MuhuratEvent::VehiclePurchase,
        tithis: &[1, 2, 3, 5, 6, 7, 10, 11, 12, 13, 15],
        krishna_limit: 10,
        nakshatras: &[
            N::Ashwini,
            N::Rohini,
            N::Mrigashira,
            N::Punarvasu,
            N::Pushya,
            N::Hasta,
            N::Chitra,
            N::Swati,
            N::Anuradha,
            N::Shravana,
            N::Dhanishtha,
            N::Shatabhisha,
            N::Revati,
        ],
        vaars: &[V::Ravivaar, V::Somvaar, V::Budhvaar, V::Guruvaar, V::Shukravaar],
        preferred_nakshatras: &[N::Ashwini, N::Pushya, N::Hasta, N::Revati],
        preferred_vaars: &[V::Budhvaar, V::Shukravaar],
    },
    MuhuratRule {
        event: MuhuratEvent::PropertyPurchase,
        tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13, 15],
        krishna_limit: 10,
        nakshatras: &[
            N::Rohini,
            N::Mrigashira,
            N::Punarvasu,
            N::Pushya,
            N::Magha,
            N::UttaraPhalguni,
            N::Vishakha,
            N::Anuradha,
            N::Mula,
            N::UttaraAshadha,
            N::UttaraBhadrapada,
            N::Revati,
        ],
        vaars: &[V::Somvaar, V::Guruvaar, V::Shukravaar],
        preferred_nakshatras: &[N::Pushya, N::Rohini, N::UttaraPhalguni],
        preferred_vaars: &[V::Guruvaar],
    },
    MuhuratRule {
        event: MuhuratEvent::BusinessOpening,
        tithis: &[2, 3, 5, 7, 10, 11, 13, 15],
        krishna_limit: 5,
        nakshatras: &[
            N::Ashwini,
            N::Rohini,
            N::Mrigashira,
            N::Punarvasu,
            N::Pushya,
            N::UttaraPhalguni,
            N::Hasta,
            N::Chitra,
            N::Anuradha,
            N::UttaraAshadha,
            N::Shravana,
            N::Revati,
        ],
        vaars: WEEKDAYS_BENEFIC,
        preferred_nakshatras: &[N::Ashwini, N::Pushya, N::Hasta, N::Chitra],
        preferred_vaars: &[V::Budhvaar, V::Guruvaar],
    },
    MuhuratRule {
        event: MuhuratEvent::Namakarana,
        tithis: &[1, 2, 3, 5, 7, 10, 11, 12, 13],
        krishna_limit: 10,
        nakshatras: &[
            N::Ashwini,
            N::Rohini,
            N::Mrigashira,
            N::Punarvasu,
            N::Pushya,
            N::UttaraPhalguni,
            N::Hasta,
            N::Chitra,
            N::Swati,
            N::Anuradha,
            N::UttaraAshadha,
            N::Shravana,
            N::Dhanishtha,
            N::Shatabhisha,
            N::UttaraBhadrapada,
            N::Revati,
        ],
        vaars: WEEKDAYS_BENEFIC,
        preferred_nakshatras: &[N::Ashwini, N::Pushya, N::Shravana, N::Revati],
        preferred_vaars: &[V::Somvaar, V::Budhvaar],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_indexed_by_event() {
        for e in ALL_MUHURAT_EVENTS {
            assert_eq!(e.rule().event, e);
        }
    }

    #[test]
    fn preferred_subset_of_allowed() {
        for e in ALL_MUHURAT_EVENTS {
            let r = e.rule();
            assert!(r.preferred_nakshatras.iter().all(|n| r.allows_nakshatra(*n)), "{e}");
            assert!(r.preferred_vaars.iter().all(|v| r.allows_vaar(*v)), "{e}");
        }
    }

    #[test]
    fn rikta_and_amavasya_never_allowed() {
        for e in ALL_MUHURAT_EVENTS {
            let r = e.rule();
            assert!(!r.allows_tithi(Tithi::Amavasya));
            for idx in 0..30 {
                let t = Tithi::from_index(idx);
                if t.is_rikta() {
                    assert!(!r.allows_tithi(t), "{e} allows {}", t.name());
                }
            }
        }
    }

    #[test]
    fn krishna_limit_applies() {
        let r = MuhuratEvent::BusinessOpening.rule();
        // Krishna Panchami (index 19) allowed, Krishna Saptami (21) not
        assert!(r.allows_tithi(Tithi::from_index(19)));
        assert!(!r.allows_tithi(Tithi::from_index(21)));
        assert!(r.allows_tithi(Tithi::from_index(6)));
    }

    #[test]
    fn parse_event_names() {
        assert_eq!("marriage".parse::<MuhuratEvent>().unwrap(), MuhuratEvent::Marriage);
        assert_eq!("Griha-Pravesh".parse::<MuhuratEvent>().unwrap(), MuhuratEvent::GrihaPravesh);
        assert_eq!("business_opening".parse::<MuhuratEvent>().unwrap(), MuhuratEvent::BusinessOpening);
        assert!("funeral".parse::<MuhuratEvent>().is_err());
    }

    #[test]
    fn vishti_excluded() {
        assert!(is_excluded(Karana::Vishti, Yoga::from_index(1)));
        assert!(!is_excluded(Karana::Bava, Yoga::from_index(1)));
    }
}
