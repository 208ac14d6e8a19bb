//! Period tables for Vimshottari and Yogini.

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

use super::types::{DashaEntity, DashaSystem, Yogini};

/// Vimshottari lords and their years, in dasha order.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

pub const VIMSHOTTARI_YEARS: f64 = 120.0;

/// Yoginis and their years (1..8).
pub const YOGINI_SEQUENCE: [(Yogini, f64); 8] = [
    (Yogini::Mangala, 1.0),
    (Yogini::Pingala, 2.0),
    (Yogini::Dhanya, 3.0),
    (Yogini::Bhramari, 4.0),
    (Yogini::Bhadrika, 5.0),
    (Yogini::Ulka, 6.0),
    (Yogini::Siddha, 7.0),
    (Yogini::Sankata, 8.0),
];

pub const YOGINI_YEARS: f64 = 36.0;

/// Graha associated with each yogini.
pub const fn yogini_graha(yogini: Yogini) -> Graha {
    match yogini {
        Yogini::Mangala => Graha::Chandra,
        Yogini::Pingala => Graha::Surya,
        Yogini::Dhanya => Graha::Guru,
        Yogini::Bhramari => Graha::Mangal,
        Yogini::Bhadrika => Graha::Buddh,
        Yogini::Ulka => Graha::Shani,
        Yogini::Siddha => Graha::Shukra,
        Yogini::Sankata => Graha::Rahu,
    }
}

/// Cyclic entity sequence for a system, with years per entity.
#[derive(Debug, Clone, Copy)]
pub struct DashaCycle {
    pub system: DashaSystem,
    pub sequence: &'static [(DashaEntity, f64)],
    pub total_years: f64,
}

const VIMSHOTTARI_ENTITIES: [(DashaEntity, f64); 9] = {
    let mut out = [(DashaEntity::Graha(Graha::Ketu), 0.0); 9];
    let mut i = 0;
    while i < 9 {
        out[i] = (DashaEntity::Graha(VIMSHOTTARI_SEQUENCE[i].0), VIMSHOTTARI_SEQUENCE[i].1);
        i += 1;
    }
    out
};

const YOGINI_ENTITIES: [(DashaEntity, f64); 8] = {
    let mut out = [(DashaEntity::Yogini(Yogini::Mangala), 0.0); 8];
    let mut i = 0;
    while i < 8 {
        out[i] = (DashaEntity::Yogini(YOGINI_SEQUENCE[i].0), YOGINI_SEQUENCE[i].1);
        i += 1;
    }
    out
};

impl DashaCycle {
    pub const fn for_system(system: DashaSystem) -> Self {
        match system {
            DashaSystem::Vimshottari => Self {
                system,
                sequence: &VIMSHOTTARI_ENTITIES,
                total_years: VIMSHOTTARI_YEARS,
            },
            DashaSystem::Yogini => Self {
                system,
                sequence: &YOGINI_ENTITIES,
                total_years: YOGINI_YEARS,
            },
        }
    }

    /// Position in the sequence of the period running at birth.
    pub const fn starting_index(&self, nakshatra: Nakshatra) -> usize {
        let nak = nakshatra.index() as usize;
        match self.system {
            DashaSystem::Vimshottari => nak % 9,
            DashaSystem::Yogini => {
                // ((nakshatra_1_based + 3) mod 8), 1 = Mangala, 0 = Sankata
                match (nak + 1 + 3) % 8 {
                    0 => 7,
                    r => r - 1,
                }
            }
        }
    }

    pub fn position_of(&self, entity: DashaEntity) -> Option<usize> {
        self.sequence.iter().position(|(e, _)| *e == entity)
    }

    pub fn years_of(&self, index: usize) -> f64 {
        self.sequence[index % self.sequence.len()].1
    }

    pub fn entity_at(&self, index: usize) -> DashaEntity {
        self.sequence[index % self.sequence.len()].0
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
