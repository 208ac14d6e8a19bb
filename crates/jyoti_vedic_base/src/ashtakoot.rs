//! Ashtakoot (eight-factor) marriage compatibility.
//!
//! Each koota compares an attribute of the groom's and bride's natal Moon.
//! Points are whole numbers; the maxima 1 through 8 add up to 36. Varna
//! and Gana are directional (groom first), the other six are symmetric.

use serde::{Deserialize, Serialize};

use crate::chart::BirthChart;
use crate::dosha::DoshaKind;
use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord};
use crate::graha_relationships::{NaisargikaMaitri, are_mutual_friends, naisargika_maitri};
use crate::nakshatra::{NAKSHATRA_SPAN_27, Nakshatra, PADA_SPAN};
use crate::rashi::Rashi;

/// Highest possible total.
pub const MAX_GUNA_TOTAL: u8 = 36;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The Moon-based facts one partner contributes to matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GunaInputs {
    pub moon_rashi: Rashi,
    pub moon_nakshatra: Nakshatra,
    /// 1-4.
    pub moon_pada: u8,
    /// Mangal dosha in force in this partner's chart.
    pub mangal_dosha: bool,
}

impl GunaInputs {
    pub fn new(
        moon_rashi: Rashi,
        moon_nakshatra: Nakshatra,
        moon_pada: u8,
        mangal_dosha: bool,
    ) -> Result<Self, VedicError> {
        if !(1..=4).contains(&moon_pada) {
            return Err(VedicError::InvalidInput("moon pada must be 1-4"));
        }
        if pada_rashi(moon_nakshatra, moon_pada) != moon_rashi {
            return Err(VedicError::InvalidInput("moon nakshatra pada does not lie in moon rashi"));
        }
        Ok(Self { moon_rashi, moon_nakshatra, moon_pada, mangal_dosha })
    }

    /// Take the Moon placement and Mangal dosha verdict from a built chart.
    pub fn from_chart(chart: &BirthChart) -> Result<Self, VedicError> {
        let moon = chart.require(Graha::Chandra)?;
        let mangal_dosha = chart
            .doshas()
            .iter()
            .any(|d| d.kind == DoshaKind::Mangal && d.present);
        Self::new(moon.rashi, moon.nakshatra, moon.pada, mangal_dosha)
    }
}

/// Rashi holding a nakshatra pada. Padas never straddle a sign boundary.
pub fn pada_rashi(nakshatra: Nakshatra, pada: u8) -> Rashi {
    let mid = f64::from(nakshatra.index()) * NAKSHATRA_SPAN_27 + (f64::from(pada) - 0.5) * PADA_SPAN;
    Rashi::from_longitude(mid)
}

// ---------------------------------------------------------------------------
// Attribute tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Varna {
    Shudra,
    Vaishya,
    Kshatriya,
    Brahmin,
}

pub const fn varna(rashi: Rashi) -> Varna {
    match rashi {
        Rashi::Karka | Rashi::Vrischika | Rashi::Meena => Varna::Brahmin,
        Rashi::Mesha | Rashi::Simha | Rashi::Dhanu => Varna::Kshatriya,
        Rashi::Vrishabha | Rashi::Kanya | Rashi::Makara => Varna::Vaishya,
        Rashi::Mithuna | Rashi::Tula | Rashi::Kumbha => Varna::Shudra,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vashya {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

pub const fn vashya(rashi: Rashi) -> Vashya {
    match rashi {
        Rashi::Mesha | Rashi::Vrishabha => Vashya::Chatushpada,
        Rashi::Mithuna | Rashi::Kanya | Rashi::Tula | Rashi::Dhanu | Rashi::Kumbha => {
            Vashya::Manava
        }
        Rashi::Karka | Rashi::Makara | Rashi::Meena => Vashya::Jalachara,
        Rashi::Simha => Vashya::Vanachara,
        Rashi::Vrischika => Vashya::Keeta,
    }
}

const VASHYA_POINTS: [[u8; 5]; 5] = [
    [2, 1, 1, 0, 1],
    [1, 2, 0, 0, 1],
    [1, 0, 2, 1, 1],
    [0, 0, 1, 2, 0],
    [1, 1, 1, 0, 2],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

const NAKSHATRA_YONI: [Yoni; 27] = [
    Yoni::Horse,    // Ashwini
    Yoni::Elephant, // Bharani
    Yoni::Sheep,    // Krittika
    Yoni::Serpent,  // Rohini
    Yoni::Serpent,  // Mrigashira
    Yoni::Dog,      // Ardra
    Yoni::Cat,      // Punarvasu
    Yoni::Sheep,    // Pushya
    Yoni::Cat,      // Ashlesha
    Yoni::Rat,      // Magha
    Yoni::Rat,      // Purva Phalguni
    Yoni::Cow,      // Uttara Phalguni
    Yoni::Buffalo,  // Hasta
    Yoni::Tiger,    // Chitra
    Yoni::Buffalo,  // Swati
    Yoni::Tiger,    // Vishakha
    Yoni::Deer,     // Anuradha
    Yoni::Deer,     // Jyeshtha
    Yoni::Dog,      // Mula
    Yoni::Monkey,   // Purva Ashadha
    Yoni::Mongoose, // Uttara Ashadha
    Yoni::Monkey,   // Shravana
    Yoni::Lion,     // Dhanishtha
    Yoni::Horse,    // Shatabhisha
    Yoni::Lion,     // Purva Bhadrapada
    Yoni::Cow,      // Uttara Bhadrapada
    Yoni::Elephant, // Revati
];

pub const fn yoni(nakshatra: Nakshatra) -> Yoni {
    NAKSHATRA_YONI[nakshatra.index() as usize]
}

/// Symmetric; sworn enemies score 0.
const YONI_POINTS: [[u8; 14]; 14] = [
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1],
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0],
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1],
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2],
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1],
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1],
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2],
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1],
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1],
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1],
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1],
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2],
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2],
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

pub const fn gana(nakshatra: Nakshatra) -> Gana {
    use Nakshatra::*;
    match nakshatra {
        Ashwini | Mrigashira | Punarvasu | Pushya | Hasta | Swati | Anuradha | Shravana
        | Revati => Gana::Deva,
        Bharani | Rohini | Ardra | PurvaPhalguni | UttaraPhalguni | PurvaAshadha
        | UttaraAshadha | PurvaBhadrapada | UttaraBhadrapada => Gana::Manushya,
        _ => Gana::Rakshasa,
    }
}

/// Groom row, bride column.
const GANA_POINTS: [[u8; 3]; 3] = [[6, 6, 1], [5, 6, 0], [1, 0, 6]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

pub const fn nadi(nakshatra: Nakshatra) -> Nadi {
    const PATTERN: [Nadi; 6] = [Nadi::Adi, Nadi::Madhya, Nadi::Antya, Nadi::Antya, Nadi::Madhya, Nadi::Adi];
    PATTERN[(nakshatra.index() % 6) as usize]
}

// ---------------------------------------------------------------------------
// Kootas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn max_points(self) -> u8 {
        match self {
            Self::Varna => 1,
            Self::Vashya => 2,
            Self::Tara => 3,
            Self::Yoni => 4,
            Self::GrahaMaitri => 5,
            Self::Gana => 6,
            Self::Bhakoot => 7,
            Self::Nadi => 8,
        }
    }
}

/// Points per koota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GunaSet {
    pub varna: u8,
    pub vashya: u8,
    pub tara: u8,
    pub yoni: u8,
    pub graha_maitri: u8,
    pub gana: u8,
    pub bhakoot: u8,
    pub nadi: u8,
}

impl GunaSet {
    pub fn get(&self, koota: Koota) -> u8 {
        match koota {
            Koota::Varna => self.varna,
            Koota::Vashya => self.vashya,
            Koota::Tara => self.tara,
            Koota::Yoni => self.yoni,
            Koota::GrahaMaitri => self.graha_maitri,
            Koota::Gana => self.gana,
            Koota::Bhakoot => self.bhakoot,
            Koota::Nadi => self.nadi,
        }
    }

    pub fn total(&self) -> u8 {
        ALL_KOOTAS.iter().map(|&k| self.get(k)).sum()
    }
}

pub fn varna_points(groom: Rashi, bride: Rashi) -> u8 {
    u8::from(varna(groom) >= varna(bride))
}

pub fn vashya_points(a: Rashi, b: Rashi) -> u8 {
    VASHYA_POINTS[vashya(a) as usize][vashya(b) as usize]
}

/// Tara position counted from `from` to `to` is unfavourable at 3, 5 or 7 (mod 9).
fn tara_favourable(from: Nakshatra, to: Nakshatra) -> bool {
    let n = (to.index() + 27 - from.index()) % 27 + 1;
    !matches!(n % 9, 3 | 5 | 7)
}

pub fn tara_points(a: Nakshatra, b: Nakshatra) -> u8 {
    match (tara_favourable(a, b), tara_favourable(b, a)) {
        (true, true) => 3,
        (true, false) | (false, true) => 1,
        (false, false) => 0,
    }
}

pub fn yoni_points(a: Nakshatra, b: Nakshatra) -> u8 {
    YONI_POINTS[yoni(a) as usize][yoni(b) as usize]
}

pub fn graha_maitri_points(a: Rashi, b: Rashi) -> u8 {
    use NaisargikaMaitri::*;
    let (la, lb) = (rashi_lord(a), rashi_lord(b));
    if la == lb {
        return 5;
    }
    match (naisargika_maitri(la, lb), naisargika_maitri(lb, la)) {
        (Friend, Friend) => 5,
        (Friend, Neutral) | (Neutral, Friend) => 4,
        (Neutral, Neutral) => 3,
        (Friend, Enemy) | (Enemy, Friend) => 1,
        _ => 0,
    }
}

pub fn gana_points(groom: Nakshatra, bride: Nakshatra) -> u8 {
    GANA_POINTS[gana(groom) as usize][gana(bride) as usize]
}

/// 2/12, 5/9 and 6/8 sign relationships score zero.
pub fn bhakoot_points(a: Rashi, b: Rashi) -> u8 {
    if matches!(a.count_to(b), 2 | 12 | 5 | 9 | 6 | 8) { 0 } else { 7 }
}

pub fn nadi_points(a: Nakshatra, b: Nakshatra) -> u8 {
    if nadi(a) == nadi(b) { 0 } else { 8 }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriticalDoshaKind {
    Nadi,
    Bhakoot,
    Mangal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalDosha {
    pub kind: CriticalDoshaKind,
    pub cancelled: bool,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Average,
    Poor,
}

impl CompatibilityLevel {
    pub const fn from_total(total: u8) -> Self {
        match total {
            28.. => Self::Excellent,
            21..=27 => Self::Good,
            14..=20 => Self::Average,
            _ => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub total: u8,
    pub gunas: GunaSet,
    pub critical_doshas: Vec<CriticalDosha>,
    pub level: CompatibilityLevel,
    /// `total / 36 * 100`.
    pub percentage: f64,
}

fn nadi_dosha(groom: &GunaInputs, bride: &GunaInputs) -> CriticalDosha {
    let cancellation = if groom.moon_rashi == bride.moon_rashi
        && groom.moon_nakshatra != bride.moon_nakshatra
    {
        Some("same rashi with different nakshatras")
    } else if groom.moon_nakshatra == bride.moon_nakshatra && groom.moon_pada != bride.moon_pada {
        Some("same nakshatra with different padas")
    } else {
        None
    };
    CriticalDosha {
        kind: CriticalDoshaKind::Nadi,
        cancelled: cancellation.is_some(),
        reason: match cancellation {
            Some(c) => format!("both partners share {:?} nadi; cancelled: {c}", nadi(groom.moon_nakshatra)),
            None => format!("both partners share {:?} nadi", nadi(groom.moon_nakshatra)),
        },
    }
}

fn bhakoot_dosha(groom: &GunaInputs, bride: &GunaInputs) -> CriticalDosha {
    let (lg, lb) = (rashi_lord(groom.moon_rashi), rashi_lord(bride.moon_rashi));
    let distance = groom.moon_rashi.count_to(bride.moon_rashi);
    let cancellation = if lg == lb {
        Some(format!("both rashis ruled by {}", lg.name()))
    } else if are_mutual_friends(lg, lb) {
        Some(format!("rashi lords {} and {} are mutual friends", lg.name(), lb.name()))
    } else {
        None
    };
    let base = format!("moon signs {}/{} apart", distance, 14 - distance);
    CriticalDosha {
        kind: CriticalDoshaKind::Bhakoot,
        cancelled: cancellation.is_some(),
        reason: match cancellation {
            Some(c) => format!("{base}; cancelled: {c}"),
            None => base,
        },
    }
}

/// Score a couple. Groom first: Varna and Gana are directional.
pub fn score(groom: &GunaInputs, bride: &GunaInputs) -> CompatibilityResult {
    let gunas = GunaSet {
        varna: varna_points(groom.moon_rashi, bride.moon_rashi),
        vashya: vashya_points(groom.moon_rashi, bride.moon_rashi),
        tara: tara_points(groom.moon_nakshatra, bride.moon_nakshatra),
        yoni: yoni_points(groom.moon_nakshatra, bride.moon_nakshatra),
        graha_maitri: graha_maitri_points(groom.moon_rashi, bride.moon_rashi),
        gana: gana_points(groom.moon_nakshatra, bride.moon_nakshatra),
        bhakoot: bhakoot_points(groom.moon_rashi, bride.moon_rashi),
        nadi: nadi_points(groom.moon_nakshatra, bride.moon_nakshatra),
    };

    let mut critical_doshas = Vec::new();
    if gunas.nadi == 0 {
        critical_doshas.push(nadi_dosha(groom, bride));
    }
    if gunas.bhakoot == 0 {
        critical_doshas.push(bhakoot_dosha(groom, bride));
    }
    if groom.mangal_dosha != bride.mangal_dosha {
        let who = if groom.mangal_dosha { "groom" } else { "bride" };
        critical_doshas.push(CriticalDosha {
            kind: CriticalDoshaKind::Mangal,
            cancelled: false,
            reason: format!("only the {who} has Mangal dosha"),
        });
    }

    let total = gunas.total();
    tracing::debug!(total, critical = critical_doshas.len(), "ashtakoot scored");
    CompatibilityResult {
        total,
        gunas,
        critical_doshas,
        level: CompatibilityLevel::from_total(total),
        percentage: f64::from(total) / f64::from(MAX_GUNA_TOTAL) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS_27;
    use crate::rashi::ALL_RASHIS;

    fn person(rashi: Rashi, nak: Nakshatra, pada: u8) -> GunaInputs {
        GunaInputs::new(rashi, nak, pada, false).unwrap()
    }

    #[test]
    fn maxima_sum_to_36() {
        let s: u8 = ALL_KOOTAS.iter().map(|k| k.max_points()).sum();
        assert_eq!(s, MAX_GUNA_TOTAL);
    }

    #[test]
    fn yoni_matrix_symmetric() {
        for i in 0..14 {
            for j in 0..14 {
                assert_eq!(YONI_POINTS[i][j], YONI_POINTS[j][i], "({i},{j})");
            }
            assert_eq!(YONI_POINTS[i][i], 4);
        }
    }

    #[test]
    fn vashya_matrix_symmetric() {
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(VASHYA_POINTS[i][j], VASHYA_POINTS[j][i]);
            }
        }
    }

    #[test]
    fn gana_counts() {
        let count = |g| ALL_NAKSHATRAS_27.iter().filter(|&&n| gana(n) == g).count();
        assert_eq!(count(Gana::Deva), 9);
        assert_eq!(count(Gana::Manushya), 9);
        assert_eq!(count(Gana::Rakshasa), 9);
    }

    #[test]
    fn nadi_counts() {
        let count = |x| ALL_NAKSHATRAS_27.iter().filter(|&&n| nadi(n) == x).count();
        assert_eq!(count(Nadi::Adi), 9);
        assert_eq!(nadi(Nakshatra::Ashwini), Nadi::Adi);
        assert_eq!(nadi(Nakshatra::Rohini), Nadi::Antya);
        assert_eq!(nadi(Nakshatra::Revati), Nadi::Antya);
    }

    #[test]
    fn sworn_enemy_yonis() {
        // Horse and Buffalo
        assert_eq!(yoni_points(Nakshatra::Ashwini, Nakshatra::Hasta), 0);
        // Cat and Rat
        assert_eq!(yoni_points(Nakshatra::Punarvasu, Nakshatra::Magha), 0);
    }

    #[test]
    fn varna_is_directional() {
        assert_eq!(varna_points(Rashi::Karka, Rashi::Mithuna), 1);
        assert_eq!(varna_points(Rashi::Mithuna, Rashi::Karka), 0);
    }

    #[test]
    fn tara_examples() {
        assert_eq!(tara_points(Nakshatra::Ashwini, Nakshatra::Ashwini), 3);
        // Ashwini -> Krittika is 3rd (vipat); Krittika -> Ashwini is 26th (26 % 9 = 8)
        assert_eq!(tara_points(Nakshatra::Ashwini, Nakshatra::Krittika), 1);
        // 5th one way (Ashwini -> Mrigashira), 23rd back (23 % 9 = 5)
        assert_eq!(tara_points(Nakshatra::Ashwini, Nakshatra::Mrigashira), 0);
    }

    #[test]
    fn graha_maitri_examples() {
        // Simha (Surya) & Karka (Chandra): mutual friends
        assert_eq!(graha_maitri_points(Rashi::Simha, Rashi::Karka), 5);
        // Mesha & Vrischika share Mangal
        assert_eq!(graha_maitri_points(Rashi::Mesha, Rashi::Vrischika), 5);
        // Karka (Chandra) & Mithuna (Buddh): friend / enemy
        assert_eq!(graha_maitri_points(Rashi::Karka, Rashi::Mithuna), 1);
        // Simha (Surya) & Makara (Shani): enemies both ways
        assert_eq!(graha_maitri_points(Rashi::Simha, Rashi::Makara), 0);
        // Mesha (Mangal) & Tula (Shukra): neutral both ways
        assert_eq!(graha_maitri_points(Rashi::Mesha, Rashi::Tula), 3);
    }

    #[test]
    fn bhakoot_pairs() {
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Vrishabha), 0);
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Simha), 0);
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Kanya), 0);
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Tula), 7);
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Mithuna), 7);
        for a in ALL_RASHIS {
            for b in ALL_RASHIS {
                assert_eq!(bhakoot_points(a, b), bhakoot_points(b, a));
            }
        }
    }

    #[test]
    fn identical_moons_hit_nadi_with_same_pada() {
        let p = person(Rashi::Vrishabha, Nakshatra::Rohini, 2);
        let r = score(&p, &p);
        assert_eq!(r.gunas.nadi, 0);
        let nadi = r.critical_doshas.iter().find(|d| d.kind == CriticalDoshaKind::Nadi).unwrap();
        assert!(!nadi.cancelled);
        // everything else is maximal: 36 - 8
        assert_eq!(r.total, 28);
        assert_eq!(r.level, CompatibilityLevel::Excellent);
    }

    #[test]
    fn nadi_cancelled_by_different_pada() {
        let a = person(Rashi::Vrishabha, Nakshatra::Rohini, 1);
        let b = person(Rashi::Vrishabha, Nakshatra::Rohini, 3);
        let r = score(&a, &b);
        let nadi = r.critical_doshas.iter().find(|d| d.kind == CriticalDoshaKind::Nadi).unwrap();
        assert!(nadi.cancelled);
        assert_eq!(r.gunas.nadi, 0);
    }

    #[test]
    fn bhakoot_cancelled_by_friendly_lords() {
        // Simha (Surya) and Meena (Guru): 8th apart, Surya and Guru are mutual friends
        let a = person(Rashi::Simha, Nakshatra::Magha, 1);
        let b = person(Rashi::Meena, Nakshatra::Revati, 1);
        let r = score(&a, &b);
        assert_eq!(r.gunas.bhakoot, 0);
        let bh = r.critical_doshas.iter().find(|d| d.kind == CriticalDoshaKind::Bhakoot).unwrap();
        assert!(bh.cancelled);
    }

    #[test]
    fn mangal_mismatch_listed() {
        let a = GunaInputs::new(Rashi::Mesha, Nakshatra::Ashwini, 1, true).unwrap();
        let b = person(Rashi::Tula, Nakshatra::Swati, 1);
        let r = score(&a, &b);
        assert!(r.critical_doshas.iter().any(|d| d.kind == CriticalDoshaKind::Mangal));
        let both = GunaInputs { mangal_dosha: true, ..b };
        let r = score(&a, &both);
        assert!(!r.critical_doshas.iter().any(|d| d.kind == CriticalDoshaKind::Mangal));
    }

    #[test]
    fn bands() {
        assert_eq!(CompatibilityLevel::from_total(36), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_total(28), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_total(27), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_total(21), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_total(20), CompatibilityLevel::Average);
        assert_eq!(CompatibilityLevel::from_total(14), CompatibilityLevel::Average);
        assert_eq!(CompatibilityLevel::from_total(13), CompatibilityLevel::Poor);
    }

    #[test]
    fn invalid_pada() {
        assert!(GunaInputs::new(Rashi::Mesha, Nakshatra::Ashwini, 0, false).is_err());
        assert!(GunaInputs::new(Rashi::Mesha, Nakshatra::Ashwini, 5, false).is_err());
    }

    #[test]
    fn moon_facts_must_agree() {
        assert!(GunaInputs::new(Rashi::Mesha, Nakshatra::Revati, 1, false).is_err());
        // Krittika: pada 1 in Mesha, padas 2-4 in Vrishabha
        assert!(GunaInputs::new(Rashi::Mesha, Nakshatra::Krittika, 1, false).is_ok());
        assert!(GunaInputs::new(Rashi::Mesha, Nakshatra::Krittika, 2, false).is_err());
        assert!(GunaInputs::new(Rashi::Vrishabha, Nakshatra::Krittika, 2, false).is_ok());
        assert_eq!(pada_rashi(Nakshatra::Punarvasu, 4), Rashi::Karka);
        assert_eq!(pada_rashi(Nakshatra::Revati, 4), Rashi::Meena);
    }

    #[test]
    fn percentage() {
        let p = person(Rashi::Vrishabha, Nakshatra::Rohini, 2);
        let r = score(&p, &p);
        assert!((r.percentage - 28.0 / 36.0 * 100.0).abs() < 1e-9);
    }
}
