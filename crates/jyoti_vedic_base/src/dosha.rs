//! Dosha detection: Mangal, Kaal Sarp, Pitru and Grahan.
//!
//! Each dosha is a static rule with a raw condition and an optional
//! cancellation. The result keeps both verdicts so callers can show why a
//! dosha is or is not in force.

use serde::{Deserialize, Serialize};

use crate::chart::BirthChart;
use crate::chart_yoga::{ChartYoga, detect_yogas};
use crate::drishti::conjunct_or_aspects;
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::graha_relationships::{is_exalted, is_own_sign};
use crate::rashi::Rashi;
use crate::util::normalize_360;

/// Houses that produce Mangal dosha, counted from the reference point.
pub const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoshaKind {
    Mangal,
    KaalSarp,
    Pitru,
    Grahan,
}

impl DoshaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mangal => "Mangal",
            Self::KaalSarp => "Kaal Sarp",
            Self::Pitru => "Pitru",
            Self::Grahan => "Grahan",
        }
    }
}

/// Kaal Sarp variant, named by the house Rahu occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KaalSarpVariant {
    Anant,
    Kulik,
    Vasuki,
    Shankhpal,
    Padma,
    Mahapadma,
    Takshak,
    Karkotak,
    Shankhachud,
    Ghatak,
    Vishdhar,
    Sheshnag,
}

const KAAL_SARP_VARIANTS: [KaalSarpVariant; 12] = [
    KaalSarpVariant::Anant,
    KaalSarpVariant::Kulik,
    KaalSarpVariant::Vasuki,
    KaalSarpVariant::Shankhpal,
    KaalSarpVariant::Padma,
    KaalSarpVariant::Mahapadma,
    KaalSarpVariant::Takshak,
    KaalSarpVariant::Karkotak,
    KaalSarpVariant::Shankhachud,
    KaalSarpVariant::Ghatak,
    KaalSarpVariant::Vishdhar,
    KaalSarpVariant::Sheshnag,
];

impl KaalSarpVariant {
    /// Variant for Rahu in `house` (1-12).
    pub const fn from_rahu_house(house: u8) -> Self {
        KAAL_SARP_VARIANTS[((house + 11) % 12) as usize]
    }
}

/// Point from which Mangal dosha houses are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MangalReference {
    #[default]
    Lagna,
    Moon,
    /// Dosha if Mars qualifies from either point.
    LagnaOrMoon,
}

impl std::str::FromStr for MangalReference {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "lagna" => Ok(Self::Lagna),
            "moon" => Ok(Self::Moon),
            "lagnaormoon" => Ok(Self::LagnaOrMoon),
            _ => Err(VedicError::InvalidInput("mangal reference must be lagna, moon or lagna_or_moon")),
        }
    }
}

/// Detector options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub mangal_reference: MangalReference,
}

/// Verdict for one dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dosha {
    pub kind: DoshaKind,
    /// The placement rule fired.
    pub raw_present: bool,
    /// A cancellation rule fired while the dosha was raw-present.
    pub cancelled: bool,
    /// `raw_present && !cancelled`.
    pub present: bool,
    /// Contributing placement, when raw-present.
    pub condition: Option<String>,
    /// Cancelling rule, when cancelled.
    pub cancellation: Option<String>,
    pub remedy: String,
    /// Set for Kaal Sarp when present.
    pub variant: Option<KaalSarpVariant>,
}

/// Sign, house and longitude of all nine grahas, resolved once per chart.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placements {
    pub lagna: Rashi,
    signs: [Rashi; 9],
    houses: [u8; 9],
    longitudes: [f64; 9],
}

impl Placements {
    pub fn from_chart(chart: &BirthChart) -> Result<Self, VedicError> {
        let mut signs = [Rashi::Mesha; 9];
        let mut houses = [1; 9];
        let mut longitudes = [0.0; 9];
        for g in ALL_GRAHAS {
            let p = chart.require(g)?;
            signs[g.index()] = p.rashi;
            houses[g.index()] = p.house;
            longitudes[g.index()] = p.longitude;
        }
        Ok(Self { lagna: chart.lagna(), signs, houses, longitudes })
    }

    pub fn sign(&self, g: Graha) -> Rashi {
        self.signs[g.index()]
    }

    pub fn house(&self, g: Graha) -> u8 {
        self.houses[g.index()]
    }

    pub fn longitude(&self, g: Graha) -> f64 {
        self.longitudes[g.index()]
    }

    /// Same sign.
    pub fn conjunct(&self, a: Graha, b: Graha) -> bool {
        self.sign(a) == self.sign(b)
    }

    /// Sign count from graha `from` to graha `to` (same sign = 1).
    pub fn count(&self, from: Graha, to: Graha) -> u8 {
        self.sign(from).count_to(self.sign(to))
    }

    /// Guru conjunct or aspecting a sign.
    pub fn guru_covers(&self, target: Rashi) -> bool {
        conjunct_or_aspects(Graha::Guru, self.sign(Graha::Guru), target)
    }
}

struct DoshaRule {
    kind: DoshaKind,
    raw: fn(&Placements, &DetectionConfig) -> Option<String>,
    cancel: fn(&Placements) -> Option<String>,
    remedy: &'static str,
}

const DOSHA_RULES: [DoshaRule; 4] = [
    DoshaRule {
        kind: DoshaKind::Mangal,
        raw: mangal_raw,
        cancel: mangal_cancel,
        remedy: "Mangal shanti puja; Kumbh vivah before marriage; Hanuman worship on Tuesdays",
    },
    DoshaRule {
        kind: DoshaKind::KaalSarp,
        raw: kaal_sarp_raw,
        cancel: |_| None,
        remedy: "Kaal Sarp shanti puja at Trimbakeshwar; chant the Maha Mrityunjaya mantra",
    },
    DoshaRule {
        kind: DoshaKind::Pitru,
        raw: pitru_raw,
        cancel: pitru_cancel,
        remedy: "Pitru tarpan and shraddha on Amavasya; feed Brahmins and crows",
    },
    DoshaRule {
        kind: DoshaKind::Grahan,
        raw: grahan_raw,
        cancel: grahan_cancel,
        remedy: "Grahan dosha nivaran puja; chant Surya or Chandra mantras during eclipses",
    },
];

fn mangal_raw(p: &Placements, config: &DetectionConfig) -> Option<String> {
    let from_lagna = p.house(Graha::Mangal);
    let from_moon = p.count(Graha::Chandra, Graha::Mangal);
    let hit = |h: u8| MANGAL_DOSHA_HOUSES.contains(&h);
    match config.mangal_reference {
        MangalReference::Lagna if hit(from_lagna) => {
            Some(format!("Mangal in house {from_lagna} from Lagna"))
        }
        MangalReference::Moon if hit(from_moon) => {
            Some(format!("Mangal in house {from_moon} from Chandra"))
        }
        MangalReference::LagnaOrMoon if hit(from_lagna) => {
            Some(format!("Mangal in house {from_lagna} from Lagna"))
        }
        MangalReference::LagnaOrMoon if hit(from_moon) => {
            Some(format!("Mangal in house {from_moon} from Chandra"))
        }
        _ => None,
    }
}

fn mangal_cancel(p: &Placements) -> Option<String> {
    let mars = p.sign(Graha::Mangal);
    if is_own_sign(Graha::Mangal, mars) {
        Some(format!("Mangal in own sign {}", mars.name()))
    } else if is_exalted(Graha::Mangal, mars) {
        Some(format!("Mangal exalted in {}", mars.name()))
    } else if p.conjunct(Graha::Guru, Graha::Mangal) {
        Some("Guru conjunct Mangal".to_string())
    } else if p.guru_covers(mars) {
        Some("Guru aspects Mangal".to_string())
    } else {
        None
    }
}

fn kaal_sarp_raw(p: &Placements, _: &DetectionConfig) -> Option<String> {
    let rahu = p.longitude(Graha::Rahu);
    let offsets = SAPTA_GRAHAS.map(|g| normalize_360(p.longitude(g) - rahu));
    let rahu_to_ketu = offsets.iter().all(|&d| d > 0.0 && d < 180.0);
    let ketu_to_rahu = offsets.iter().all(|&d| d > 180.0 && d < 360.0);
    if !(rahu_to_ketu || ketu_to_rahu) {
        return None;
    }
    let house = p.house(Graha::Rahu);
    let variant = KaalSarpVariant::from_rahu_house(house);
    let side = if rahu_to_ketu { "Rahu to Ketu" } else { "Ketu to Rahu" };
    Some(format!("all seven grahas hemmed {side}; Rahu in house {house} ({variant:?})"))
}

fn pitru_raw(p: &Placements, _: &DetectionConfig) -> Option<String> {
    if p.conjunct(Graha::Surya, Graha::Rahu) {
        Some("Surya conjunct Rahu".to_string())
    } else if p.conjunct(Graha::Surya, Graha::Ketu) {
        Some("Surya conjunct Ketu".to_string())
    } else if p.house(Graha::Rahu) == 9 {
        Some("Rahu in the 9th house".to_string())
    } else {
        None
    }
}

fn pitru_cancel(p: &Placements) -> Option<String> {
    if p.conjunct(Graha::Guru, Graha::Surya) {
        Some("Guru conjunct Surya".to_string())
    } else if p.guru_covers(p.lagna.nth(9)) {
        Some("Guru aspects the 9th house".to_string())
    } else {
        None
    }
}

fn afflicted_luminaries(p: &Placements) -> Vec<Graha> {
    [Graha::Surya, Graha::Chandra]
        .into_iter()
        .filter(|&l| p.conjunct(l, Graha::Rahu) || p.conjunct(l, Graha::Ketu))
        .collect()
}

fn grahan_raw(p: &Placements, _: &DetectionConfig) -> Option<String> {
    let hit = afflicted_luminaries(p);
    if hit.is_empty() {
        return None;
    }
    let names: Vec<_> = hit
        .iter()
        .map(|&l| {
            let node = if p.conjunct(l, Graha::Rahu) { Graha::Rahu } else { Graha::Ketu };
            format!("{} conjunct {}", l.name(), node.name())
        })
        .collect();
    Some(names.join(", "))
}

fn grahan_cancel(p: &Placements) -> Option<String> {
    let hit = afflicted_luminaries(p);
    if !hit.is_empty() && hit.iter().all(|&l| p.guru_covers(p.sign(l))) {
        let names: Vec<_> = hit.iter().map(|l| l.name()).collect();
        Some(format!("Guru conjunct or aspecting {}", names.join(" and ")))
    } else {
        None
    }
}

/// Evaluate all dosha rules. One entry per [`DoshaKind`], present or not.
pub fn detect_doshas(chart: &BirthChart, config: &DetectionConfig) -> Result<Vec<Dosha>, VedicError> {
    let p = Placements::from_chart(chart)?;
    Ok(DOSHA_RULES
        .iter()
        .map(|rule| {
            let condition = (rule.raw)(&p, config);
            let raw_present = condition.is_some();
            let cancellation = if raw_present { (rule.cancel)(&p) } else { None };
            let cancelled = cancellation.is_some();
            let variant = (rule.kind == DoshaKind::KaalSarp && raw_present)
                .then(|| KaalSarpVariant::from_rahu_house(p.house(Graha::Rahu)));
            tracing::trace!(kind = ?rule.kind, raw_present, cancelled, "dosha rule");
            Dosha {
                kind: rule.kind,
                raw_present,
                cancelled,
                present: raw_present && !cancelled,
                condition,
                cancellation,
                remedy: rule.remedy.to_string(),
                variant,
            }
        })
        .collect())
}

/// Run the dosha and yoga detectors together.
pub fn detect(
    chart: &BirthChart,
    config: &DetectionConfig,
) -> Result<(Vec<Dosha>, Vec<ChartYoga>), VedicError> {
    let doshas = detect_doshas(chart, config)?;
    let yogas = detect_yogas(chart)?;
    tracing::debug!(
        doshas = doshas.iter().filter(|d| d.present).count(),
        yogas = yogas.len(),
        "chart rules evaluated"
    );
    Ok((doshas, yogas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::test_support::chart_with_signs;

    // sign order: Surya Chandra Mangal Buddh Guru Shukra Shani Rahu Ketu

    fn find(doshas: &[Dosha], kind: DoshaKind) -> &Dosha {
        doshas.iter().find(|d| d.kind == kind).unwrap()
    }

    #[test]
    fn one_entry_per_kind() {
        let chart = chart_with_signs(0, [0, 1, 2, 3, 4, 5, 6, 7, 1]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn mangal_in_seventh_from_lagna() {
        // lagna Mesha, Mars in Tula, Jupiter in Vrishabha (no aspect on Tula)
        let chart = chart_with_signs(0, [4, 3, 6, 4, 1, 4, 4, 2, 8]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let m = find(&d, DoshaKind::Mangal);
        assert!(m.raw_present && m.present && !m.cancelled);
        assert!(m.condition.as_deref().unwrap().contains("house 7"));
    }

    #[test]
    fn mangal_in_eighth_from_lagna() {
        // lagna Vrishabha, Mars in Dhanu (neither own nor exalted),
        // Jupiter in Vrishabha counts 8 to Dhanu: no conjunction, no aspect
        let chart = chart_with_signs(1, [4, 3, 8, 4, 1, 4, 4, 2, 8]);
        assert_eq!(chart.position(Graha::Mangal).unwrap().house, 8);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let m = find(&d, DoshaKind::Mangal);
        assert!(m.raw_present && m.present && !m.cancelled);
        assert_eq!(m.cancellation, None);
        assert!(m.condition.as_deref().unwrap().contains("house 8"));
    }

    #[test]
    fn mangal_cancelled_by_own_sign() {
        // Mars in Vrischika, 8th from Mesha lagna
        let chart = chart_with_signs(0, [4, 3, 7, 4, 1, 4, 4, 2, 8]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let m = find(&d, DoshaKind::Mangal);
        assert!(m.raw_present && m.cancelled && !m.present);
        assert!(m.cancellation.as_deref().unwrap().contains("own sign"));
    }

    #[test]
    fn mangal_cancelled_by_jupiter_aspect() {
        // Mars in Tula (7th), Jupiter in Mithuna aspects Tula by 5th
        let chart = chart_with_signs(0, [4, 3, 6, 4, 2, 4, 4, 1, 7]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let m = find(&d, DoshaKind::Mangal);
        assert!(m.cancelled);
        assert_eq!(m.cancellation.as_deref(), Some("Guru aspects Mangal"));
    }

    #[test]
    fn mangal_reference_moon() {
        // Mars in Simha: house 5 from Mesha lagna, 2nd from Moon in Karka
        let chart = chart_with_signs(0, [4, 3, 4, 4, 1, 4, 4, 2, 8]);
        let lagna = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        assert!(!find(&lagna, DoshaKind::Mangal).raw_present);
        let cfg = DetectionConfig { mangal_reference: MangalReference::Moon };
        let moon = detect_doshas(&chart, &cfg).unwrap();
        assert!(find(&moon, DoshaKind::Mangal).raw_present);
        let cfg = DetectionConfig { mangal_reference: MangalReference::LagnaOrMoon };
        assert!(find(&detect_doshas(&chart, &cfg).unwrap(), DoshaKind::Mangal).raw_present);
    }

    #[test]
    fn kaal_sarp_all_on_one_side() {
        // Rahu in Mesha (house 1), Ketu Tula; everyone in Vrishabha..Kanya
        let chart = chart_with_signs(0, [1, 2, 3, 4, 5, 1, 2, 0, 6]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let k = find(&d, DoshaKind::KaalSarp);
        assert!(k.present);
        assert_eq!(k.variant, Some(KaalSarpVariant::Anant));
    }

    #[test]
    fn kaal_sarp_broken_by_one_graha() {
        let chart = chart_with_signs(0, [1, 2, 3, 4, 5, 1, 8, 0, 6]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let k = find(&d, DoshaKind::KaalSarp);
        assert!(!k.raw_present);
        assert!(k.variant.is_none());
    }

    #[test]
    fn kaal_sarp_variant_by_house() {
        assert_eq!(KaalSarpVariant::from_rahu_house(7), KaalSarpVariant::Takshak);
        assert_eq!(KaalSarpVariant::from_rahu_house(12), KaalSarpVariant::Sheshnag);
    }

    #[test]
    fn pitru_sun_with_rahu() {
        // Sun and Rahu in Simha; Jupiter in Vrishabha, no cover of Simha or Dhanu
        let chart = chart_with_signs(0, [4, 3, 2, 4, 1, 4, 4, 4, 10]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let p = find(&d, DoshaKind::Pitru);
        assert!(p.present);
        assert_eq!(p.condition.as_deref(), Some("Surya conjunct Rahu"));
    }

    #[test]
    fn pitru_cancelled_when_jupiter_aspects_ninth() {
        // Rahu in Dhanu (9th from Mesha); Jupiter in Mithuna aspects Dhanu by 7th
        let chart = chart_with_signs(0, [4, 3, 2, 4, 2, 4, 4, 8, 2]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let p = find(&d, DoshaKind::Pitru);
        assert!(p.raw_present && p.cancelled);
    }

    #[test]
    fn grahan_moon_with_ketu() {
        // Jupiter in Mithuna is 8th from Makara: no aspect
        let chart = chart_with_signs(0, [4, 9, 2, 4, 2, 4, 4, 3, 9]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        let g = find(&d, DoshaKind::Grahan);
        assert!(g.present);
        assert_eq!(g.condition.as_deref(), Some("Chandra conjunct Ketu"));
    }

    #[test]
    fn grahan_cancelled_by_jupiter() {
        // Moon + Ketu in Makara, Jupiter in Karka aspects Makara by 7th
        let chart = chart_with_signs(0, [4, 9, 2, 4, 3, 4, 4, 3, 9]);
        let d = detect_doshas(&chart, &DetectionConfig::default()).unwrap();
        assert!(find(&d, DoshaKind::Grahan).cancelled);
    }

    #[test]
    fn incomplete_chart_rejected() {
        let chart = chart_with_signs(0, [0; 9]);
        let raw: Vec<_> = chart
            .planets()
            .iter()
            .filter(|p| p.graha != Graha::Shani)
            .map(|p| crate::chart::RawPosition {
                graha: p.graha,
                longitude: p.longitude,
                latitude: p.latitude,
                speed: p.speed,
            })
            .collect();
        let partial = crate::chart::assemble(chart.input(), &raw, 0.0, None).unwrap();
        assert_eq!(
            detect(&partial, &DetectionConfig::default()).unwrap_err(),
            VedicError::IncompleteChart("Shani")
        );
    }

    #[test]
    fn mangal_reference_parses() {
        assert_eq!("lagna_or_moon".parse::<MangalReference>(), Ok(MangalReference::LagnaOrMoon));
        assert!("sun".parse::<MangalReference>().is_err());
    }
}
