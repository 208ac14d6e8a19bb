//! Planetary yogas detected on a birth chart.

use serde::{Deserialize, Serialize};

use crate::chart::BirthChart;
use crate::dosha::Placements;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::graha_relationships::{is_exalted, is_own_sign};

const KENDRAS: [u8; 4] = [1, 4, 7, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartYogaKind {
    Gajakesari,
    Budhaditya,
    ChandraMangala,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Sasa,
    Kemadruma,
    Shakata,
    GuruChandala,
    Vish,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartYoga {
    pub kind: ChartYogaKind,
    pub auspicious: bool,
    /// Placement that forms the yoga.
    pub condition: String,
}

struct YogaRule {
    kind: ChartYogaKind,
    auspicious: bool,
    test: fn(&Placements) -> Option<String>,
}

const YOGA_RULES: [YogaRule; 12] = [
    YogaRule { kind: ChartYogaKind::Gajakesari, auspicious: true, test: gajakesari },
    YogaRule { kind: ChartYogaKind::Budhaditya, auspicious: true, test: budhaditya },
    YogaRule { kind: ChartYogaKind::ChandraMangala, auspicious: true, test: chandra_mangala },
    YogaRule { kind: ChartYogaKind::Ruchaka, auspicious: true, test: |p| mahapurusha(p, Graha::Mangal) },
    YogaRule { kind: ChartYogaKind::Bhadra, auspicious: true, test: |p| mahapurusha(p, Graha::Buddh) },
    YogaRule { kind: ChartYogaKind::Hamsa, auspicious: true, test: |p| mahapurusha(p, Graha::Guru) },
    YogaRule { kind: ChartYogaKind::Malavya, auspicious: true, test: |p| mahapurusha(p, Graha::Shukra) },
    YogaRule { kind: ChartYogaKind::Sasa, auspicious: true, test: |p| mahapurusha(p, Graha::Shani) },
    YogaRule { kind: ChartYogaKind::Kemadruma, auspicious: false, test: kemadruma },
    YogaRule { kind: ChartYogaKind::Shakata, auspicious: false, test: shakata },
    YogaRule { kind: ChartYogaKind::GuruChandala, auspicious: false, test: guru_chandala },
    YogaRule { kind: ChartYogaKind::Vish, auspicious: false, test: vish },
];

fn gajakesari(p: &Placements) -> Option<String> {
    let n = p.count(Graha::Chandra, Graha::Guru);
    KENDRAS.contains(&n).then(|| format!("Guru in house {n} from Chandra"))
}

fn budhaditya(p: &Placements) -> Option<String> {
    p.conjunct(Graha::Surya, Graha::Buddh)
        .then(|| format!("Surya and Buddh together in {}", p.sign(Graha::Surya).name()))
}

fn chandra_mangala(p: &Placements) -> Option<String> {
    p.conjunct(Graha::Chandra, Graha::Mangal)
        .then(|| format!("Chandra and Mangal together in {}", p.sign(Graha::Chandra).name()))
}

fn mahapurusha(p: &Placements, g: Graha) -> Option<String> {
    let sign = p.sign(g);
    let dignity = if is_exalted(g, sign) {
        "exalted"
    } else if is_own_sign(g, sign) {
        "in own sign"
    } else {
        return None;
    };
    let house = p.lagna.count_to(sign);
    KENDRAS
        .contains(&house)
        .then(|| format!("{} {dignity} {} in kendra house {house}", g.name(), sign.name()))
}

fn kemadruma(p: &Placements) -> Option<String> {
    let moon = p.sign(Graha::Chandra);
    let flanking = [moon.nth(2), moon.nth(12)];
    let supported = [Graha::Mangal, Graha::Buddh, Graha::Guru, Graha::Shukra, Graha::Shani]
        .iter()
        .any(|&g| flanking.contains(&p.sign(g)));
    (!supported).then(|| "no graha in the 2nd or 12th from Chandra".to_string())
}

fn shakata(p: &Placements) -> Option<String> {
    let n = p.count(Graha::Chandra, Graha::Guru);
    [6, 8, 12].contains(&n).then(|| format!("Guru in house {n} from Chandra"))
}

fn guru_chandala(p: &Placements) -> Option<String> {
    [Graha::Rahu, Graha::Ketu]
        .into_iter()
        .find(|&node| p.conjunct(Graha::Guru, node))
        .map(|node| format!("Guru conjunct {}", node.name()))
}

fn vish(p: &Placements) -> Option<String> {
    p.conjunct(Graha::Shani, Graha::Chandra)
        .then(|| format!("Shani and Chandra together in {}", p.sign(Graha::Chandra).name()))
}

/// Yogas that hold in the chart, in table order.
pub fn detect_yogas(chart: &BirthChart) -> Result<Vec<ChartYoga>, VedicError> {
    let p = Placements::from_chart(chart)?;
    Ok(YOGA_RULES
        .iter()
        .filter_map(|rule| {
            (rule.test)(&p).map(|condition| ChartYoga {
                kind: rule.kind,
                auspicious: rule.auspicious,
                condition,
            })
        })
        .collect())
}
