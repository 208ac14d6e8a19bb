//! Chart casting: the ephemeris adapter feeding the pure chart assembler.

use jyoti_core::Ephemeris;
use jyoti_vedic_base::{
    ALL_GRAHAS, AyanamshaSystem, BirthChart, BirthInput, DetectionConfig, HouseSystem, NodeMode,
    assemble, detect,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::positions::{ascendant_longitude, graha_sidereal_longitude, house_cusps, positions};

/// Options for [`build_chart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub node_mode: NodeMode,
    pub house_system: HouseSystem,
    pub detection: DetectionConfig,
}

/// Geocentric sidereal longitudes of all nine grahas, indexed by
/// [`jyoti_vedic_base::Graha::index`].
pub fn graha_sidereal_longitudes(
    engine: &dyn Ephemeris,
    jd_ut: f64,
    system: AyanamshaSystem,
    node_mode: NodeMode,
) -> Result<[f64; 9], SearchError> {
    let mut out = [0.0; 9];
    for graha in ALL_GRAHAS {
        out[graha.index()] = graha_sidereal_longitude(engine, graha, jd_ut, system, node_mode)?;
    }
    Ok(out)
}

/// Cast a complete birth chart with doshas and yogas attached.
///
/// Fails without a partial chart: any adapter or rule error aborts.
#[tracing::instrument(skip(engine), level = "debug")]
pub fn build_chart(
    engine: &dyn Ephemeris,
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<BirthChart, SearchError> {
    let raw = positions(engine, input, config.node_mode)?;
    let ascendant = ascendant_longitude(engine, input)?;
    let cusps = match config.house_system {
        HouseSystem::WholeSign => None,
        HouseSystem::Equal => Some(house_cusps(engine, input, HouseSystem::Equal)?),
    };
    let chart = assemble(input, &raw, ascendant, cusps)?;
    let (doshas, yogas) = detect(&chart, &config.detection)?;
    tracing::debug!(lagna = chart.lagna().name(), doshas = doshas.len(), yogas = yogas.len(), "chart cast");
    Ok(chart.with_detections(doshas, yogas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jyoti_core::AnalyticEphemeris;
    use jyoti_vedic_base::{Graha, normalize_to_pm180};

    fn input() -> BirthInput {
        BirthInput::builder()
            .date(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
            .time(10, 30, 0)
            .location(28.6139, 77.209)
            .tz_offset_hours(5.5)
            .build()
            .unwrap()
    }

    #[test]
    fn chart_has_all_grahas_and_detections() {
        let eph = AnalyticEphemeris::default();
        let chart = build_chart(&eph, &input(), &ChartConfig::default()).unwrap();
        assert_eq!(chart.planets().len(), 9);
        assert_eq!(chart.doshas().len(), 4);
        assert!(chart.sun_sign().is_some() && chart.moon_nakshatra().is_some());
        for p in chart.planets() {
            assert!((1..=12).contains(&p.house));
            assert!((1..=4).contains(&p.pada));
        }
    }

    #[test]
    fn longitudes_match_chart() {
        let eph = AnalyticEphemeris::default();
        let inp = input();
        let chart = build_chart(&eph, &inp, &ChartConfig::default()).unwrap();
        let lons =
            graha_sidereal_longitudes(&eph, inp.jd_ut(), inp.ayanamsha(), NodeMode::Mean).unwrap();
        for g in ALL_GRAHAS {
            let p = chart.require(g).unwrap();
            assert!(normalize_to_pm180(p.longitude - lons[g.index()]).abs() < 1e-9);
        }
        assert!(chart.require(Graha::Rahu).unwrap().retrograde);
    }

    #[test]
    fn equal_houses_use_cusps() {
        let eph = AnalyticEphemeris::default();
        let cfg = ChartConfig { house_system: HouseSystem::Equal, ..ChartConfig::default() };
        let chart = build_chart(&eph, &input(), &cfg).unwrap();
        assert!((chart.house_cusps()[0] - chart.ascendant_longitude()).abs() < 1e-9);
    }
}
