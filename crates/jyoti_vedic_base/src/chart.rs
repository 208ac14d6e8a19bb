//! Birth chart assembly from sidereal positions.
//!
//! The assembler is pure: sidereal longitudes and the ascendant go in, a
//! [`BirthChart`] with signs, houses, nakshatras and padas comes out.
//! Dosha and yoga detection is attached afterwards by
//! [`BirthChart::with_detections`].

use serde::{Deserialize, Serialize};

use crate::birth::BirthInput;
use crate::chart_yoga::ChartYoga;
use crate::dosha::Dosha;
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, degree_in_rashi};
use crate::util::normalize_360;

/// House division scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Each sign is one house, counted from the lagna sign.
    #[default]
    WholeSign,
    /// 30-degree houses starting at the ascendant degree.
    Equal,
}

impl std::str::FromStr for HouseSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "wholesign" => Ok(Self::WholeSign),
            "equal" => Ok(Self::Equal),
            _ => Err(VedicError::InvalidInput("house system must be whole_sign or equal")),
        }
    }
}

/// Adapter output for one graha, sidereal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    pub graha: Graha,
    /// Sidereal longitude in degrees.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Longitude speed in deg/day.
    pub speed: f64,
}

/// One graha placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    pub latitude: f64,
    /// House, 1-12.
    pub house: u8,
    pub rashi: Rashi,
    pub degree_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// Pada, 1-4.
    pub pada: u8,
    pub speed: f64,
    pub retrograde: bool,
}

/// An assembled birth chart. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    input: BirthInput,
    planets: Vec<PlanetPosition>,
    ascendant_longitude: f64,
    lagna: Rashi,
    sun_sign: Option<Rashi>,
    moon_sign: Option<Rashi>,
    moon_nakshatra: Option<Nakshatra>,
    moon_pada: Option<u8>,
    house_cusps: [f64; 12],
    doshas: Vec<Dosha>,
    yogas: Vec<ChartYoga>,
}

impl BirthChart {
    pub fn input(&self) -> &BirthInput {
        &self.input
    }

    /// Placed grahas, ordered Surya..Ketu. Absent grahas are skipped.
    pub fn planets(&self) -> &[PlanetPosition] {
        &self.planets
    }

    pub fn position(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// Position of a graha, or [`VedicError::IncompleteChart`].
    pub fn require(&self, graha: Graha) -> Result<&PlanetPosition, VedicError> {
        self.position(graha).ok_or(VedicError::IncompleteChart(graha.name()))
    }

    /// Sidereal ascendant longitude.
    pub fn ascendant_longitude(&self) -> f64 {
        self.ascendant_longitude
    }

    pub fn lagna(&self) -> Rashi {
        self.lagna
    }

    pub fn sun_sign(&self) -> Option<Rashi> {
        self.sun_sign
    }

    pub fn moon_sign(&self) -> Option<Rashi> {
        self.moon_sign
    }

    pub fn moon_nakshatra(&self) -> Option<Nakshatra> {
        self.moon_nakshatra
    }

    pub fn moon_pada(&self) -> Option<u8> {
        self.moon_pada
    }

    /// Sidereal longitudes of the 12 house cusps.
    pub fn house_cusps(&self) -> &[f64; 12] {
        &self.house_cusps
    }

    pub fn doshas(&self) -> &[Dosha] {
        &self.doshas
    }

    pub fn yogas(&self) -> &[ChartYoga] {
        &self.yogas
    }

    /// Attach detector output, consuming the bare chart.
    pub fn with_detections(mut self, doshas: Vec<Dosha>, yogas: Vec<ChartYoga>) -> Self {
        self.doshas = doshas;
        self.yogas = yogas;
        self
    }
}

/// Whole-sign cusps: the start of each sign counted from the lagna sign.
pub fn whole_sign_cusps(ascendant_longitude: f64) -> [f64; 12] {
    let lagna = Rashi::from_longitude(ascendant_longitude);
    std::array::from_fn(|i| f64::from(lagna.nth(i as u8 + 1).index()) * 30.0)
}

/// Equal-house cusps at 30-degree steps from the ascendant.
pub fn equal_house_cusps(ascendant_longitude: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_360(ascendant_longitude + 30.0 * i as f64))
}

/// House (1-12) whose cusp interval contains `longitude`.
pub fn house_from_cusps(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let width = normalize_360(cusps[(i + 1) % 12] - start);
        let width = if width == 0.0 { 360.0 } else { width };
        if normalize_360(lon - start) < width {
            return i as u8 + 1;
        }
    }
    1
}

/// Place raw sidereal positions into a chart.
///
/// `cusps` selects house placement: `None` counts whole signs from the
/// lagna; `Some` uses the given cusp intervals. Positions are sorted into
/// Surya..Ketu order and duplicates are rejected.
pub fn assemble(
    input: &BirthInput,
    raw: &[RawPosition],
    ascendant_longitude: f64,
    cusps: Option<[f64; 12]>,
) -> Result<BirthChart, VedicError> {
    if !ascendant_longitude.is_finite() {
        return Err(VedicError::InvalidInput("ascendant longitude must be finite"));
    }
    let ascendant_longitude = normalize_360(ascendant_longitude);
    let lagna = Rashi::from_longitude(ascendant_longitude);

    let mut planets = Vec::with_capacity(raw.len());
    for graha in ALL_GRAHAS {
        let mut matching = raw.iter().filter(|r| r.graha == graha);
        let Some(r) = matching.next() else { continue };
        if matching.next().is_some() {
            return Err(VedicError::InvalidInput("duplicate graha in raw positions"));
        }
        if !r.longitude.is_finite() || !r.speed.is_finite() {
            return Err(VedicError::InvalidInput("non-finite raw position"));
        }
        let longitude = normalize_360(r.longitude);
        let rashi = Rashi::from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        let house = match &cusps {
            Some(c) => house_from_cusps(longitude, c),
            None => lagna.count_to(rashi),
        };
        planets.push(PlanetPosition {
            graha,
            longitude,
            latitude: r.latitude,
            house,
            rashi,
            degree_in_rashi: degree_in_rashi(longitude),
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            speed: r.speed,
            retrograde: r.speed < 0.0,
        });
    }

    let find = |g: Graha| planets.iter().find(|p| p.graha == g);
    let sun_sign = find(Graha::Surya).map(|p| p.rashi);
    let moon = find(Graha::Chandra).copied();

    Ok(BirthChart {
        input: input.clone(),
        ascendant_longitude,
        lagna,
        sun_sign,
        moon_sign: moon.map(|m| m.rashi),
        moon_nakshatra: moon.map(|m| m.nakshatra),
        moon_pada: moon.map(|m| m.pada),
        house_cusps: cusps.unwrap_or_else(|| whole_sign_cusps(ascendant_longitude)),
        planets,
        doshas: Vec::new(),
        yogas: Vec::new(),
    })
}
