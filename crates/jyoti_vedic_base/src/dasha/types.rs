//! Core types for dasha (planetary period) calculations.
//!
//! A timeline is an owned tree: Mahadashas at the root, each carrying its
//! Antardashas, each carrying its Pratyantardashas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;

/// Year length used for every dasha duration.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest supported level (0 = Mahadasha only).
pub const MAX_DASHA_DEPTH: u8 = 2;

/// Default generation depth.
pub const DEFAULT_DASHA_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    pub const fn depth(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashaSystem {
    /// 120-year cycle of nine graha lords.
    #[default]
    Vimshottari,
    /// 36-year cycle of eight yoginis.
    Yogini,
}

impl DashaSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "vimshottari",
            Self::Yogini => "yogini",
        }
    }
}

impl fmt::Display for DashaSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DashaSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vimshottari" => Ok(Self::Vimshottari),
            "yogini" => Ok(Self::Yogini),
            _ => Err(VedicError::InvalidInput("dasha system must be vimshottari or yogini")),
        }
    }
}

/// The eight yoginis, in dasha order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yogini {
    Mangala,
    Pingala,
    Dhanya,
    Bhramari,
    Bhadrika,
    Ulka,
    Siddha,
    Sankata,
}

impl Yogini {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mangala => "Mangala",
            Self::Pingala => "Pingala",
            Self::Dhanya => "Dhanya",
            Self::Bhramari => "Bhramari",
            Self::Bhadrika => "Bhadrika",
            Self::Ulka => "Ulka",
            Self::Siddha => "Siddha",
            Self::Sankata => "Sankata",
        }
    }
}

/// What rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "lord", rename_all = "snake_case")]
pub enum DashaEntity {
    Graha(Graha),
    Yogini(Yogini),
}

impl DashaEntity {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Yogini(y) => y.name(),
        }
    }
}

/// One node of the period tree. Times are JD UT; `end_jd` is exclusive.
///
/// `start_jd..end_jd` is the part that runs after birth. The nominal span is
/// the period's full length, which differs only for the birth period, the
/// closing truncated period and their descendants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub entity: DashaEntity,
    pub level: DashaLevel,
    pub start_jd: f64,
    pub end_jd: f64,
    pub nominal_start_jd: f64,
    pub nominal_end_jd: f64,
    /// Sub-periods, empty at the requested depth.
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    pub fn nominal_duration_days(&self) -> f64 {
        self.nominal_end_jd - self.nominal_start_jd
    }

    /// Share of the full period elapsed at `jd`, 0-100.
    pub fn elapsed_percent(&self, jd: f64) -> f64 {
        ((jd - self.nominal_start_jd) / self.nominal_duration_days() * 100.0).clamp(0.0, 100.0)
    }

    /// Half-open containment.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// How much of the starting period was already spent at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaBalance {
    pub entity: DashaEntity,
    /// Share of the Moon's nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    pub remaining_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTimeline {
    pub system: DashaSystem,
    pub birth_jd: f64,
    pub total_years: f64,
    pub balance: DashaBalance,
    pub mahadashas: Vec<DashaPeriod>,
}

impl DashaTimeline {
    pub fn start_jd(&self) -> f64 {
        self.birth_jd
    }

    pub fn end_jd(&self) -> f64 {
        self.mahadashas.last().map_or(self.birth_jd, |p| p.end_jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_chain() {
        assert_eq!(DashaLevel::from_u8(0), Some(DashaLevel::Mahadasha));
        assert_eq!(DashaLevel::Antardasha.child_level(), Some(DashaLevel::Pratyantardasha));
        assert_eq!(DashaLevel::Pratyantardasha.child_level(), None);
        assert_eq!(DashaLevel::from_u8(3), None);
    }

    #[test]
    fn system_parse() {
        assert_eq!("Yogini".parse::<DashaSystem>().unwrap(), DashaSystem::Yogini);
        assert!("chara".parse::<DashaSystem>().is_err());
    }

    #[test]
    fn entity_serializes_tagged() {
        let e = DashaEntity::Graha(Graha::Guru);
        let v = serde_json::to_value(e).unwrap();
        assert_eq!(v["type"], "graha");
        assert_eq!(v["lord"], "Guru");
    }
}
