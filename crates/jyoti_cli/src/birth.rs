//! Birth-moment arguments shared by the subcommands.

use std::str::FromStr;

use anyhow::{Context, bail};
use chrono::{NaiveDate, NaiveTime, Timelike};
use clap::Args;
use jyoti_rs::{AyanamshaSystem, BirthInput, Jyotish, ObservationMode};

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_clock(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| format!("invalid time '{s}', expected HH:MM or HH:MM:SS"))
}

#[derive(Debug, Clone, Args)]
pub struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    /// Local clock time (HH:MM or HH:MM:SS)
    #[arg(long, value_parser = parse_clock)]
    pub time: NaiveTime,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// UTC offset in hours (e.g. 5.5)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub tz: f64,
    /// Altitude in metres
    #[arg(long, default_value_t = 0.0)]
    pub alt: f64,
    /// Ayanamsha system (overrides config)
    #[arg(long)]
    pub ayanamsha: Option<AyanamshaSystem>,
    /// Apply topocentric parallax (overrides config)
    #[arg(long)]
    pub topocentric: bool,
}

impl BirthArgs {
    pub fn to_input(&self, jyotish: &Jyotish) -> anyhow::Result<BirthInput> {
        let mut builder = jyotish
            .birth_input()
            .date(self.date)
            .time(self.time.hour(), self.time.minute(), self.time.second())
            .location(self.lat, self.lon)
            .altitude_m(self.alt)
            .tz_offset_hours(self.tz);
        if let Some(a) = self.ayanamsha {
            builder = builder.ayanamsha(a);
        }
        if self.topocentric {
            builder = builder.observation(ObservationMode::Topocentric);
        }
        builder.build().context("invalid birth data")
    }
}

/// Compact birth description: `DATE,TIME,LAT,LON[,TZ]`,
/// e.g. `1990-05-15,10:30,28.61,77.21,5.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthSpec {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub lat: f64,
    pub lon: f64,
    pub tz: f64,
}

impl FromStr for BirthSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if !(4..=5).contains(&parts.len()) {
            bail!("expected DATE,TIME,LAT,LON[,TZ], got '{s}'");
        }
        let date = parts[0].parse().with_context(|| format!("bad date '{}'", parts[0]))?;
        let time = parse_clock(parts[1]).map_err(anyhow::Error::msg)?;
        let lat = parts[2].parse().with_context(|| format!("bad latitude '{}'", parts[2]))?;
        let lon = parts[3].parse().with_context(|| format!("bad longitude '{}'", parts[3]))?;
        let tz = match parts.get(4) {
            Some(p) => p.parse().with_context(|| format!("bad tz offset '{p}'"))?,
            None => 0.0,
        };
        Ok(Self { date, time, lat, lon, tz })
    }
}

impl From<BirthSpec> for BirthArgs {
    fn from(s: BirthSpec) -> Self {
        Self {
            date: s.date,
            time: s.time,
            lat: s.lat,
            lon: s.lon,
            tz: s.tz,
            alt: 0.0,
            ayanamsha: None,
            topocentric: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_with_and_without_seconds() {
        assert_eq!(parse_clock("10:30").unwrap(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(parse_clock("23:05:09").unwrap(), NaiveTime::from_hms_opt(23, 5, 9).unwrap());
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("noon").is_err());
    }

    #[test]
    fn birth_spec_parses() {
        let s: BirthSpec = "1990-05-15, 10:30, 28.6139, 77.209, 5.5".parse().unwrap();
        assert_eq!(s.date, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert!((s.tz - 5.5).abs() < 1e-12);

        let s: BirthSpec = "1985-01-02,04:00,-33.87,151.21".parse().unwrap();
        assert!(s.lat < 0.0);
        assert_eq!(s.tz, 0.0);
    }

    #[test]
    fn birth_spec_rejects_garbage() {
        assert!("1990-05-15,10:30".parse::<BirthSpec>().is_err());
        assert!("1990-13-15,10:30,0,0".parse::<BirthSpec>().is_err());
        assert!("1990-05-15,10:30,north,0".parse::<BirthSpec>().is_err());
    }
}
