//! Birth input: the civil moment and place a chart is cast for.

use chrono::NaiveDate;
use jyoti_time::{local_to_jd_ut, naive_date_to_jd, validate_tz_offset};
use serde::{Deserialize, Serialize};

use crate::ayanamsha::AyanamshaSystem;
use crate::error::VedicError;
use crate::riseset_types::GeoLocation;

/// Whether positions are seen from the Earth's centre or the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationMode {
    #[default]
    Geocentric,
    /// Apply diurnal parallax for the birth place.
    Topocentric,
}

impl std::str::FromStr for ObservationMode {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geocentric" => Ok(Self::Geocentric),
            "topocentric" => Ok(Self::Topocentric),
            _ => Err(VedicError::InvalidInput("observation must be geocentric or topocentric")),
        }
    }
}

/// Validated birth data. Construct with [`BirthInput::builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BirthInputBuilder")]
pub struct BirthInput {
    date: NaiveDate,
    time_hours: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_m: f64,
    tz_offset_hours: f64,
    ayanamsha: AyanamshaSystem,
    observation: ObservationMode,
}

impl BirthInput {
    pub fn builder() -> BirthInputBuilder {
        BirthInputBuilder::default()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Local clock time in decimal hours.
    pub fn time_hours(&self) -> f64 {
        self.time_hours
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg, self.altitude_m)
    }

    pub fn tz_offset_hours(&self) -> f64 {
        self.tz_offset_hours
    }

    pub fn ayanamsha(&self) -> AyanamshaSystem {
        self.ayanamsha
    }

    pub fn observation(&self) -> ObservationMode {
        self.observation
    }

    /// Julian Date (UT) of the birth moment.
    pub fn jd_ut(&self) -> f64 {
        naive_date_to_jd(self.date) + (self.time_hours - self.tz_offset_hours) / 24.0
    }

    /// Same birth with a different sidereal reference.
    pub fn with_ayanamsha(mut self, ayanamsha: AyanamshaSystem) -> Self {
        self.ayanamsha = ayanamsha;
        self
    }

    /// Same birth with a different observation mode.
    pub fn with_observation(mut self, observation: ObservationMode) -> Self {
        self.observation = observation;
        self
    }
}

/// Builder for [`BirthInput`]. Date, time and place are mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthInputBuilder {
    date: Option<NaiveDate>,
    time_hours: Option<f64>,
    latitude_deg: Option<f64>,
    longitude_deg: Option<f64>,
    altitude_m: Option<f64>,
    tz_offset_hours: Option<f64>,
    ayanamsha: Option<AyanamshaSystem>,
    observation: Option<ObservationMode>,
}

impl BirthInputBuilder {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Local clock time in decimal hours, [0, 24).
    pub fn time_hours(mut self, hours: f64) -> Self {
        self.time_hours = Some(hours);
        self
    }

    /// Local clock time from hours, minutes and seconds.
    pub fn time(self, hour: u32, minute: u32, second: u32) -> Self {
        self.time_hours(f64::from(hour) + f64::from(minute) / 60.0 + f64::from(second) / 3600.0)
    }

    pub fn location(mut self, latitude_deg: f64, longitude_deg: f64) -> Self {
        self.latitude_deg = Some(latitude_deg);
        self.longitude_deg = Some(longitude_deg);
        self
    }

    pub fn altitude_m(mut self, altitude_m: f64) -> Self {
        self.altitude_m = Some(altitude_m);
        self
    }

    pub fn tz_offset_hours(mut self, tz: f64) -> Self {
        self.tz_offset_hours = Some(tz);
        self
    }

    pub fn ayanamsha(mut self, ayanamsha: AyanamshaSystem) -> Self {
        self.ayanamsha = Some(ayanamsha);
        self
    }

    pub fn observation(mut self, observation: ObservationMode) -> Self {
        self.observation = Some(observation);
        self
    }

    pub fn build(self) -> Result<BirthInput, VedicError> {
        let date = self.date.ok_or(VedicError::InvalidInput("date of birth is required"))?;
        let time_hours = self.time_hours.ok_or(VedicError::InvalidInput("time of birth is required"))?;
        let tz_offset_hours = self.tz_offset_hours.unwrap_or(0.0);
        validate_tz_offset(tz_offset_hours)?;
        // range-checks the clock time
        local_to_jd_ut(date, time_hours, tz_offset_hours)?;

        let (Some(latitude_deg), Some(longitude_deg)) = (self.latitude_deg, self.longitude_deg) else {
            return Err(VedicError::InvalidInput("latitude and longitude of birth are required"));
        };
        let location = GeoLocation::new(latitude_deg, longitude_deg, self.altitude_m.unwrap_or(0.0));
        location.validate()?;

        Ok(BirthInput {
            date,
            time_hours,
            latitude_deg: location.latitude_deg,
            longitude_deg: location.longitude_deg,
            altitude_m: location.altitude_m,
            tz_offset_hours,
            ayanamsha: self.ayanamsha.unwrap_or_default(),
            observation: self.observation.unwrap_or_default(),
        })
    }
}

impl TryFrom<BirthInputBuilder> for BirthInput {
    type Error = VedicError;

    fn try_from(builder: BirthInputBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> BirthInputBuilder {
        BirthInput::builder()
            .date(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
            .time(10, 30, 0)
            .location(28.6139, 77.209)
            .tz_offset_hours(5.5)
    }

    #[test]
    fn builds_with_defaults() {
        let b = delhi().build().unwrap();
        assert_eq!(b.ayanamsha(), AyanamshaSystem::Lahiri);
        assert_eq!(b.observation(), ObservationMode::Geocentric);
        assert!((b.time_hours() - 10.5).abs() < 1e-12);
    }

    #[test]
    fn jd_ut_subtracts_timezone() {
        let b = delhi().build().unwrap();
        // 1990-05-15 05:00 UT
        assert!((b.jd_ut() - 2_448_026.708_333_333).abs() < 1e-6);
    }

    #[test]
    fn missing_date_or_time() {
        let no_date = BirthInput::builder().time_hours(1.0).build();
        assert!(matches!(no_date, Err(VedicError::InvalidInput(_))));
        let no_time = BirthInput::builder()
            .date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
            .build();
        assert!(matches!(no_time, Err(VedicError::InvalidInput(_))));
    }

    #[test]
    fn missing_place() {
        let no_place = BirthInput::builder()
            .date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
            .time_hours(12.0)
            .tz_offset_hours(5.5)
            .build();
        assert!(matches!(no_place, Err(VedicError::InvalidInput(_))));

        let json = r#"{"date":"1990-05-15","time_hours":10.5,"latitude_deg":28.6}"#;
        assert!(serde_json::from_str::<BirthInput>(json).is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            delhi().location(95.0, 0.0).build(),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(matches!(delhi().time_hours(24.0).build(), Err(VedicError::Time(_))));
        assert!(matches!(delhi().tz_offset_hours(15.0).build(), Err(VedicError::Time(_))));
    }

    #[test]
    fn deserialization_validates() {
        let ok = r#"{"date":"1990-05-15","time_hours":10.5,"latitude_deg":28.6,"longitude_deg":77.2,"tz_offset_hours":5.5}"#;
        let b: BirthInput = serde_json::from_str(ok).unwrap();
        assert_eq!(b.location().latitude_deg, 28.6);

        let bad = r#"{"date":"1990-05-15","time_hours":10.5,"latitude_deg":128.6}"#;
        assert!(serde_json::from_str::<BirthInput>(bad).is_err());
    }

    #[test]
    fn serialize_round_trip() {
        let b = delhi().ayanamsha(AyanamshaSystem::KP).build().unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: BirthInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
