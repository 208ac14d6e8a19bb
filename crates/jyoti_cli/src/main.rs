mod birth;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use jyoti_rs::{
    DashaSystem, GeoLocation, HouseSystem, JyotiConfig, Jyotish, MuhuratEvent, NodeMode,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::birth::{BirthArgs, BirthSpec};

#[derive(Parser)]
#[command(name = "jyoti", version, about = "Vedic astrology engine CLI")]
struct Cli {
    /// Config file (default: $JYOTI_CONFIG, then ./jyoti.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a birth chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Lunar node model: mean or true
        #[arg(long)]
        node_mode: Option<NodeMode>,
        /// House system: whole_sign or equal
        #[arg(long)]
        houses: Option<HouseSystem>,
    },
    /// Dasha timeline from the birth Moon
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// vimshottari or yogini (default from config)
        #[arg(long)]
        system: Option<DashaSystem>,
        /// 0 = Mahadasha, 1 = +Antardasha, 2 = +Pratyantardasha
        #[arg(long)]
        depth: Option<u8>,
        /// Only show the periods running on this date (YYYY-MM-DD, noon UT)
        #[arg(long)]
        at: Option<NaiveDate>,
    },
    /// Ashtakoot compatibility of two births
    Match {
        /// Groom: DATE,TIME,LAT,LON[,TZ]
        #[arg(long, allow_hyphen_values = true)]
        groom: BirthSpec,
        /// Bride: DATE,TIME,LAT,LON[,TZ]
        #[arg(long, allow_hyphen_values = true)]
        bride: BirthSpec,
    },
    /// Panchang for a civil date
    Panchang {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Auspicious windows for an event
    Muhurat {
        /// marriage, griha_pravesh, vehicle_purchase, property_purchase,
        /// business_opening, namakarana
        #[arg(long)]
        event: MuhuratEvent,
        /// First date searched (YYYY-MM-DD)
        #[arg(long, required_unless_present = "month", conflicts_with = "month")]
        start: Option<NaiveDate>,
        /// Number of days searched from --start
        #[arg(long, default_value_t = 30, conflicts_with = "month")]
        days: u32,
        /// Search one calendar month (YYYY-MM)
        #[arg(long, value_parser = parse_month)]
        month: Option<(i32, u32)>,
        /// Print only the distinct dates
        #[arg(long)]
        dates_only: bool,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Location overrides; unset fields fall back to `[location]` in the config.
#[derive(Debug, Clone, Copy, clap::Args)]
struct PlaceArgs {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// UTC offset in hours
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<f64>,
}

impl PlaceArgs {
    fn resolve(&self, config: &JyotiConfig) -> (GeoLocation, f64) {
        let loc = &config.location;
        let geo = GeoLocation::new(
            self.lat.unwrap_or(loc.latitude_deg),
            self.lon.unwrap_or(loc.longitude_deg),
            if self.lat.is_some() || self.lon.is_some() { 0.0 } else { loc.altitude_m },
        );
        (geo, self.tz.unwrap_or(loc.tz_offset_hours))
    }
}

fn parse_month(s: &str) -> Result<(i32, u32), String> {
    let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{s}', expected YYYY-MM"))?;
    Ok((date.year(), date.month()))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = JyotiConfig::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Chart { birth, node_mode, houses } => {
            if let Some(m) = node_mode {
                config.chart.node_mode = m;
            }
            if let Some(h) = houses {
                config.chart.house_system = h;
            }
            let jyotish = Jyotish::new(config)?;
            let input = birth.to_input(&jyotish)?;
            let chart = jyotish.build_chart(&input).context("chart casting failed")?;
            print_json(&chart)
        }
        Commands::Dasha { birth, system, depth, at } => {
            if let Some(d) = depth {
                config.dasha.depth = d;
            }
            let system = system.unwrap_or(config.dasha.system);
            let jyotish = Jyotish::new(config)?;
            let input = birth.to_input(&jyotish)?;
            let chart = jyotish.build_chart(&input).context("chart casting failed")?;
            match at {
                Some(date) => {
                    let jd = jyoti_rs::naive_date_to_jd(date) + 0.5;
                    print_json(&jyotish.dasha_snapshot(system, &chart, jd)?)
                }
                None => print_json(&jyotish.build_dasha_timeline(system, &chart)?),
            }
        }
        Commands::Match { groom, bride } => {
            let jyotish = Jyotish::new(config)?;
            let groom = jyotish
                .build_chart(&BirthArgs::from(groom).to_input(&jyotish)?)
                .context("groom chart")?;
            let bride = jyotish
                .build_chart(&BirthArgs::from(bride).to_input(&jyotish)?)
                .context("bride chart")?;
            print_json(&jyotish.match_charts(&groom, &bride)?)
        }
        Commands::Panchang { date, place } => {
            let (geo, tz) = place.resolve(&config);
            let jyotish = Jyotish::new(config)?;
            let day = jyotish
                .compute_panchang(date, geo.latitude_deg, geo.longitude_deg, tz)
                .with_context(|| format!("panchang for {date}"))?;
            print_json(&day)
        }
        Commands::Muhurat { event, start, days, month, dates_only, place } => {
            let (geo, tz) = place.resolve(&config);
            config.location.latitude_deg = geo.latitude_deg;
            config.location.longitude_deg = geo.longitude_deg;
            config.location.altitude_m = geo.altitude_m;
            config.location.tz_offset_hours = tz;
            let jyotish = Jyotish::new(config)?;
            let windows = match (month, start) {
                (Some((year, month)), _) => jyotish.monthly_muhurat_windows(event, year, month)?,
                (None, Some(start)) => jyotish.find_muhurat(event, start, days)?,
                (None, None) => bail!("either --start or --month is required"),
            };
            debug!(count = windows.len(), %event, "muhurat search done");
            if dates_only {
                let mut dates: Vec<NaiveDate> = windows.iter().map(|w| w.date).collect();
                dates.dedup();
                print_json(&dates)
            } else {
                print_json(&windows)
            }
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn month_argument() {
        assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("Feb").is_err());
    }

    #[test]
    fn chart_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "jyoti", "chart", "--date", "1985-01-02", "--time", "04:00", "--lat", "-33.87",
            "--lon", "151.21", "--tz", "10", "--node-mode", "true",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { birth, node_mode, .. } => {
                assert!((birth.lat + 33.87).abs() < 1e-12);
                assert_eq!(node_mode, Some(NodeMode::True));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn muhurat_needs_start_or_month() {
        assert!(Cli::try_parse_from(["jyoti", "muhurat", "--event", "marriage"]).is_err());
        assert!(
            Cli::try_parse_from([
                "jyoti", "muhurat", "--event", "marriage", "--start", "2024-01-01", "--month",
                "2024-02",
            ])
            .is_err()
        );
        let cli = Cli::try_parse_from([
            "jyoti", "muhurat", "--event", "griha-pravesh", "--month", "2024-02",
        ])
        .unwrap();
        match cli.command {
            Commands::Muhurat { event, month, .. } => {
                assert_eq!(event, MuhuratEvent::GrihaPravesh);
                assert_eq!(month, Some((2024, 2)));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn place_falls_back_to_config() {
        let cfg = JyotiConfig::default();
        let place = PlaceArgs { lat: None, lon: None, tz: Some(0.0) };
        let (geo, tz) = place.resolve(&cfg);
        assert_eq!(geo.latitude_deg, cfg.location.latitude_deg);
        assert_eq!(tz, 0.0);
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["jyoti", "config", "--config", "/tmp/j.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/j.toml")));
    }
}
