use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use panchang_core::AnalyticEphemeris;
use panchang_search::{
    CITIES, Location, PanchangConfig, TimeZoneSpec, compute_panchangam,
    compute_panchangam_periods, find_city,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panchang", about = "Hindu calendar (panchangam) for any place and date")]
struct Cli {
    /// TOML file overriding the default configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Resolve unit kinds on one thread
    #[arg(long, global = true)]
    sequential: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Units prevailing at sunrise and the day's muhurats
    Day(DayArgs),
    /// Every unit and window of the Hindu day
    Periods(DayArgs),
    /// List the built-in cities
    Cities,
}

#[derive(Args)]
struct DayArgs {
    /// Civil date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    /// City from the built-in registry
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    city: Option<String>,
    /// Latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,
    /// Altitude in meters
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    alt: f64,
    /// IANA zone or fixed offset such as +05:30 (default: from longitude)
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<String>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, sequential: bool) -> Result<PanchangConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PanchangConfig::default(),
    };
    if sequential {
        config.parallel = false;
    }
    config.validate()?;
    Ok(config)
}

fn parse_config(text: &str) -> Result<PanchangConfig> {
    Ok(toml::from_str(text)?)
}

fn resolve_location(args: &DayArgs) -> Result<Location> {
    let mut location = match (&args.city, args.lat, args.lon) {
        (Some(city), _, _) => match find_city(city) {
            Some(location) => location,
            None => bail!("unknown city {city:?}; run `panchang cities` for the list"),
        },
        (None, Some(lat), Some(lon)) => match &args.tz {
            Some(tz) => {
                let zone = TimeZoneSpec::parse(tz)?;
                Location::new(format!("{lat:.4}, {lon:.4}"), lat, lon, zone)?
            }
            None => Location::from_coordinates(lat, lon)?,
        },
        _ => bail!("either --city or both --lat and --lon are required"),
    };
    if let (Some(tz), Some(_)) = (&args.tz, &args.city) {
        location.time_zone = TimeZoneSpec::parse(tz)?;
    }
    if args.alt != 0.0 {
        location = location.with_altitude(args.alt)?;
    }
    Ok(location)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.sequential)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Day(args) => {
            let location = resolve_location(&args)?;
            let eph = AnalyticEphemeris::new(config.ephemeris)?;
            let result = compute_panchangam(&eph, &location, args.date, &config)
                .with_context(|| format!("panchangam for {} at {}", args.date, location.name))?;
            print_json(&result, args.pretty)
        }
        Commands::Periods(args) => {
            let location = resolve_location(&args)?;
            let eph = AnalyticEphemeris::new(config.ephemeris)?;
            let result = compute_panchangam_periods(&eph, &location, args.date, &config)
                .with_context(|| format!("periods for {} at {}", args.date, location.name))?;
            print_json(&result, args.pretty)
        }
        Commands::Cities => {
            for city in &CITIES {
                println!(
                    "{:<10} {:>9.4} {:>9.4}  {}",
                    city.name,
                    city.latitude,
                    city.longitude,
                    city.time_zone.name()
                );
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_args(argv: &[&str]) -> DayArgs {
        let mut full = vec!["panchang", "day"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Day(args) => args,
            _ => panic!("expected the day subcommand"),
        }
    }

    #[test]
    fn city_selector() {
        let args = day_args(&["--date", "2025-10-05", "--city", "bangalore"]);
        let location = resolve_location(&args).unwrap();
        assert_eq!(location.name, "Bengaluru");
        assert_eq!(location.time_zone.name(), "Asia/Kolkata");
    }

    #[test]
    fn coordinates_with_explicit_zone() {
        let args = day_args(&[
            "--date", "2025-10-05", "--lat", "-12.05", "--lon", "-77.04", "--tz", "-05:00",
        ]);
        let location = resolve_location(&args).unwrap();
        assert_eq!(location.time_zone, TimeZoneSpec::Fixed(-18_000));
    }

    #[test]
    fn coordinates_without_zone_use_nearest_city_zone() {
        let args = day_args(&["--date", "2025-10-05", "--lat", "12.97", "--lon", "77.59"]);
        let location = resolve_location(&args).unwrap();
        assert_eq!(location.time_zone.name(), "Asia/Kolkata");
    }

    #[test]
    fn missing_selector_is_an_error() {
        let args = day_args(&["--date", "2025-10-05"]);
        assert!(resolve_location(&args).is_err());
    }

    #[test]
    fn unknown_city_is_an_error() {
        let args = day_args(&["--date", "2025-10-05", "--city", "Atlantis"]);
        let err = resolve_location(&args).unwrap_err();
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn city_and_coordinates_conflict() {
        let argv = ["panchang", "day", "--date", "2025-10-05", "--city", "Lima", "--lat", "1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = parse_config("parallel = false\n[muhurat]\nbrahma_gap_min = 48.0\n").unwrap();
        assert!(!config.parallel);
        assert_eq!(config.muhurat.brahma_gap_min, 48.0);
        assert_eq!(config.resolver, PanchangConfig::default().resolver);
    }

    #[test]
    fn sequential_flag_overrides_config() {
        let config = load_config(None, true).unwrap();
        assert!(!config.parallel);
    }
}
