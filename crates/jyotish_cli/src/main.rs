//! `jyotish`: sidereal charts, dashas and transits from the command line.
//!
//! Positions come from the built-in analytic ephemeris (1800–2050).
//! Settings are read from `--config` when given; flags override the file.
//! `RUST_LOG` controls log output and `--verbose` raises it to debug.

mod summary;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use jyotish_config::ChartSettings;
use jyotish_core::KeplerianEphemeris;
use jyotish_engine::{
    BaseChart, BirthSpecification, ChartRequest, compute_chart, transit_report,
};
use jyotish_vedic_base::dasha::{DashaSystem, active_periods, compute_dasha};
use jyotish_vedic_base::{
    AyanamshaSystem, NodeMode, Varga, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude,
};

#[derive(Parser)]
#[command(name = "jyotish", version, about = "Vedic (sidereal) chart calculator")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        opts: ChartArgs,
        /// Instant for transits and the running dasha (RFC 3339, default now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        json: bool,
    },
    /// Dasha timeline
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        opts: ChartArgs,
        /// Show the periods running at this instant (RFC 3339, default now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        json: bool,
    },
    /// Transits over the natal Moon
    Transit {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        opts: ChartArgs,
        /// Transit instant (RFC 3339, default now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        json: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Print the effective settings as TOML
    Settings {
        #[command(flatten)]
        opts: ChartArgs,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    /// Local clock time (HH:MM or HH:MM:SS); omit when unknown
    #[arg(long)]
    time: Option<Clock>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in minutes, east positive
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    tz_offset: i32,
}

#[derive(Args)]
struct ChartArgs {
    /// Ayanamsha system (lahiri, krishnamurti, raman, ...)
    #[arg(long)]
    ayanamsha: Option<AyanamshaSystem>,
    #[arg(long, value_enum)]
    node: Option<NodeArg>,
    /// vimshottari or yogini
    #[arg(long)]
    dasha_system: Option<DashaSystem>,
    /// 1 = mahadasha .. 3 = pratyantardasha
    #[arg(long)]
    dasha_depth: Option<u8>,
    /// Divisional chart to include, e.g. D9 (repeatable; replaces the configured list)
    #[arg(long = "varga")]
    vargas: Vec<Varga>,
}

#[derive(Clone, Copy, ValueEnum)]
enum NodeArg {
    Mean,
    True,
}

impl From<NodeArg> for NodeMode {
    fn from(n: NodeArg) -> Self {
        match n {
            NodeArg::Mean => NodeMode::Mean,
            NodeArg::True => NodeMode::True,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Clock {
    hour: u32,
    minute: u32,
    second: f64,
}

impl FromStr for Clock {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || format!("expected HH:MM or HH:MM:SS, got '{s}'");
        let parts: Vec<&str> = s.trim().split(':').collect();
        let (h, m, sec) = match parts.as_slice() {
            [h, m] => (*h, *m, "0"),
            [h, m, sec] => (*h, *m, *sec),
            _ => return Err(bad()),
        };
        Ok(Self {
            hour: h.parse().map_err(|_| bad())?,
            minute: m.parse().map_err(|_| bad())?,
            second: sec.parse().map_err(|_| bad())?,
        })
    }
}

impl BirthArgs {
    fn to_spec(&self) -> Result<BirthSpecification> {
        let spec = BirthSpecification::new(
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.time.map(|c| (c.hour, c.minute, c.second)),
            self.lat,
            self.lon,
            self.tz_offset,
        )
        .context("invalid birth details")?;
        Ok(spec)
    }
}

fn load_settings(path: Option<&PathBuf>, opts: &ChartArgs) -> Result<ChartSettings> {
    let mut settings = ChartSettings::load_or_default(path.map(PathBuf::as_path))
        .context("could not load settings")?;
    if let Some(a) = opts.ayanamsha {
        settings.ayanamsha = a;
    }
    if let Some(n) = opts.node {
        settings.node_mode = n.into();
    }
    if let Some(s) = opts.dasha_system {
        settings.dasha.system = s;
    }
    if let Some(d) = opts.dasha_depth {
        settings.dasha.depth = d;
    }
    if !opts.vargas.is_empty() {
        settings.vargas = opts.vargas.clone();
    }
    settings.validate().context("invalid settings")?;
    log::debug!("effective settings: {settings:?}");
    Ok(settings)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config.as_ref();
    let eph = KeplerianEphemeris::new();

    match cli.command {
        Commands::Chart {
            birth,
            opts,
            at,
            json,
        } => {
            let settings = load_settings(config, &opts)?;
            let request = ChartRequest::new(birth.to_spec()?, settings)
                .evaluated_at(at.unwrap_or_else(Utc::now));
            let chart = compute_chart(&eph, &request).context("chart computation failed")?;
            if json {
                print_json(&chart)?;
            } else {
                summary::print_chart(&chart);
            }
        }

        Commands::Dasha {
            birth,
            opts,
            at,
            json,
        } => {
            let settings = load_settings(config, &opts)?;
            let spec = birth.to_spec()?;
            let base = BaseChart::compute(&eph, &spec, &settings.ayanamsha, settings.node_mode)?;
            let tree = compute_dasha(
                settings.dasha.system,
                base.moon().longitude,
                spec.instant(),
                settings.dasha.depth,
            )?;
            let running = active_periods(&tree, at.unwrap_or_else(Utc::now));
            if json {
                print_json(&tree)?;
            } else {
                summary::print_dasha(&tree, &running);
            }
        }

        Commands::Transit {
            birth,
            opts,
            at,
            json,
        } => {
            let settings = load_settings(config, &opts)?;
            let spec = birth.to_spec()?;
            let base = BaseChart::compute(&eph, &spec, &settings.ayanamsha, settings.node_mode)?;
            let report = transit_report(
                &eph,
                &base,
                at.unwrap_or_else(Utc::now),
                &settings.ayanamsha,
                settings.node_mode,
            )?;
            if json {
                print_json(&report)?;
            } else {
                summary::print_transit(&report);
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(normalize_360(lon));
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi,
                info.rashi.sanskrit_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(normalize_360(lon));
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra,
                info.nakshatra.index(),
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::Settings { opts } => {
            let settings = load_settings(config, &opts)?;
            print!("{}", settings.to_toml_string()?);
        }
    }
    Ok(())
}
