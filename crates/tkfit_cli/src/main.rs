//! TKFIT CLI
//!
//! 합성 세션 데이터 → stdout (table / JSON)
//! Nothing is written to disk; pipe the JSON into the presentation layer.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tkfit_core::analysis::{detect_key_events, EventDetectionConfig, SessionSummary, SummaryConfig};
use tkfit_core::api::{dashboard_from_request, DashboardRequest, DashboardResponse};
use tkfit_core::{
    FieldGeometry, FieldProjector, GeneratorConfig, PlayerPosition, SeriesGenerator, SessionData,
    SessionFilter,
};

#[derive(Parser, Debug)]
#[command(name = "tkfit")]
#[command(author, version, about = "TKFIT synthetic session data", long_about = None)]
struct Cli {
    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the generated series
    Generate {
        #[command(flatten)]
        session: SessionArgs,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Only the first N samples
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Headline metrics and key events for a match period
    Summary {
        #[command(flatten)]
        session: SessionArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Trajectory and hot spots in pitch meters (JSON)
    Project {
        #[command(flatten)]
        session: SessionArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Keep every n-th trajectory point
        #[arg(long, default_value = "5")]
        stride: usize,
    },

    /// Static pitch markings (JSON)
    Pitch,

    /// Full dashboard document from a JSON request (`-` reads stdin)
    Dashboard {
        #[arg(long, default_value = "-")]
        request: PathBuf,
    },

    /// JSON Schema of the dashboard document
    Schema,
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Generator config (.yaml / .yml / .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured seed
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Period start in match minutes
    #[arg(long)]
    from_min: Option<f64>,

    /// Period end in match minutes
    #[arg(long)]
    to_min: Option<f64>,

    /// Player position label (midfielder, forward, defender, goalkeeper)
    #[arg(long, default_value = "midfielder")]
    position: PlayerPosition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl FilterArgs {
    fn to_filter(&self) -> SessionFilter {
        SessionFilter::full_match()
            .with_period(self.from_min.unwrap_or(0.0), self.to_min.unwrap_or(f64::INFINITY))
            .with_position(self.position)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    match cli.command {
        Commands::Generate { session, format, limit } => handle_generate(&session, format, limit),
        Commands::Summary { session, filter } => handle_summary(&session, &filter),
        Commands::Project { session, filter, stride } => handle_project(&session, &filter, stride),
        Commands::Pitch => print_json(&FieldGeometry::standard().markings()),
        Commands::Dashboard { request } => handle_dashboard(&request),
        Commands::Schema => print_json(&schemars::schema_for!(DashboardResponse)),
    }
}

fn load_session(args: &SessionArgs) -> Result<SessionData> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    info!(seed = config.seed, samples = config.timeline.sample_count, "generating session");
    let session = SeriesGenerator::new(config)?.generate()?;
    debug!(fingerprint = %session.fingerprint()?, "session ready");
    Ok(session)
}

fn handle_generate(args: &SessionArgs, format: OutputFormat, limit: Option<usize>) -> Result<()> {
    let session = load_session(args)?;
    let shown = limit.unwrap_or(session.len()).min(session.len());
    let samples = &session.samples[..shown];

    match format {
        OutputFormat::Json => print_json(samples),
        OutputFormat::Table => {
            println!(
                "{:<20} {:>7} {:>7} {:>7} {:>6} {:>6} {:>8} {:>10} {:>11}",
                "timestamp", "hr", "speed", "accel", "emg_q", "emg_h", "load", "lat", "lon"
            );
            for s in samples {
                println!(
                    "{:<20} {:>7.1} {:>7.2} {:>7.2} {:>6.2} {:>6.2} {:>8.2} {:>10.6} {:>11.6}",
                    s.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    s.heart_rate,
                    s.speed_kmh,
                    s.acceleration,
                    s.emg_quadriceps,
                    s.emg_hamstring,
                    s.player_load,
                    s.gps_lat,
                    s.gps_lon
                );
            }
            println!("\n   Samples:     {} of {}", shown, session.len());
            println!("   Fingerprint: {}", session.fingerprint()?);
            Ok(())
        }
    }
}

fn handle_summary(args: &SessionArgs, filter_args: &FilterArgs) -> Result<()> {
    let session = load_session(args)?;
    let filter = filter_args.to_filter();
    let window = filter.apply(&session)?;

    let summary = SessionSummary::from_samples(window, &SummaryConfig::default())?;
    let events = detect_key_events(window, &EventDetectionConfig::default());

    println!("📊 Performance metrics ({})", filter.position);
    println!("   Window:        {} samples ({:.1} min)", summary.samples, summary.duration_minutes);
    println!("   Distance:      {:.2} km", summary.total_distance_km);
    println!("   Max speed:     {:.1} km/h", summary.max_speed_kmh);
    println!(
        "   Heart rate:    avg {:.0} bpm, peak {:.0} bpm (zone {} - {:?})",
        summary.mean_heart_rate,
        summary.peak_heart_rate,
        summary.heart_rate_zone.number(),
        summary.heart_rate_zone
    );
    println!(
        "   EMG:           quadriceps {:.2}, hamstring {:.2}",
        summary.mean_emg_quadriceps, summary.mean_emg_hamstring
    );
    if let Some(ratio) = summary.hamstring_quadriceps_ratio {
        println!("   H:Q ratio:     {:.2}", ratio);
    }
    println!("   Accel > 2 m/s²: {}", summary.high_intensity_accelerations);
    println!("   Load:          {:.1}", summary.load_accumulated);

    println!("\n⚡ Key events: {}", events.len());
    for ev in &events {
        println!(
            "   {} → {} ({} samples)  speed {:.1} km/h, HR {:.0} bpm, accel {:.2} m/s², EMG {:.2}",
            ev.start.format("%H:%M:%S"),
            ev.end.format("%H:%M:%S"),
            ev.sample_count(),
            ev.peak_speed_kmh,
            ev.peak_heart_rate,
            ev.peak_acceleration,
            ev.peak_emg_quadriceps
        );
    }

    Ok(())
}

fn handle_project(args: &SessionArgs, filter_args: &FilterArgs, stride: usize) -> Result<()> {
    let session = load_session(args)?;
    let window = filter_args.to_filter().apply(&session)?;

    let origin = FieldProjector::origin(&session.trajectory())?;
    let trajectory: Vec<_> = window.iter().map(|s| s.position()).collect();
    let projection =
        FieldProjector::default().project_with_origin(origin, &trajectory, &session.hot_spots);

    print_json(&serde_json::json!({
        "origin": projection.origin,
        "trajectory": projection.every_nth(stride)?,
        "hot_spots": projection.hot_spots,
    }))
}

fn handle_dashboard(path: &Path) -> Result<()> {
    let raw = read_request(path)?;
    let request: DashboardRequest =
        serde_json::from_str(&raw).context("parsing dashboard request")?;

    let response = dashboard_from_request(&request)?;
    info!(key_events = response.key_events.len(), "dashboard built");
    print_json(&response)
}

fn read_request(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading request from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
