//! AutoSense entrypoint: runs the maintenance pipeline over a fleet, prints the
//! fleet overview, or confirms a manual booking. Reports go to stdout as JSON lines.

use autosense::{
    config::AutosenseConfig,
    fleet::Fleet,
    logging::StructuredLogger,
    orchestrator::Orchestrator,
    risk::{Classifier, RiskScorer},
    scheduling::{ManualBookingRequest, SeededSource, ServiceCatalog},
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "autosense")]
#[command(about = "Agentic predictive maintenance for vehicle telemetry", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file
    #[arg(long, env = "AUTOSENSE_CONFIG_PATH", default_value = "autosense.json")]
    config: PathBuf,

    /// JSON fleet file (overrides `fleet_path` in config)
    #[arg(long)]
    fleet: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the pipeline for one vehicle or the whole fleet
    Run {
        #[arg(long)]
        vehicle: Option<String>,

        /// Seed slot suggestions for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print tier counts and per-vehicle tiers
    Fleet,
    /// Confirm a manual service booking
    Book {
        #[arg(long)]
        vehicle: String,

        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        window: String,

        #[arg(long)]
        center: String,
    },
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        AutosenseConfig::try_load(&cli.config)?
    } else {
        AutosenseConfig::default()
    };
    if let Some(path) = cli.fleet {
        config.fleet_path = Some(path);
    }

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = %cli.config.display(), "autosense starting");

    let fleet = Fleet::from_config(&config)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Run { vehicle, seed } => {
            let orchestrator = match seed {
                Some(seed) => Orchestrator::with_source(&config, SeededSource::new(seed)),
                None => Orchestrator::from_config(&config),
            };
            let records = match vehicle {
                Some(id) => vec![fleet.find(&id)?],
                None => fleet.records().iter().collect(),
            };
            let mut failed = 0usize;
            for record in records {
                match orchestrator.run_for_record(record) {
                    Ok(report) => StructuredLogger::emit_json(&report, &mut stdout)?,
                    Err(e) => {
                        failed += 1;
                        warn!(record = %record, error = %e, "vehicle skipped");
                    }
                }
            }
            if failed > 0 {
                return Err(format!("{failed} vehicle record(s) failed").into());
            }
        }
        Command::Fleet => {
            let scorer = RiskScorer::new(config.scoring.clone());
            let classifier = Classifier::new(config.risk.clone());
            let overview = fleet.overview(&scorer, &classifier)?;
            info!(
                total = overview.total,
                high = overview.high,
                medium = overview.medium,
                "fleet overview"
            );
            StructuredLogger::emit_json(&overview, &mut stdout)?;
        }
        Command::Book {
            vehicle,
            date,
            window,
            center,
        } => {
            fleet.find(&vehicle)?;
            let catalog = ServiceCatalog::from_config(&config.scheduling);
            let request = ManualBookingRequest {
                vehicle_id: vehicle,
                date,
                time_window: window,
                service_center: center,
            };
            let confirmation =
                request.confirm(&catalog, Local::now().date_naive())?;
            info!(%confirmation, "manual booking confirmed");
            StructuredLogger::emit_json(&confirmation, &mut stdout)?;
        }
    }

    Ok(())
}
