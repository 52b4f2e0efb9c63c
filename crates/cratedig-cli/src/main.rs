mod lookup;
mod scan;
mod stores;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cratedig")]
#[command(about = "Record scanning and record store lookup")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reduce scanned barcode payloads to a lookup query
    Scan {
        /// Raw barcode values from a single frame
        payloads: Vec<String>,
        /// Read one JSON frame (array of decoded barcodes) per stdin line
        #[arg(long)]
        stdin: bool,
    },
    /// Show whether a store is open
    Hours {
        /// Schedule file (YAML or JSON)
        file: PathBuf,
        /// Local time to evaluate at, e.g. 2026-10-14T18:30 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the store search rectangle around a location
    Area {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Half-width in km (defaults to CRATEDIG_STORE_SEARCH_RADIUS_KM)
        #[arg(long)]
        radius_km: Option<f64>,
    },
    /// Resolve a barcode into record metadata via the catalog APIs
    Lookup {
        barcode: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cratedig_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Scan { payloads, stdin }) => {
            scan::run_scan(&config, &payloads, stdin)?;
        }
        Some(Commands::Hours { file, at }) => stores::run_hours(&file, at.as_deref())?,
        Some(Commands::Area {
            lat,
            lng,
            radius_km,
        }) => stores::run_area(&config, lat, lng, radius_km)?,
        Some(Commands::Lookup { barcode }) => lookup::run_lookup(&config, &barcode).await?,
        None => println!("cratedig ready; see --help for commands"),
    }

    Ok(())
}
