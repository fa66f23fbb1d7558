mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vessel_tracker_lib::{TrackerConfig, VesselTracker};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "vessel-tracker")]
#[command(about = "Track vessels and flag suspicious behavior using AIS Hub data")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Print cache and request statistics to stderr when done
    #[arg(long, global = true)]
    stats: bool,

    /// AIS Hub API key (overrides AISHUB_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Provider base URL (overrides AISHUB_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Cache lifetime in seconds
    #[arg(long, global = true)]
    cache_ttl: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vessels inside a bounding box or named region
    Area(commands::area::AreaArgs),
    /// Look up a single vessel by MMSI
    Vessel(commands::vessel::VesselArgs),
    /// List suspicious vessels in an area with the reasons they were flagged
    Alerts(commands::alerts::AlertsArgs),
    /// List the named regions usable with --region
    Regions,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vessel_tracker=info".parse()?)
                .add_directive("aishub_api=warn".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let tracker = match &cli.command {
        Commands::Regions => {
            commands::regions::run(&format)?;
            None
        }
        Commands::Area(args) => {
            let tracker = build_tracker(&cli)?;
            commands::area::run(args, &tracker, &format).await?;
            Some(tracker)
        }
        Commands::Vessel(args) => {
            let tracker = build_tracker(&cli)?;
            commands::vessel::run(args, &tracker, &format).await?;
            Some(tracker)
        }
        Commands::Alerts(args) => {
            let tracker = build_tracker(&cli)?;
            commands::alerts::run(args, &tracker, &format).await?;
            Some(tracker)
        }
    };

    if let (true, Some(tracker)) = (cli.stats, &tracker) {
        output::print_stats(&tracker.cache_stats(), &tracker.request_summary());
    }

    Ok(())
}

/// Environment settings with command-line overrides applied on top.
fn build_tracker(cli: &Cli) -> Result<VesselTracker> {
    let mut config = TrackerConfig::from_env();
    if let Some(key) = &cli.api_key {
        config = config.with_api_key(key);
    }
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.cache_ttl {
        config = config.with_cache_ttl(Duration::from_secs(secs));
    }
    Ok(VesselTracker::new(config)?)
}
