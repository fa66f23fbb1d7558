use anyhow::Result;
use clap::Args;
use vessel_tracker_lib::VesselTracker;

use super::BoundsArgs;
use crate::output::{
    print_json, print_vessels_csv, print_vessels_markdown, print_vessels_table, OutputFormat,
};

#[derive(Args)]
pub struct AreaArgs {
    #[command(flatten)]
    pub bounds: BoundsArgs,

    /// Always query the provider, ignoring any cached result
    #[arg(long)]
    pub no_cache: bool,
}

pub async fn run(args: &AreaArgs, tracker: &VesselTracker, format: &OutputFormat) -> Result<()> {
    let bounds = args.bounds.resolve()?;
    let vessels = tracker
        .get_vessels_in_bounds(&bounds, !args.no_cache)
        .await?;

    eprintln!("{} vessels in area", vessels.len());

    match format {
        OutputFormat::Table => print_vessels_table(&vessels),
        OutputFormat::Json => print_json(&vessels),
        OutputFormat::Csv => print_vessels_csv(&vessels)?,
        OutputFormat::Markdown => print_vessels_markdown(&vessels),
    }

    Ok(())
}
