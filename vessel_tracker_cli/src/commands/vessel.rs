use anyhow::Result;
use clap::Args;
use vessel_tracker_lib::VesselTracker;

use crate::output::{
    print_json, print_vessels_csv, print_vessels_markdown, print_vessels_table, OutputFormat,
};

#[derive(Args)]
pub struct VesselArgs {
    /// Maritime Mobile Service Identity of the vessel
    #[arg(long)]
    pub mmsi: u64,
}

pub async fn run(args: &VesselArgs, tracker: &VesselTracker, format: &OutputFormat) -> Result<()> {
    let Some(vessel) = tracker.get_vessel_details(args.mmsi).await else {
        eprintln!("Vessel {} not found", args.mmsi);
        return Ok(());
    };

    let vessels = [vessel];
    match format {
        OutputFormat::Table => print_vessels_table(&vessels),
        OutputFormat::Json => print_json(&vessels[0]),
        OutputFormat::Csv => print_vessels_csv(&vessels)?,
        OutputFormat::Markdown => print_vessels_markdown(&vessels),
    }

    Ok(())
}
