use anyhow::Result;
use clap::Args;
use vessel_tracker_lib::VesselTracker;

use super::BoundsArgs;
use crate::output::{
    print_alerts_csv, print_alerts_markdown, print_alerts_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct AlertsArgs {
    #[command(flatten)]
    pub bounds: BoundsArgs,
}

pub async fn run(args: &AlertsArgs, tracker: &VesselTracker, format: &OutputFormat) -> Result<()> {
    let bounds = args.bounds.resolve()?;
    let alerts = tracker.get_vessel_alerts(&bounds).await?;

    eprintln!("{} suspicious vessels", alerts.len());

    match format {
        OutputFormat::Table => print_alerts_table(&alerts),
        OutputFormat::Json => print_json(&alerts),
        OutputFormat::Csv => print_alerts_csv(&alerts)?,
        OutputFormat::Markdown => print_alerts_markdown(&alerts),
    }

    Ok(())
}
