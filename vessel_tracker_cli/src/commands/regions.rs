use anyhow::Result;
use vessel_tracker_lib::regions::load_regions;

use crate::output::{
    print_json, print_regions_csv, print_regions_markdown, print_regions_table, OutputFormat,
};

pub fn run(format: &OutputFormat) -> Result<()> {
    let regions = load_regions()?;

    match format {
        OutputFormat::Table => print_regions_table(&regions),
        OutputFormat::Json => print_json(&regions),
        OutputFormat::Csv => print_regions_csv(&regions)?,
        OutputFormat::Markdown => print_regions_markdown(&regions),
    }

    Ok(())
}
