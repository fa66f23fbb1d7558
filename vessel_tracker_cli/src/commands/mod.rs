//! CLI subcommand implementations.

pub mod alerts;
pub mod area;
pub mod regions;
pub mod vessel;

use anyhow::{bail, Result};
use clap::Args;
use vessel_tracker_lib::regions::{find_region, load_regions};
use vessel_tracker_lib::BoundingBox;

/// Area selection shared by the `area` and `alerts` subcommands.
#[derive(Args)]
pub struct BoundsArgs {
    /// Named region slug (see `regions`), e.g. strait-of-hormuz
    #[arg(long, conflicts_with_all = ["min_lat", "max_lat", "min_lon", "max_lon"])]
    pub region: Option<String>,

    /// Southern edge in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub min_lat: Option<f64>,

    /// Northern edge in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub max_lat: Option<f64>,

    /// Western edge in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub min_lon: Option<f64>,

    /// Eastern edge in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub max_lon: Option<f64>,
}

impl BoundsArgs {
    /// Resolves either the named region or the four explicit edges.
    pub fn resolve(&self) -> Result<BoundingBox> {
        if let Some(slug) = &self.region {
            let regions = load_regions()?;
            return match find_region(&regions, slug) {
                Some(region) => Ok(region.bounds),
                None => bail!("Unknown region '{}'. Run `vessel-tracker regions` to list them.", slug),
            };
        }

        match (self.min_lat, self.max_lat, self.min_lon, self.max_lon) {
            (Some(min_lat), Some(max_lat), Some(min_lon), Some(max_lon)) => {
                Ok(BoundingBox::new(min_lat, max_lat, min_lon, max_lon))
            }
            _ => bail!("Provide --region or all of --min-lat, --max-lat, --min-lon, --max-lon"),
        }
    }
}
