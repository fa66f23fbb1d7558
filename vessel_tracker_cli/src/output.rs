use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use vessel_tracker_lib::anomaly::parse_report_time;
use vessel_tracker_lib::{CacheStats, Region, TrackerSummary, Vessel, VesselAlert};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct VesselRow {
    #[tabled(rename = "MMSI")]
    #[serde(rename = "MMSI")]
    mmsi: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Latitude")]
    #[serde(rename = "Latitude")]
    latitude: String,
    #[tabled(rename = "Longitude")]
    #[serde(rename = "Longitude")]
    longitude: String,
    #[tabled(rename = "Speed (kn)")]
    #[serde(rename = "Speed (kn)")]
    speed: String,
    #[tabled(rename = "Course")]
    #[serde(rename = "Course")]
    course: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: i64,
    #[tabled(rename = "Last Report")]
    #[serde(rename = "Last Report")]
    last_report: String,
}

#[derive(Tabled, Serialize)]
struct AlertRow {
    #[tabled(rename = "MMSI")]
    #[serde(rename = "MMSI")]
    mmsi: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Latitude")]
    #[serde(rename = "Latitude")]
    latitude: String,
    #[tabled(rename = "Longitude")]
    #[serde(rename = "Longitude")]
    longitude: String,
    #[tabled(rename = "Speed (kn)")]
    #[serde(rename = "Speed (kn)")]
    speed: String,
    #[tabled(rename = "Reasons")]
    #[serde(rename = "Reasons")]
    reasons: String,
    #[tabled(rename = "Last Report")]
    #[serde(rename = "Last Report")]
    last_report: String,
}

#[derive(Tabled, Serialize)]
struct RegionRow {
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Latitude")]
    #[serde(rename = "Latitude")]
    latitude: String,
    #[tabled(rename = "Longitude")]
    #[serde(rename = "Longitude")]
    longitude: String,
}

// -- Row builders --

fn build_vessel_rows(vessels: &[Vessel], now: DateTime<Utc>) -> Vec<VesselRow> {
    vessels
        .iter()
        .map(|v| VesselRow {
            mmsi: v.mmsi,
            name: v.name.clone(),
            latitude: format_coord(v.latitude),
            longitude: format_coord(v.longitude),
            speed: format!("{:.1}", v.speed),
            course: format!("{:.1}", v.course),
            status: v.status,
            last_report: format_report_age(v.timestamp.as_deref(), now),
        })
        .collect()
}

fn build_alert_rows(alerts: &[VesselAlert], now: DateTime<Utc>) -> Vec<AlertRow> {
    alerts
        .iter()
        .map(|a| AlertRow {
            mmsi: a.vessel.mmsi,
            name: a.vessel.name.clone(),
            latitude: format_coord(a.vessel.latitude),
            longitude: format_coord(a.vessel.longitude),
            speed: format!("{:.1}", a.vessel.speed),
            reasons: a
                .reasons
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            last_report: format_report_age(a.vessel.timestamp.as_deref(), now),
        })
        .collect()
}

fn build_region_rows(regions: &[Region]) -> Vec<RegionRow> {
    regions
        .iter()
        .map(|r| RegionRow {
            slug: r.slug.clone(),
            name: r.name.clone(),
            latitude: format!(
                "{} to {}",
                format_coord(r.bounds.min_lat),
                format_coord(r.bounds.max_lat)
            ),
            longitude: format!(
                "{} to {}",
                format_coord(r.bounds.min_lon),
                format_coord(r.bounds.max_lon)
            ),
        })
        .collect()
}

// -- Table output --

pub fn print_vessels_table(vessels: &[Vessel]) {
    println!("{}", Table::new(build_vessel_rows(vessels, Utc::now())));
}

pub fn print_alerts_table(alerts: &[VesselAlert]) {
    println!("{}", Table::new(build_alert_rows(alerts, Utc::now())));
}

pub fn print_regions_table(regions: &[Region]) {
    println!("{}", Table::new(build_region_rows(regions)));
}

// -- Markdown output --

pub fn print_vessels_markdown(vessels: &[Vessel]) {
    let mut table = Table::new(build_vessel_rows(vessels, Utc::now()));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_alerts_markdown(alerts: &[VesselAlert]) {
    let mut table = Table::new(build_alert_rows(alerts, Utc::now()));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_regions_markdown(regions: &[Region]) {
    let mut table = Table::new(build_region_rows(regions));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_vessels_csv(vessels: &[Vessel]) -> Result<()> {
    write_csv(build_vessel_rows(vessels, Utc::now()))
}

pub fn print_alerts_csv(alerts: &[VesselAlert]) -> Result<()> {
    write_csv(build_alert_rows(alerts, Utc::now()))
}

pub fn print_regions_csv(regions: &[Region]) -> Result<()> {
    write_csv(build_region_rows(regions))
}

fn write_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Diagnostics --

/// Writes cache and request counters to stderr so stdout stays parseable.
pub fn print_stats(cache: &CacheStats, requests: &TrackerSummary) {
    eprintln!(
        "Requests: {} made, {} succeeded, {} failed",
        requests.requests_made, requests.requests_succeeded, requests.requests_failed
    );
    eprintln!("Cache: {} entries", cache.size);
    for key in &cache.entries {
        eprintln!("  {}", key);
    }
}

fn format_coord(value: f64) -> String {
    format!("{:.4}", value)
}

/// Renders a report time as its age relative to `now`, falling back to the
/// raw provider string when it cannot be parsed.
fn format_report_age(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = timestamp else {
        return "-".to_string();
    };
    let Some(reported) = parse_report_time(raw) else {
        return raw.to_string();
    };
    let minutes = (now - reported).num_minutes();
    if minutes < 0 {
        reported.format("%Y-%m-%d %H:%M UTC").to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 48 * 60 {
        format!("{}h {}m ago", minutes / 60, minutes % 60)
    } else {
        format!("{}d ago", minutes / (24 * 60))
    }
}
