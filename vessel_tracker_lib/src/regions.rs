//! Named watch areas (straits, canals, chokepoints) for area queries.
//!
//! Regions are compiled in from `seed_data/regions.yml` with `include_str!`
//! and resolved by slug, so callers can ask for `strait-of-hormuz` instead
//! of spelling out four coordinates.

use aishub_api::types::BoundingBox;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::validate_bounds;

/// Error types for region file operations.
#[derive(Error, Debug)]
pub enum RegionError {
    #[error("Failed to parse region YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Duplicate region slug in region file: {0}")]
    DuplicateSlug(String),
    #[error("Invalid bounds for region {slug}: {reason}")]
    InvalidBounds { slug: String, reason: String },
}

/// Top-level structure for the region YAML file.
#[derive(Deserialize, Debug)]
pub struct RegionFile {
    pub regions: Vec<Region>,
}

/// A named bounding box.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Region {
    pub slug: String,
    pub name: String,
    pub bounds: BoundingBox,
}

/// Parse regions from YAML content, preserving file order.
///
/// Rejects duplicate slugs and boxes that would fail query validation.
pub fn parse_regions(yaml_content: &str) -> Result<Vec<Region>, RegionError> {
    let file: RegionFile = serde_yml::from_str(yaml_content)?;

    let mut seen = std::collections::HashSet::new();
    for region in &file.regions {
        if !seen.insert(region.slug.as_str()) {
            return Err(RegionError::DuplicateSlug(region.slug.clone()));
        }
        validate_bounds(&region.bounds).map_err(|e| RegionError::InvalidBounds {
            slug: region.slug.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(file.regions)
}

/// Load regions from the embedded YAML file.
pub fn load_regions() -> Result<Vec<Region>, RegionError> {
    let yaml_content = include_str!("../../seed_data/regions.yml");
    parse_regions(yaml_content)
}

/// Find a region by slug, ignoring ASCII case.
pub fn find_region<'a>(regions: &'a [Region], slug: &str) -> Option<&'a Region> {
    regions.iter().find(|r| r.slug.eq_ignore_ascii_case(slug.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_regions() {
        let yaml = r#"
regions:
  - slug: north
    name: North Box
    bounds: { min_lat: 10.0, max_lat: 20.0, min_lon: 30.0, max_lon: 40.0 }
  - slug: south
    name: South Box
    bounds: { min_lat: -20.0, max_lat: -10.0, min_lon: 30.0, max_lon: 40.0 }
"#;
        let regions = parse_regions(yaml).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].slug, "north");
        assert_eq!(regions[1].bounds, BoundingBox::new(-20.0, -10.0, 30.0, 40.0));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let yaml = r#"
regions:
  - slug: a
    name: A
    bounds: { min_lat: 0.0, max_lat: 1.0, min_lon: 0.0, max_lon: 1.0 }
  - slug: a
    name: A again
    bounds: { min_lat: 2.0, max_lat: 3.0, min_lon: 0.0, max_lon: 1.0 }
"#;
        let result = parse_regions(yaml);
        assert!(matches!(result.unwrap_err(), RegionError::DuplicateSlug(ref s) if s == "a"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let yaml = r#"
regions:
  - slug: upside-down
    name: Upside Down
    bounds: { min_lat: 5.0, max_lat: 1.0, min_lon: 0.0, max_lon: 1.0 }
"#;
        let result = parse_regions(yaml);
        assert!(matches!(
            result.unwrap_err(),
            RegionError::InvalidBounds { ref slug, .. } if slug == "upside-down"
        ));
    }

    #[test]
    fn test_empty_regions() {
        let regions = parse_regions("regions: []").unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            parse_regions("regions: [ {slug: x").unwrap_err(),
            RegionError::YamlParse(_)
        ));
    }

    #[test]
    fn test_load_regions_succeeds() {
        let regions = load_regions().unwrap();
        assert!(find_region(&regions, "strait-of-hormuz").is_some());
    }

    #[test]
    fn test_find_region_ignores_case() {
        let regions = load_regions().unwrap();
        let region = find_region(&regions, "Suez-Canal").unwrap();
        assert_eq!(region.name, "Suez Canal");
        assert!(find_region(&regions, "atlantis").is_none());
    }
}
