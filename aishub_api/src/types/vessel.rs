use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name given to vessels that do not broadcast one.
pub const UNKNOWN_VESSEL_NAME: &str = "Unknown Vessel";

/// Data source label stamped on every normalized record.
pub const SOURCE_LABEL: &str = "AIS Hub";

/// No provider field maps to a vessel type, so every record gets this label.
pub const DEFAULT_VESSEL_TYPE: &str = "commercial";

/// A position report exactly as the provider sends it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AisHubVessel {
    #[serde(rename = "MMSI")]
    pub mmsi: u64,
    #[serde(rename = "ShipName", default)]
    pub ship_name: Option<String>,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Speed", default)]
    pub speed: Option<f64>,
    #[serde(rename = "Course", default)]
    pub course: Option<f64>,
    #[serde(rename = "Status", default)]
    pub status: Option<i64>,
    #[serde(
        rename = "Timestamp",
        default,
        deserialize_with = "deserialize_string_or_number"
    )]
    pub timestamp: Option<String>,
}

/// A vessel position in the internal schema.
///
/// Every field is populated; provider gaps are filled during normalization
/// (see the `From<AisHubVessel>` impl). The report timestamp stays optional
/// because its absence is itself a signal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vessel {
    pub id: String,
    pub mmsi: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub course: f64,
    pub status: i64,
    pub timestamp: Option<String>,
    pub source: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
}

impl Vessel {
    /// Stable identifier derived from the MMSI.
    pub fn id_for(mmsi: u64) -> String {
        format!("vessel_{}", mmsi)
    }

    pub fn has_known_name(&self) -> bool {
        !self.name.is_empty() && self.name != UNKNOWN_VESSEL_NAME
    }
}

impl From<AisHubVessel> for Vessel {
    fn from(raw: AisHubVessel) -> Self {
        let name = raw
            .ship_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_VESSEL_NAME.to_string());
        // Kept verbatim; only an empty string counts as missing.
        let timestamp = raw.timestamp.filter(|t| !t.is_empty());

        Vessel {
            id: Vessel::id_for(raw.mmsi),
            mmsi: raw.mmsi,
            name,
            latitude: raw.latitude,
            longitude: raw.longitude,
            speed: raw.speed.unwrap_or(0.0),
            course: raw.course.unwrap_or(0.0),
            status: raw.status.unwrap_or(0),
            timestamp,
            source: SOURCE_LABEL.to_string(),
            vessel_type: DEFAULT_VESSEL_TYPE.to_string(),
        }
    }
}

/// The provider has sent report times both as text and as unix seconds.
fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number for Timestamp, got {}",
            other
        ))),
    }
}
