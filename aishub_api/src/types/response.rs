use serde::Deserialize;
use serde_json::Value;

use crate::Error;

use super::AisHubVessel;

/// Top-level envelope returned by every AIS Hub endpoint.
///
/// Both fields are kept loosely typed so that a malformed collection or an
/// unexpected error shape is reported as a parse failure by the accessors
/// rather than failing the whole envelope.
#[derive(Deserialize, Debug, Default)]
pub struct AisHubResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl AisHubResponse {
    /// The provider-reported error message, if any.
    ///
    /// Empty strings, `false` and `null` mean "no error".
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(msg) if msg.trim().is_empty() => None,
            Value::String(msg) => Some(msg.clone()),
            Value::Bool(false) | Value::Null => None,
            Value::Bool(true) => Some("provider reported an error".to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Parses the `result` collection.
    ///
    /// With `absent_is_empty`, a missing or `null` collection yields an empty
    /// list; otherwise it is a parse failure. A `result` that is not an array
    /// is always a parse failure. Individual records that cannot be read
    /// (e.g. no position) are logged and skipped; the rest keep their order.
    pub fn records(&self, absent_is_empty: bool) -> Result<Vec<AisHubVessel>, Error> {
        match &self.result {
            None | Some(Value::Null) if absent_is_empty => Ok(Vec::new()),
            None | Some(Value::Null) => Err(Error::Parse("missing result collection".to_string())),
            Some(Value::Array(items)) => Ok(items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match AisHubVessel::deserialize(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("Skipping malformed vessel record {}: {}", index, e);
                        None
                    }
                })
                .collect()),
            Some(other) => Err(Error::Parse(format!(
                "result is not a collection: {}",
                type_name(other)
            ))),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
