//! Error types for the library layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use aishub_api::types::SOURCE_LABEL;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation failures.
#[derive(Debug)]
pub enum TrackerError {
    /// An error from the underlying API client.
    Api(aishub_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<aishub_api::Error> for TrackerError {
    fn from(e: aishub_api::Error) -> Self {
        Self::Api(e)
    }
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api(e) => match e.kind() {
                aishub_api::ErrorKind::Transport => ErrorKind::Transport,
                aishub_api::ErrorKind::Provider => ErrorKind::Provider,
                aishub_api::ErrorKind::Parse => ErrorKind::Parse,
            },
            Self::InvalidInput(_) => ErrorKind::Validation,
        }
    }
}

/// Failure category surfaced to callers of the tracking service.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Malformed caller input, e.g. an inverted bounding box.
    Validation,
    /// Network failure or non-success HTTP status.
    Transport,
    /// The provider answered with an explicit error message.
    Provider,
    /// The provider's result collection was missing or malformed.
    Parse,
}

/// Error object handed to logging and UI layers when an area or alert
/// query fails.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceError {
    pub service: String,
    pub kind: ErrorKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ServiceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            service: SOURCE_LABEL.to_string(),
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.service, self.message)
    }
}

impl std::error::Error for ServiceError {}

impl From<TrackerError> for ServiceError {
    fn from(e: TrackerError) -> Self {
        Self::new(e.kind(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_from_provider_failure() {
        let err: ServiceError =
            TrackerError::from(aishub_api::Error::Provider("Invalid username".into())).into();
        assert_eq!(err.service, "AIS Hub");
        assert_eq!(err.kind, ErrorKind::Provider);
        assert_eq!(err.message, "AIS Hub error: Invalid username");
    }

    #[test]
    fn service_error_from_validation_failure() {
        let err: ServiceError = TrackerError::InvalidInput("min_lat > max_lat".into()).into();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.to_string(), "[AIS Hub] Invalid input: min_lat > max_lat");
    }

    #[test]
    fn service_error_serializes_for_consumers() {
        let err = ServiceError::new(ErrorKind::Transport, "Request failed with status 503");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["service"], "AIS Hub");
        assert_eq!(json["kind"], "transport");
        assert_eq!(json["message"], "Request failed with status 503");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn transport_kinds_map_through() {
        let err = TrackerError::from(aishub_api::Error::HttpStatus {
            status: 502,
            body: String::new(),
        });
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(std::error::Error::source(&err).is_some());
    }
}
