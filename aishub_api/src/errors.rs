//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (network error, timeout, bad URL).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered successfully but reported an error in the payload.
    #[error("AIS Hub error: {0}")]
    Provider(String),
    /// The payload could not be read as the expected result collection.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Coarse classification of an [`Error`], used by callers that need to
/// branch on the failure category without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Transport,
    Provider,
    Parse,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RequestFailed(_) | Error::HttpStatus { .. } => ErrorKind::Transport,
            Error::Provider(_) => ErrorKind::Provider,
            Error::Parse(_) => ErrorKind::Parse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_groups_transport_failures() {
        assert_eq!(
            Error::RequestFailed("timeout".into()).kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            Error::HttpStatus {
                status: 503,
                body: String::new()
            }
            .kind(),
            ErrorKind::Transport
        );
    }

    #[test]
    fn provider_message_is_displayed() {
        let err = Error::Provider("Too frequent requests!".into());
        assert_eq!(err.kind(), ErrorKind::Provider);
        assert_eq!(err.to_string(), "AIS Hub error: Too frequent requests!");
    }
}
