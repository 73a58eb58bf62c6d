use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the relay operations
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required setting is missing. Detected before any upstream call.
    #[error("{0} not set")]
    Configuration(&'static str),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream answered with a non-success status. Status and body are
    /// forwarded to the caller as-is.
    #[error("Upstream returned {status}")]
    Upstream { status: u16, body: Value },

    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    /// HTTP status the caller should receive for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Configuration(_) | RelayError::Transport(_) => 500,
            RelayError::InvalidRequest(_) => 400,
            RelayError::Upstream { status, .. } => *status,
        }
    }

    /// Value placed in the envelope's `error` field
    pub fn error_value(&self) -> Value {
        match self {
            RelayError::Upstream { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Transport(e.to_string())
    }
}

/// Interpret a raw upstream body: JSON when it parses, otherwise the text
pub fn upstream_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
