use serde::Deserialize;
use thiserror::Error;

/// Failure of one API operation.
///
/// Every failure path collapses to a single human-readable message for the
/// UI layer; `Display` yields exactly that message.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("missing configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The message the UI should surface.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when one was obtained.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Extract a human-readable message from an error response body.
///
/// Accepts either a `message` or an `error` string field; anything else
/// falls back to `"HTTP <status>"`.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

pub(crate) fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}
