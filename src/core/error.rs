use std::fmt;

use crate::core::constants::messages;

/// Comprehensive error types for linkfacts operations
#[derive(Debug)]
pub enum LinkFactsError {
    /// IO error (prompt interaction, file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Submission validation error
    Validation(String),

    /// HTTP client error (request construction, connection setup)
    Http(reqwest::Error),

    /// JSON parsing error (malformed success response body)
    JsonParsing(serde_json::Error),

    /// The analysis service rejected the request with a non-success status
    Api { status: u16, detail: String },

    /// Transport failure before any response arrived
    Transport(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl LinkFactsError {
    /// The message surfaced in the error banner for this failure.
    ///
    /// Rejected requests show the extracted `detail`, transport failures show
    /// the exception's message; both fall back to a generic message upstream
    /// at construction time so this never yields an empty string.
    pub fn banner_message(&self) -> String {
        match self {
            LinkFactsError::Api { detail, .. } => detail.clone(),
            LinkFactsError::Transport(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for LinkFactsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkFactsError::Io(err) => write!(f, "IO error: {err}"),
            LinkFactsError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LinkFactsError::Validation(msg) => write!(f, "Validation error: {msg}"),
            LinkFactsError::Http(err) => write!(f, "HTTP error: {err}"),
            LinkFactsError::JsonParsing(err) => write!(f, "JSON parsing error: {err}"),
            LinkFactsError::Api { status, detail } => {
                write!(f, "API error ({status}): {detail}")
            }
            LinkFactsError::Transport(msg) => write!(f, "Transport error: {msg}"),
            LinkFactsError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for LinkFactsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkFactsError::Io(err) => Some(err),
            LinkFactsError::Http(err) => Some(err),
            LinkFactsError::JsonParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinkFactsError {
    fn from(err: std::io::Error) -> Self {
        LinkFactsError::Io(err)
    }
}

impl From<reqwest::Error> for LinkFactsError {
    fn from(err: reqwest::Error) -> Self {
        LinkFactsError::Http(err)
    }
}

impl From<serde_json::Error> for LinkFactsError {
    fn from(err: serde_json::Error) -> Self {
        LinkFactsError::JsonParsing(err)
    }
}

/// Build a `Transport` error from a reqwest failure that produced no response.
///
/// Uses the underlying source message where one exists, matching how the
/// failure would read in a browser console, with a generic fallback when the
/// error carries no message at all.
pub fn transport_error(err: &reqwest::Error) -> LinkFactsError {
    let msg = std::error::Error::source(err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string());
    if msg.trim().is_empty() {
        LinkFactsError::Transport(messages::GENERIC_ERROR.to_string())
    } else {
        LinkFactsError::Transport(msg)
    }
}

/// Type alias for Results using LinkFactsError
pub type Result<T> = std::result::Result<T, LinkFactsError>;
