//! Unified SDK error types.

use serde::Deserialize;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// A local precondition failed. Raised before any request is sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing route parameter: {0}")]
    MissingRouteParam(String),

    /// A string on the wire did not name any known enumeration value.
    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    /// A known discriminator that this client has no model for.
    #[error("Unsupported {kind}: {value}")]
    UnsupportedVariant { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Non-2xx response. `body` is the raw response text, untouched.
    #[error("Remote API error {status}: {body}")]
    Remote { status: u16, body: String },

    /// Network-level failure from the transport.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HttpError {
    /// HTTP status of a remote error.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Remote { status, .. } => Some(*status),
            HttpError::Transport(_) => None,
        }
    }

    /// Decode the OANDA error document carried by a remote error, if it is one.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        match self {
            HttpError::Remote { body, .. } => serde_json::from_str(body).ok(),
            HttpError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        HttpError::Transport(Box::new(e))
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Http(e.into())
    }
}

/// A wire string that names no value of the enumeration `kind`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} value: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl From<ParseEnumError> for SdkError {
    fn from(e: ParseEnumError) -> Self {
        SdkError::UnknownVariant {
            kind: e.kind,
            value: e.value,
        }
    }
}

/// Error document returned by the API alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
}
