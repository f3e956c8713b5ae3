//! Error types for the management API client.
//!
//! Every failure surfaces as one [`Error`] variant. Rate limiting is its own
//! variant but still carries the full [`ApiError`], so callers that only care
//! about "the server said no" can use [`Error::api_error`] for both.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use serde::Serialize;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when calling the management API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never reached the server, or the response never came back intact.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(ApiError),
    /// The server answered with HTTP 429.
    #[error(transparent)]
    RateLimit(RateLimitError),
    /// A success response did not have the shape the call site expected.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The request could not be built. Raised before any network call.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The caller cancelled the call while it was in flight.
    #[error("Request cancelled")]
    Cancelled,
}

impl Error {
    /// The API error behind this failure, for both [`Error::Api`] and [`Error::RateLimit`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            Error::RateLimit(limited) => Some(&limited.api),
            _ => None,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.api_error().map(|api| api.status)
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimit(_))
    }
}

/// Failure below HTTP: DNS, TLS, connection reset, timeout, truncated body.
#[derive(thiserror::Error, Debug)]
#[error("Transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A non-success response from the API.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("API error {status}{}", payload_suffix(.payload))]
pub struct ApiError {
    pub status: StatusCode,
    /// Parsed error body. `None` when the body was empty or could not be parsed.
    pub payload: Option<ApiErrorPayload>,
}

impl ApiError {
    pub fn message(&self) -> Option<&str> {
        self.payload.as_ref().and_then(|p| p.message.as_deref())
    }

    pub fn error_code(&self) -> Option<&str> {
        self.payload.as_ref().and_then(|p| p.error_code.as_deref())
    }
}

fn payload_suffix(payload: &Option<ApiErrorPayload>) -> String {
    match payload {
        Some(ApiErrorPayload {
            message: Some(message),
            error_code: Some(code),
            ..
        }) => format!(": {} ({})", message, code),
        Some(ApiErrorPayload {
            message: Some(message),
            ..
        }) => format!(": {}", message),
        _ => String::new(),
    }
}

/// Error body returned by the management API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorPayload {
    /// Status reported in the body, or the HTTP status when the body omits it.
    pub status_code: u16,
    /// Short reason phrase, e.g. `"Bad Request"`.
    pub error: Option<String>,
    /// Machine-readable code, e.g. `"invalid_body"`.
    pub error_code: Option<String>,
    pub message: Option<String>,
    /// Members of the error object this client does not model.
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Values of the `X-RateLimit-*` headers sent with a 429 response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    /// Requests allowed in the current window.
    pub limit: Option<u64>,
    /// Requests left in the current window.
    pub remaining: Option<u64>,
    /// When the window resets, in seconds since the Unix epoch.
    pub reset_at_epoch_seconds: Option<i64>,
}

impl RateLimitInfo {
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset_at_epoch_seconds
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

/// HTTP 429 from the API. Never retried by this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Rate limited: {api}")]
pub struct RateLimitError {
    pub api: ApiError,
    /// `None` when the response carried none of the rate limit headers.
    pub rate_limit: Option<RateLimitInfo>,
}

/// A success response body the chosen decoder could not interpret.
///
/// Always surfaced to the caller, so "zero results" stays distinguishable
/// from "the client did not understand the response".
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("Response body is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("Response body does not match the expected type: {0}")]
    Body(#[source] serde_json::Error),
    #[error("Unexpected JSON root: expected {expected}, found {found}")]
    UnexpectedRoot {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Envelope is missing list property `{0}`")]
    MissingListProperty(String),
    #[error("Envelope property `{property}` is {found}, expected an array")]
    NotAnArray {
        property: String,
        found: &'static str,
    },
    #[error("Envelope field `{field}` is invalid: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
    #[error("Failed to decode item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Envelope reports total {total} but contains {len} items")]
    InconsistentTotal { total: u64, len: usize },
}
