//! Error types for the Motus API client.

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong between building a request and reading a record.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request URL is over the configured ceiling.
    #[error("URL length {length} longer than {max}.")]
    UrlTooLong { length: usize, max: usize },

    /// HTTP 400
    #[error(
        "{}",
        describe(.0, "Bad request, parameter missing or invalid.", "Bad request, ")
    )]
    BadRequest(String),

    /// HTTP 401
    #[error(
        "{}",
        describe(
            .0,
            "API authentication needs to be supplied or is incorrect.",
            "Authentication error: "
        )
    )]
    Authentication(String),

    /// HTTP 404
    #[error("{}", describe(.0, "API endpoint not found.", "API endpoint not found: "))]
    NotFound(String),

    /// HTTP 409
    #[error(
        "{}",
        describe(
            .0,
            "A conflict occurred with the current state of the resource.",
            "A conflict occurred: "
        )
    )]
    Conflict(String),

    /// HTTP 500
    #[error("{}", describe(.0, "An internal server error occurred.", "Server error: "))]
    Server(String),

    /// Any status the dispatcher has no mapping for.
    #[error("Status code: {0} received from server unexpectedly.")]
    UnexpectedStatus(u16),

    #[error("Invalid timestamp '{value}': {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A field holds a value that cannot be converted to the expected type.
    #[error("Field '{field}' has invalid value {value}, expected {expected}")]
    FieldCoercion {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// A required key is absent from a record.
    #[error("Missing field '{0}'")]
    MissingField(String),

    /// HTTP transport failed before a response was received
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Renders a status error: the default message when the server gave no
/// reason, otherwise `prefix` followed by the reason and a full stop.
fn describe(reason: &str, default: &str, prefix: &str) -> String {
    if reason.is_empty() {
        default.to_string()
    } else {
        format!("{prefix}{reason}.")
    }
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a coercion error for `field`, recording the offending raw value.
    pub fn coercion(field: &str, value: &serde_json::Value, expected: &'static str) -> Self {
        Self::FieldCoercion {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        }
    }

    /// The HTTP status this error was raised for, if it came from the dispatcher.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Authentication(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Server(_) => Some(500),
            Self::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// The server-supplied reason for the mapped status errors (empty when the
    /// server gave none), `None` for every other kind.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::BadRequest(r)
            | Self::Authentication(r)
            | Self::NotFound(r)
            | Self::Conflict(r)
            | Self::Server(r) => Some(r.as_str()),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(status) if status >= 500)
    }
}
