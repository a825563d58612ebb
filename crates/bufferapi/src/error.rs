use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Buffer API client.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The caller asked for a verb the API layer does not issue (only GET
    /// and POST are supported).
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// DNS, connection, TLS, timeout or body-read failure from the transport.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status of 400 or above.
    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: StatusCode, url: String },

    /// The body was too short to be a JSON document.
    #[error("malformed JSON response from {url}: body is {len} byte(s)")]
    MalformedResponse { len: usize, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A well-formed response reported `"success": false`. Carries the raw
    /// response body.
    #[error("Buffer API rejected the request: {0}")]
    ApiRejected(String),

    /// The configured base URL does not parse or cannot carry a path.
    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A resource path could not be joined onto the base URL.
    #[error("invalid resource path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl BufferError {
    /// HTTP status associated with this error, if any.
    ///
    /// Useful for branching on e.g. `401 Unauthorized` to trigger
    /// re-authentication upstream.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BufferError::HttpStatus { status, .. } => Some(*status),
            BufferError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
