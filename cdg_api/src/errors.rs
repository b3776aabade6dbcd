//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (connection, timeout, or body read failure).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body could not be parsed as JSON.
    #[error("Failed to decode response: {message}")]
    Decode { message: String, body: String },
    /// A URL could not be built, or a next-page URL pointed outside the API root.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Required configuration was not provided.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

impl Error {
    /// Whether a later attempt at the same request may succeed.
    ///
    /// Transport and decode failures, HTTP 429 and 5xx are transient. Other
    /// 4xx statuses (bad key, unknown endpoint) will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) | Error::Decode { .. } => true,
            Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Error::InvalidUrl(_) | Error::MissingConfig(_) => false,
        }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
