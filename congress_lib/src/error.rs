//! Error types for the library layer.

use serde_json::Value;
use thiserror::Error;

/// Errors produced by the library layer, wrapping request-layer errors and
/// adding pagination and mapping failures.
#[derive(Error, Debug)]
pub enum CongressError {
    /// A single request failed.
    #[error("API error: {0}")]
    Api(#[from] cdg_api::Error),
    /// A multi-page walk gave up after exhausting retries.
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    /// A JSON object could not be mapped to a record.
    #[error(transparent)]
    Malformed(#[from] MalformedRecordError),
    /// Caller-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A page of a walk failed after all retries.
///
/// Carries the items collected from earlier pages so the caller can decide
/// whether a partial result is usable.
#[derive(Error, Debug)]
#[error("Pagination of {endpoint} failed on page {page} after {attempts} attempt(s): {source}")]
pub struct PaginationError {
    pub endpoint: String,
    /// 1-based number of the page that failed.
    pub page: usize,
    pub attempts: u32,
    /// Items from pages fetched before the failure, in order.
    pub partial: Vec<Value>,
    #[source]
    pub source: cdg_api::Error,
}

/// Why an identity field could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The key is absent or `null`.
    Missing,
    /// The key is present but its value has the wrong shape.
    Invalid,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MalformedReason::Missing => "missing",
                MalformedReason::Invalid => "invalid",
            }
        )
    }
}

/// An identity-bearing field was missing or unusable while mapping a record.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Malformed {entity}: {reason} key `{key}` ({hint})")]
pub struct MalformedRecordError {
    /// Record kind being built, e.g. `Bill`.
    pub entity: &'static str,
    pub key: String,
    pub reason: MalformedReason,
    /// Best-effort description of which object this was, for debugging payloads.
    pub hint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_names_key_and_hint() {
        let err = MalformedRecordError {
            entity: "Bill",
            key: "number".to_string(),
            reason: MalformedReason::Missing,
            hint: "congress=118, type=HR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed Bill: missing key `number` (congress=118, type=HR)"
        );
    }

    #[test]
    fn pagination_error_exposes_source() {
        let err = PaginationError {
            endpoint: "bill".to_string(),
            page: 3,
            attempts: 4,
            partial: vec![Value::Null; 4],
            source: cdg_api::Error::Transport("reset".to_string()),
        };
        assert!(err.to_string().contains("page 3 after 4 attempt(s)"));
        assert!(std::error::Error::source(&err).is_some());

        let wrapped: CongressError = err.into();
        assert!(matches!(wrapped, CongressError::Pagination(ref e) if e.partial.len() == 4));
    }
}
