//! Rate-limited HTTP client for the Congress.gov API (v3).
//!
//! Builds authenticated requests against a fixed API root and version prefix,
//! paces them under the API's hourly budget, and returns parsed JSON.

mod client;
pub mod config;
mod errors;
mod query;
pub mod rate_limiter;
mod source;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, ResponseFormat};
pub use self::errors::Error;
pub use self::query::{
    AmendmentQuery, BillQuery, CongressQuery, CongressionalRecordQuery, LawQuery, ListParams,
    Query, SortDirection, DATE_TIME_FORMAT, MAX_LIMIT,
};
pub use self::rate_limiter::{Outcome, RateLimiter, RequestTracker, TrackerSummary};
pub use self::source::JsonSource;
