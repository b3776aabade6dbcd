//! The seam between the HTTP layer and everything that consumes JSON pages.

use async_trait::async_trait;
use serde_json::Value;

use crate::Error;

/// Anything that can answer API-relative GETs with parsed JSON.
///
/// [`crate::Client`] is the HTTP implementation. Pagination and mapping code
/// is generic over this trait so it can run against an in-memory source in tests.
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetches an API-relative endpoint with extra query parameters.
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value, Error>;

    /// Fetches an absolute URL previously handed out by the API.
    async fn get_url(&self, url: &str) -> Result<Value, Error>;
}
