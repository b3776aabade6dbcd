//! HTTP client for the Congress.gov API.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::{
    config::{ClientConfig, ResponseFormat},
    rate_limiter::{Outcome, RateLimiter},
    source::JsonSource,
    Error,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Congress.gov API.
///
/// Every request waits on the client's [`RateLimiter`] before it is sent.
/// The API key travels in the `x-api-key` header and the response format as
/// the `format` query parameter. Nothing is retried here; a failed request
/// surfaces as [`Error`] and the caller decides what to do with it.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    format: ResponseFormat,
    limiter: RateLimiter,
}

impl Client {
    /// Creates a client from explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url()).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url(), e);
            Error::InvalidUrl(config.base_url())
        })?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;
        Ok(Self {
            http,
            base_url,
            limiter: RateLimiter::from_config(&config),
            api_key: config.api_key,
            format: config.format,
        })
    }

    /// Creates a client from `CONGRESS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client rooted at `base_url` with no version prefix appended.
    /// Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::new(
            ClientConfig::new(api_key)
                .with_root_url(base_url)
                .with_api_version(""),
        )
    }

    /// Root plus version prefix that endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The limiter gating this client's requests.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, Error> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| {
                tracing::error!("Invalid endpoint {}: {}", endpoint, e);
                Error::InvalidUrl(endpoint.to_string())
            })
    }

    /// Fetches an API-relative endpoint (e.g. `congress/118`) and parses the body as JSON.
    pub async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value, Error> {
        let url = self.endpoint_url(endpoint)?;
        let body = self.fetch(url, params, ResponseFormat::Json).await?;
        decode(&body)
    }

    /// Fetches an absolute URL previously returned by the API, such as a
    /// `pagination.next` link. The URL must sit under this client's base URL.
    pub async fn get_url(&self, url: &str) -> Result<Value, Error> {
        let mut parsed = Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;
        if !parsed.as_str().starts_with(self.base_url.as_str()) {
            tracing::error!("Refusing to follow URL outside API root: {}", url);
            return Err(Error::InvalidUrl(url.to_string()));
        }
        let params: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        parsed.set_query(None);
        let body = self.fetch(parsed, &params, ResponseFormat::Json).await?;
        decode(&body)
    }

    /// Fetches an endpoint in the given format and returns the raw body.
    pub async fn get_text(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        format: ResponseFormat,
    ) -> Result<String, Error> {
        let url = self.endpoint_url(endpoint)?;
        self.fetch(url, params, format).await
    }

    /// The configured default response format.
    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    async fn fetch(
        &self,
        url: Url,
        params: &[(String, String)],
        format: ResponseFormat,
    ) -> Result<String, Error> {
        let mut query: Vec<(String, String)> = params
            .iter()
            .filter(|(k, _)| k != "format" && k != "api_key")
            .cloned()
            .collect();
        query.push(("format".to_string(), format.to_string()));

        self.limiter.acquire().await;
        let tracker = self.limiter.tracker();
        tracing::debug!("GET {}", url.path());

        let resp = self
            .http
            .get(url)
            .header("x-api-key", &self.api_key)
            .header("accept", accept_header(format))
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                tracker.record(Outcome::Failed);
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracker.record(Outcome::Failed);
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        tracker.record(Outcome::from_status(status.as_u16()));
        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl JsonSource for Client {
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value, Error> {
        Client::get(self, endpoint, params).await
    }

    async fn get_url(&self, url: &str) -> Result<Value, Error> {
        Client::get_url(self, url).await
    }
}

fn accept_header(format: ResponseFormat) -> &'static str {
    match format {
        ResponseFormat::Json => "application/json",
        ResponseFormat::Xml => "application/xml",
    }
}

fn decode(body: &str) -> Result<Value, Error> {
    serde_json::from_str::<Value>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Decode {
            message: e.to_string(),
            body: snippet,
        }
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_resolves_under_version_prefix() {
        let client = Client::new(ClientConfig::new("k")).unwrap();
        let url = client.endpoint_url("congress/118").unwrap();
        assert_eq!(url.as_str(), "https://api.congress.gov/v3/congress/118");

        let url = client.endpoint_url("/bill/117/hr/3076").unwrap();
        assert_eq!(url.as_str(), "https://api.congress.gov/v3/bill/117/hr/3076");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn decode_reports_snippet() {
        match decode("{not json}") {
            Err(Error::Decode { body, .. }) => assert_eq!(body, "{not json}"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
