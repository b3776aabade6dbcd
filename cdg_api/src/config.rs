//! Client configuration: API root, credentials, response format, and rate budget.

use std::time::Duration;

use crate::Error;

/// Production API root. The version prefix is appended to this.
pub const DEFAULT_ROOT_URL: &str = "https://api.congress.gov/";

/// Current API version prefix.
pub const DEFAULT_API_VERSION: &str = "v3";

/// Default request budget per window (10% safety margin below the published
/// limit of 5,000 requests per hour).
pub const DEFAULT_MAX_REQUESTS: u64 = 4500;

/// Default sliding window duration.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(3600);

/// Request timeout for API calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Response body format requested via the `format` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// JSON, the only format the mapping layer understands.
    #[default]
    Json,
    /// XML, returned as raw text.
    Xml,
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResponseFormat::Json => "json",
                ResponseFormat::Xml => "xml",
            }
        )
    }
}

impl std::str::FromStr for ResponseFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            _ => Err(()),
        }
    }
}

/// Everything needed to build a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// API root, e.g. `https://api.congress.gov/`.
    pub root_url: String,
    /// Version prefix appended to the root, e.g. `v3`.
    pub api_version: String,
    pub format: ResponseFormat,
    /// Maximum requests dispatched within any `window`.
    pub max_requests: u64,
    pub window: Duration,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Production defaults with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            root_url: DEFAULT_ROOT_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            format: ResponseFormat::Json,
            max_requests: DEFAULT_MAX_REQUESTS,
            window: DEFAULT_WINDOW,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads configuration from `CONGRESS_*` environment variables.
    ///
    /// `CONGRESS_API_KEY` is required. Optional values that fail to parse
    /// fall back to their defaults.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("CONGRESS_API_KEY")
            .map_err(|_| Error::MissingConfig("CONGRESS_API_KEY".to_string()))?;
        let mut config = Self::new(api_key);
        if let Ok(root) = std::env::var("CONGRESS_API_URL") {
            config.root_url = root;
        }
        if let Ok(version) = std::env::var("CONGRESS_API_VERSION") {
            config.api_version = version;
        }
        config.max_requests = env_u64("CONGRESS_RATE_LIMIT", DEFAULT_MAX_REQUESTS);
        config.window = Duration::from_secs(env_u64(
            "CONGRESS_RATE_WINDOW_SECS",
            DEFAULT_WINDOW.as_secs(),
        ));
        config.timeout = Duration::from_secs(env_u64(
            "CONGRESS_TIMEOUT_SECS",
            DEFAULT_TIMEOUT.as_secs(),
        ));
        Ok(config)
    }

    pub fn with_root_url(mut self, root_url: &str) -> Self {
        self.root_url = root_url.to_string();
        self
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_rate_limit(mut self, max_requests: u64, window: Duration) -> Self {
        self.max_requests = max_requests;
        self.window = window;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Root joined with the version prefix, always ending in `/`.
    pub fn base_url(&self) -> String {
        let root = self.root_url.trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            format!("{}/", root)
        } else {
            format!("{}/{}/", root, version)
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
