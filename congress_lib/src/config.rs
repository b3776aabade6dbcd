//! Pagination and retry settings.

use std::time::Duration;

use rand::Rng;

/// Largest page the API serves.
pub const DEFAULT_PAGE_LIMIT: u32 = 250;

/// Safety valve against APIs that never stop handing out next-page pointers.
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// Retry policy for transient failures of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 2000,
            max_delay_ms: 30000,
        }
    }
}

impl RetryConfig {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_retries: env_parse("CONGRESS_RETRY_MAX", defaults.max_retries),
            base_delay_ms: env_parse("CONGRESS_RETRY_BASE_MS", defaults.base_delay_ms),
            max_delay_ms: env_parse("CONGRESS_RETRY_MAX_MS", defaults.max_delay_ms),
        }
    }

    /// No retries at all.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Exponential backoff for the given 1-based attempt, capped, with ±20% jitter.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(30);
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// How the pagination walker requests and follows pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Page size requested on the first page.
    pub page_limit: u32,
    /// Walks stop (with a warning) after this many pages.
    pub max_pages: usize,
    pub retry: RetryConfig,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            max_pages: DEFAULT_MAX_PAGES,
            retry: RetryConfig::default(),
        }
    }
}

impl WalkConfig {
    /// Reads `CONGRESS_PAGE_LIMIT`, `CONGRESS_MAX_PAGES`, and the
    /// `CONGRESS_RETRY_*` variables; unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self {
            page_limit: env_parse("CONGRESS_PAGE_LIMIT", DEFAULT_PAGE_LIMIT)
                .clamp(1, cdg_api::MAX_LIMIT),
            max_pages: env_parse("CONGRESS_MAX_PAGES", DEFAULT_MAX_PAGES).max(1),
            retry: RetryConfig::from_env(),
        }
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit.clamp(1, cdg_api::MAX_LIMIT);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_and_caps() {
        let cfg = RetryConfig {
            max_retries: 5,
            base_delay_ms: 100,
            max_delay_ms: 1000,
        };
        let first = cfg.delay_for_attempt(1);
        assert!(first >= Duration::from_millis(80) && first < Duration::from_millis(120));
        let third = cfg.delay_for_attempt(3);
        assert!(third >= Duration::from_millis(320) && third < Duration::from_millis(480));
        let tenth = cfg.delay_for_attempt(10);
        assert!(tenth < Duration::from_millis(1200));
    }

    #[test]
    fn builders_clamp() {
        let cfg = WalkConfig::default().with_page_limit(5000).with_max_pages(0);
        assert_eq!(cfg.page_limit, 250);
        assert_eq!(cfg.max_pages, 1);
    }

    #[test]
    fn none_disables_retries() {
        assert_eq!(RetryConfig::none().max_retries, 0);
    }
}
