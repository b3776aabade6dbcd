//! Sliding-window rate limiter for Congress.gov requests.
//!
//! The API publishes a budget of 5,000 requests per hour per key. The limiter
//! paces requests so that no more than `budget` are dispatched within any
//! rolling `window`. It only ever delays; it never rejects a request.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

use crate::config::ClientConfig;

/// Paces outbound requests and counts how they turned out.
///
/// One limiter belongs to one [`crate::Client`]; every `get`, `get_url` and
/// `get_text` call reserves a slot here before it touches the network.
pub struct RateLimiter {
    budget: usize,
    window: Duration,
    /// Send times of the requests still inside the window, oldest first.
    sent: Mutex<VecDeque<Instant>>,
    tracker: RequestTracker,
}

impl RateLimiter {
    /// A budget of zero is raised to one so a caller can always make progress.
    pub fn new(budget: u64, window: Duration) -> Self {
        let budget = usize::try_from(budget.max(1)).unwrap_or(usize::MAX);
        Self {
            budget,
            window,
            sent: Mutex::new(VecDeque::with_capacity(budget.min(1024))),
            tracker: RequestTracker::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.max_requests, config.window)
    }

    /// Waits for a free slot in the window and claims it.
    pub async fn acquire(&self) {
        loop {
            let wait = match self.try_reserve().await {
                Ok(()) => return,
                Err(wait) => wait,
            };
            tracing::debug!(
                "{} request(s) sent in the last {:?}, pausing {:.2}s",
                self.budget,
                self.window,
                wait.as_secs_f64()
            );
            sleep(wait).await;
        }
    }

    /// Claims a slot if one is free, otherwise reports how long until the
    /// oldest one frees up.
    async fn try_reserve(&self) -> Result<(), Duration> {
        let now = Instant::now();
        let mut sent = self.sent.lock().await;
        self.expire(&mut sent, now);

        if sent.len() < self.budget {
            sent.push_back(now);
            return Ok(());
        }
        Err(sent
            .front()
            .map_or(Duration::ZERO, |&oldest| self.frees_up_in(oldest, now)))
    }

    /// Entries stamped a full window ago or earlier no longer count.
    fn expire(&self, sent: &mut VecDeque<Instant>, now: Instant) {
        while sent
            .front()
            .is_some_and(|&t| now.duration_since(t) >= self.window)
        {
            sent.pop_front();
        }
    }

    /// A window too long to add to an `Instant` never frees its slot.
    fn frees_up_in(&self, oldest: Instant, now: Instant) -> Duration {
        oldest
            .checked_add(self.window)
            .map_or(Duration::MAX, |free_at| free_at.saturating_duration_since(now))
    }

    /// Slots left in the current window, or `None` while another caller holds
    /// the lock.
    pub fn remaining_budget(&self) -> Option<u64> {
        let sent = self.sent.try_lock().ok()?;
        let now = Instant::now();
        let live = sent
            .iter()
            .filter(|&&t| now.duration_since(t) < self.window)
            .count();
        Some(self.budget.saturating_sub(live) as u64)
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    pub fn budget(&self) -> u64 {
        self.budget as u64
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// How a dispatched request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// HTTP 429 from the API despite local pacing.
    RateLimited,
    Failed,
}

impl Outcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Outcome::Succeeded,
            429 => Outcome::RateLimited,
            _ => Outcome::Failed,
        }
    }

    fn slot(self) -> usize {
        match self {
            Outcome::Succeeded => 0,
            Outcome::RateLimited => 1,
            Outcome::Failed => 2,
        }
    }
}

/// Per-outcome request counters.
#[derive(Default)]
pub struct RequestTracker {
    counts: [AtomicU64; 3],
}

impl RequestTracker {
    pub fn record(&self, outcome: Outcome) {
        self.counts[outcome.slot()].fetch_add(1, Ordering::Relaxed);
    }

    fn count(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.slot()].load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> TrackerSummary {
        let requests_succeeded = self.count(Outcome::Succeeded);
        let requests_rate_limited = self.count(Outcome::RateLimited);
        let requests_failed = self.count(Outcome::Failed);
        TrackerSummary {
            requests_made: requests_succeeded + requests_rate_limited + requests_failed,
            requests_succeeded,
            requests_rate_limited,
            requests_failed,
        }
    }
}

/// Point-in-time copy of a [`RequestTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSummary {
    pub requests_made: u64,
    pub requests_succeeded: u64,
    pub requests_rate_limited: u64,
    pub requests_failed: u64,
}
