//! Walking multi-page list endpoints.
//!
//! List responses carry their items under a single array key (`bills`,
//! `congresses`, `actions`, ...) next to `pagination` and `request` blocks.
//! Sub-resource lists sometimes nest the array one level down
//! (`subjects.legislativeSubjects`), and the Congressional Record uses its
//! own `Results.Issues` envelope with `IndexStart`/`TotalCount` counters.
//!
//! [`PageWalker`] requests the first page, discovers where the next one is,
//! and keeps going until there is no next-page pointer, a pointer repeats, or
//! the configured page cap is reached. Each page request is retried on
//! transient failures.

use std::collections::HashSet;

use cdg_api::types::Pagination;
use cdg_api::JsonSource;
use serde_json::Value;
use url::Url;

use crate::config::WalkConfig;
use crate::error::PaginationError;

const ENVELOPE_KEYS: &[&str] = &["pagination", "request"];

/// One fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    /// 1-based position in the walk.
    pub number: usize,
    /// The whole response body.
    pub body: Value,
    /// Items found on this page, in response order.
    pub items: Vec<Value>,
}

/// The item array of a list response.
///
/// Uses the first array-valued key other than `pagination` and `request`.
/// Without one, descends into the body's single object-valued key and
/// looks there. Returns an empty list when nothing matches.
pub fn page_items(body: &Value) -> Vec<Value> {
    find_items(body, 1).cloned().unwrap_or_default()
}

fn find_items(body: &Value, depth: usize) -> Option<&Vec<Value>> {
    let map = body.as_object()?;
    let candidates = || {
        map.iter()
            .filter(|(key, _)| !ENVELOPE_KEYS.contains(&key.as_str()))
    };
    if let Some(items) = candidates().find_map(|(_, v)| v.as_array()) {
        return Some(items);
    }
    if depth == 0 {
        return None;
    }
    let mut objects = candidates().filter(|(_, v)| v.is_object());
    match (objects.next(), objects.next()) {
        (Some((_, inner)), None) => find_items(inner, depth - 1),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Offset(u64),
    /// A next-page URL that carries no offset; followed as-is.
    Url(String),
}

impl Cursor {
    fn token(&self) -> String {
        match self {
            Cursor::Offset(n) => format!("offset={}", n),
            Cursor::Url(url) => url.clone(),
        }
    }
}

/// Where the page after `body` lives, if anywhere.
///
/// `offset` is the offset the page was requested with.
fn next_cursor(body: &Value, offset: Option<u64>, item_count: usize) -> Option<Cursor> {
    if let Some(next) = Pagination::from_body(body).and_then(|p| p.next) {
        return Some(match offset_of(&next) {
            Some(n) => Cursor::Offset(n),
            None => Cursor::Url(next),
        });
    }

    let results = body.get("Results")?;
    let total = results.get("TotalCount").and_then(Value::as_u64)?;
    let start = results
        .get("IndexStart")
        .and_then(Value::as_u64)
        .map(|s| s.saturating_sub(1))
        .or(offset)
        .unwrap_or(0);
    let next = start + item_count as u64;
    (item_count > 0 && next < total).then_some(Cursor::Offset(next))
}

fn offset_of(next: &str) -> Option<u64> {
    let url = Url::parse(next).ok()?;
    let (_, value) = url.query_pairs().find(|(k, _)| k == "offset")?;
    value.parse().ok()
}

fn set_param(params: &mut Vec<(String, String)>, key: &str, value: String) {
    match params.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value,
        None => params.push((key.to_string(), value)),
    }
}

/// Lazily walks the pages of one list endpoint.
pub struct PageWalker<'a, S: JsonSource + ?Sized> {
    source: &'a S,
    endpoint: String,
    params: Vec<(String, String)>,
    config: WalkConfig,
    /// `None` once the walk is over. The first page is `Offset` of the
    /// caller's starting offset.
    cursor: Option<Cursor>,
    pages: usize,
    seen: HashSet<String>,
}

impl<'a, S: JsonSource + ?Sized> PageWalker<'a, S> {
    /// Starts a walk of `endpoint`. A `limit` is added to `params` unless
    /// one is already present; an `offset` in `params` is the starting point.
    pub fn new(
        source: &'a S,
        endpoint: impl Into<String>,
        params: &[(String, String)],
        config: &WalkConfig,
    ) -> Self {
        let mut params = params.to_vec();
        if !params.iter().any(|(k, _)| k == "limit") {
            params.push(("limit".to_string(), config.page_limit.to_string()));
        }
        let start = params
            .iter()
            .find(|(k, _)| k == "offset")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(0);
        let cursor = Cursor::Offset(start);
        let mut seen = HashSet::new();
        seen.insert(cursor.token());
        Self {
            source,
            endpoint: endpoint.into(),
            params,
            config: config.clone(),
            cursor: Some(cursor),
            pages: 0,
            seen,
        }
    }

    /// Pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    /// Fetches the next page, or returns `None` when the walk is over.
    ///
    /// On failure the walk is over too; the error's `partial` is empty here
    /// and filled in by [`PageWalker::collect_items`].
    pub async fn next_page(&mut self) -> Result<Option<Page>, PaginationError> {
        let Some(cursor) = self.cursor.take() else {
            return Ok(None);
        };
        let number = self.pages + 1;
        let offset = match &cursor {
            Cursor::Offset(n) => Some(*n),
            Cursor::Url(_) => None,
        };

        let body = self.fetch_with_retry(&cursor, number).await?;
        let items = page_items(&body);
        self.pages = number;
        tracing::debug!(
            "{}: page {} returned {} item(s)",
            self.endpoint,
            number,
            items.len()
        );

        match next_cursor(&body, offset, items.len()) {
            None => {}
            Some(next) if !self.seen.insert(next.token()) => {
                tracing::warn!(
                    "{}: next-page pointer {} already visited, stopping",
                    self.endpoint,
                    next.token()
                );
            }
            Some(_) if self.pages >= self.config.max_pages => {
                tracing::warn!(
                    "{}: stopping after {} pages (page cap reached)",
                    self.endpoint,
                    self.pages
                );
            }
            Some(next) => self.cursor = Some(next),
        }

        Ok(Some(Page {
            number,
            body,
            items,
        }))
    }

    /// Concatenates the items of every page in order.
    pub async fn collect_items(mut self) -> Result<Vec<Value>, PaginationError> {
        let mut items = Vec::new();
        loop {
            match self.next_page().await {
                Ok(Some(page)) => items.extend(page.items),
                Ok(None) => return Ok(items),
                Err(mut err) => {
                    err.partial = items;
                    return Err(err);
                }
            }
        }
    }

    /// Every page, in order.
    pub async fn collect_pages(mut self) -> Result<Vec<Page>, PaginationError> {
        let mut pages = Vec::new();
        loop {
            match self.next_page().await {
                Ok(Some(page)) => pages.push(page),
                Ok(None) => return Ok(pages),
                Err(mut err) => {
                    err.partial = pages.into_iter().flat_map(|p| p.items).collect();
                    return Err(err);
                }
            }
        }
    }

    async fn fetch_with_retry(
        &self,
        cursor: &Cursor,
        page: usize,
    ) -> Result<Value, PaginationError> {
        let retry = &self.config.retry;
        let mut attempt = 0u32;
        loop {
            let result = match cursor {
                Cursor::Offset(n) => {
                    let mut params = self.params.clone();
                    set_param(&mut params, "offset", n.to_string());
                    self.source.get(&self.endpoint, &params).await
                }
                Cursor::Url(url) => self.source.get_url(url).await,
            };
            match result {
                Ok(body) => return Ok(body),
                Err(err) => {
                    attempt += 1;
                    if attempt > retry.max_retries || !err.is_retryable() {
                        tracing::warn!(
                            "{}: page {} failed after {} attempt(s): {}",
                            self.endpoint,
                            page,
                            attempt,
                            err
                        );
                        return Err(PaginationError {
                            endpoint: self.endpoint.clone(),
                            page,
                            attempts: attempt,
                            partial: Vec::new(),
                            source: err,
                        });
                    }
                    let delay = retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{}: page {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        self.endpoint,
                        page,
                        attempt,
                        retry.max_retries,
                        delay.as_secs_f64(),
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
