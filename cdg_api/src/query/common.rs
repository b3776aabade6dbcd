//! Shared query infrastructure: the [`Query`] trait, [`ListParams`] fields, and [`SortDirection`].

use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Timestamp format accepted by `fromDateTime` / `toDateTime`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Maximum page size the API accepts.
pub const MAX_LIMIT: u32 = 250;

/// Trait implemented by all query builders. Provides the endpoint path,
/// parameter serialization, and shared builder methods for pagination,
/// date filtering, and sort direction.
pub trait Query {
    /// API-relative endpoint path, e.g. `bill/118/hr`.
    fn endpoint(&self) -> String;

    /// Query parameters for this request, excluding the API key and format.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Returns a mutable reference to the list parameters.
    fn get_common(&mut self) -> &mut ListParams;

    /// Sets the zero-based starting record.
    fn with_offset(mut self, offset: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = Some(offset);
        self
    }

    /// Sets the page size, clamped to 1..=250.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit.clamp(1, MAX_LIMIT));
        self
    }

    /// Only records updated at or after this instant.
    fn with_from_date_time(mut self, from: DateTime<Utc>) -> Self
    where
        Self: Sized,
    {
        self.get_common().from_date_time = Some(from);
        self
    }

    /// Only records updated at or before this instant.
    fn with_to_date_time(mut self, to: DateTime<Utc>) -> Self
    where
        Self: Sized,
    {
        self.get_common().to_date_time = Some(to);
        self
    }

    /// Sorts by update date in the given direction.
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort = Some(sort_direction);
        self
    }
}

/// Sort order for list results (by `updateDate`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest first).
    Asc,
    /// Descending order (newest first). This is the API default.
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by list endpoints: pagination, update-date window, and sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Zero-based starting record. `None` starts at the beginning.
    pub offset: Option<u64>,
    /// Results per page. `None` uses the API default of 20.
    pub limit: Option<u32>,
    pub from_date_time: Option<DateTime<Utc>>,
    pub to_date_time: Option<DateTime<Utc>>,
    pub sort: Option<SortDirection>,
}

impl ListParams {
    /// Serializes the set fields as query pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(from) = self.from_date_time {
            params.push((
                "fromDateTime".to_string(),
                from.format(DATE_TIME_FORMAT).to_string(),
            ));
        }
        if let Some(to) = self.to_date_time {
            params.push((
                "toDateTime".to_string(),
                to.format(DATE_TIME_FORMAT).to_string(),
            ));
        }
        if let Some(sort) = self.sort {
            // Sent as "updateDate+desc" once form-encoded.
            params.push(("sort".to_string(), format!("updateDate {}", sort)));
        }
        params
    }
}
