//! Library layer for Congress.gov data: typed records, pagination, and a
//! high-level client.
//!
//! Builds on the `cdg_api` request layer. [`CongressClient`] walks list
//! endpoints to completion with bounded retries and maps every JSON object
//! onto the records in [`model`].

pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod paginate;

pub use cdg_api;
pub use cdg_api::{
    AmendmentQuery, BillQuery, ClientConfig, CongressQuery, CongressionalRecordQuery, JsonSource,
    LawQuery, ListParams, Query, ResponseFormat, SortDirection, TrackerSummary,
};

pub use client::CongressClient;
pub use config::{RetryConfig, WalkConfig};
pub use error::{CongressError, MalformedReason, MalformedRecordError, PaginationError};
pub use mapper::{map_list, FromJson};
pub use paginate::{Page, PageWalker};
