//! Small value types shared by several records.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// Congressional chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chamber {
    House,
    Senate,
    Joint,
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Chamber::House => "House",
                Chamber::Senate => "Senate",
                Chamber::Joint => "Joint",
            }
        )
    }
}

impl FromStr for Chamber {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" | "house of representatives" | "h" => Ok(Chamber::House),
            "senate" | "s" => Ok(Chamber::Senate),
            "joint" | "j" => Ok(Chamber::Joint),
            _ => Err(()),
        }
    }
}

/// A `{count, url}` pointer to a sub-resource that has to be fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountUrl {
    pub count: Option<u64>,
    pub url: Option<String>,
    /// Only set on cosponsor pointers.
    pub count_including_withdrawn_cosponsors: Option<u64>,
}

impl FromJson for CountUrl {
    const ENTITY: &'static str = "CountUrl";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            count: f.optional("count", coerce::integer),
            url: f.optional("url", coerce::string),
            count_including_withdrawn_cosponsors: f
                .optional("countIncludingWithdrawnCosponsors", coerce::integer),
        })
    }
}

/// The most recent action on a bill or amendment, as summarized in list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestAction {
    pub action_date: Option<NaiveDate>,
    /// Wall-clock time as sent by the API (`HH:MM:SS`), when known.
    pub action_time: Option<String>,
    pub text: Option<String>,
}

impl FromJson for LatestAction {
    const ENTITY: &'static str = "LatestAction";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            action_date: f.optional("actionDate", coerce::date),
            action_time: f.optional("actionTime", coerce::string),
            text: f.optional("text", coerce::string),
        })
    }
}

/// Free-text note attached to a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub text: Option<String>,
}

impl FromJson for Note {
    const ENTITY: &'static str = "Note";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            text: f.optional("text", coerce::string),
        })
    }
}
