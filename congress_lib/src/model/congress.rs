//! Congresses and their chamber sessions.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Chamber;
use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// One numbered Congress (a two-year term of the legislature).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Congress {
    pub number: u32,
    /// Display name, e.g. "118th Congress".
    pub name: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    /// Chamber sessions in API order.
    pub sessions: Option<Vec<Session>>,
    pub update_date: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl FromJson for Congress {
    const ENTITY: &'static str = "Congress";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            number: f.required("number", coerce::integer)?,
            name: f.optional("name", coerce::string),
            start_year: f.optional("startYear", coerce::integer),
            end_year: f.optional("endYear", coerce::integer),
            sessions: f.list("sessions")?,
            update_date: f.optional("updateDate", coerce::timestamp),
            url: f.optional("url", coerce::string),
        })
    }
}

/// Regular or special session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    Regular,
    Special,
}

impl FromStr for SessionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "regular" => Ok(SessionType::Regular),
            "s" | "special" => Ok(SessionType::Special),
            _ => Err(()),
        }
    }
}

/// One chamber's session within a Congress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub chamber: Option<Chamber>,
    pub number: Option<u32>,
    pub session_type: Option<SessionType>,
    pub start_date: Option<NaiveDate>,
    /// Absent while the session is still open.
    pub end_date: Option<NaiveDate>,
}

impl FromJson for Session {
    const ENTITY: &'static str = "Session";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            chamber: f.optional("chamber", coerce::parsed),
            number: f.optional("number", coerce::integer),
            session_type: f.optional("type", coerce::parsed),
            start_date: f.optional("startDate", coerce::date),
            end_date: f.optional("endDate", coerce::date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;
    use serde_json::json;

    fn detail_118() -> serde_json::Value {
        json!({
            "endYear": "2024",
            "name": "118th Congress",
            "number": 118,
            "sessions": [
                {"chamber": "House of Representatives", "endDate": "2024-01-03", "number": 1, "startDate": "2023-01-03", "type": "R"},
                {"chamber": "Senate", "endDate": "2024-01-03", "number": 1, "startDate": "2023-01-03", "type": "R"},
                {"chamber": "House of Representatives", "number": 2, "startDate": "2024-01-03", "type": "R"}
            ],
            "startYear": "2023",
            "updateDate": "2023-01-03T17:43:32Z",
            "url": "https://api.congress.gov/v3/congress/118?format=json"
        })
    }

    #[test]
    fn maps_congress_detail() {
        let c = Congress::from_json(&detail_118()).unwrap();
        assert_eq!(c.number, 118);
        assert_eq!(c.name.as_deref(), Some("118th Congress"));
        assert_eq!(c.start_year, Some(2023));
        assert_eq!(c.end_year, Some(2024));

        let sessions = c.sessions.unwrap();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].chamber, Some(Chamber::House));
        assert_eq!(sessions[1].chamber, Some(Chamber::Senate));
        assert_eq!(sessions[2].number, Some(2));
        assert_eq!(sessions[2].end_date, None);
        assert_eq!(sessions[0].session_type, Some(SessionType::Regular));
    }

    #[test]
    fn number_is_required() {
        let err = Congress::from_json(&json!({
            "name": "118th Congress",
            "url": "https://api.congress.gov/v3/congress/118?format=json"
        }))
        .unwrap_err();
        assert_eq!(err.key, "number");
        assert_eq!(err.reason, MalformedReason::Missing);
        assert!(err.hint.contains("congress/118"));
    }

    #[test]
    fn sessions_absent_is_not_empty() {
        let c = Congress::from_json(&json!({"number": 1})).unwrap();
        assert!(c.sessions.is_none());
        let c = Congress::from_json(&json!({"number": 1, "sessions": []})).unwrap();
        assert_eq!(c.sessions, Some(vec![]));
    }
}
