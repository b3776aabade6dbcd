//! Legislative actions and the committee activity attached to them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Chamber;
use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// One step in a bill's or amendment's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub action_date: Option<NaiveDate>,
    pub action_time: Option<String>,
    pub text: Option<String>,
    /// Category such as "IntroReferral", "Floor" or "BecameLaw".
    pub action_type: Option<String>,
    pub action_code: Option<String>,
    pub source_system: Option<SourceSystem>,
    pub committees: Option<Vec<CommitteeMetadata>>,
    pub recorded_votes: Option<Vec<RecordedVote>>,
}

impl FromJson for Action {
    const ENTITY: &'static str = "Action";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            action_date: f.optional("actionDate", coerce::date),
            action_time: f.optional("actionTime", coerce::string),
            text: f.optional("text", coerce::string),
            action_type: f.optional("type", coerce::string),
            action_code: f.optional("actionCode", coerce::string),
            source_system: f.nested("sourceSystem")?,
            committees: f.list("committees")?,
            recorded_votes: f.list("recordedVotes")?,
        })
    }
}

/// The system that recorded an action (House floor, Senate, Library of Congress).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSystem {
    pub code: Option<i64>,
    pub name: Option<String>,
}

impl FromJson for SourceSystem {
    const ENTITY: &'static str = "SourceSystem";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            code: f.optional("code", coerce::integer),
            name: f.optional("name", coerce::string),
        })
    }
}

/// A roll-call vote taken on an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedVote {
    pub chamber: Option<Chamber>,
    pub congress: Option<u32>,
    pub date: Option<DateTime<Utc>>,
    pub roll_number: Option<u32>,
    pub session_number: Option<u32>,
    /// Link to the clerk's vote record (XML).
    pub url: Option<String>,
}

impl FromJson for RecordedVote {
    const ENTITY: &'static str = "RecordedVote";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            chamber: f.optional("chamber", coerce::parsed),
            congress: f.optional("congress", coerce::integer),
            date: f.optional("date", coerce::timestamp),
            roll_number: f.optional("rollNumber", coerce::integer),
            session_number: f.optional("sessionNumber", coerce::integer),
            url: f.optional("url", coerce::string),
        })
    }
}

/// A committee (or subcommittee) as referenced from bills and actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitteeMetadata {
    /// Committee system code, e.g. "hswm00".
    pub system_code: Option<String>,
    pub name: Option<String>,
    pub chamber: Option<Chamber>,
    /// "Standing", "Select", "Joint" and so on.
    pub committee_type: Option<String>,
    pub activities: Option<Vec<Activity>>,
    pub subcommittees: Option<Vec<CommitteeMetadata>>,
    pub url: Option<String>,
}

impl FromJson for CommitteeMetadata {
    const ENTITY: &'static str = "Committee";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            system_code: f.optional("systemCode", coerce::string),
            name: f.optional("name", coerce::string),
            chamber: f.optional("chamber", coerce::parsed),
            committee_type: f.optional("type", coerce::string),
            activities: f.list("activities")?,
            subcommittees: f.list("subcommittees")?,
            url: f.optional("url", coerce::string),
        })
    }
}

/// Something a committee did with a bill ("Referred to", "Markup by").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl FromJson for Activity {
    const ENTITY: &'static str = "Activity";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            name: f.optional("name", coerce::string),
            date: f.optional("date", coerce::timestamp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn floor_action_with_vote() {
        let a = Action::from_json(&json!({
            "actionCode": "H37100",
            "actionDate": "2022-02-08",
            "actionTime": "18:36:04",
            "recordedVotes": [{
                "chamber": "House",
                "congress": 117,
                "date": "2022-02-08T23:36:04Z",
                "rollNumber": 31,
                "sessionNumber": 2,
                "url": "https://clerk.house.gov/evs/2022/roll031.xml"
            }],
            "sourceSystem": {"code": 2, "name": "House floor actions"},
            "text": "On passage Passed by the Yeas and Nays: 342 - 92 (Roll no. 31).",
            "type": "Floor"
        }))
        .unwrap();
        assert_eq!(a.action_type.as_deref(), Some("Floor"));
        assert_eq!(a.source_system.as_ref().and_then(|s| s.code), Some(2));
        let votes = a.recorded_votes.unwrap();
        assert_eq!(votes[0].roll_number, Some(31));
        assert_eq!(votes[0].chamber, Some(Chamber::House));
        assert!(a.committees.is_none());
    }

    #[test]
    fn committee_with_subcommittees() {
        let c = CommitteeMetadata::from_json(&json!({
            "activities": [{"date": "2021-05-11T14:04:10Z", "name": "Referred To"}],
            "chamber": "House",
            "name": "Oversight and Reform Committee",
            "subcommittees": [{
                "activities": [{"date": "2021-05-12T15:00:00Z", "name": "Referred to"}],
                "name": "Government Operations Subcommittee",
                "systemCode": "hsgo24"
            }],
            "systemCode": "hsgo00",
            "type": "Standing"
        }))
        .unwrap();
        assert_eq!(c.system_code.as_deref(), Some("hsgo00"));
        let subs = c.subcommittees.unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].system_code.as_deref(), Some("hsgo24"));
        assert!(subs[0].subcommittees.is_none());
        assert_eq!(c.activities.unwrap()[0].name.as_deref(), Some("Referred To"));
    }
}
