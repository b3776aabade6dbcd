use cdg_api::types::AmendmentType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BillId, Chamber, CountUrl, LatestAction, Sponsor};
use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// (congress, type, number) triple naming one amendment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmendmentId {
    pub congress: u32,
    pub amendment_type: AmendmentType,
    pub number: u32,
}

impl AmendmentId {
    pub fn new(congress: u32, amendment_type: AmendmentType, number: u32) -> Self {
        Self {
            congress,
            amendment_type,
            number,
        }
    }

    /// Endpoint path of the amendment detail, e.g. `amendment/117/samdt/2137`.
    pub fn path(&self) -> String {
        format!(
            "amendment/{}/{}/{}",
            self.congress,
            self.amendment_type.path_segment(),
            self.number
        )
    }
}

impl FromJson for AmendmentId {
    const ENTITY: &'static str = "AmendmentReference";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            congress: f.required("congress", coerce::integer)?,
            amendment_type: f.required("type", coerce::parsed)?,
            number: f.required("number", coerce::integer)?,
        })
    }
}

/// A treaty referenced as the target of an amendment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmendedTreaty {
    pub congress: u32,
    pub treaty_number: u32,
    pub url: Option<String>,
}

impl FromJson for AmendedTreaty {
    const ENTITY: &'static str = "AmendedTreaty";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            congress: f.required("congress", coerce::integer)?,
            treaty_number: f.required("treatyNumber", coerce::integer)?,
            url: f.optional("url", coerce::string),
        })
    }
}

/// An amendment to a bill, a treaty, or another amendment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amendment {
    pub congress: u32,
    pub amendment_type: AmendmentType,
    pub number: u32,
    pub description: Option<String>,
    pub purpose: Option<String>,
    pub chamber: Option<Chamber>,
    pub proposed_date: Option<DateTime<Utc>>,
    pub submitted_date: Option<DateTime<Utc>>,
    pub latest_action: Option<LatestAction>,
    pub amended_bill: Option<BillId>,
    pub amended_treaty: Option<AmendedTreaty>,
    pub amended_amendment: Option<AmendmentId>,
    pub sponsors: Option<Vec<Sponsor>>,
    pub actions: Option<CountUrl>,
    pub cosponsors: Option<CountUrl>,
    pub amendments_to_amendment: Option<CountUrl>,
    pub update_date: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl Amendment {
    pub fn id(&self) -> AmendmentId {
        AmendmentId::new(self.congress, self.amendment_type, self.number)
    }
}

impl FromJson for Amendment {
    const ENTITY: &'static str = "Amendment";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            congress: f.required("congress", coerce::integer)?,
            amendment_type: f.required("type", coerce::parsed)?,
            number: f.required("number", coerce::integer)?,
            description: f.optional("description", coerce::string),
            purpose: f.optional("purpose", coerce::string),
            chamber: f.optional("chamber", coerce::parsed),
            proposed_date: f.optional("proposedDate", coerce::timestamp),
            submitted_date: f.optional("submittedDate", coerce::timestamp),
            latest_action: f.nested("latestAction")?,
            amended_bill: f.nested("amendedBill")?,
            amended_treaty: f.nested("amendedTreaty")?,
            amended_amendment: f.nested("amendedAmendment")?,
            sponsors: f.list("sponsors")?,
            actions: f.nested("actions")?,
            cosponsors: f.nested("cosponsors")?,
            amendments_to_amendment: f.nested("amendmentsToAmendment")?,
            update_date: f.optional("updateDate", coerce::timestamp),
            url: f.optional("url", coerce::string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdg_api::types::BillType;
    use serde_json::json;

    #[test]
    fn amendment_to_bill() {
        let a = Amendment::from_json(&json!({
            "actions": {"count": 4, "url": "https://api.congress.gov/v3/amendment/117/samdt/2137/actions?format=json"},
            "amendedBill": {
                "congress": 117,
                "number": "3684",
                "originChamber": "House",
                "title": "Infrastructure Investment and Jobs Act",
                "type": "HR"
            },
            "chamber": "Senate",
            "congress": 117,
            "number": "2137",
            "proposedDate": "2021-08-01T04:00:00Z",
            "purpose": "In the nature of a substitute.",
            "sponsors": [{"bioguideId": "S000033", "fullName": "Sen. Sinema, Kyrsten [D-AZ]"}],
            "submittedDate": "2021-08-01T04:00:00Z",
            "type": "SAMDT",
            "updateDate": "2022-02-25T17:34:49Z"
        }))
        .unwrap();
        assert_eq!(a.id().path(), "amendment/117/samdt/2137");
        assert_eq!(a.amended_bill, Some(BillId::new(117, BillType::Hr, 3684)));
        assert!(a.amended_treaty.is_none());
        assert_eq!(a.chamber, Some(Chamber::Senate));
        assert_eq!(a.sponsors.unwrap()[0].bioguide_id, "S000033");
    }

    #[test]
    fn amendment_to_treaty() {
        let a = Amendment::from_json(&json!({
            "amendedTreaty": {"congress": 117, "treatyNumber": 3},
            "congress": 117,
            "number": 5,
            "type": "SAMDT"
        }))
        .unwrap();
        assert_eq!(a.amended_treaty.unwrap().treaty_number, 3);
        assert!(a.amended_bill.is_none());
    }

    #[test]
    fn parent_bill_without_number_fails() {
        let err = Amendment::from_json(&json!({
            "amendedBill": {"congress": 117, "type": "HR"},
            "congress": 117,
            "number": 5,
            "type": "HAMDT"
        }))
        .unwrap_err();
        assert_eq!(err.entity, "BillReference");
        assert_eq!(err.key, "number");
    }
}
