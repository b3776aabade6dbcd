//! Bills, their identity, and the sub-resources fetched alongside them.

use std::str::FromStr;

use cdg_api::types::BillType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Action, Amendment, Chamber, CommitteeMetadata, CountUrl, LatestAction, Law, Note, Sponsor,
};
use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// (congress, type, number) triple naming one bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId {
    pub congress: u32,
    pub bill_type: BillType,
    pub number: u32,
}

impl BillId {
    pub fn new(congress: u32, bill_type: BillType, number: u32) -> Self {
        Self {
            congress,
            bill_type,
            number,
        }
    }

    /// Endpoint path of the bill detail, e.g. `bill/117/hr/3076`.
    pub fn path(&self) -> String {
        format!(
            "bill/{}/{}/{}",
            self.congress,
            self.bill_type.path_segment(),
            self.number
        )
    }
}

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({}th Congress)", self.bill_type, self.number, self.congress)
    }
}

impl FromJson for BillId {
    const ENTITY: &'static str = "BillReference";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            congress: f.required("congress", coerce::integer)?,
            bill_type: f.required("type", coerce::parsed)?,
            number: f.required("number", coerce::integer)?,
        })
    }
}

/// A bill or resolution as returned by the list and detail endpoints.
///
/// List responses carry a subset of the detail fields; the rest stay `None`.
/// Sub-resources appear as [`CountUrl`] pointers and are fetched separately
/// into [`BillDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub congress: u32,
    pub bill_type: BillType,
    pub number: u32,
    pub title: Option<String>,
    pub origin_chamber: Option<Chamber>,
    pub origin_chamber_code: Option<String>,
    pub introduced_date: Option<NaiveDate>,
    pub update_date: Option<DateTime<Utc>>,
    pub update_date_including_text: Option<DateTime<Utc>>,
    pub latest_action: Option<LatestAction>,
    pub policy_area: Option<String>,
    pub constitutional_authority_statement_text: Option<String>,
    pub sponsors: Option<Vec<Sponsor>>,
    pub laws: Option<Vec<Law>>,
    pub notes: Option<Vec<Note>>,
    pub actions: Option<CountUrl>,
    pub amendments: Option<CountUrl>,
    pub committees: Option<CountUrl>,
    pub cosponsors: Option<CountUrl>,
    pub related_bills: Option<CountUrl>,
    pub subjects: Option<CountUrl>,
    pub summaries: Option<CountUrl>,
    pub text_versions: Option<CountUrl>,
    pub titles: Option<CountUrl>,
    pub url: Option<String>,
}

impl Bill {
    pub fn id(&self) -> BillId {
        BillId::new(self.congress, self.bill_type, self.number)
    }
}

impl FromJson for Bill {
    const ENTITY: &'static str = "Bill";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        let id = BillId::from_fields(f).map_err(|mut e| {
            e.entity = Self::ENTITY;
            e
        })?;
        let laws: Option<Vec<Law>> = f.list("laws")?;
        Ok(Self {
            congress: id.congress,
            bill_type: id.bill_type,
            number: id.number,
            title: f.optional("title", coerce::string),
            origin_chamber: f.optional("originChamber", coerce::parsed),
            origin_chamber_code: f.optional("originChamberCode", coerce::string),
            introduced_date: f.optional("introducedDate", coerce::date),
            update_date: f.optional("updateDate", coerce::timestamp),
            update_date_including_text: f.optional("updateDateIncludingText", coerce::timestamp),
            latest_action: f.nested("latestAction")?,
            policy_area: f.optional("policyArea", coerce::named),
            constitutional_authority_statement_text: f
                .optional("constitutionalAuthorityStatementText", coerce::string),
            sponsors: f.list("sponsors")?,
            laws: laws.map(|laws| laws.into_iter().map(|l| l.with_origin(id)).collect()),
            notes: f.list("notes")?,
            actions: f.nested("actions")?,
            amendments: f.nested("amendments")?,
            committees: f.nested("committees")?,
            cosponsors: f.nested("cosponsors")?,
            related_bills: f.nested("relatedBills")?,
            subjects: f.nested("subjects")?,
            summaries: f.nested("summaries")?,
            text_versions: f.nested("textVersions")?,
            titles: f.nested("titles")?,
            url: f.optional("url", coerce::string),
        })
    }
}

/// One of a bill's titles (short, official, display, per text version).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub title: Option<String>,
    pub title_type: Option<String>,
    pub title_type_code: Option<u32>,
    pub bill_text_version_code: Option<String>,
    pub bill_text_version_name: Option<String>,
    pub chamber_code: Option<String>,
    pub chamber_name: Option<String>,
    pub update_date: Option<DateTime<Utc>>,
}

impl FromJson for Title {
    const ENTITY: &'static str = "Title";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            title: f.optional("title", coerce::string),
            title_type: f.optional("titleType", coerce::string),
            title_type_code: f.optional("titleTypeCode", coerce::integer),
            bill_text_version_code: f.optional("billTextVersionCode", coerce::string),
            bill_text_version_name: f.optional("billTextVersionName", coerce::string),
            chamber_code: f.optional("chamberCode", coerce::string),
            chamber_name: f.optional("chamberName", coerce::string),
            update_date: f.optional("updateDate", coerce::timestamp),
        })
    }
}

/// A CRS summary of one version of a bill. `text` is HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub action_date: Option<NaiveDate>,
    pub action_desc: Option<String>,
    pub text: Option<String>,
    pub update_date: Option<DateTime<Utc>>,
    pub version_code: Option<String>,
}

impl FromJson for Summary {
    const ENTITY: &'static str = "Summary";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            action_date: f.optional("actionDate", coerce::date),
            action_desc: f.optional("actionDesc", coerce::string),
            text: f.optional("text", coerce::string),
            update_date: f.optional("updateDate", coerce::timestamp),
            version_code: f.optional("versionCode", coerce::string),
        })
    }
}

/// A published text version ("Introduced in House", "Enrolled Bill").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextVersion {
    pub date: Option<DateTime<Utc>>,
    pub version_type: Option<String>,
    pub formats: Option<Vec<TextFormat>>,
}

impl FromJson for TextVersion {
    const ENTITY: &'static str = "TextVersion";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            date: f.optional("date", coerce::timestamp),
            version_type: f.optional("type", coerce::string),
            formats: f.list("formats")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFormat {
    /// "Formatted Text", "PDF" or "Formatted XML".
    pub format_type: Option<String>,
    pub url: Option<String>,
}

impl FromJson for TextFormat {
    const ENTITY: &'static str = "TextFormat";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            format_type: f.optional("type", coerce::string),
            url: f.optional("url", coerce::string),
        })
    }
}

/// Legislative subject terms plus the bill's policy area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subjects {
    /// `None` when the response carried no subject list at all.
    pub legislative_subjects: Option<Vec<String>>,
    pub policy_area: Option<String>,
}

impl FromJson for Subjects {
    const ENTITY: &'static str = "Subjects";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            legislative_subjects: f.scalars("legislativeSubjects", coerce::named),
            policy_area: f.optional("policyArea", coerce::named),
        })
    }
}

/// Who identified a relationship between two bills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifyingEntity {
    House,
    Senate,
    /// Congressional Research Service.
    Crs,
    Other(String),
}

impl FromStr for IdentifyingEntity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "house" => IdentifyingEntity::House,
            "senate" => IdentifyingEntity::Senate,
            "crs" => IdentifyingEntity::Crs,
            _ => IdentifyingEntity::Other(s.trim().to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDetail {
    pub identified_by: Option<IdentifyingEntity>,
    /// "Related bill", "Identical bill", "Procedurally-related" and so on.
    pub relationship_type: Option<String>,
}

impl FromJson for RelationshipDetail {
    const ENTITY: &'static str = "RelationshipDetail";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            identified_by: f.optional("identifiedBy", coerce::parsed),
            relationship_type: f.optional("type", coerce::string),
        })
    }
}

/// Another bill linked to this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedBill {
    pub congress: u32,
    pub bill_type: BillType,
    pub number: u32,
    pub title: Option<String>,
    pub latest_action: Option<LatestAction>,
    pub relationship_details: Option<Vec<RelationshipDetail>>,
    pub url: Option<String>,
}

impl RelatedBill {
    pub fn id(&self) -> BillId {
        BillId::new(self.congress, self.bill_type, self.number)
    }
}

impl FromJson for RelatedBill {
    const ENTITY: &'static str = "RelatedBill";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            congress: f.required("congress", coerce::integer)?,
            bill_type: f.required("type", coerce::parsed)?,
            number: f.required("number", coerce::integer)?,
            title: f.optional("title", coerce::string),
            latest_action: f.nested("latestAction")?,
            relationship_details: f.list("relationshipDetails")?,
            url: f.optional("url", coerce::string),
        })
    }
}

/// A bill together with every sub-resource listed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDetails {
    pub bill: Bill,
    pub actions: Vec<Action>,
    pub amendments: Vec<Amendment>,
    pub committees: Vec<CommitteeMetadata>,
    pub cosponsors: Vec<Sponsor>,
    pub related_bills: Vec<RelatedBill>,
    pub subjects: Subjects,
    pub summaries: Vec<Summary>,
    pub text_versions: Vec<TextVersion>,
    pub titles: Vec<Title>,
}
