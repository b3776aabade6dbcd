//! Bound Congressional Record issues and their section links.
//!
//! This endpoint uses PascalCase keys (`PublishDate`, `Links`, `PDF`) unlike
//! the rest of the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// One daily issue of the Congressional Record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundCongressionalRecord {
    pub publish_date: NaiveDate,
    pub volume: u32,
    pub issue: String,
    pub congress: Option<u32>,
    pub session: Option<u32>,
    pub id: Option<u64>,
    pub links: Option<CongressionalRecordLinkCollection>,
}

impl FromJson for BoundCongressionalRecord {
    const ENTITY: &'static str = "CongressionalRecord";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            publish_date: f.required("PublishDate", coerce::date)?,
            volume: f.required("Volume", coerce::integer)?,
            issue: f.required("Issue", coerce::string)?,
            congress: f.optional("Congress", coerce::integer),
            session: f.optional("Session", coerce::integer),
            id: f.optional("Id", coerce::integer),
            links: f.nested("Links")?,
        })
    }
}

/// The sections of an issue. Not every issue has every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongressionalRecordLinkCollection {
    pub digest: Option<CongressionalDigest>,
    pub full_record: Option<CongressionalDigest>,
    pub house: Option<CongressionalDigest>,
    pub senate: Option<CongressionalDigest>,
    pub remarks: Option<CongressionalDigest>,
}

impl FromJson for CongressionalRecordLinkCollection {
    const ENTITY: &'static str = "CongressionalRecordLinks";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            digest: f.nested("Digest")?,
            full_record: f.nested("FullRecord")?,
            house: f.nested("House")?,
            senate: f.nested("Senate")?,
            remarks: f.nested("Remarks")?,
        })
    }
}

/// One section of an issue with its PDF parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongressionalDigest {
    pub label: String,
    pub ordinal: Option<u32>,
    pub pdf: Option<Vec<CongressionalPDFLink>>,
}

impl FromJson for CongressionalDigest {
    const ENTITY: &'static str = "CongressionalRecordSection";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            label: f.required("Label", coerce::string)?,
            ordinal: f.optional("Ordinal", coerce::integer),
            pdf: f.list("PDF")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongressionalPDFLink {
    pub part: u32,
    pub url: String,
}

impl FromJson for CongressionalPDFLink {
    const ENTITY: &'static str = "CongressionalRecordPdf";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            part: f.required("Part", coerce::integer)?,
            url: f.required("Url", coerce::string)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_list;
    use serde_json::json;

    fn issue(date: &str, number: &str) -> serde_json::Value {
        json!({
            "Congress": "118",
            "Id": 26958,
            "Issue": number,
            "Links": {
                "Digest": {
                    "Label": "Daily Digest",
                    "Ordinal": 1,
                    "PDF": [{"Part": "1", "Url": "https://www.congress.gov/118/crec/2023/01/03/169/1/CREC-2023-01-03-dailydigest.pdf"}]
                },
                "Senate": {
                    "Label": "Senate Section",
                    "Ordinal": 2,
                    "PDF": [
                        {"Part": "1", "Url": "https://www.congress.gov/118/crec/2023/01/03/169/1/CREC-2023-01-03-senate-pt1.pdf"},
                        {"Part": "2", "Url": "https://www.congress.gov/118/crec/2023/01/03/169/1/CREC-2023-01-03-senate-pt2.pdf"}
                    ]
                }
            },
            "PublishDate": date,
            "Session": "1",
            "Volume": "169"
        })
    }

    #[test]
    fn maps_issue_with_sections() {
        let r = BoundCongressionalRecord::from_json(&issue("2023-01-03", "1")).unwrap();
        assert_eq!(r.publish_date, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
        assert_eq!(r.volume, 169);
        assert_eq!(r.congress, Some(118));
        let links = r.links.unwrap();
        assert!(links.house.is_none());
        let senate = links.senate.unwrap();
        assert_eq!(senate.label, "Senate Section");
        let pdf = senate.pdf.unwrap();
        assert_eq!(pdf.len(), 2);
        assert_eq!(pdf[1].part, 2);
    }

    #[test]
    fn pdf_without_url_fails() {
        let err = CongressionalPDFLink::from_json(&json!({"Part": "1"})).unwrap_err();
        assert_eq!(err.key, "Url");
        assert_eq!(err.hint, "Part=1");
    }

    #[test]
    fn distinct_issues_sharing_a_date_are_kept() {
        let records: Vec<BoundCongressionalRecord> =
            map_list(&[issue("2023-01-03", "1"), issue("2023-01-03", "1-A")]).unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].issue, records[1].issue);
    }
}
