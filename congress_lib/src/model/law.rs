use cdg_api::types::LawType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::BillId;
use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// A public or private law enacted from a bill.
///
/// The API reports law numbers as `"{congress}-{number}"` (`"117-108"`);
/// both halves are kept as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Law {
    pub congress: u32,
    pub law_type: LawType,
    pub number: u32,
    /// The bill this law was enacted from, when known.
    pub origin_bill: Option<BillId>,
}

impl Law {
    /// Attaches the originating bill.
    pub fn with_origin(mut self, bill: BillId) -> Self {
        self.origin_bill = Some(bill);
        self
    }
}

impl std::fmt::Display for Law {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}-{}", self.law_type, self.congress, self.number)
    }
}

impl FromJson for Law {
    const ENTITY: &'static str = "Law";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        let law_type = f.required("type", coerce::parsed)?;
        let (prefix, number) = f.required("number", law_number)?;
        let congress = match prefix {
            Some(c) => c,
            None => f.required("congress", coerce::integer)?,
        };
        Ok(Self {
            congress,
            law_type,
            number,
            origin_bill: None,
        })
    }
}

/// Splits `"117-108"` into `(Some(117), 108)`; a bare `"108"` or `108` has no prefix.
fn law_number(v: &Value) -> Option<(Option<u32>, u32)> {
    if let Some(n) = coerce::integer::<u32>(v) {
        return Some((None, n));
    }
    let s = v.as_str()?.trim();
    let (congress, number) = s.split_once('-')?;
    Some((
        Some(congress.trim().parse().ok()?),
        number.trim().parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;
    use serde_json::json;

    #[test]
    fn decomposes_law_number() {
        let law = Law::from_json(&json!({"number": "117-108", "type": "Public Law"})).unwrap();
        assert_eq!(law.congress, 117);
        assert_eq!(law.number, 108);
        assert_eq!(law.law_type, LawType::Public);
        assert_eq!(law.to_string(), "Public Law 117-108");
        assert!(law.origin_bill.is_none());
    }

    #[test]
    fn bare_number_takes_congress_field() {
        let law = Law::from_json(&json!({"congress": 116, "number": 5, "type": "Private Law"})).unwrap();
        assert_eq!((law.congress, law.number), (116, 5));
        assert_eq!(law.law_type, LawType::Private);
    }

    #[test]
    fn garbled_number_is_invalid() {
        let err = Law::from_json(&json!({"number": "117-x", "type": "Public Law"})).unwrap_err();
        assert_eq!(err.key, "number");
        assert_eq!(err.reason, MalformedReason::Invalid);
    }

    #[test]
    fn bare_number_without_congress_is_missing() {
        let err = Law::from_json(&json!({"number": "108", "type": "Public Law"})).unwrap_err();
        assert_eq!(err.key, "congress");
        assert_eq!(err.reason, MalformedReason::Missing);
    }
}
