use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination block attached to every list response.
///
/// `next` is an absolute URL carrying `offset` and `limit` query parameters;
/// it is absent on the last page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub count: Option<u64>,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl Pagination {
    /// Reads the `pagination` block from a response body, if it has one.
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("pagination")
            .and_then(|p| serde_json::from_value(p.clone()).ok())
    }
}

/// Echo of the request parameters the API attaches to responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    pub content_type: Option<String>,
    pub format: Option<String>,
    pub congress: Option<String>,
    pub bill_type: Option<String>,
    pub bill_number: Option<String>,
}

impl RequestInfo {
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("request")
            .and_then(|r| serde_json::from_value(r.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pagination_with_next() {
        let body = json!({
            "bills": [],
            "pagination": {
                "count": 12000,
                "next": "https://api.congress.gov/v3/bill?offset=250&limit=250&format=json"
            }
        });
        let p = Pagination::from_body(&body).unwrap();
        assert_eq!(p.count, Some(12000));
        assert!(p.next.unwrap().contains("offset=250"));
        assert!(p.prev.is_none());
    }

    #[test]
    fn missing_pagination_block() {
        let body = json!({"congress": {"number": 118}});
        assert!(Pagination::from_body(&body).is_none());
    }

    #[test]
    fn request_info_ignores_unknown_keys() {
        let body = json!({
            "request": {
                "billNumber": "3076",
                "billType": "hr",
                "congress": "117",
                "contentType": "application/json",
                "format": "json",
                "somethingNew": true
            }
        });
        let r = RequestInfo::from_body(&body).unwrap();
        assert_eq!(r.bill_number.as_deref(), Some("3076"));
        assert_eq!(r.bill_type.as_deref(), Some("hr"));
        assert_eq!(r.format.as_deref(), Some("json"));
    }
}
