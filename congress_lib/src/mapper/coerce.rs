//! Coercions from raw JSON values to typed field values.
//!
//! Each function returns `None` when the value cannot be read as the target
//! type. Callers decide whether that means "absent" or "malformed".

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Trimmed, non-empty text. Numbers are rendered as text.
pub fn string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integers from JSON numbers or numeric strings (`"3076"`).
pub fn integer<T: TryFrom<i64>>(v: &Value) -> Option<T> {
    let n = match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    T::try_from(n).ok()
}

/// Calendar dates. Accepts `YYYY-MM-DD` and the date part of a timestamp.
pub fn date(v: &Value) -> Option<NaiveDate> {
    let s = v.as_str()?.trim();
    let head = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Instants. Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` (read as UTC),
/// and bare dates (midnight UTC).
pub fn timestamp(v: &Value) -> Option<DateTime<Utc>> {
    let s = v.as_str()?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Booleans, including the API's `"Y"`/`"N"` flags.
pub fn flag(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Some(true),
            "n" | "no" | "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    }
}

/// Any `FromStr` type read from a string value (enumerations like `BillType`).
pub fn parsed<T: FromStr>(v: &Value) -> Option<T> {
    v.as_str().and_then(|s| s.trim().parse::<T>().ok())
}

/// The `name` of a `{"name": ...}` object, or a bare string.
pub fn named(v: &Value) -> Option<String> {
    match v {
        Value::Object(map) => map.get("name").and_then(string),
        other => string(other),
    }
}
