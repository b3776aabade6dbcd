//! Projection of API JSON objects onto typed records.
//!
//! Each record type implements [`FromJson`] by reading its fields through a
//! [`Fields`] view: `required` for identity fields, `optional` for the rest,
//! and `nested`/`list` for sub-records. Every read names the JSON key and the
//! coercion applied to it. Keys the record does not ask for are ignored.
//!
//! Absent keys and `null` values map to `None`. A value that is present but
//! cannot be coerced maps to `None` too (logged at debug level), except on
//! identity fields, where it is a [`MalformedRecordError`].

pub mod coerce;

use serde_json::{Map, Value};

use crate::error::{MalformedReason, MalformedRecordError};

/// Keys tried, in order, when describing an object that failed to map.
const HINT_KEYS: &[&str] = &[
    "congress",
    "type",
    "number",
    "bioguideId",
    "Congress",
    "Volume",
    "Issue",
    "PublishDate",
    "Label",
    "Part",
    "systemCode",
    "name",
    "title",
];

/// A record that can be built from one JSON object.
pub trait FromJson: Sized {
    /// Record kind named in mapping errors.
    const ENTITY: &'static str;

    /// Builds the record from a validated object view.
    fn from_fields(fields: &Fields<'_>) -> Result<Self, MalformedRecordError>;

    /// Builds the record from a raw JSON value, which must be an object.
    fn from_json(value: &Value) -> Result<Self, MalformedRecordError> {
        Self::from_fields(&Fields::new(Self::ENTITY, value)?)
    }
}

/// Maps every element of `values`, preserving order. Stops at the first failure.
pub fn map_list<T: FromJson>(values: &[Value]) -> Result<Vec<T>, MalformedRecordError> {
    values.iter().map(T::from_json).collect()
}

/// Read-only view over one JSON object, bound to the record kind being built.
pub struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Fails if `value` is not a JSON object.
    pub fn new(entity: &'static str, value: &'a Value) -> Result<Self, MalformedRecordError> {
        match value.as_object() {
            Some(map) => Ok(Self { entity, map }),
            None => Err(MalformedRecordError {
                entity,
                key: "<root>".to_string(),
                reason: MalformedReason::Invalid,
                hint: format!("expected object, got {}", kind_of(value)),
            }),
        }
    }

    /// The raw value under `key`, with `null` treated as absent.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// An identity field. Absent or uncoercible values are errors.
    pub fn required<T>(
        &self,
        key: &str,
        coerce: fn(&Value) -> Option<T>,
    ) -> Result<T, MalformedRecordError> {
        let raw = self
            .value(key)
            .ok_or_else(|| self.malformed(key, MalformedReason::Missing))?;
        coerce(raw).ok_or_else(|| self.malformed(key, MalformedReason::Invalid))
    }

    /// A non-identity field. Absent or uncoercible values become `None`.
    pub fn optional<T>(&self, key: &str, coerce: fn(&Value) -> Option<T>) -> Option<T> {
        let raw = self.value(key)?;
        let out = coerce(raw);
        if out.is_none() {
            tracing::debug!(
                "{}: ignoring uncoercible `{}` ({})",
                self.entity,
                key,
                kind_of(raw)
            );
        }
        out
    }

    /// Like [`Fields::optional`], trying each alias in turn.
    pub fn first_of<T>(&self, keys: &[&str], coerce: fn(&Value) -> Option<T>) -> Option<T> {
        keys.iter().find_map(|key| self.optional(key, coerce))
    }

    /// A nested record. Absent maps to `None`; a present object must map cleanly.
    pub fn nested<T: FromJson>(&self, key: &str) -> Result<Option<T>, MalformedRecordError> {
        match self.value(key) {
            None => Ok(None),
            Some(v) if v.is_object() => T::from_json(v).map(Some),
            Some(v) => {
                tracing::debug!("{}: `{}` is not an object ({})", self.entity, key, kind_of(v));
                Ok(None)
            }
        }
    }

    /// An ordered list of nested records.
    ///
    /// Absent maps to `None`, which is distinct from an empty list. A single
    /// object where a list was expected is read as a one-element list.
    pub fn list<T: FromJson>(&self, key: &str) -> Result<Option<Vec<T>>, MalformedRecordError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Array(items)) => map_list(items).map(Some),
            Some(v @ Value::Object(_)) => T::from_json(v).map(|item| Some(vec![item])),
            Some(v) => {
                tracing::debug!("{}: `{}` is not a list ({})", self.entity, key, kind_of(v));
                Ok(None)
            }
        }
    }

    /// An ordered list of scalars, skipping elements that do not coerce.
    pub fn scalars<T>(&self, key: &str, coerce: fn(&Value) -> Option<T>) -> Option<Vec<T>> {
        match self.value(key)? {
            Value::Array(items) => Some(items.iter().filter_map(coerce).collect()),
            single => coerce(single).map(|v| vec![v]),
        }
    }

    /// Best-effort description of this object for error messages.
    pub fn hint(&self) -> String {
        identity_hint(self.map)
    }

    fn malformed(&self, key: &str, reason: MalformedReason) -> MalformedRecordError {
        MalformedRecordError {
            entity: self.entity,
            key: key.to_string(),
            reason,
            hint: self.hint(),
        }
    }
}

/// Describes an object by its `url`, else by its identity-like keys, else by
/// its first few keys.
pub fn identity_hint(map: &Map<String, Value>) -> String {
    if let Some(url) = map.get("url").and_then(Value::as_str) {
        return format!("url={}", url);
    }
    let parts: Vec<String> = HINT_KEYS
        .iter()
        .filter_map(|key| match map.get(*key) {
            Some(Value::String(s)) => Some(format!("{}={}", key, s)),
            Some(Value::Number(n)) => Some(format!("{}={}", key, n)),
            _ => None,
        })
        .collect();
    if !parts.is_empty() {
        return parts.join(", ");
    }
    if map.is_empty() {
        return "empty object".to_string();
    }
    let keys: Vec<&str> = map.keys().take(3).map(String::as_str).collect();
    format!("keys: {}", keys.join(", "))
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
