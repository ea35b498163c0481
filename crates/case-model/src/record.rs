#![deny(unsafe_code)]

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::value::{FieldValue, json_kind};

/// One case entry: field names mapped to values, in source order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Value", into = "Map<String, Value>")]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. An existing field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder form of [`Record::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Text of a field, or `None` when absent or falsy.
    pub fn truthy_text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|value| !value.is_falsy())
            .map(FieldValue::plain_text)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(name, value)| (name, FieldValue::from(value)))
                .collect(),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(ModelError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record
            .fields
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect()
    }
}

/// Every field name across `records`, each once, in first-seen order.
pub fn header_union(records: &[Record]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut header = Vec::new();
    for record in records {
        for name in record.field_names() {
            if seen.insert(name) {
                header.push(name.to_string());
            }
        }
    }
    header
}

/// Parse a case payload: either an array of records or an object carrying
/// them under `cases`. A missing or null `cases` field is an empty result.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let document: Value = serde_json::from_str(json)?;
    match document {
        Value::Array(items) => items.into_iter().map(Record::try_from).collect(),
        Value::Object(mut map) => match map.remove("cases") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items.into_iter().map(Record::try_from).collect(),
            Some(other) => Err(ModelError::UnexpectedDocument {
                found: json_kind(&other),
            }),
        },
        other => Err(ModelError::UnexpectedDocument {
            found: json_kind(&other),
        }),
    }
}

/// Parse a search response body. Only the `cases` field carries records:
/// a body without it, or with a falsy `cases` (`null`, `false`, `0`, `""`),
/// is an empty result. A `null` body is rejected.
pub fn parse_response(json: &str) -> Result<Vec<Record>> {
    let document: Value = serde_json::from_str(json)?;
    match document {
        Value::Object(mut map) => match map.remove("cases") {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items.into_iter().map(Record::try_from).collect(),
            Some(cases) if FieldValue::from(cases.clone()).is_falsy() => Ok(Vec::new()),
            Some(other) => Err(ModelError::UnexpectedDocument {
                found: json_kind(&other),
            }),
        },
        Value::Null => Err(ModelError::UnexpectedDocument { found: "null" }),
        _ => Ok(Vec::new()),
    }
}
