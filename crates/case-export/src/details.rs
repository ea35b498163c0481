//! Labelled display entries for a single record.

use case_model::json::to_pretty_string;
use case_model::value::join_items;
use case_model::{FieldValue, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub label: String,
    pub value: String,
}

/// `first_name` -> `First Name`
pub fn display_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Display entries in field order. Falsy values are left out.
pub fn detail_entries(record: &Record) -> Vec<DetailEntry> {
    record
        .iter()
        .filter(|(_, value)| !value.is_falsy())
        .map(|(key, value)| DetailEntry {
            label: display_label(key),
            value: display_value(value),
        })
        .collect()
}

fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::List(items) => join_items(items, ", "),
        FieldValue::Map(map) => to_pretty_string(map).unwrap_or_default(),
        other => other.plain_text(),
    }
}
