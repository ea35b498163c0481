#![deny(unsafe_code)]

use serde_json::{Map, Number, Value};

/// A single field value of a case record.
///
/// Case payloads are schemaless JSON, so every shape a field can take is a
/// variant here and consumers match on it exhaustively.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<FieldValue>),
    Map(Map<String, Value>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True for null, `false`, zero and empty text.
    ///
    /// Empty lists and maps are not falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(flag) => !flag,
            Self::Number(number) => number.as_f64() == Some(0.0),
            Self::Text(text) => text.is_empty(),
            Self::List(_) | Self::Map(_) => false,
        }
    }

    /// Plain text rendering: lists join with `,`, maps become compact JSON.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(number) => number_text(number),
            Self::Text(text) => text.clone(),
            Self::List(items) => join_items(items, ","),
            Self::Map(map) => compact_json(map),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

/// Join list items by their plain text.
pub fn join_items(items: &[FieldValue], separator: &str) -> String {
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.plain_text());
    }
    out
}

/// Compact JSON text of a nested map, numbers printed as by [`number_text`].
pub fn compact_json(map: &Map<String, Value>) -> String {
    // Serializing a map of JSON values cannot fail.
    crate::json::to_compact_string(map).unwrap_or_default()
}

/// Render a number the way JSON producers print it: integral floats lose
/// their fraction, very large or very small magnitudes use an exponent.
pub fn number_text(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) => float_text(value),
        None => number.to_string(),
    }
}

pub(crate) fn float_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    // Shortest round-trip text; integral values print without a fraction.
    value.to_string()
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(map),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(flag) => Value::Bool(flag),
            FieldValue::Number(number) => Value::Number(number),
            FieldValue::Text(text) => Value::String(text),
            FieldValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            FieldValue::Map(map) => Value::Object(map),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(value: f64) -> Number {
        Number::from_f64(value).expect("finite")
    }

    #[test]
    fn integral_floats_drop_fraction() {
        assert_eq!(number_text(&float(2.0)), "2");
        assert_eq!(number_text(&float(-14.0)), "-14");
        assert_eq!(number_text(&float(1.5)), "1.5");
    }

    #[test]
    fn large_integral_floats_keep_shortest_digits() {
        assert_eq!(
            number_text(&float(1.234_567_890_123_456_8e20)),
            "123456789012345680000"
        );
        assert_eq!(number_text(&float(9_007_199_254_740_992.0)), "9007199254740992");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(number_text(&float(1e21)), "1e+21");
        assert_eq!(number_text(&float(1.5e-7)), "1.5e-7");
    }

    #[test]
    fn falsy_values() {
        assert!(FieldValue::Null.is_falsy());
        assert!(FieldValue::Bool(false).is_falsy());
        assert!(FieldValue::from(0_i64).is_falsy());
        assert!(FieldValue::Number(float(0.0)).is_falsy());
        assert!(FieldValue::text("").is_falsy());
        assert!(!FieldValue::text("0").is_falsy());
        assert!(!FieldValue::List(vec![]).is_falsy());
        assert!(!FieldValue::Map(Map::new()).is_falsy());
    }

    #[test]
    fn nested_map_numbers_match_top_level_text() {
        let value: FieldValue =
            serde_json::from_str(r#"{"r": 3.0, "big": 1.2345678901234567e20, "n": [2.0, 0.5]}"#)
                .expect("parse");
        assert_eq!(
            value.plain_text(),
            r#"{"r":3,"big":123456789012345680000,"n":[2,0.5]}"#
        );
    }

    #[test]
    fn nested_lists_join_with_comma() {
        let value = FieldValue::List(vec![
            FieldValue::text("a"),
            FieldValue::List(vec![FieldValue::from(1_i64), FieldValue::from(2_i64)]),
            FieldValue::Null,
        ]);
        assert_eq!(value.plain_text(), "a,1,2,");
    }
}
