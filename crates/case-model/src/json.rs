//! JSON text with numbers printed the same way as plain cell text.
//!
//! `serde_json` writes floats with a trailing `.0` when they are integral
//! (`3.0`), while cells print `3`. Nested maps and JSON exports go through
//! [`NumberTextFormatter`] so one value never prints two ways.

use std::io;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use crate::value::float_text;

/// Wraps a `serde_json` formatter and replaces its float output.
#[derive(Debug, Clone, Default)]
pub struct NumberTextFormatter<F> {
    inner: F,
}

impl<F> NumberTextFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for NumberTextFormatter<F> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_text(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_text(f64::from(value)).as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Single-line JSON, like `serde_json::to_string`.
pub fn to_compact_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    write_with(value, NumberTextFormatter::new(CompactFormatter))
}

/// JSON indented by two spaces, like `serde_json::to_string_pretty`.
pub fn to_pretty_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    write_with(value, NumberTextFormatter::new(PrettyFormatter::new()))
}

fn write_with<T, F>(value: &T, formatter: F) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
    F: Formatter,
{
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_output_prints_integral_floats_bare() {
        let value = json!({"r": 3.0, "half": 0.5, "ids": [1, 2.0]});
        assert_eq!(
            to_compact_string(&value).expect("json"),
            r#"{"r":3,"half":0.5,"ids":[1,2]}"#
        );
    }

    #[test]
    fn pretty_output_keeps_two_space_layout() {
        let value = json!([{"r": 3.0, "tiny": 1.5e-7}]);
        assert_eq!(
            to_pretty_string(&value).expect("json"),
            "[\n  {\n    \"r\": 3,\n    \"tiny\": 1.5e-7\n  }\n]"
        );
    }
}
