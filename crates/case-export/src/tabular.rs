//! CSV encoding for heterogeneous case records.

use std::borrow::Cow;
use std::fmt;

use case_model::value::join_items;
use case_model::{FieldValue, Record, header_union};
use tracing::debug;

use crate::ExportOutcome;

/// Separator for list cells. Never a comma, so lists stay unambiguous.
pub const LIST_SEPARATOR: &str = "; ";

/// How present-but-falsy values render in a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellPolicy {
    /// `0`, `false`, empty text and null render as an empty cell, the same
    /// as an absent field. Matches exports produced by the web client.
    #[default]
    Legacy,
    /// Only absent and null fields render empty; `0` and `false` are kept.
    Distinct,
}

/// An encoded CSV document: header plus one row per record.
///
/// All cells are already passed through [`encode_cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CsvDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.join(","))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join(","))?;
        }
        Ok(())
    }
}

/// Encodes record sequences as CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularExporter {
    policy: CellPolicy,
}

impl TabularExporter {
    pub fn new(policy: CellPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CellPolicy {
        self.policy
    }

    /// Build the CSV document, or `None` for empty input.
    pub fn document(&self, records: &[Record]) -> Option<CsvDocument> {
        if records.is_empty() {
            return None;
        }
        let header = header_union(records);
        let rows = records
            .iter()
            .map(|record| {
                header
                    .iter()
                    .map(|name| encode_cell(&self.cell_text(record.get(name))).into_owned())
                    .collect()
            })
            .collect();
        let header = header
            .iter()
            .map(|name| encode_cell(name).into_owned())
            .collect();
        Some(CsvDocument { header, rows })
    }

    pub fn export(&self, records: &[Record]) -> ExportOutcome {
        match self.document(records) {
            Some(document) => {
                debug!(
                    records = document.rows.len(),
                    columns = document.header.len(),
                    policy = ?self.policy,
                    "encoded csv document"
                );
                ExportOutcome::Ready(document.to_text())
            }
            None => ExportOutcome::NothingToExport,
        }
    }

    /// Unencoded text of one cell. `None` means the record lacks the field.
    pub fn cell_text(&self, value: Option<&FieldValue>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        if self.policy == CellPolicy::Legacy && value.is_falsy() {
            return String::new();
        }
        match value {
            FieldValue::List(items) => join_items(items, LIST_SEPARATOR),
            other => other.plain_text(),
        }
    }
}

/// CSV export with the default cell policy.
pub fn export_csv(records: &[Record]) -> ExportOutcome {
    TabularExporter::default().export(records)
}

/// Double every quote, then wrap in quotes when the text holds a comma or a
/// line feed.
pub fn encode_cell(text: &str) -> Cow<'_, str> {
    let escaped = if text.contains('"') {
        Cow::Owned(text.replace('"', "\"\""))
    } else {
        Cow::Borrowed(text)
    };
    if escaped.contains(',') || escaped.contains('\n') {
        Cow::Owned(format!("\"{escaped}\""))
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_quoted() {
        assert_eq!(encode_cell("Bo"), "Bo");
        assert_eq!(encode_cell(""), "");
    }

    #[test]
    fn comma_and_newline_force_quotes() {
        assert_eq!(encode_cell("Ann, A"), "\"Ann, A\"");
        assert_eq!(encode_cell("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn quotes_are_doubled_without_wrapping() {
        assert_eq!(encode_cell("say \"hi\""), "say \"\"hi\"\"");
        assert_eq!(encode_cell("a \"b\", c"), "\"a \"\"b\"\", c\"");
    }

    #[test]
    fn carriage_return_alone_does_not_quote() {
        assert_eq!(encode_cell("a\rb"), "a\rb");
    }

    #[test]
    fn absent_field_is_empty_under_both_policies() {
        assert_eq!(TabularExporter::new(CellPolicy::Legacy).cell_text(None), "");
        assert_eq!(TabularExporter::new(CellPolicy::Distinct).cell_text(None), "");
    }

    #[test]
    fn distinct_policy_keeps_zero_and_false() {
        let exporter = TabularExporter::new(CellPolicy::Distinct);
        assert_eq!(exporter.cell_text(Some(&FieldValue::from(0_i64))), "0");
        assert_eq!(exporter.cell_text(Some(&FieldValue::Bool(false))), "false");
        assert_eq!(exporter.cell_text(Some(&FieldValue::Null)), "");
    }
}
