//! Case record export.
//!
//! This crate turns case search results into files:
//!
//! - **CSV**: one column per field name seen in any record, first-seen order
//! - **JSON**: the records as a pretty-printed array
//! - **Details**: labelled display entries for a single record
//!
//! Encoders are pure; [`write_export`] is the only function that touches the
//! filesystem.

pub mod details;
pub mod error;
mod file;
mod json;
mod tabular;

pub use details::{DetailEntry, detail_entries, display_label};
pub use error::{ExportError, Result};
pub use file::{
    ExportFormat, ExportReport, FILE_STEM, NO_DATA_MESSAGE, encode, export_file_name, today_utc,
    write_export,
};
pub use json::export_json;
pub use tabular::{
    CellPolicy, CsvDocument, LIST_SEPARATOR, TabularExporter, encode_cell, export_csv,
};

/// Result of an export: either output or a "nothing to export" signal.
///
/// Empty input is a normal outcome, not an error, so callers can show a
/// notice instead of writing an empty file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome<T = String> {
    Ready(T),
    NothingToExport,
}

impl<T> ExportOutcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NothingToExport)
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::NothingToExport => None,
        }
    }
}
