//! Export file naming and writing.

use std::fs;
use std::path::{Path, PathBuf};

use case_model::Record;
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::ExportOutcome;
use crate::error::{ExportError, Result};
use crate::json::export_json;
use crate::tabular::{CellPolicy, TabularExporter};

/// File name stem shared by every export.
pub const FILE_STEM: &str = "cases_export";

/// Notice shown when there are no records to export.
pub const NO_DATA_MESSAGE: &str = "No data to export";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Notice shown after a successful export.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Csv => "Export successful!",
            Self::Json => "JSON export successful!",
        }
    }
}

/// A written export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub records: usize,
    pub bytes: usize,
}

/// `cases_export_<YYYY-MM-DD>.<ext>`
pub fn export_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{FILE_STEM}_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Today's date in UTC, used to stamp export file names.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Encode records in `format` without writing anything.
pub fn encode(
    format: ExportFormat,
    records: &[Record],
    policy: CellPolicy,
) -> Result<ExportOutcome> {
    match format {
        ExportFormat::Csv => Ok(TabularExporter::new(policy).export(records)),
        ExportFormat::Json => export_json(records),
    }
}

/// Encode records and write them to `dir`, creating it when missing.
///
/// Empty input writes nothing and yields [`ExportOutcome::NothingToExport`].
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    records: &[Record],
    policy: CellPolicy,
    date: NaiveDate,
) -> Result<ExportOutcome<ExportReport>> {
    let text = match encode(format, records, policy)? {
        ExportOutcome::Ready(text) => text,
        ExportOutcome::NothingToExport => {
            warn!(format = format.extension(), "{NO_DATA_MESSAGE}");
            return Ok(ExportOutcome::NothingToExport);
        }
    };
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(export_file_name(format, date));
    fs::write(&path, text.as_bytes()).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        records = records.len(),
        bytes = text.len(),
        "{}",
        format.success_message()
    );
    Ok(ExportOutcome::Ready(ExportReport {
        format,
        path,
        records: records.len(),
        bytes: text.len(),
    }))
}
