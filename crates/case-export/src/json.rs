use case_model::Record;
use tracing::debug;

use crate::ExportOutcome;
use crate::error::Result;

/// Serialize records as a JSON array indented by two spaces, fields in
/// source order. Integral floats print without a fraction.
pub fn export_json(records: &[Record]) -> Result<ExportOutcome> {
    if records.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }
    let text = case_model::json::to_pretty_string(records)?;
    debug!(records = records.len(), bytes = text.len(), "encoded json document");
    Ok(ExportOutcome::Ready(text))
}
