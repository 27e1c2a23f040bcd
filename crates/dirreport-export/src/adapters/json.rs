//! JSON output.

use dirreport_core::{DirectoryReport, ExportError, ReportAdapter};

/// Pretty-printed JSON with two-space indentation.
///
/// Field names are `files`, `directories`, `totalSize` and `extensions`;
/// the output deserializes back into an equal [`DirectoryReport`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportAdapter;

impl ReportAdapter for JsonReportAdapter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, report: &DirectoryReport) -> Result<String, ExportError> {
        serde_json::to_string_pretty(report).map_err(|e| ExportError::serialize(self.name(), e))
    }
}
