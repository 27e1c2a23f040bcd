//! CSV output.

use itertools::Itertools;

use dirreport_core::{DirectoryReport, ExportError, ReportAdapter};

/// Two tables separated by a blank line: metrics, then extension counts.
///
/// ```text
/// Metric,Value
/// Total Files,3
/// Total Directories,1
/// Total Size (bytes),1024
///
/// Extension,Count
/// .ts,2
/// .md,1
/// ```
///
/// Fields are written as-is with no quoting. An extension label containing
/// a comma or newline yields ambiguous output; such labels are not expected
/// from real file names and are left unescaped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReportAdapter;

impl ReportAdapter for CsvReportAdapter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn export(&self, report: &DirectoryReport) -> Result<String, ExportError> {
        let header = [
            "Metric,Value".to_string(),
            format!("Total Files,{}", report.files),
            format!("Total Directories,{}", report.directories),
            format!("Total Size (bytes),{}", report.total_size),
            String::new(),
            "Extension,Count".to_string(),
        ];

        let rows = report
            .extensions
            .iter()
            .map(|(ext, count)| format!("{ext},{count}"));

        Ok(header.into_iter().chain(rows).join("\n"))
    }
}
