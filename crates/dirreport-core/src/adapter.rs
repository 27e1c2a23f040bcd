//! Output format capability.

use crate::error::ExportError;
use crate::report::DirectoryReport;

/// Serializes a [`DirectoryReport`] into one textual format.
///
/// Implementations must be pure: no I/O, no interior state, and the same
/// report always renders to the same string. Every implementation renders
/// all four report fields without dropping or adding data, so adapters can
/// be swapped freely.
pub trait ReportAdapter: Send + Sync {
    /// Short name of the format, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Render the report.
    fn export(&self, report: &DirectoryReport) -> Result<String, ExportError>;
}

impl<T: ReportAdapter + ?Sized> ReportAdapter for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn export(&self, report: &DirectoryReport) -> Result<String, ExportError> {
        (**self).export(report)
    }
}
