//! Filesystem-safe report names.

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO 8601 instant with millisecond precision, `:` and `.` replaced by `-`.
///
/// `2024-05-01T12:30:45.123Z` becomes `2024-05-01T12-30-45-123Z`.
pub fn file_timestamp(instant: DateTime<Utc>) -> String {
    instant
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// `report-<timestamp>.<extension>`
pub fn report_file_name(timestamp: &str, extension: &str) -> String {
    format!("report-{timestamp}.{extension}")
}
