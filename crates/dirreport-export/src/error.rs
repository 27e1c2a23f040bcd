//! Error types for report generation.

use std::path::PathBuf;

use thiserror::Error;

use dirreport_scan::FacadeError;

/// Errors raised by [`crate::ReportManager`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// The format selector matched none of the supported formats.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Scanning or rendering failed.
    #[error(transparent)]
    Facade(#[from] FacadeError),

    /// The output directory could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be written.
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
