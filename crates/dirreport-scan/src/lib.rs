//! Directory scanning for dirreport.
//!
//! # Overview
//!
//! `dirreport-scan` walks a directory tree with jwalk and folds what it
//! finds into a [`DirectoryReport`]. The [`AnalyzerFacade`] pairs the
//! scanner with a [`ReportAdapter`] so callers go from a path to rendered
//! text in one call.
//!
//! # Example
//!
//! ```rust,no_run
//! use dirreport_scan::{JwalkScanner, ScanConfig};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let result = JwalkScanner::new().scan(&config).unwrap();
//!
//! println!("Total size: {} bytes", result.report.total_size);
//! println!("Total files: {}", result.report.files);
//! ```

mod facade;
mod scanner;

pub use facade::{AnalyzerFacade, FacadeError};
pub use scanner::{JwalkScanner, ScanResult};

// Re-export core types for convenience
pub use dirreport_core::{
    DirectoryReport, ExportError, ReportAdapter, ScanConfig, ScanError, ScanWarning, WarningKind,
};
