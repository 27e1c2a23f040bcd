//! Report formats and persistence for dirreport.
//!
//! This crate provides the concrete [`ReportAdapter`] implementations and
//! the [`ReportManager`] that ties a format to the scanner and writes the
//! rendered report to disk:
//!
//! - **JSON** - pretty-printed, field names in camelCase
//! - **CSV** - metric table followed by an extension table
//! - **XML** - one element per metric, extensions as attributes
//!
//! ```rust,no_run
//! use dirreport_export::ReportManager;
//!
//! let manager = ReportManager::new("csv").unwrap();
//! manager.generate_report("/path/to/project");
//! ```
//!
//! Files land in `reports/report-<timestamp>.<ext>` by default. Use
//! [`ManagerConfig`] to pick another output directory or tune the scan.

mod adapters;
mod config;
mod error;
mod format;
mod manager;
mod timestamp;

pub use adapters::{CsvReportAdapter, JsonReportAdapter, XmlReportAdapter};
pub use config::{DEFAULT_OUTPUT_DIR, ManagerConfig, ManagerConfigBuilder};
pub use error::ReportError;
pub use format::ReportFormat;
pub use manager::ReportManager;
pub use timestamp::{file_timestamp, report_file_name};

// Re-export core types
pub use dirreport_core::{DirectoryReport, ReportAdapter, ScanConfig};
