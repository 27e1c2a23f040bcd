//! Core types and traits for dirreport.
//!
//! This crate provides the data structures shared across the dirreport
//! workspace: the aggregated [`DirectoryReport`], the [`ReportAdapter`]
//! capability implemented by every output format, scan configuration and
//! the error types.

mod adapter;
mod config;
mod error;
mod report;

pub use adapter::ReportAdapter;
pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{ExportError, ScanError, ScanWarning, WarningKind};
pub use report::DirectoryReport;
