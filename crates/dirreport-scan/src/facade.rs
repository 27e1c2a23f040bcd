//! Scan-and-render entry point.

use std::path::Path;

use thiserror::Error;
use tracing::warn;

use dirreport_core::{ExportError, ReportAdapter, ScanConfig, ScanError};

use crate::scanner::{JwalkScanner, ScanResult};

/// Errors from [`AnalyzerFacade::generate_report`].
#[derive(Debug, Error)]
pub enum FacadeError {
    /// The directory could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The adapter failed to render the report.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Scans a directory and renders the result with an injected adapter.
pub struct AnalyzerFacade {
    adapter: Box<dyn ReportAdapter>,
    scanner: JwalkScanner,
    scan_config: ScanConfig,
}

impl AnalyzerFacade {
    /// Create a facade rendering through `adapter` with default scan options.
    pub fn new(adapter: Box<dyn ReportAdapter>) -> Self {
        Self {
            adapter,
            scanner: JwalkScanner::new(),
            scan_config: ScanConfig::default(),
        }
    }

    /// Use these scan options. The root is replaced on every call.
    pub fn with_scan_config(mut self, config: ScanConfig) -> Self {
        self.scan_config = config;
        self
    }

    /// The adapter reports are rendered with.
    pub fn adapter(&self) -> &dyn ReportAdapter {
        self.adapter.as_ref()
    }

    /// Scan `dir_path` without rendering.
    pub fn scan(&self, dir_path: impl AsRef<Path>) -> Result<ScanResult, ScanError> {
        let config = self.scan_config.with_root(dir_path.as_ref());
        self.scanner.scan(&config)
    }

    /// Scan `dir_path` and render the report.
    pub fn generate_report(&self, dir_path: impl AsRef<Path>) -> Result<String, FacadeError> {
        let result = self.scan(dir_path)?;

        if !result.warnings.is_empty() {
            warn!(
                root = %result.root_path.display(),
                count = result.warnings.len(),
                "skipped unreadable entries during scan"
            );
        }

        Ok(self.adapter.export(&result.report)?)
    }
}

impl std::fmt::Debug for AnalyzerFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerFacade")
            .field("adapter", &self.adapter.name())
            .field("scan_config", &self.scan_config)
            .finish()
    }
}
