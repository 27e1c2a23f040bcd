//! Format selection and report persistence.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use dirreport_scan::AnalyzerFacade;

use crate::config::ManagerConfig;
use crate::error::ReportError;
use crate::format::ReportFormat;
use crate::timestamp::{file_timestamp, report_file_name};

/// Binds one output format to the scanner and writes timestamped reports.
///
/// The format is resolved once at construction. Each call to
/// [`generate_report`](Self::generate_report) scans, renders and writes a
/// new `report-<timestamp>.<ext>` file. Two calls landing on the same
/// millisecond write to the same name and the later one wins.
#[derive(Debug)]
pub struct ReportManager {
    format: ReportFormat,
    output_dir: PathBuf,
    facade: AnalyzerFacade,
}

impl ReportManager {
    /// Build a manager writing to the default `reports` directory.
    pub fn new(format: &str) -> Result<Self, ReportError> {
        Self::with_config(format, ManagerConfig::default())
    }

    /// Build a JSON manager from an explicit configuration.
    pub fn from_config(config: ManagerConfig) -> Result<Self, ReportError> {
        Self::with_config(ReportFormat::default().extension(), config)
    }

    /// Build a manager from an explicit configuration.
    ///
    /// Fails with [`ReportError::UnsupportedFormat`] before touching the
    /// filesystem if `format` is not `json`, `csv` or `xml` (any case).
    pub fn with_config(format: &str, config: ManagerConfig) -> Result<Self, ReportError> {
        let format = ReportFormat::parse(format)?;
        ensure_dir(&config.output_dir)?;

        let facade = AnalyzerFacade::new(format.adapter()).with_scan_config(config.scan);
        debug!(%format, output_dir = %config.output_dir.display(), "report manager ready");

        Ok(Self {
            format,
            output_dir: config.output_dir,
            facade,
        })
    }

    /// Selected format.
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Extension of written files, without the dot.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// Directory reports are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Scan `dir_path` and write the report, logging the outcome.
    ///
    /// Failures are logged at error level and not returned. Use
    /// [`try_generate_report`](Self::try_generate_report) to observe them.
    pub fn generate_report(&self, dir_path: impl AsRef<Path>) {
        let dir_path = dir_path.as_ref();
        match self.try_generate_report(dir_path) {
            Ok(path) => info!(path = %path.display(), "Report generated successfully"),
            Err(err) => error!(dir = %dir_path.display(), "Error generating report: {err}"),
        }
    }

    /// Scan `dir_path`, write the report and return the written path.
    pub fn try_generate_report(&self, dir_path: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
        let content = self.facade.generate_report(dir_path)?;
        self.write_report(&content, Utc::now())
    }

    /// Write rendered content under the name derived from `instant`.
    fn write_report(&self, content: &str, instant: DateTime<Utc>) -> Result<PathBuf, ReportError> {
        let timestamp = file_timestamp(instant);
        let output_path = self
            .output_dir
            .join(report_file_name(&timestamp, self.extension()));

        // The directory may have been removed since construction.
        ensure_dir(&self.output_dir)?;
        fs::write(&output_path, content).map_err(|source| ReportError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(output_path)
    }
}

fn ensure_dir(path: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(path).map_err(|source| ReportError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
