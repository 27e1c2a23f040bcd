//! JWalk-based directory scanner.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use jwalk::{Parallelism, WalkDir};
use tracing::debug;

use dirreport_core::{DirectoryReport, ScanConfig, ScanError, ScanWarning, WarningKind};

/// Outcome of a single scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Aggregated statistics.
    pub report: DirectoryReport,
    /// Canonical root that was scanned.
    pub root_path: PathBuf,
    /// Entries that could not be read and were skipped.
    pub warnings: Vec<ScanWarning>,
    /// Wall-clock duration of the walk.
    pub scan_duration: Duration,
}

/// Scanner using jwalk for traversal.
#[derive(Debug, Default, Clone, Copy)]
pub struct JwalkScanner;

impl JwalkScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Perform a scan of the configured root.
    pub fn scan(&self, config: &ScanConfig) -> Result<ScanResult, ScanError> {
        let start = Instant::now();
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory { path: root_path });
        }

        let mut report = DirectoryReport::new();
        let mut warnings = Vec::new();
        self.walk(config, &root_path, &mut report, &mut warnings)?;

        let scan_duration = start.elapsed();
        debug!(
            root = %root_path.display(),
            files = report.files,
            directories = report.directories,
            warnings = warnings.len(),
            elapsed_ms = scan_duration.as_millis() as u64,
            "scan finished"
        );

        Ok(ScanResult {
            report,
            root_path,
            warnings,
            scan_duration,
        })
    }

    /// Walk the tree and fold every entry into the report.
    fn walk(
        &self,
        config: &ScanConfig,
        root_path: &Path,
        report: &mut DirectoryReport,
        warnings: &mut Vec<ScanWarning>,
    ) -> Result<(), ScanError> {
        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            1 => Parallelism::Serial,
            n => Parallelism::RayonNewPool(n),
        };

        let ignore = config.ignore_matcher()?;

        // Sorted so extension labels appear in a reproducible order.
        let walker = WalkDir::new(root_path)
            .parallelism(parallelism)
            .sort(true)
            .skip_hidden(!config.include_hidden)
            .follow_links(config.follow_symlinks)
            .min_depth(1)
            .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX))
            .process_read_dir(move |_depth, _path, _state, children| {
                // Pruning here keeps ignored directories from being read at all.
                children.retain(|child| match child {
                    Ok(entry) => !ignore.is_match(entry.file_name()),
                    Err(_) => true,
                });
            });

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    let warning = match err.io_error() {
                        Some(io) => ScanWarning::from_io(path, io),
                        None => ScanWarning::new(path, err.to_string(), WarningKind::ReadError),
                    };
                    warnings.push(warning);
                    continue;
                }
            };

            let file_type = entry.file_type();

            if file_type.is_dir() {
                report.record_dir();
            } else if file_type.is_file() {
                let path = entry.path();
                let metadata = match entry.metadata() {
                    Ok(m) => m,
                    Err(err) => {
                        warnings.push(ScanWarning::new(
                            &path,
                            err.to_string(),
                            WarningKind::MetadataError,
                        ));
                        continue;
                    }
                };

                let extension = path.extension().map(|e| e.to_string_lossy());
                report.record_file(metadata.len(), extension.as_deref());
            }
            // Unfollowed symlinks and special files fall in neither bucket.
        }

        Ok(())
    }
}
