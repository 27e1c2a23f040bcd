//! Aggregated directory statistics.

use compact_str::{CompactString, format_compact};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Summary of a single directory scan.
///
/// Built once by the scanner and handed to exactly one adapter. Extension
/// labels keep the leading dot (`.rs`, `.md`) and are stored in the order
/// they were first seen, so every export of the same report iterates them
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryReport {
    /// Number of regular files.
    pub files: u64,
    /// Number of directories below the scanned root.
    pub directories: u64,
    /// Sum of file sizes in bytes.
    pub total_size: u64,
    /// Extension label to number of files carrying it.
    #[serde(default)]
    pub extensions: IndexMap<CompactString, u64>,
}

impl DirectoryReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a regular file.
    ///
    /// `extension` is the raw extension without the dot, as returned by
    /// [`std::path::Path::extension`]. Files without one are counted but
    /// not tallied under any label.
    pub fn record_file(&mut self, size: u64, extension: Option<&str>) {
        self.files += 1;
        self.total_size += size;

        if let Some(ext) = extension {
            *self.extensions.entry(format_compact!(".{ext}")).or_insert(0) += 1;
        }
    }

    /// Record a subdirectory.
    pub fn record_dir(&mut self) {
        self.directories += 1;
    }

    /// Sum of all extension counts. Never exceeds `files`.
    pub fn extension_total(&self) -> u64 {
        self.extensions.values().sum()
    }

    /// Count for a single extension label, e.g. `".rs"`.
    pub fn extension_count(&self, label: &str) -> u64 {
        self.extensions.get(label).copied().unwrap_or(0)
    }
}
