//! Report manager configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use dirreport_core::ScanConfig;

/// Directory reports are written to unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

/// Configuration for a [`crate::ReportManager`].
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ManagerConfig {
    /// Directory report files are written to. Created on demand.
    #[builder(default = "default_output_dir()")]
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Scan options applied to every report. The root is ignored.
    #[builder(default)]
    #[serde(default)]
    pub scan: ScanConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl ManagerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.output_dir {
            Some(ref dir) if dir.as_os_str().is_empty() => {
                Err("Output directory cannot be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl ManagerConfig {
    /// Create a new manager config builder.
    pub fn builder() -> ManagerConfigBuilder {
        ManagerConfigBuilder::default()
    }

    /// Default scan options, writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
