//! Supported output formats.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use dirreport_core::ReportAdapter;

use crate::adapters::{CsvReportAdapter, JsonReportAdapter, XmlReportAdapter};
use crate::error::ReportError;

/// Output format, selected once when a manager is built.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
    Xml,
}

impl ReportFormat {
    /// Resolve a case-insensitive selector such as `"JSON"` or `"csv"`.
    pub fn parse(selector: &str) -> Result<Self, ReportError> {
        Self::from_str(selector).map_err(|_| ReportError::UnsupportedFormat(selector.to_string()))
    }

    /// File extension for reports in this format, without the dot.
    pub fn extension(self) -> &'static str {
        self.into()
    }

    /// Adapter rendering this format.
    pub fn adapter(self) -> Box<dyn ReportAdapter> {
        match self {
            Self::Json => Box::new(JsonReportAdapter),
            Self::Csv => Box::new(CsvReportAdapter),
            Self::Xml => Box::new(XmlReportAdapter),
        }
    }
}
