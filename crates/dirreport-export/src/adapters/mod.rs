//! Concrete report adapters.

mod csv;
mod json;
mod xml;

pub use csv::CsvReportAdapter;
pub use json::JsonReportAdapter;
pub use xml::XmlReportAdapter;
