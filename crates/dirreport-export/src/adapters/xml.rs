//! XML output.

use std::fmt::Write;

use dirreport_core::{DirectoryReport, ExportError, ReportAdapter};

/// Well-formed XML document with a `<report>` root.
///
/// Scalar metrics become text elements. Each extension is an
/// `<extension name="...">count</extension>` child of `<extensions>`, with
/// the name attribute-escaped. Tab, newline and carriage return are written
/// as character references so parsers do not normalize them to spaces.
///
/// A label holding a character XML 1.0 cannot carry at all (most C0
/// controls, U+FFFE, U+FFFF) is written as `hex="..."` instead of `name`:
/// the lowercase hex of the label's UTF-8 bytes, e.g. `.a\u{1}b` becomes
/// `<extension hex="2e610162">1</extension>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlReportAdapter;

impl ReportAdapter for XmlReportAdapter {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn export(&self, report: &DirectoryReport) -> Result<String, ExportError> {
        let mut out = String::new();
        render(&mut out, report).map_err(|e| ExportError::serialize(self.name(), e))?;
        Ok(out)
    }
}

fn render(out: &mut String, report: &DirectoryReport) -> std::fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, "<report>")?;
    writeln!(out, "  <files>{}</files>", report.files)?;
    writeln!(out, "  <directories>{}</directories>", report.directories)?;
    writeln!(out, "  <totalSize>{}</totalSize>", report.total_size)?;

    if report.extensions.is_empty() {
        writeln!(out, "  <extensions/>")?;
    } else {
        writeln!(out, "  <extensions>")?;
        for (ext, count) in &report.extensions {
            if ext.chars().all(is_xml_char) {
                writeln!(
                    out,
                    r#"    <extension name="{}">{count}</extension>"#,
                    escape_attr(ext)
                )?;
            } else {
                writeln!(
                    out,
                    r#"    <extension hex="{}">{count}</extension>"#,
                    hex_encode(ext)
                )?;
            }
        }
        writeln!(out, "  </extensions>")?;
    }

    write!(out, "</report>")
}

/// `Char` production of XML 1.0.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape a string for use inside a double-quoted attribute.
fn escape_attr(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn hex_encode(input: &str) -> String {
    input.bytes().fold(String::with_capacity(input.len() * 2), |mut acc, b| {
        let _ = write!(acc, "{b:02x}");
        acc
    })
}
