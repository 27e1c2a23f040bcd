use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use dirreport_export::{
    CsvReportAdapter, DirectoryReport, JsonReportAdapter, ManagerConfig, ReportAdapter,
    ReportError, ReportFormat, ReportManager, XmlReportAdapter,
};
use regex::Regex;
use tempfile::TempDir;

fn sample_report() -> DirectoryReport {
    let mut report = DirectoryReport::new();
    report.record_dir();
    report.record_file(1000, Some("ts"));
    report.record_file(20, Some("ts"));
    report.record_file(4, Some("md"));
    report
}

fn odd_report() -> DirectoryReport {
    let mut report = DirectoryReport::new();
    for _ in 0..4 {
        report.record_dir();
    }
    report.record_file(u64::MAX / 2, Some("a&b"));
    report.record_file(1, Some("<x>"));
    report.record_file(2, Some("q\"uote"));
    report.record_file(3, None);
    report
}

/// Labels from legal file names that XML treats specially.
fn control_char_report() -> DirectoryReport {
    let mut report = DirectoryReport::new();
    report.record_dir();
    report.record_file(10, Some("a\nb\tc"));
    report.record_file(20, Some("cr\rlf"));
    report.record_file(30, Some("a\u{1}b"));
    report.record_file(40, Some("x\u{1f}&<y>"));
    report.record_file(50, Some("  padded  "));
    report
}

fn adapters() -> Vec<Box<dyn ReportAdapter>> {
    vec![
        Box::new(JsonReportAdapter),
        Box::new(CsvReportAdapter),
        Box::new(XmlReportAdapter),
    ]
}

/// Parse the XML rendering back into a report with a real XML parser.
fn parse_xml(xml: &str) -> DirectoryReport {
    let doc = roxmltree::Document::parse(xml).expect("report is well-formed XML");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "report");

    let child = |tag: &str| {
        root.children()
            .find(|n| n.has_tag_name(tag))
            .unwrap_or_else(|| panic!("missing <{tag}>"))
    };
    let scalar = |tag: &str| -> u64 { child(tag).text().unwrap().parse().unwrap() };

    let mut report = DirectoryReport {
        files: scalar("files"),
        directories: scalar("directories"),
        total_size: scalar("totalSize"),
        ..DirectoryReport::default()
    };

    for ext in child("extensions").children().filter(|n| n.has_tag_name("extension")) {
        let label = match ext.attribute("name") {
            Some(name) => name.to_string(),
            None => decode_hex(ext.attribute("hex").expect("name or hex attribute")),
        };
        let count: u64 = ext.text().unwrap().parse().unwrap();
        report.extensions.insert(label.into(), count);
    }
    report
}

fn decode_hex(hex: &str) -> String {
    let bytes: Vec<u8> = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect();
    String::from_utf8(bytes).unwrap()
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn create_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("project");

    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/index.ts"), vec![b'a'; 1000]).unwrap();
    fs::write(root.join("src/util.ts"), vec![b'b'; 20]).unwrap();
    fs::write(root.join("README.md"), vec![b'c'; 4]).unwrap();

    temp
}

#[test]
fn test_adapters_are_deterministic() {
    for report in [
        sample_report(),
        odd_report(),
        control_char_report(),
        DirectoryReport::new(),
    ] {
        for adapter in adapters() {
            let first = adapter.export(&report).unwrap();
            let second = adapter.export(&report).unwrap();
            assert_eq!(first, second, "{} output changed between calls", adapter.name());
            assert!(!first.is_empty());
        }
    }
}

#[test]
fn test_csv_reference_example() {
    let csv = CsvReportAdapter.export(&sample_report()).unwrap();
    let expected = "Metric,Value
Total Files,3
Total Directories,1
Total Size (bytes),1024

Extension,Count
.ts,2
.md,1";
    assert_eq!(csv, expected);
}

#[test]
fn test_csv_line_count_tracks_extensions() {
    for report in [sample_report(), odd_report(), DirectoryReport::new()] {
        let csv = CsvReportAdapter.export(&report).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 6 + report.extensions.len());
        assert_eq!(lines[0], "Metric,Value");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Extension,Count");
    }
}

#[test]
fn test_json_roundtrip() {
    for report in [
        sample_report(),
        odd_report(),
        control_char_report(),
        DirectoryReport::new(),
    ] {
        let json = JsonReportAdapter.export(&report).unwrap();
        let parsed: DirectoryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}

#[test]
fn test_xml_roundtrip() {
    for report in [
        sample_report(),
        odd_report(),
        control_char_report(),
        DirectoryReport::new(),
    ] {
        let xml = XmlReportAdapter.export(&report).unwrap();
        assert_eq!(parse_xml(&xml), report);
    }
}

#[test]
fn test_xml_escapes_reserved_characters() {
    let xml = XmlReportAdapter.export(&odd_report()).unwrap();

    assert!(xml.contains(r#"name=".a&amp;b""#));
    assert!(xml.contains(r#"name=".&lt;x&gt;""#));
    assert!(xml.contains(r#"name=".q&quot;uote""#));
}

#[test]
fn test_xml_keeps_whitespace_and_encodes_control_characters() {
    let xml = XmlReportAdapter.export(&control_char_report()).unwrap();

    assert!(xml.contains(r#"name=".a&#10;b&#9;c""#));
    assert!(xml.contains(r#"name=".cr&#13;lf""#));
    assert!(xml.contains(r#"hex="2e610162""#));

    let parsed = parse_xml(&xml);
    assert_eq!(parsed.extension_count(".a\nb\tc"), 1);
    assert_eq!(parsed.extension_count(".a\u{1}b"), 1);
    assert_eq!(parsed.extension_count(".x\u{1f}&<y>"), 1);
    assert_eq!(parsed.extension_count(".  padded  "), 1);
}

#[test]
fn test_selector_case_picks_same_format() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("reports");

    for selector in ["JSON", "json", "Json"] {
        let manager = ReportManager::with_config(selector, ManagerConfig::new(&out)).unwrap();
        assert_eq!(manager.format(), ReportFormat::Json);
        assert_eq!(manager.extension(), "json");
    }
}

#[test]
fn test_unknown_selector_fails_construction() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("reports");

    let err = ReportManager::with_config("yaml", ManagerConfig::new(&out)).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported format: yaml");
}

#[test]
fn test_sequential_reports_get_distinct_files() {
    let temp = create_project();
    let out = temp.path().join("reports");
    let manager = ReportManager::with_config("csv", ManagerConfig::new(&out)).unwrap();

    let first = manager.try_generate_report(temp.path().join("project")).unwrap();
    thread::sleep(Duration::from_millis(10));
    let second = manager.try_generate_report(temp.path().join("project")).unwrap();

    assert_ne!(first, second);
    assert_eq!(files_in(&out).len(), 2);

    let name_re = Regex::new(r"^report-\d{4}-\d{2}-\d{2}T\d{2}-\d{2}-\d{2}-\d{3}Z\.csv$").unwrap();
    for name in files_in(&out) {
        assert!(name_re.is_match(&name), "unexpected file name {name}");
    }

    let content = fs::read_to_string(&second).unwrap();
    assert!(content.starts_with("Metric,Value\nTotal Files,3\nTotal Directories,1\n"));
    assert!(content.contains("Total Size (bytes),1024"));
}

#[test]
fn test_written_json_matches_scan() {
    let temp = create_project();
    let out = temp.path().join("reports");
    let manager = ReportManager::with_config("json", ManagerConfig::new(&out)).unwrap();

    let path = manager.try_generate_report(temp.path().join("project")).unwrap();
    assert_eq!(path.extension().unwrap(), "json");
    assert_eq!(path.parent().unwrap(), out.as_path());

    let parsed: DirectoryReport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, sample_report_with_order(&[(".md", 1), (".ts", 2)]));
}

#[test]
fn test_written_xml_matches_scan() {
    let temp = create_project();
    let out = temp.path().join("reports");
    let manager = ReportManager::with_config("XML", ManagerConfig::new(&out)).unwrap();

    let path = manager.try_generate_report(temp.path().join("project")).unwrap();
    let parsed = parse_xml(&fs::read_to_string(&path).unwrap());

    assert_eq!(parsed.files, 3);
    assert_eq!(parsed.directories, 1);
    assert_eq!(parsed.total_size, 1024);
    assert_eq!(parsed.extension_count(".ts"), 2);
}

#[test]
fn test_generate_report_swallows_scan_errors() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("reports");
    let manager = ReportManager::with_config("json", ManagerConfig::new(&out)).unwrap();

    // Returns normally and writes nothing.
    manager.generate_report(temp.path().join("does-not-exist"));
    assert!(files_in(&out).is_empty());

    let err = manager
        .try_generate_report(temp.path().join("does-not-exist"))
        .unwrap_err();
    assert!(matches!(err, ReportError::Facade(_)));
}

#[test]
fn test_output_dir_replaced_by_file() {
    let temp = create_project();
    let out = temp.path().join("reports");
    let manager = ReportManager::with_config("json", ManagerConfig::new(&out)).unwrap();

    fs::remove_dir(&out).unwrap();
    fs::write(&out, "not a directory").unwrap();

    // Returns normally and leaves the file untouched.
    manager.generate_report(temp.path().join("project"));
    assert!(out.is_file());
    assert_eq!(fs::read_to_string(&out).unwrap(), "not a directory");

    let err = manager
        .try_generate_report(temp.path().join("project"))
        .unwrap_err();
    assert!(matches!(err, ReportError::CreateDir { ref path, .. } if *path == out));
}

#[test]
fn test_generate_report_writes_file() {
    let temp = create_project();
    let out = temp.path().join("reports");
    let manager = ReportManager::with_config("csv", ManagerConfig::new(&out)).unwrap();

    manager.generate_report(temp.path().join("project"));
    assert_eq!(files_in(&out).len(), 1);
}

fn sample_report_with_order(extensions: &[(&str, u64)]) -> DirectoryReport {
    let mut report = DirectoryReport {
        files: 3,
        directories: 1,
        total_size: 1024,
        ..DirectoryReport::default()
    };
    for (ext, count) in extensions {
        report.extensions.insert((*ext).into(), *count);
    }
    report
}
