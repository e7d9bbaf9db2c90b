//! Report rendering tests
//!
//! These tests render findings through the public reporters and check the
//! documents they produce.

use chrono::{TimeZone, Utc};
use deadcode_detective::finding::{Finding, ScanResults};
use deadcode_detective::report::{HtmlReporter, JsonReporter, ReportFormat, Reporter, TerminalReporter};
use proptest::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn sample_results() -> ScanResults {
    ScanResults {
        js: Some(vec![
            Finding::script("b.ts".into(), "second".into(), 9),
            Finding::script("a.js".into(), "first".into(), 4),
            Finding::script("b.ts".into(), "early".into(), 1),
        ]),
        py: Some(vec![Finding::python(
            "pkg/b.py".into(),
            "helper".into(),
            5,
            "unused function".into(),
            Some(90),
        )]),
    }
}

#[test]
fn test_json_sorted_by_file_then_line() {
    let at = Utc.with_ymd_and_hms(2026, 10, 14, 8, 0, 0).unwrap();
    let json = JsonReporter::render(&sample_results(), &at).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let js: Vec<(String, u64)> = value["js"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| (item["file"].as_str().unwrap().to_string(), item["line"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        js,
        vec![("a.js".to_string(), 4), ("b.ts".to_string(), 1), ("b.ts".to_string(), 9)]
    );

    assert_eq!(value["py"][0]["type"], "unused function");
    assert_eq!(value["summary"]["totalDeadCode"], 4);
    assert_eq!(value["summary"]["timestamp"], "Wed, 14 Oct 2026 08:00:00 GMT");
}

#[test]
fn test_json_written_to_output_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    Reporter::new(ReportFormat::Json, Some(path.clone()))
        .report(&sample_results())
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["js"].as_array().unwrap().len(), 3);
    assert_eq!(value["py"].as_array().unwrap().len(), 1);
}

#[test]
fn test_html_written_to_output_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.html");

    Reporter::new(ReportFormat::Html, Some(path.clone()))
        .report(&sample_results())
        .unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Total Dead Code: 4"));
    assert!(html.contains("class=\"tabs\""));
    assert!(html.contains("<summary>b.ts (2 items)</summary>"));
    assert!(html.contains("<summary>pkg/b.py (1 item)</summary>"));
}

#[test]
fn test_html_default_output_from_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dead-code.html");

    Reporter::new(ReportFormat::Html, None)
        .with_html_default(Some(path.clone()))
        .report(&ScanResults::default())
        .unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("No dead code found!"));
}

#[test]
fn test_html_self_contained() {
    let at = Utc.with_ymd_and_hms(2026, 10, 14, 8, 0, 0).unwrap();
    let html = HtmlReporter::render(&sample_results(), &at);
    assert!(html.contains("<style>"));
    assert!(html.contains("<script>"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("src=\"http"));
    assert!(html.contains("Generated by Deadcode Detective"));
    assert!(html.contains("href=\"https://github.com/rathi-yash/Deadcode-Detective\""));
}

#[test]
fn test_terminal_empty_buckets() {
    colored::control::set_override(false);
    let results = ScanResults {
        js: Some(vec![]),
        py: Some(vec![]),
    };
    let mut buf = Vec::new();
    TerminalReporter::new().render(&results, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.trim(), "✅ No dead code found!");
}

#[test]
fn test_terminal_both_buckets() {
    colored::control::set_override(false);
    let mut buf = Vec::new();
    TerminalReporter::new().render(&sample_results(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let js = text.find("Found 3 unused items in JavaScript/TypeScript:").unwrap();
    let py = text.find("Found 1 unused item in Python:").unwrap();
    assert!(js < py);
    assert!(text.trim_end().ends_with("  - helper (line 5, 90% confidence)"));
}

fn results_strategy() -> impl Strategy<Value = ScanResults> {
    let js = prop::collection::vec(("[a-z]{1,5}\\.(ts|js)", "[a-zA-Z]{1,8}", 0u32..100), 0..10);
    let py = prop::collection::vec(
        ("[a-z]{1,5}\\.py", "[a-zA-Z]{1,8}", 0u32..100, prop::option::of(0u8..=100)),
        0..10,
    );
    (prop::option::of(js), prop::option::of(py)).prop_map(|(js, py)| ScanResults {
        js: js.map(|items| {
            items
                .into_iter()
                .map(|(file, symbol, line)| Finding::script(file, symbol, line))
                .collect()
        }),
        py: py.map(|items| {
            items
                .into_iter()
                .map(|(file, symbol, line, confidence)| {
                    Finding::python(file, symbol, line, "unused function".to_string(), confidence)
                })
                .collect()
        }),
    })
}

proptest! {
    #[test]
    fn prop_json_total_matches_buckets(results in results_strategy()) {
        let json = JsonReporter::render(&results, &Utc::now()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let js_len = value["js"].as_array().unwrap().len();
        let py_len = value["py"].as_array().unwrap().len();
        prop_assert_eq!(value["summary"]["totalDeadCode"].as_u64().unwrap() as usize, js_len + py_len);
        prop_assert_eq!(js_len + py_len, results.total());
    }
}
