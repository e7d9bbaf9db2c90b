//! Golden-file and property tests for the analyzer output parsers
//!
//! Fixtures under tests/fixtures capture real ts-prune and vulture output,
//! including Windows separators, CRLF line endings and symbols with spaces.

use deadcode_detective::finding::{group_by_file, Finding, ScriptLanguage};
use deadcode_detective::parser::{PathScope, TsPruneParser, VultureParser};
use proptest::prelude::*;
use std::path::Path;

const TS_PRUNE_MIXED: &str = include_str!("../fixtures/ts_prune/mixed.txt");
const TS_PRUNE_CRLF: &str = include_str!("../fixtures/ts_prune/crlf.txt");
const VULTURE_PKG: &str = include_str!("../fixtures/vulture/pkg.txt");

fn scope(base: &str) -> PathScope {
    PathScope::new(Path::new("repo"), Path::new(base))
}

fn summary(findings: &[Finding]) -> Vec<(String, String, u32)> {
    findings
        .iter()
        .map(|f| (f.file.clone(), f.symbol.clone(), f.line))
        .collect()
}

// ============================================================================
// ts-prune
// ============================================================================

#[test]
fn test_ts_prune_golden_mixed() {
    let findings = TsPruneParser::new().parse(TS_PRUNE_MIXED, &scope("src"));

    let expected = vec![
        ("api/client.ts".to_string(), "createClient".to_string(), 14),
        ("api/client.ts".to_string(), "ClientOptions".to_string(), 3),
        ("index.ts".to_string(), "default (used in module)".to_string(), 1),
        ("components/Button.tsx".to_string(), "ButtonProps".to_string(), 22),
        ("legacy/util.js".to_string(), "formatDate".to_string(), 8),
        ("windows/paths.ts".to_string(), "fromWindows".to_string(), 9),
        ("rooted.ts".to_string(), "rootedExport".to_string(), 2),
    ];
    assert_eq!(summary(&findings), expected);

    let languages: Vec<_> = findings.iter().map(|f| f.language()).collect();
    assert_eq!(
        languages,
        vec![
            Some(ScriptLanguage::TypeScript),
            Some(ScriptLanguage::TypeScript),
            Some(ScriptLanguage::TypeScript),
            Some(ScriptLanguage::JavaScript),
            Some(ScriptLanguage::JavaScript),
            Some(ScriptLanguage::TypeScript),
            Some(ScriptLanguage::TypeScript),
        ]
    );
}

#[test]
fn test_ts_prune_golden_crlf() {
    let findings = TsPruneParser::new().parse(TS_PRUNE_CRLF, &scope("src"));
    assert_eq!(
        summary(&findings),
        vec![
            ("a.ts".to_string(), "fromCrlf".to_string(), 10),
            ("b.js".to_string(), "other".to_string(), 2),
        ]
    );
}

#[test]
fn test_ts_prune_nested_base() {
    let findings = TsPruneParser::new().parse(TS_PRUNE_MIXED, &scope("src/api"));
    assert_eq!(findings.len(), 2);
    assert!(findings.iter().all(|f| f.file == "client.ts"));
}

#[test]
fn test_ts_prune_single_finding() {
    let findings = TsPruneParser::new().parse("src/a.ts:10 - unusedFn\nFound 1 unused export", &scope("src"));
    assert_eq!(findings, vec![Finding::script("a.ts".into(), "unusedFn".into(), 10)]);
}

#[test]
fn test_no_paths_leak() {
    let findings = TsPruneParser::new().parse(TS_PRUNE_MIXED, &scope("src"));
    for f in &findings {
        assert!(!f.file.starts_with('/'), "absolute path leaked: {}", f.file);
        assert!(!f.file.contains('\\'), "backslash leaked: {}", f.file);
        assert!(!f.file.is_empty());
    }
}

// ============================================================================
// vulture
// ============================================================================

#[test]
fn test_vulture_golden_pkg() {
    let findings = VultureParser::new().parse(VULTURE_PKG, &scope("pkg"));

    let expected = vec![
        ("pkg/models.py".to_string(), "os".to_string(), 12),
        ("pkg/models.py".to_string(), "sys".to_string(), 3),
        ("pkg/views.py".to_string(), "render_legacy".to_string(), 40),
        ("pkg/win/helpers.py".to_string(), "tmp_value".to_string(), 5),
        ("pkg/service.py".to_string(), "get data".to_string(), 18),
        ("pkg/service.py".to_string(), "OldService".to_string(), 30),
    ];
    assert_eq!(summary(&findings), expected);

    let kinds: Vec<_> = findings.iter().map(|f| f.kind().unwrap_or_default()).collect();
    assert_eq!(
        kinds,
        vec![
            "unused import",
            "unused import",
            "unused function",
            "unused variable",
            "unused method",
            "unused class",
        ]
    );

    let confidences: Vec<_> = findings.iter().map(|f| f.confidence()).collect();
    assert_eq!(confidences, vec![Some(90), Some(90), Some(60), Some(60), Some(60), None]);
}

#[test]
fn test_vulture_single_finding() {
    let findings = VultureParser::new().parse(
        "pkg/b.py:5: unused function 'helper' (90% confidence)",
        &scope("pkg"),
    );
    assert_eq!(
        findings,
        vec![Finding::python(
            "pkg/b.py".into(),
            "helper".into(),
            5,
            "unused function".into(),
            Some(90)
        )]
    );
}

#[test]
fn test_vulture_whole_project_scope() {
    let findings = VultureParser::new().parse(VULTURE_PKG, &scope("."));
    // vendor/ is inside the working directory this time
    assert_eq!(findings.len(), 7);
    assert_eq!(findings[6].file, "vendor/lib.py");
}

// ============================================================================
// Properties
// ============================================================================

fn finding_strategy() -> impl Strategy<Value = Finding> {
    (
        prop::sample::select(vec!["a.ts", "b.js", "dir/c.ts", "dir/d.py"]),
        "[a-zA-Z_][a-zA-Z0-9_ ]{0,8}",
        0u32..20,
    )
        .prop_map(|(file, symbol, line)| Finding::script(file.to_string(), symbol, line))
}

proptest! {
    #[test]
    fn prop_ts_prune_parse_is_deterministic(lines in prop::collection::vec(".{0,40}", 0..20)) {
        let output = lines.join("\n");
        let parser = TsPruneParser::new();
        let first = parser.parse(&output, &scope("src"));
        let second = parser.parse(&output, &scope("src"));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_vulture_parse_is_deterministic(lines in prop::collection::vec(".{0,40}", 0..20)) {
        let output = lines.join("\n");
        let parser = VultureParser::new();
        let first = parser.parse(&output, &scope("pkg"));
        let second = parser.parse(&output, &scope("pkg"));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_ts_prune_lines_round_trip(
        entries in prop::collection::vec(("[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.(ts|js)", 1u32..10_000, "[A-Za-z_][A-Za-z0-9_]{0,12}"), 0..15)
    ) {
        let output: String = entries
            .iter()
            .map(|(file, line, symbol)| format!("src/{}:{} - {}\n", file, line, symbol))
            .collect();
        let findings = TsPruneParser::new().parse(&output, &scope("src"));

        prop_assert_eq!(findings.len(), entries.len());
        for (finding, (file, line, symbol)) in findings.iter().zip(&entries) {
            prop_assert_eq!(&finding.file, file);
            prop_assert_eq!(finding.line, *line);
            prop_assert_eq!(&finding.symbol, symbol);
        }
    }

    #[test]
    fn prop_grouping_is_stable_partition(findings in prop::collection::vec(finding_strategy(), 0..40)) {
        let grouped = group_by_file(&findings);

        prop_assert_eq!(grouped.len(), findings.len());

        for group in grouped.iter() {
            // every list sorted by line
            prop_assert!(group.findings.windows(2).all(|w| w[0].line <= w[1].line));

            // same-line findings keep input order
            let expected: Vec<&Finding> = {
                let mut same_file: Vec<&Finding> = findings.iter().filter(|f| f.file == group.file).collect();
                same_file.sort_by_key(|f| f.line);
                same_file
            };
            prop_assert_eq!(group.findings.len(), expected.len());
            for (got, want) in group.findings.iter().zip(&expected) {
                prop_assert!(std::ptr::eq(*got, *want));
            }
        }

        // files appear in first-seen order
        let mut first_seen: Vec<&str> = Vec::new();
        for f in &findings {
            if !first_seen.contains(&f.file.as_str()) {
                first_seen.push(&f.file);
            }
        }
        let files: Vec<&str> = grouped.iter().map(|g| g.file).collect();
        prop_assert_eq!(files, first_seen);
    }
}
