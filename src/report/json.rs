use super::{emit, format_timestamp, ReportError};
use crate::finding::{Finding, Origin, ScanResults};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, results: &ScanResults) -> Result<(), ReportError> {
        let json = Self::render(results, &Utc::now())?;
        emit(&json, self.output_path.as_deref(), "JSON")
    }

    /// Pretty-printed document with 2-space indentation
    pub fn render(results: &ScanResults, generated_at: &DateTime<Utc>) -> Result<String, ReportError> {
        let report = JsonReport::from_results(results, generated_at);
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    js: Vec<JsonFinding<'a>>,
    py: Vec<JsonFinding<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    file: &'a str,
    symbol: &'a str,
    line: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total_dead_code: usize,
    timestamp: String,
}

impl<'a> JsonReport<'a> {
    fn from_results(results: &'a ScanResults, generated_at: &DateTime<Utc>) -> Self {
        Self {
            js: sorted(results.js()),
            py: sorted(results.py()),
            summary: JsonSummary {
                total_dead_code: results.total(),
                timestamp: format_timestamp(generated_at),
            },
        }
    }
}

/// Findings ordered by file, then line
fn sorted(findings: &[Finding]) -> Vec<JsonFinding<'_>> {
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    ordered.sort_by(|a, b| a.cmp_location(b));
    ordered.into_iter().map(JsonFinding::from).collect()
}

impl<'a> From<&'a Finding> for JsonFinding<'a> {
    fn from(finding: &'a Finding) -> Self {
        let (kind, confidence, language) = match &finding.origin {
            Origin::Script { language } => (None, None, Some(language.as_str())),
            Origin::Python { kind, confidence } => (Some(kind.as_str()), *confidence, None),
        };

        Self {
            file: &finding.file,
            symbol: &finding.symbol,
            line: finding.line,
            kind,
            confidence,
            language,
        }
    }
}
