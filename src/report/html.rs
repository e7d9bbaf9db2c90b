use super::{emit, format_timestamp, ReportError};
use crate::finding::{group_by_file, Finding, ScanResults};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

const TITLE: &str = "Deadcode Detective Report";

const REPOSITORY_URL: &str = "https://github.com/rathi-yash/Deadcode-Detective";
const PACKAGE_URL: &str = "https://www.npmjs.com/package/deadcode-detective";

const STYLE: &str = r#"
    body { font-family: Arial, Helvetica, sans-serif; background-color: #f0f0f0; color: #333333; margin: 30px; padding: 15px; line-height: 1.8; }
    h1 { color: #3498db; font-size: 20px; text-align: center; margin-bottom: 20px; }
    p { font-size: 16px; margin: 10px 0; text-align: center; padding: 10px; border-radius: 4px; }
    .clean { color: #2ecc71; }
    .dead { color: #e74c3c; }
    table { border-collapse: collapse; width: 100%; margin: 20px 0; box-shadow: 0 0 10px rgba(0, 0, 0, 0.1); }
    th, td { border: 1px solid #d3d3d3; padding: 15px; text-align: left; font-size: 16px; }
    th { background-color: #3498db; color: white; }
    tr:nth-child(even) { background-color: #ffffff; }
    tr:nth-child(odd) { background-color: #f7f7f7; }
    tr:hover { background-color: #e8e8e8; }
    .footer { text-align: center; color: #666666; font-size: 12px; margin-top: 20px; }
    .tabs { display: flex; margin-bottom: 20px; }
    .tab-button { flex: 1; padding: 10px; background-color: #f7f7f7; border: none; border-radius: 4px 4px 0 0; cursor: pointer; font-size: 16px; color: #3498db; margin-right: 5px; }
    .tab-button.active { background-color: #3498db; color: white; }
    .tab-button:hover:not(.active) { background-color: #e8e8e8; }
    .tab-content { display: none; padding: 10px; }
    .tab-content.active { display: block; }
    details { margin-bottom: 10px; }
    summary { cursor: pointer; padding: 10px; background-color: #f7f7f7; border-radius: 4px; font-weight: bold; color: #3498db; }
    summary:hover { background-color: #e8e8e8; }
    @media (max-width: 768px) {
      .tabs { flex-direction: column; }
      .tab-button { margin-right: 0; margin-bottom: 5px; border-radius: 4px; }
    }
"#;

const TAB_SCRIPT: &str = r#"
    document.addEventListener('DOMContentLoaded', () => {
      const tabs = document.querySelectorAll('.tab-button');
      const contents = document.querySelectorAll('.tab-content');
      tabs.forEach(tab => {
        tab.addEventListener('click', (e) => {
          e.preventDefault();
          tabs.forEach(t => t.classList.remove('active'));
          contents.forEach(c => c.classList.remove('active'));
          tab.classList.add('active');
          document.getElementById(tab.getAttribute('data-tab')).classList.add('active');
        });
      });
    });
"#;

/// Which analyzer a section of the page shows
#[derive(Clone, Copy)]
enum Bucket {
    Script,
    Python,
}

impl Bucket {
    fn tab_id(self) -> &'static str {
        match self {
            Bucket::Script => "js-tab",
            Bucket::Python => "py-tab",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Bucket::Script => "JavaScript/TypeScript",
            Bucket::Python => "Python",
        }
    }
}

/// Self-contained HTML report with inline styles and script
pub struct HtmlReporter {
    output_path: Option<PathBuf>,
}

impl HtmlReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, results: &ScanResults) -> Result<(), ReportError> {
        let html = Self::render(results, &Utc::now());
        emit(&html, self.output_path.as_deref(), "HTML")
    }

    pub fn render(results: &ScanResults, generated_at: &DateTime<Utc>) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("  <meta charset=\"UTF-8\">\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        out.push_str(&format!("  <title>{TITLE}</title>\n"));
        out.push_str(&format!("  <style>{STYLE}  </style>\n"));
        out.push_str(&format!("  <script>{TAB_SCRIPT}  </script>\n"));
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("  <h1>{TITLE}</h1>\n"));
        out.push_str(&format!(
            "  <p><strong>Total Dead Code: {}</strong></p>\n",
            results.total()
        ));

        match (results.has_js(), results.has_py()) {
            (true, true) => {
                out.push_str("  <div class=\"tabs\">\n");
                push_tab_button(&mut out, Bucket::Script, true);
                push_tab_button(&mut out, Bucket::Python, false);
                out.push_str("  </div>\n");
                push_tab_panel(&mut out, Bucket::Script, results.js(), true);
                push_tab_panel(&mut out, Bucket::Python, results.py(), false);
            }
            (true, false) => push_sections(&mut out, Bucket::Script, results.js()),
            (false, true) => push_sections(&mut out, Bucket::Python, results.py()),
            (false, false) => out.push_str("  <p class=\"clean\">✅ No dead code found!</p>\n"),
        }

        out.push_str(&format!(
            "  <div class=\"footer\">Generated by Deadcode Detective v{} | <a href=\"{}\">GitHub</a> | <a href=\"{}\">npm</a> | {}</div>\n",
            env!("CARGO_PKG_VERSION"),
            REPOSITORY_URL,
            PACKAGE_URL,
            format_timestamp(generated_at)
        ));
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn push_tab_button(out: &mut String, bucket: Bucket, active: bool) {
    let class = if active { "tab-button active" } else { "tab-button" };
    out.push_str(&format!(
        "    <button class=\"{}\" data-tab=\"{}\">{}</button>\n",
        class,
        bucket.tab_id(),
        bucket.label()
    ));
}

fn push_tab_panel(out: &mut String, bucket: Bucket, findings: &[Finding], active: bool) {
    let class = if active { "tab-content active" } else { "tab-content" };
    out.push_str(&format!("  <div id=\"{}\" class=\"{}\">\n", bucket.tab_id(), class));
    push_sections(out, bucket, findings);
    out.push_str("  </div>\n");
}

/// One collapsible section per file
fn push_sections(out: &mut String, bucket: Bucket, findings: &[Finding]) {
    for group in group_by_file(findings).iter() {
        let count = group.findings.len();
        out.push_str("  <details open>\n");
        out.push_str(&format!(
            "    <summary>{} ({} item{})</summary>\n",
            escape_html(group.file),
            count,
            if count == 1 { "" } else { "s" }
        ));
        out.push_str("    <table>\n");
        match bucket {
            Bucket::Script => out.push_str("      <tr><th>Symbol</th><th>Line</th><th>Language</th></tr>\n"),
            Bucket::Python => out.push_str(
                "      <tr><th>Symbol</th><th>Line</th><th>Language</th><th>Confidence (%)</th></tr>\n",
            ),
        }
        for finding in &group.findings {
            push_row(out, bucket, finding);
        }
        out.push_str("    </table>\n");
        out.push_str("  </details>\n");
    }
}

fn push_row(out: &mut String, bucket: Bucket, finding: &Finding) {
    out.push_str("      <tr>");
    out.push_str(&format!(
        "<td class=\"dead\">❗ {}</td><td>{}</td>",
        escape_html(&finding.symbol),
        finding.line
    ));
    match bucket {
        Bucket::Script => {
            let language = finding.language().map(|l| l.as_str()).unwrap_or("JS");
            out.push_str(&format!("<td>{}</td>", language));
        }
        Bucket::Python => {
            out.push_str("<td>Python</td>");
            match finding.confidence() {
                Some(confidence) => out.push_str(&format!("<td>{}%</td>", confidence)),
                None => out.push_str("<td>N/A</td>"),
            }
        }
    }
    out.push_str("</tr>\n");
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
