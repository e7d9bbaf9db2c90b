use super::ReportError;
use crate::finding::{group_by_file, Finding, ScanResults};
use colored::Colorize;
use std::io::{self, Write};

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, results: &ScanResults) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(results, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn render<W: Write>(&self, results: &ScanResults, out: &mut W) -> io::Result<()> {
        if results.is_empty() {
            writeln!(out, "{}", "✅ No dead code found!".green().bold())?;
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", "🔎 Dead Code Report:".bold())?;

        if results.has_js() {
            self.print_bucket(out, "JavaScript/TypeScript", results.js())?;
        }
        if results.has_py() {
            self.print_bucket(out, "Python", results.py())?;
        }

        Ok(())
    }

    fn print_bucket<W: Write>(&self, out: &mut W, label: &str, findings: &[Finding]) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            format!("❗ Found {} unused {} in {}:", findings.len(), items(findings.len()), label)
                .red()
                .bold()
        )?;

        for group in group_by_file(findings).iter() {
            writeln!(out)?;
            writeln!(out, "{}", format!("{}:", group.file).cyan().bold())?;
            for finding in &group.findings {
                self.print_item(out, finding)?;
            }
        }

        Ok(())
    }

    fn print_item<W: Write>(&self, out: &mut W, finding: &Finding) -> io::Result<()> {
        match finding.confidence() {
            Some(confidence) => writeln!(
                out,
                "  - {} (line {}, {}% confidence)",
                finding.symbol.yellow(),
                finding.line,
                confidence
            ),
            None => writeln!(out, "  - {} (line {})", finding.symbol.yellow(), finding.line),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn items(count: usize) -> &'static str {
    if count == 1 {
        "item"
    } else {
        "items"
    }
}
