mod html;
mod json;
mod terminal;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::finding::ScanResults;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid format '{0}'. Expected one of: cli, html, json")]
    InvalidFormat(String),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to print report: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Cli,
    Html,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Cli => "cli",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cli" => Ok(ReportFormat::Cli),
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reporter for outputting aggregated findings
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    html_default_output: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
            html_default_output: None,
        }
    }

    /// File to write HTML reports to when no output path was requested
    pub fn with_html_default(mut self, path: Option<PathBuf>) -> Self {
        self.html_default_output = path;
        self
    }

    /// Where the report ends up, `None` for stdout
    pub fn destination(&self) -> Option<&Path> {
        match self.format {
            ReportFormat::Cli => None,
            ReportFormat::Json => self.output_path.as_deref(),
            ReportFormat::Html => self
                .output_path
                .as_deref()
                .or(self.html_default_output.as_deref()),
        }
    }

    /// Render the findings in the selected format
    pub fn report(&self, results: &ScanResults) -> Result<(), ReportError> {
        let destination = self.destination().map(Path::to_path_buf);

        match self.format {
            ReportFormat::Cli => {
                if let Some(path) = &self.output_path {
                    warn!("--output {} is ignored for cli output", path.display());
                }
                TerminalReporter::new().report(results)
            }
            ReportFormat::Json => JsonReporter::new(destination).report(results),
            ReportFormat::Html => HtmlReporter::new(destination).report(results),
        }
    }
}

/// Report generation time, e.g. `Wed, 14 Oct 2026 09:30:00 GMT`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Write `contents` to `path`, or print it when no path is given
fn emit(contents: &str, path: Option<&Path>, label: &str) -> Result<(), ReportError> {
    match path {
        Some(path) => {
            std::fs::write(path, contents).map_err(|source| ReportError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            println!("{} report saved to {}", label, path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}
