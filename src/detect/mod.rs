//! Runs the requested analyzers and collects their findings per bucket

use crate::config::{ConfidenceError, Config, FailurePolicy, MinConfidence};
use crate::finding::{Finding, ScanResults};
use crate::parser::{PathScope, TsPruneParser, VultureParser};
use crate::report::{ReportError, ReportFormat};
use crate::tools::{ToolOutput, ToolRunner};
use indicatif::ProgressBar;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const TS_PRUNE: &str = "ts-prune";
const VULTURE: &str = "vulture";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Confidence(#[from] ConfidenceError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("tsconfig.json not found at {}", .0.display())]
    MissingTsConfig(PathBuf),
    #[error("No command configured for {0}")]
    EmptyCommand(&'static str),
    #[error("{tool} error: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{tool} failed: {stderr}")]
    Failed { tool: &'static str, stderr: String },
    #[error("{tool} error: exited with {status} and no output")]
    Exited { tool: &'static str, status: String },
}

/// A scan as requested on the command line, not yet validated
#[derive(Debug, Clone, Default)]
pub struct ScanRequest {
    /// Directory to report ts-prune findings for
    pub js: Option<PathBuf>,
    /// Path handed to vulture
    pub py: Option<PathBuf>,
    /// Raw vulture threshold
    pub confidence: String,
    /// Raw output format selector
    pub format: String,
}

/// A validated scan request
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub js: Option<PathBuf>,
    pub py: Option<PathBuf>,
    pub confidence: MinConfidence,
    pub format: ReportFormat,
}

impl ScanRequest {
    /// Check the format and confidence before anything is spawned
    pub fn validate(self) -> Result<ScanPlan, ScanError> {
        let format: ReportFormat = self.format.parse()?;
        let confidence = MinConfidence::parse(&self.confidence)?;

        Ok(ScanPlan {
            js: self.js,
            py: self.py,
            confidence,
            format,
        })
    }
}

/// Runs ts-prune, then vulture, one after the other
pub struct Scanner<'a> {
    config: &'a Config,
    runner: &'a dyn ToolRunner,
    /// Working directory for the analyzers and for resolving their paths
    root: PathBuf,
    progress: ProgressBar,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn ToolRunner, root: PathBuf) -> Self {
        Self {
            config,
            runner,
            root,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn scan(&self, plan: &ScanPlan) -> Result<ScanResults, ScanError> {
        let mut results = ScanResults::default();

        if plan.js.is_none() && plan.py.is_none() {
            warn!("Nothing to scan: pass --js and/or --py");
        }

        if let Some(base) = &plan.js {
            self.progress.set_message("Scanning JavaScript/TypeScript files...");
            results.js = Some(self.scan_script(base)?);
        }

        if let Some(path) = &plan.py {
            self.progress.set_message("Scanning Python files...");
            results.py = Some(self.scan_python(path, plan.confidence)?);
        }

        Ok(results)
    }

    fn scan_script(&self, base: &Path) -> Result<Vec<Finding>, ScanError> {
        info!("Make sure `ts-prune` is installed (`npm install -g ts-prune`)");

        let tsconfig = &self.config.tools.tsconfig;
        let tsconfig_path = self.root.join(tsconfig);
        if !tsconfig_path.exists() {
            return Err(ScanError::MissingTsConfig(tsconfig_path));
        }

        let (program, mut args) = split_command(&self.config.tools.ts_prune, TS_PRUNE)?;
        args.push("-p".to_string());
        args.push(tsconfig.to_string_lossy().to_string());
        args.push("--error".to_string());

        let output = self
            .runner
            .run(program, &args, &self.root)
            .map_err(|source| ScanError::Spawn { tool: TS_PRUNE, source })?;

        let Some(stdout) = output.captured_stdout() else {
            return Err(tool_failure(TS_PRUNE, &output));
        };
        if !output.success {
            debug!("ts-prune exited with {:?}, parsing its findings", output.code);
        }

        let scope = PathScope::new(&self.root, base);
        let findings = TsPruneParser::new().parse(stdout, &scope);
        info!("ts-prune reported {} unused exports under {}", findings.len(), base.display());
        Ok(findings)
    }

    fn scan_python(&self, path: &Path, confidence: MinConfidence) -> Result<Vec<Finding>, ScanError> {
        info!("Make sure `vulture` is installed (`pip install vulture`)");

        let (program, mut args) = split_command(&self.config.tools.vulture, VULTURE)?;
        args.push(path.to_string_lossy().to_string());
        args.push("--min-confidence".to_string());
        args.push(confidence.clamped().to_string());

        let output = match self.runner.run(program, &args, &self.root) {
            Ok(output) => output,
            Err(source) => return self.python_fallback(ScanError::Spawn { tool: VULTURE, source }),
        };

        let Some(stdout) = output.captured_stdout() else {
            return self.python_fallback(tool_failure(VULTURE, &output));
        };
        if !output.success {
            debug!("vulture exited with {:?}, parsing its findings", output.code);
        }

        let scope = PathScope::new(&self.root, path);
        let findings = VultureParser::new().parse(stdout, &scope);
        info!("vulture reported {} unused symbols under {}", findings.len(), path.display());
        Ok(findings)
    }

    fn python_fallback(&self, error: ScanError) -> Result<Vec<Finding>, ScanError> {
        match self.config.python.on_failure {
            FailurePolicy::Fail => Err(error),
            FailurePolicy::Empty => {
                warn!("{}, returning empty results", error);
                Ok(Vec::new())
            }
        }
    }
}

/// Split a configured command into program and leading arguments
fn split_command<'c>(command: &'c [String], tool: &'static str) -> Result<(&'c str, Vec<String>), ScanError> {
    match command.split_first() {
        Some((program, rest)) if !program.trim().is_empty() => Ok((program.as_str(), rest.to_vec())),
        _ => Err(ScanError::EmptyCommand(tool)),
    }
}

fn tool_failure(tool: &'static str, output: &ToolOutput) -> ScanError {
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        let status = output
            .code
            .map(|c| format!("exit code {}", c))
            .unwrap_or_else(|| "a signal".to_string());
        ScanError::Exited { tool, status }
    } else {
        ScanError::Failed {
            tool,
            stderr: stderr.to_string(),
        }
    }
}
