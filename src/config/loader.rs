use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::confidence::DEFAULT_MIN_CONFIDENCE;

/// Configuration for deadcode-detective
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default vulture threshold when `--confidence` is not given
    pub confidence: i64,

    /// Default output format when `--format` is not given: cli, html, json
    pub format: String,

    /// External analyzer commands
    pub tools: ToolsConfig,

    /// vulture specific behaviour
    pub python: PythonConfig,

    /// HTML report options
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Program and leading arguments used to run ts-prune
    pub ts_prune: Vec<String>,

    /// tsconfig passed to ts-prune, relative to the working directory
    pub tsconfig: PathBuf,

    /// Program and leading arguments used to run vulture
    pub vulture: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonConfig {
    /// What to do when vulture fails without printing anything
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// File written when `--format html` is used without `--output`.
    /// Unset means the document goes to stdout.
    pub default_output: Option<PathBuf>,
}

/// Handling of an analyzer run that failed and produced no stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the scan with the analyzer's error
    #[default]
    Fail,
    /// Log a warning and treat the analyzer as having found nothing
    Empty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence: i64::from(DEFAULT_MIN_CONFIDENCE),
            format: "cli".to_string(),
            tools: ToolsConfig::default(),
            python: PythonConfig::default(),
            html: HtmlConfig::default(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ts_prune: vec!["npx".to_string(), "ts-prune".to_string()],
            tsconfig: PathBuf::from("tsconfig.json"),
            vulture: vec!["vulture".to_string()],
        }
    }
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            on_failure: FailurePolicy::Fail,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".deadcode-detective.yml",
            ".deadcode-detective.yaml",
            ".deadcode-detective.toml",
            "deadcode-detective.yml",
            "deadcode-detective.yaml",
            "deadcode-detective.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }
}
