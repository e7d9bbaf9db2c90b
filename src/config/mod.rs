mod confidence;
mod loader;

pub use confidence::{ConfidenceError, MinConfidence, DEFAULT_MIN_CONFIDENCE};
pub use loader::{Config, FailurePolicy, HtmlConfig, PythonConfig, ToolsConfig};
