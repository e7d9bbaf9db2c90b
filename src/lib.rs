//! Deadcode Detective - one dead code report for TypeScript/JavaScript and Python
//!
//! This library runs `ts-prune` and `vulture`, normalizes their line-oriented
//! output into a single finding model and renders it as a terminal summary,
//! a self-contained HTML page or a JSON document.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! 1. **Validation** - Check the output format and vulture threshold
//! 2. **Analyzer runs** - ts-prune first, then vulture
//! 3. **Parsing** - Turn each tool's stdout into findings, dropping noise
//! 4. **Grouping** - Partition findings by file, sorted by line
//! 5. **Reporting** - Output results in the selected format

pub mod config;
pub mod detect;
pub mod finding;
pub mod parser;
pub mod report;
pub mod tools;

pub use config::{Config, FailurePolicy, MinConfidence};
pub use detect::{ScanError, ScanPlan, ScanRequest, Scanner};
pub use finding::{group_by_file, Finding, GroupedReport, Origin, ScanResults, ScriptLanguage};
pub use parser::{PathScope, TsPruneParser, VultureParser};
pub use report::{ReportError, ReportFormat, Reporter};
pub use tools::{SystemRunner, ToolOutput, ToolRunner};
