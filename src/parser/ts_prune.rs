//! Parser for `ts-prune` output
//!
//! ts-prune prints one unused export per line:
//!
//! ```text
//! src/api/client.ts:14 - createClient
//! src/index.ts:3 - default (used in module)
//! Found 2 unused exports
//! ```

use super::common::PathScope;
use crate::finding::Finding;
use regex::Regex;
use tracing::{debug, trace};

/// `<file>:<line> - <symbol>`; the file group is greedy so the last
/// `:<digits> - ` on the line separates file from symbol.
pub const TS_PRUNE_LINE: &str = r"^(.+):(\d+)\s+-\s+(.+)$";

/// Summary line ts-prune prints after the findings
const SUMMARY_PREFIX: &str = "Found";

pub struct TsPruneParser {
    line_pattern: Regex,
}

impl TsPruneParser {
    pub fn new() -> Self {
        Self {
            line_pattern: Regex::new(TS_PRUNE_LINE).expect("ts-prune line grammar is valid"),
        }
    }

    /// Parse raw ts-prune stdout, keeping only findings under the scope's base
    pub fn parse(&self, output: &str, scope: &PathScope) -> Vec<Finding> {
        let findings: Vec<Finding> = output
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty() && !line.starts_with(SUMMARY_PREFIX))
            .filter_map(|line| self.parse_line(line, scope))
            .collect();

        debug!("ts-prune: parsed {} findings", findings.len());
        findings
    }

    fn parse_line(&self, line: &str, scope: &PathScope) -> Option<Finding> {
        let Some(caps) = self.line_pattern.captures(line) else {
            trace!("ts-prune: skipping unrecognized line {:?}", line);
            return None;
        };

        let raw_file = &caps[1];
        let Some(file) = scope.relative_to_base(raw_file) else {
            trace!("ts-prune: {} is outside {}", raw_file, scope.base().display());
            return None;
        };

        let line_number = caps[2].parse::<u32>().unwrap_or(0);
        let symbol = caps[3].trim().to_string();

        Some(Finding::script(file, symbol, line_number))
    }
}

impl Default for TsPruneParser {
    fn default() -> Self {
        Self::new()
    }
}
