//! Parser for `vulture` output
//!
//! Format:
//! ```text
//! pkg/models.py:12: unused import 'os' (90% confidence)
//! pkg/views.py:40: unused function 'render_legacy' (60% confidence)
//! pkg/views.py:77: unreachable code after 'return' (100% confidence)
//! ```
//!
//! Only `unused <kind>` messages become findings.

use super::common::PathScope;
use crate::finding::Finding;
use regex::Regex;
use tracing::{debug, trace};

/// Message part of a vulture line: `unused <kind> '<symbol>' [(<N>% confidence)]`
pub const VULTURE_MESSAGE: &str = r"^(unused \w+)\s+'([^']+)'\s*(?:\((\d+)% confidence\))?";

/// Separates `<file>:<line>` from the message
const HEAD_SEPARATOR: &str = ": ";

pub struct VultureParser {
    message_pattern: Regex,
}

impl VultureParser {
    pub fn new() -> Self {
        Self {
            message_pattern: Regex::new(VULTURE_MESSAGE).expect("vulture message grammar is valid"),
        }
    }

    /// Parse raw vulture stdout, keeping only findings under the scope's base
    pub fn parse(&self, output: &str, scope: &PathScope) -> Vec<Finding> {
        let findings: Vec<Finding> = output
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| self.parse_line(line, scope))
            .collect();

        debug!("vulture: parsed {} findings", findings.len());
        findings
    }

    fn parse_line(&self, line: &str, scope: &PathScope) -> Option<Finding> {
        let (head, message) = line.split_once(HEAD_SEPARATOR)?;
        if head.is_empty() || message.is_empty() {
            return None;
        }

        let (raw_file, line_number) = split_head(head);

        let Some(caps) = self.message_pattern.captures(message) else {
            trace!("vulture: skipping unrecognized message {:?}", message);
            return None;
        };

        let Some(file) = scope.relative_to_root(raw_file) else {
            trace!("vulture: {} is outside {}", raw_file, scope.base().display());
            return None;
        };

        let kind = caps[1].to_string();
        let symbol = caps[2].to_string();
        // The grammar only captures digits, so a failed parse is an overflow
        let confidence = caps
            .get(3)
            .map(|m| m.as_str().parse::<u64>().map_or(100, |c| c.min(100)) as u8);

        Some(Finding::python(file, symbol, line_number, kind, confidence))
    }
}

impl Default for VultureParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `<file>:<line>` at the last colon so drive letters stay in the file
fn split_head(head: &str) -> (&str, u32) {
    match head.rsplit_once(':') {
        Some((file, line)) if !file.is_empty() => (file, line.trim().parse().unwrap_or(0)),
        _ => (head, 0),
    }
}
