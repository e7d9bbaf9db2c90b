mod group;

pub use group::{group_by_file, FileGroup, GroupedReport};

use std::cmp::Ordering;

/// Language of a finding reported by ts-prune
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptLanguage {
    TypeScript,
    JavaScript,
}

impl ScriptLanguage {
    /// Derive the language from a (relative) file path.
    ///
    /// Only a `.ts` suffix counts as TypeScript; `.tsx`, `.js` and anything
    /// else is reported as JavaScript.
    pub fn from_path(file: &str) -> Self {
        if file.ends_with(".ts") {
            ScriptLanguage::TypeScript
        } else {
            ScriptLanguage::JavaScript
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptLanguage::TypeScript => "TS",
            ScriptLanguage::JavaScript => "JS",
        }
    }
}

impl std::fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Analyzer-specific data attached to a finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Reported by ts-prune
    Script { language: ScriptLanguage },
    /// Reported by vulture
    Python {
        /// Category such as "unused function" or "unused import"
        kind: String,
        /// Certainty in percent, when vulture printed one
        confidence: Option<u8>,
    },
}

/// One unused symbol reported by an external analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Forward-slash separated path, relative to the scan base
    pub file: String,

    /// Symbol name exactly as the analyzer printed it
    pub symbol: String,

    /// 1-based line number, `0` when the analyzer's value was unusable
    pub line: u32,

    pub origin: Origin,
}

impl Finding {
    pub fn script(file: String, symbol: String, line: u32) -> Self {
        let language = ScriptLanguage::from_path(&file);
        Self {
            file,
            symbol,
            line,
            origin: Origin::Script { language },
        }
    }

    pub fn python(file: String, symbol: String, line: u32, kind: String, confidence: Option<u8>) -> Self {
        Self {
            file,
            symbol,
            line,
            origin: Origin::Python { kind, confidence },
        }
    }

    /// Language tag, only for ts-prune findings
    pub fn language(&self) -> Option<ScriptLanguage> {
        match &self.origin {
            Origin::Script { language } => Some(*language),
            Origin::Python { .. } => None,
        }
    }

    /// Vulture category, only for Python findings
    pub fn kind(&self) -> Option<&str> {
        match &self.origin {
            Origin::Python { kind, .. } => Some(kind.as_str()),
            Origin::Script { .. } => None,
        }
    }

    /// Vulture confidence, only for Python findings that carried one
    pub fn confidence(&self) -> Option<u8> {
        match &self.origin {
            Origin::Python { confidence, .. } => *confidence,
            Origin::Script { .. } => None,
        }
    }

    /// Order by file, then line
    pub fn cmp_location(&self, other: &Self) -> Ordering {
        self.file
            .cmp(&other.file)
            .then_with(|| self.line.cmp(&other.line))
    }
}

/// Findings of one run, kept in one bucket per analyzer.
///
/// `None` means the analyzer was not requested, `Some` with an empty vector
/// means it ran and reported nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResults {
    /// ts-prune findings
    pub js: Option<Vec<Finding>>,
    /// vulture findings
    pub py: Option<Vec<Finding>>,
}

impl ScanResults {
    pub fn js(&self) -> &[Finding] {
        self.js.as_deref().unwrap_or_default()
    }

    pub fn py(&self) -> &[Finding] {
        self.py.as_deref().unwrap_or_default()
    }

    pub fn has_js(&self) -> bool {
        !self.js().is_empty()
    }

    pub fn has_py(&self) -> bool {
        !self.py().is_empty()
    }

    pub fn total(&self) -> usize {
        self.js().len() + self.py().len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
