use thiserror::Error;

/// Threshold used when neither the CLI nor the config sets one
pub const DEFAULT_MIN_CONFIDENCE: u8 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfidenceError {
    #[error("Confidence must be a number between 0 and 100, got '{0}'")]
    NotANumber(String),
    #[error("Confidence cannot exceed 100, got {0}")]
    AboveMaximum(i64),
    #[error("Confidence cannot be less than 0, got {0}")]
    BelowMinimum(i64),
}

/// Minimum confidence passed to vulture, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinConfidence(u8);

impl MinConfidence {
    /// Validate a user supplied threshold. `0` and `100` are accepted.
    pub fn parse(raw: &str) -> Result<Self, ConfidenceError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ConfidenceError::NotANumber(raw.to_string()))?;

        if value > 100 {
            return Err(ConfidenceError::AboveMaximum(value));
        }
        if value < 0 {
            return Err(ConfidenceError::BelowMinimum(value));
        }

        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Value handed to `--min-confidence`
    pub fn clamped(&self) -> u8 {
        self.0.clamp(0, 100)
    }
}

impl Default for MinConfidence {
    fn default() -> Self {
        Self(DEFAULT_MIN_CONFIDENCE)
    }
}

impl std::fmt::Display for MinConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
