// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One finished calculation. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub input: String,
    pub score: u64,
    pub is_prime: bool,
}

impl ScoreRecord {
    pub fn new(input: impl Into<String>, score: u64, is_prime: bool) -> Self {
        Self { input: input.into(), score, is_prime }
    }

    pub fn label(&self) -> PrimeLabel {
        PrimeLabel::from(self.is_prime)
    }

    /// `52 (Composite)`
    pub fn display_result(&self) -> String {
        format!("{} ({})", self.score, self.label())
    }

    /// `שלום → 52 (Composite)`
    pub fn log_line(&self) -> String {
        format!("{} → {} ({})", self.input, self.score, self.label())
    }
}

/// Human-readable primality label used in both export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimeLabel {
    Prime,
    Composite,
}

impl PrimeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimeLabel::Prime => "✅Prime!✅",
            PrimeLabel::Composite => "Composite",
        }
    }

    pub fn is_prime(&self) -> bool {
        matches!(self, PrimeLabel::Prime)
    }
}

impl From<bool> for PrimeLabel {
    fn from(is_prime: bool) -> Self {
        if is_prime { PrimeLabel::Prime } else { PrimeLabel::Composite }
    }
}

impl fmt::Display for PrimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown primality label: {0:?}")]
pub struct UnknownLabel(pub String);

impl FromStr for PrimeLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == PrimeLabel::Prime.as_str() {
            return Ok(PrimeLabel::Prime);
        }
        match trimmed.to_lowercase().as_str() {
            "prime" | "prime!" => Ok(PrimeLabel::Prime),
            "composite" => Ok(PrimeLabel::Composite),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}
