//! Formality verdict types — the universal output of both scoring paths.

use serde::{Deserialize, Serialize};

/// Formality classification of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormalityLabel {
    Formal,
    Informal,
    /// Only produced for empty or whitespace-only input.
    Unknown,
}

impl FormalityLabel {
    /// Label name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Formal => "FORMAL",
            Self::Informal => "INFORMAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "FORMAL" => Some(Self::Formal),
            "INFORMAL" => Some(Self::Informal),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormalityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which engine produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    /// External probabilistic classifier.
    Model,
    /// Rule-based signal aggregation.
    Heuristic,
    /// No scoring ran (empty input).
    None,
}

impl ScoringMethod {
    /// Method name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Heuristic => "heuristic",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Signal breakdown computed by the heuristic scorer.
///
/// Present on every verdict with a non-empty input, including model-based
/// ones, so callers can always inspect the rule-level evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    /// Matched informal pattern occurrences.
    pub informal_signals: u32,
    /// Matched formal marker occurrences.
    pub formal_signals: u32,
    /// Mean words per sentence.
    pub avg_sentence_len: f64,
}

/// Result of scoring a piece of text for formality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalityVerdict {
    pub label: FormalityLabel,
    /// Confidence that `label` is correct, in [0,100].
    pub confidence: f64,
    /// Raw formality score in [0,100]; higher = more formal.
    pub score: f64,
    pub method: ScoringMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<SignalBreakdown>,
}

impl FormalityVerdict {
    /// Verdict for empty or whitespace-only input.
    pub fn unknown() -> Self {
        Self {
            label: FormalityLabel::Unknown,
            confidence: 0.0,
            score: 0.0,
            method: ScoringMethod::None,
            details: None,
        }
    }
}
