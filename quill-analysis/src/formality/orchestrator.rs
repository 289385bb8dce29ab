//! Formality orchestration — classifier path with heuristic fallback.
//!
//! Acquisition runs at most once per analyzer lifetime; the outcome (handle
//! or unavailable) is terminal. A failed invocation only degrades the call
//! it happened on.

use std::sync::{Arc, OnceLock};

use quill_core::config::AnalysisConfig;
use quill_core::traits::{ClassLabel, ClassifierOutput, ClassifierProvider, TextClassifier};
use quill_core::types::{FormalityLabel, FormalityVerdict, ScoringMethod};

use super::heuristic::{round1, HeuristicScorer};

/// Formality analyzer: prefers the external classifier, falls back to the
/// heuristic scorer when the classifier is unavailable or fails.
pub struct FormalityAnalyzer {
    provider: Box<dyn ClassifierProvider>,
    classifier: OnceLock<Option<Arc<dyn TextClassifier>>>,
    scorer: HeuristicScorer,
    model_input_limit: usize,
    disable_model: bool,
}

impl FormalityAnalyzer {
    /// Create with default configuration.
    pub fn new(provider: Box<dyn ClassifierProvider>) -> Self {
        Self::with_config(provider, &AnalysisConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(provider: Box<dyn ClassifierProvider>, config: &AnalysisConfig) -> Self {
        Self {
            provider,
            classifier: OnceLock::new(),
            scorer: HeuristicScorer::new(),
            model_input_limit: config.effective_model_input_limit(),
            disable_model: config.effective_disable_model(),
        }
    }

    /// Check the formality of `text`.
    ///
    /// Never fails: degraded paths produce a heuristic verdict instead.
    pub fn check(&self, text: &str) -> FormalityVerdict {
        if text.trim().is_empty() {
            return FormalityVerdict::unknown();
        }

        if let Some(classifier) = self.classifier() {
            match classifier.classify(truncate_chars(text, self.model_input_limit)) {
                Ok(output) => return self.normalize(output, text),
                Err(e) => {
                    tracing::warn!(error = %e, "classifier invocation failed, using heuristic scorer");
                }
            }
        }

        self.scorer.score(text)
    }

    /// Memoized acquisition. The provider runs at most once, even under
    /// concurrent first calls; an acquisition failure pins the heuristic
    /// path for the analyzer's lifetime.
    fn classifier(&self) -> Option<&Arc<dyn TextClassifier>> {
        if self.disable_model {
            return None;
        }
        self.classifier
            .get_or_init(|| match self.provider.acquire() {
                Ok(handle) => {
                    tracing::info!("formality classifier ready");
                    Some(handle)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "formality classifier unavailable, using heuristic scorer");
                    None
                }
            })
            .as_ref()
    }

    /// Map raw classifier output onto the verdict scale shared with the
    /// heuristic path, keeping the heuristic signal breakdown as detail.
    fn normalize(&self, output: ClassifierOutput, text: &str) -> FormalityVerdict {
        let p = output.probability;
        // For the informal class the raw probability's meaning flips around
        // 0.5, so the confidence branch is asymmetric.
        let (label, confidence) = match output.label {
            ClassLabel::Informal if p > 0.5 => (FormalityLabel::Informal, (1.0 - p) * 100.0),
            ClassLabel::Informal => (FormalityLabel::Informal, p * 100.0),
            ClassLabel::Formal => (FormalityLabel::Formal, p * 100.0),
        };

        // The breakdown comes from the full untruncated text.
        let heuristic = self.scorer.score(text);

        FormalityVerdict {
            label,
            confidence: round1(confidence),
            score: round1(p * 100.0),
            method: ScoringMethod::Model,
            details: heuristic.details,
        }
    }
}

/// First `limit` characters of `text` (character positions, not bytes).
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("ab", 10), "ab");
        assert_eq!(truncate_chars("", 3), "");
    }
}
