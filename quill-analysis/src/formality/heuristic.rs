//! Rule-based formality scorer — the deterministic fallback path.
//!
//! Behaves identically standalone and as the enrichment layer under the
//! model path. Empty input is the orchestrator's job; it never reaches here.

use quill_core::types::{FormalityLabel, FormalityVerdict, ScoringMethod, SignalBreakdown};

use super::signals;

const BASELINE: f64 = 50.0;
const INFORMAL_WEIGHT: f64 = 8.0;
const FORMAL_WEIGHT: f64 = 6.0;
const SENTENCE_LEN_PIVOT: f64 = 10.0;
const SENTENCE_LEN_WEIGHT: f64 = 1.5;
const SENTENCE_BONUS_CAP: f64 = 20.0;

/// Scores text against the fixed signal sets plus sentence-length statistics.
#[derive(Debug, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text`. Higher scores mean more formal.
    pub fn score(&self, text: &str) -> FormalityVerdict {
        let informal = signals::informal_hits(text);
        let formal = signals::formal_hits(text);
        let avg_sentence_len = avg_sentence_len(text);

        let mut score = BASELINE;
        score -= f64::from(informal) * INFORMAL_WEIGHT;
        score += f64::from(formal) * FORMAL_WEIGHT;
        // Longer sentences bump the score up, capped at +20; short sentences
        // pull it down without a floor.
        score += ((avg_sentence_len - SENTENCE_LEN_PIVOT) * SENTENCE_LEN_WEIGHT)
            .min(SENTENCE_BONUS_CAP);
        let score = score.clamp(0.0, 100.0);

        let label = if score >= BASELINE {
            FormalityLabel::Formal
        } else {
            FormalityLabel::Informal
        };
        let confidence = match label {
            FormalityLabel::Formal => score,
            _ => 100.0 - score,
        };

        FormalityVerdict {
            label,
            confidence: round1(confidence),
            score: round1(score),
            method: ScoringMethod::Heuristic,
            details: Some(SignalBreakdown {
                informal_signals: informal,
                formal_signals: formal,
                avg_sentence_len: round1(avg_sentence_len),
            }),
        }
    }
}

/// Mean words per sentence. Sentences split on runs of `.`, `!`, `?`;
/// whitespace-only fragments are dropped.
fn avg_sentence_len(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    total_words as f64 / sentences.len().max(1) as f64
}

/// Round to one decimal digit.
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
