//! Grammar issue record — one flagged span in the input text.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single grammar issue, shaped from a raw engine match.
///
/// `offset`/`length` are 0-based character positions into the original input
/// (half-open span). `bad_word` is always the exact substring of the input at
/// that span, never a text field copied from the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarIssue {
    /// Human-readable explanation.
    pub message: String,
    /// Surrounding text of the flagged span, as supplied by the engine.
    pub context: String,
    /// Exact substring of the input at `[offset, offset+length)`.
    pub bad_word: String,
    pub offset: usize,
    pub length: usize,
    /// Suggested corrections, at most 3, engine order preserved.
    pub replacements: SmallVec<[String; 3]>,
    /// Opaque engine rule identifier.
    pub rule_id: String,
    /// Coarse classification, e.g. "GRAMMAR" or "STYLE".
    pub category: String,
}
