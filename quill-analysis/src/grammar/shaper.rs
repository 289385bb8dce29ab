//! Grammar issue shaping — filter spelling rules, normalize spans, cap
//! suggestions.
//!
//! Spelling is handled by a separate collaborator; matches from the
//! spelling-rule family never appear in output here.

use std::sync::{Arc, OnceLock};

use smallvec::SmallVec;

use quill_core::config::AnalysisConfig;
use quill_core::traits::{GrammarEngine, GrammarProvider, RawGrammarMatch};
use quill_core::types::GrammarIssue;

/// Grammar checker: invokes the external engine and shapes its raw matches
/// into `GrammarIssue` records. Engine failures surface as an empty list.
pub struct GrammarChecker {
    provider: Box<dyn GrammarProvider>,
    engine: OnceLock<Option<Arc<dyn GrammarEngine>>>,
    max_replacements: usize,
    spelling_rule_prefix: String,
}

impl GrammarChecker {
    /// Create with default configuration.
    pub fn new(provider: Box<dyn GrammarProvider>) -> Self {
        Self::with_config(provider, &AnalysisConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(provider: Box<dyn GrammarProvider>, config: &AnalysisConfig) -> Self {
        Self {
            provider,
            engine: OnceLock::new(),
            max_replacements: config.effective_max_replacements(),
            spelling_rule_prefix: config.effective_spelling_rule_prefix().to_string(),
        }
    }

    /// Check `text` for grammar issues, in engine document order.
    ///
    /// Never fails: an unavailable or failing engine yields an empty list.
    pub fn check(&self, text: &str) -> Vec<GrammarIssue> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let Some(engine) = self.engine() else {
            return Vec::new();
        };

        match engine.check(text) {
            Ok(matches) => self.shape(text, matches),
            Err(e) => {
                tracing::warn!(error = %e, "grammar engine invocation failed");
                Vec::new()
            }
        }
    }

    /// Memoized acquisition, same terminal-outcome rule as the formality
    /// analyzer's classifier handle.
    fn engine(&self) -> Option<&Arc<dyn GrammarEngine>> {
        self.engine
            .get_or_init(|| match self.provider.acquire() {
                Ok(handle) => {
                    tracing::info!("grammar engine ready");
                    Some(handle)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "grammar engine unavailable");
                    None
                }
            })
            .as_ref()
    }

    /// Drop spelling-family matches and normalize the rest.
    fn shape(&self, text: &str, matches: Vec<RawGrammarMatch>) -> Vec<GrammarIssue> {
        matches
            .into_iter()
            .filter(|m| !m.rule_id.starts_with(&self.spelling_rule_prefix))
            .map(|m| {
                // Re-slice from the original input rather than trusting any
                // text field the engine carries.
                let bad_word = char_slice(text, m.offset, m.offset + m.length);
                let replacements: SmallVec<[String; 3]> = m
                    .replacements
                    .into_iter()
                    .take(self.max_replacements)
                    .collect();
                GrammarIssue {
                    message: m.message,
                    context: m.context,
                    bad_word,
                    offset: m.offset,
                    length: m.length,
                    replacements,
                    rule_id: m.rule_id,
                    category: m.category,
                }
            })
            .collect()
    }
}

/// Substring of `text` at character positions `[start, end)`. Out-of-range
/// positions clamp to the end of the text.
fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_slice_basic() {
        assert_eq!(char_slice("hello world", 6, 11), "world");
    }

    #[test]
    fn test_char_slice_is_char_based() {
        assert_eq!(char_slice("héllo", 1, 3), "él");
    }

    #[test]
    fn test_char_slice_clamps_out_of_range() {
        assert_eq!(char_slice("abc", 2, 10), "c");
        assert_eq!(char_slice("abc", 5, 10), "");
        assert_eq!(char_slice("abc", 2, 1), "");
    }
}
