//! AnalysisPipeline — end-to-end orchestrator for one document.
//!
//! Runs both engines over the same input and packages the result the way
//! the surrounding writing-assistant application consumes it.

use serde::{Deserialize, Serialize};

use quill_core::config::AnalysisConfig;
use quill_core::traits::{ClassifierProvider, GrammarProvider};
use quill_core::types::{FormalityVerdict, FxHashMap, GrammarIssue};

use crate::formality::FormalityAnalyzer;
use crate::grammar::GrammarChecker;

/// Full per-document output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    pub formality: FormalityVerdict,
    pub grammar: Vec<GrammarIssue>,
    /// Issue totals per engine category (e.g. "GRAMMAR", "STYLE").
    pub category_counts: FxHashMap<String, u32>,
}

/// End-to-end analysis pipeline: formality verdict plus shaped grammar
/// issues for one document per call. No state is shared between the two
/// engines beyond the input text.
pub struct AnalysisPipeline {
    formality: FormalityAnalyzer,
    grammar: GrammarChecker,
}

impl AnalysisPipeline {
    /// Create with default configuration.
    pub fn new(
        classifier: Box<dyn ClassifierProvider>,
        grammar: Box<dyn GrammarProvider>,
    ) -> Self {
        Self::with_config(classifier, grammar, &AnalysisConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(
        classifier: Box<dyn ClassifierProvider>,
        grammar: Box<dyn GrammarProvider>,
        config: &AnalysisConfig,
    ) -> Self {
        Self {
            formality: FormalityAnalyzer::with_config(classifier, config),
            grammar: GrammarChecker::with_config(grammar, config),
        }
    }

    /// Analyze one document.
    pub fn analyze(&self, text: &str) -> TextReport {
        let formality = self.formality.check(text);
        let grammar = self.grammar.check(text);
        let category_counts = count_categories(&grammar);
        TextReport {
            formality,
            grammar,
            category_counts,
        }
    }

    /// The formality engine, for callers that only need one verdict.
    pub fn formality(&self) -> &FormalityAnalyzer {
        &self.formality
    }

    /// The grammar engine, for callers that only need issues.
    pub fn grammar(&self) -> &GrammarChecker {
        &self.grammar
    }
}

/// Issue totals per category.
fn count_categories(issues: &[GrammarIssue]) -> FxHashMap<String, u32> {
    let mut totals = FxHashMap::default();
    for issue in issues {
        *totals.entry(issue.category.clone()).or_insert(0) += 1;
    }
    totals
}
