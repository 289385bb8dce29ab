//! Grammar checking capability seam.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::CapabilityError;

/// One raw match record as reported by the grammar engine.
///
/// `offset`/`length` are 0-based character positions into the checked text
/// (half-open span). The engine's own text fields are carried through
/// untouched; normalization happens in the shaper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGrammarMatch {
    pub rule_id: String,
    pub message: String,
    pub context: String,
    pub offset: usize,
    pub length: usize,
    pub replacements: Vec<String>,
    pub category: String,
}

/// A grammar engine handle. Immutable once acquired; concurrent calls are
/// safe.
pub trait GrammarEngine: Send + Sync {
    /// Check `text`, returning raw matches in document order.
    fn check(&self, text: &str) -> Result<Vec<RawGrammarMatch>, CapabilityError>;
}

/// Acquires the grammar engine. Called at most once per process; the outcome
/// is memoized either way.
pub trait GrammarProvider: Send + Sync {
    fn acquire(&self) -> Result<Arc<dyn GrammarEngine>, CapabilityError>;
}
