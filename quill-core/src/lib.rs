//! # quill-core
//!
//! Foundation crate for the Quill text analysis engine.
//! Defines result types, capability traits, errors, config, and tracing.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::AnalysisConfig;
pub use errors::capability_error::CapabilityError;
pub use errors::error_code::QuillErrorCode;
pub use traits::classify::{ClassLabel, ClassifierOutput, ClassifierProvider, TextClassifier};
pub use traits::grammar::{GrammarEngine, GrammarProvider, RawGrammarMatch};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::formality::{FormalityLabel, FormalityVerdict, ScoringMethod, SignalBreakdown};
pub use types::grammar::GrammarIssue;
