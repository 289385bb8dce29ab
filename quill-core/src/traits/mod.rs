//! Capability seams consumed by the analysis engine.

pub mod classify;
pub mod grammar;
pub mod test_helpers;

pub use classify::{ClassLabel, ClassifierOutput, ClassifierProvider, TextClassifier};
pub use grammar::{GrammarEngine, GrammarProvider, RawGrammarMatch};
