//! Formality scoring — rule-based scorer plus classifier orchestration.

pub mod heuristic;
pub mod orchestrator;
pub mod signals;

pub use heuristic::HeuristicScorer;
pub use orchestrator::FormalityAnalyzer;
