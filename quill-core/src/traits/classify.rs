//! Text classification capability seam.
//!
//! The concrete implementation (a pretrained formality model) lives outside
//! the workspace; the engine only sees this trait.

use std::sync::Arc;

use crate::errors::CapabilityError;

/// Two-valued class tag returned by the classifier.
///
/// Adapters for real models translate raw tags at this boundary
/// (class 0 → `Informal`, anything else → `Formal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    Informal,
    Formal,
}

/// Raw classifier output: a class tag and its probability in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOutput {
    pub label: ClassLabel,
    pub probability: f64,
}

/// A text classifier handle. Immutable once acquired; concurrent calls are
/// safe.
pub trait TextClassifier: Send + Sync {
    /// Classify `text`, returning a class tag and its probability.
    fn classify(&self, text: &str) -> Result<ClassifierOutput, CapabilityError>;
}

/// Acquires the classifier. Acquisition may be expensive (model load) and may
/// fail; the engine calls it at most once per process and memoizes the
/// outcome either way.
pub trait ClassifierProvider: Send + Sync {
    fn acquire(&self) -> Result<Arc<dyn TextClassifier>, CapabilityError>;
}
