//! In-memory test doubles for the capability traits.
//!
//! Used by engine tests to avoid loading a real model or grammar engine.
//! Counters are handed out as shared `Arc<AtomicUsize>` so tests can keep
//! observing after the stub moves into an engine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::CapabilityError;

use super::classify::{ClassLabel, ClassifierOutput, ClassifierProvider, TextClassifier};
use super::grammar::{GrammarEngine, GrammarProvider, RawGrammarMatch};

/// Classifier stub returning a fixed output; records every input text.
pub struct StaticClassifier {
    label: ClassLabel,
    probability: f64,
    inputs: Mutex<Vec<String>>,
}

impl StaticClassifier {
    pub fn new(label: ClassLabel, probability: f64) -> Self {
        Self {
            label,
            probability,
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Texts passed to `classify`, in call order.
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

impl TextClassifier for StaticClassifier {
    fn classify(&self, text: &str) -> Result<ClassifierOutput, CapabilityError> {
        self.inputs.lock().unwrap().push(text.to_string());
        Ok(ClassifierOutput {
            label: self.label,
            probability: self.probability,
        })
    }
}

/// Classifier stub that fails every invocation; counts attempts.
pub struct FailingClassifier {
    calls: Arc<AtomicUsize>,
}

impl FailingClassifier {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared invocation counter.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl Default for FailingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TextClassifier for FailingClassifier {
    fn classify(&self, _text: &str) -> Result<ClassifierOutput, CapabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CapabilityError::Invocation {
            message: "inference failed".to_string(),
        })
    }
}

/// Provider handing out a pre-built classifier; counts acquisitions.
pub struct StubClassifierProvider {
    classifier: Arc<dyn TextClassifier>,
    acquisitions: Arc<AtomicUsize>,
}

impl StubClassifierProvider {
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self {
            classifier,
            acquisitions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared acquisition counter.
    pub fn acquisition_counter(&self) -> Arc<AtomicUsize> {
        self.acquisitions.clone()
    }
}

impl ClassifierProvider for StubClassifierProvider {
    fn acquire(&self) -> Result<Arc<dyn TextClassifier>, CapabilityError> {
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        Ok(self.classifier.clone())
    }
}

/// Provider that reports the classifier as unavailable; counts attempts.
pub struct UnavailableClassifierProvider {
    attempts: Arc<AtomicUsize>,
}

impl UnavailableClassifierProvider {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared attempt counter.
    pub fn attempt_counter(&self) -> Arc<AtomicUsize> {
        self.attempts.clone()
    }
}

impl Default for UnavailableClassifierProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierProvider for UnavailableClassifierProvider {
    fn acquire(&self) -> Result<Arc<dyn TextClassifier>, CapabilityError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CapabilityError::Unavailable {
            reason: "model not downloaded".to_string(),
        })
    }
}

/// Grammar engine stub returning fixed raw matches.
pub struct StaticGrammarEngine {
    matches: Vec<RawGrammarMatch>,
}

impl StaticGrammarEngine {
    pub fn new(matches: Vec<RawGrammarMatch>) -> Self {
        Self { matches }
    }
}

impl GrammarEngine for StaticGrammarEngine {
    fn check(&self, _text: &str) -> Result<Vec<RawGrammarMatch>, CapabilityError> {
        Ok(self.matches.clone())
    }
}

/// Grammar engine stub that fails every invocation.
pub struct FailingGrammarEngine;

impl GrammarEngine for FailingGrammarEngine {
    fn check(&self, _text: &str) -> Result<Vec<RawGrammarMatch>, CapabilityError> {
        Err(CapabilityError::Invocation {
            message: "engine crashed".to_string(),
        })
    }
}

/// Provider handing out a pre-built grammar engine; counts acquisitions.
pub struct StubGrammarProvider {
    engine: Arc<dyn GrammarEngine>,
    acquisitions: Arc<AtomicUsize>,
}

impl StubGrammarProvider {
    pub fn new(engine: Arc<dyn GrammarEngine>) -> Self {
        Self {
            engine,
            acquisitions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared acquisition counter.
    pub fn acquisition_counter(&self) -> Arc<AtomicUsize> {
        self.acquisitions.clone()
    }
}

impl GrammarProvider for StubGrammarProvider {
    fn acquire(&self) -> Result<Arc<dyn GrammarEngine>, CapabilityError> {
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        Ok(self.engine.clone())
    }
}

/// Provider that reports the grammar engine as unavailable; counts attempts.
pub struct UnavailableGrammarProvider {
    attempts: Arc<AtomicUsize>,
}

impl UnavailableGrammarProvider {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared attempt counter.
    pub fn attempt_counter(&self) -> Arc<AtomicUsize> {
        self.attempts.clone()
    }
}

impl Default for UnavailableGrammarProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarProvider for UnavailableGrammarProvider {
    fn acquire(&self) -> Result<Arc<dyn GrammarEngine>, CapabilityError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CapabilityError::Unavailable {
            reason: "grammar engine not installed".to_string(),
        })
    }
}

/// Convenience builder for raw matches in tests.
pub fn raw_match(rule_id: &str, offset: usize, length: usize) -> RawGrammarMatch {
    RawGrammarMatch {
        rule_id: rule_id.to_string(),
        message: format!("issue from {rule_id}"),
        context: String::new(),
        offset,
        length,
        replacements: Vec::new(),
        category: "GRAMMAR".to_string(),
    }
}
