//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the formality and grammar engines.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Target locale. Default: "en-US".
    pub locale: Option<String>,
    /// Characters of input passed to the classifier per call. Default: 1000
    /// (guards the underlying ~512-token model limit).
    pub model_input_limit: Option<usize>,
    /// Maximum suggested corrections kept per grammar issue. Default: 3.
    pub max_replacements: Option<usize>,
    /// Rule-id prefix of the spelling-rule family to exclude from grammar
    /// output. Default: "MORFOLOGIK_RULE".
    pub spelling_rule_prefix: Option<String>,
    /// Skip classifier acquisition entirely and always score heuristically.
    /// Default: false.
    pub disable_model: Option<bool>,
}

impl AnalysisConfig {
    /// Parse from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Returns the effective locale, defaulting to "en-US".
    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en-US")
    }

    /// Returns the effective classifier input limit, defaulting to 1000 chars.
    pub fn effective_model_input_limit(&self) -> usize {
        self.model_input_limit.unwrap_or(1000)
    }

    /// Returns the effective replacement cap, defaulting to 3.
    pub fn effective_max_replacements(&self) -> usize {
        self.max_replacements.unwrap_or(3)
    }

    /// Returns the effective spelling-rule prefix.
    pub fn effective_spelling_rule_prefix(&self) -> &str {
        self.spelling_rule_prefix.as_deref().unwrap_or("MORFOLOGIK_RULE")
    }

    /// Returns whether the model path is disabled, defaulting to false.
    pub fn effective_disable_model(&self) -> bool {
        self.disable_model.unwrap_or(false)
    }
}
