//! Configuration for the analysis engines.

pub mod analysis_config;

pub use analysis_config::AnalysisConfig;
