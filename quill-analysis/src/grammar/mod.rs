//! Grammar issue extraction — engine invocation and match shaping.

pub mod shaper;

pub use shaper::GrammarChecker;
