//! Capability boundary errors.

use super::error_code::QuillErrorCode;

/// Errors produced at the external capability boundary.
///
/// The analysis engines never propagate these to callers; they select a
/// fallback path instead. The variants exist so the decision logic can
/// pattern-match on failure classes rather than catching panics.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    /// Acquisition-time failure: the capability cannot be obtained at all
    /// (no model on disk, engine not installed). Terminal for the process.
    #[error("capability unavailable: {reason}")]
    Unavailable { reason: String },

    /// Call-time failure: the capability exists but one invocation failed.
    #[error("capability invocation failed: {message}")]
    Invocation { message: String },

    /// The capability rejected its input.
    #[error("invalid capability input: {message}")]
    InvalidInput { message: String },
}

impl QuillErrorCode for CapabilityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "CAPABILITY_UNAVAILABLE",
            Self::Invocation { .. } => "CAPABILITY_INVOCATION_FAILED",
            Self::InvalidInput { .. } => "CAPABILITY_INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = CapabilityError::Unavailable { reason: "offline".to_string() };
        assert_eq!(err.error_code(), "CAPABILITY_UNAVAILABLE");

        let err = CapabilityError::Invocation { message: "timeout".to_string() };
        assert_eq!(err.error_code(), "CAPABILITY_INVOCATION_FAILED");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = CapabilityError::Unavailable { reason: "no model".to_string() };
        assert!(err.to_string().contains("no model"));
    }
}
