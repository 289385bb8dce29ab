//! Stable machine-readable error codes.

/// Maps every error variant to a stable code string for the embedding
/// application. Codes never change once shipped; messages may.
pub trait QuillErrorCode {
    fn error_code(&self) -> &'static str;
}
