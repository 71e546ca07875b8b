//! Domain Errors
//!
//! Error types for domain operations.
//!
//! An unknown personality and a reply without emotion keywords are not
//! errors; they resolve to `Personality::Kiwi` and `Emotion::Neutral`.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Empty request body")]
    EmptyRequest,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn generation<T: std::fmt::Display>(err: T) -> Self {
        Self::Generation(err.to_string())
    }

    pub fn malformed<T: std::fmt::Display>(err: T) -> Self {
        Self::MalformedRequest(err.to_string())
    }

    /// True for failures caused by the caller's request rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyRequest | Self::MalformedRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_message() {
        assert_eq!(DomainError::EmptyRequest.to_string(), "Empty request body");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::EmptyRequest.is_client_error());
        assert!(DomainError::malformed("expected value").is_client_error());
        assert!(!DomainError::generation("CUDA out of memory").is_client_error());
        assert!(!DomainError::Configuration("bad url".into()).is_client_error());
    }

    #[test]
    fn test_generation_wraps_source_message() {
        let err = DomainError::generation("timed out");
        assert_eq!(err.to_string(), "Generation failed: timed out");
    }
}
