//! Generation Oracle Port
//!
//! Abstract interface for text generation. The oracle receives the composed
//! prompt and returns a single continuation. Whether that continuation
//! echoes the input is implementation-defined; callers must tolerate both.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Generation budget used when a deployment does not configure one
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 100;

/// Text generation interface
///
/// Implementations are loaded once per process and shared between requests,
/// so they must be `Send + Sync` and must not hold per-request state.
///
/// # Example
///
/// ```rust,ignore
/// use kiwi::ports::GenerationOracle;
///
/// struct LocalModel { /* ... */ }
///
/// #[async_trait]
/// impl GenerationOracle for LocalModel {
///     async fn generate(&self, text: &str, max_new_tokens: u32) -> Result<String, DomainError> {
///         // Run inference, return the first candidate
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait GenerationOracle: Send + Sync {
    /// Generate a continuation of `text`, at most `max_new_tokens` long.
    ///
    /// Any failure (timeout, resource exhaustion, model error) is returned as
    /// `DomainError::Generation`. No partial output is returned.
    async fn generate(&self, text: &str, max_new_tokens: u32) -> Result<String, DomainError>;

    /// Get the oracle name (e.g., "http")
    fn oracle_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;

    /// Check if the oracle is available and healthy
    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(true)
    }
}
