//! Chat Application Service (Use Case)
//!
//! One chat turn: resolve personality, compose, generate, extract, classify.
//! Stateless between calls; the only await point is the oracle call.

use std::sync::Arc;

use kiwi::{classify, compose, extract, DomainError, GenerationOracle, PetReply, Personality};

/// Application service for chat turns
#[derive(Clone)]
pub struct ChatService {
    oracle: Arc<dyn GenerationOracle>,
    max_new_tokens: u32,
}

impl ChatService {
    pub fn new(oracle: Arc<dyn GenerationOracle>, max_new_tokens: u32) -> Self {
        Self {
            oracle,
            max_new_tokens,
        }
    }

    pub fn oracle(&self) -> &dyn GenerationOracle {
        self.oracle.as_ref()
    }

    /// Produce a persona-styled reply and its emotion label.
    ///
    /// Oracle failures are returned unchanged; no fallback text is produced.
    pub async fn respond(&self, prompt: &str, personality: &str) -> Result<PetReply, DomainError> {
        let personality = Personality::resolve(personality);
        let composed = compose(personality.instruction(), prompt);

        tracing::debug!("Composed prompt for {} ({} bytes)", personality, composed.len());

        let generated = self
            .oracle
            .generate(composed.as_str(), self.max_new_tokens)
            .await?;

        let reply = extract(&generated, &composed, prompt);
        let emotion = classify(&reply);

        tracing::info!(
            "{} replied via {} ({}) - emotion: {}",
            personality,
            self.oracle.oracle_name(),
            self.oracle.model_id(),
            emotion
        );

        Ok(PetReply::new(reply, emotion, personality))
    }
}
