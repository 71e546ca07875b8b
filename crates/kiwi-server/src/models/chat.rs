//! Chat Models - `/run` request and response bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use kiwi::{DomainError, PetReply, Personality};

/// Chat request from the pet frontend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RunRequest {
    /// User message (may be empty)
    #[serde(default)]
    pub prompt: String,
    /// Personality id; unknown ids fall back to "Kiwi"
    #[serde(default = "default_personality")]
    #[schema(example = "Kiwi")]
    pub personality: String,
}

fn default_personality() -> String {
    Personality::default().id().to_string()
}

impl Default for RunRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            personality: default_personality(),
        }
    }
}

impl RunRequest {
    /// Validate and parse a raw request body.
    ///
    /// An empty body is `EmptyRequest`; anything that is not a JSON object
    /// of the expected shape is `MalformedRequest`.
    pub fn from_body(body: &[u8]) -> Result<Self, DomainError> {
        if body.is_empty() {
            return Err(DomainError::EmptyRequest);
        }
        serde_json::from_slice(body).map_err(DomainError::malformed)
    }
}

/// Chat response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RunResponse {
    /// Extracted reply text
    pub result: String,
    /// One of: joy, excited, sadness, anger, disgust, fear, surprise, love, shy, neutral
    #[schema(example = "joy")]
    pub emotion: String,
}

impl From<PetReply> for RunResponse {
    fn from(reply: PetReply) -> Self {
        Self {
            result: reply.reply,
            emotion: reply.emotion.to_string(),
        }
    }
}

/// Error payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
