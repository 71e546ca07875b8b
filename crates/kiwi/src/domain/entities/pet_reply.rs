//! PetReply - Final result of one chat turn

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Emotion, Personality};

/// Persona-styled reply and the emotion derived from its wording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetReply {
    pub reply: String,
    pub emotion: Emotion,
    /// Personality actually used after fallback resolution
    pub personality: Personality,
}

impl PetReply {
    pub fn new(reply: String, emotion: Emotion, personality: Personality) -> Self {
        Self {
            reply,
            emotion,
            personality,
        }
    }
}
