//! Domain Entities
//!
//! Per-request values built by the response-shaping pipeline.
//! - ComposedPrompt: Text handed to the generation oracle
//! - PetReply: Extracted reply with its emotion label

mod composed_prompt;
mod pet_reply;

pub use composed_prompt::*;
pub use pet_reply::*;
