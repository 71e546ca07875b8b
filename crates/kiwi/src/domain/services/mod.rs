//! Domain Services
//!
//! The response-shaping pipeline, one pure function per stage:
//! compose -> (oracle) -> extract -> classify.

mod emotion_classifier;
mod prompt_composer;
mod response_extractor;

pub use emotion_classifier::*;
pub use prompt_composer::*;
pub use response_extractor::*;
