//! Prompt Composer
//!
//! Formats persona instruction and user prompt into completion-ready text:
//!
//! ```text
//! <instruction>
//! User: <prompt>
//! AI:
//! ```
//!
//! The prompt is inserted verbatim. This is a formatter, not a sanitizer.

use crate::domain::entities::ComposedPrompt;

/// Role tag that precedes the user's prompt
pub const USER_TAG: &str = "User: ";

/// Trailing anchor the oracle continues from
pub const ASSISTANT_ANCHOR: &str = "AI:";

/// Build the composed prompt for one request
pub fn compose(instruction: &str, prompt: &str) -> ComposedPrompt {
    ComposedPrompt::new(format!(
        "{instruction}\n{USER_TAG}{prompt}\n{ASSISTANT_ANCHOR}"
    ))
}
