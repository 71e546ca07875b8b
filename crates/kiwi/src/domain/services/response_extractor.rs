//! Response Extractor
//!
//! Oracles may or may not echo their input. The longest known prefix is
//! removed: the full composed prompt first, then the bare user prompt.
//! Prefix matches are exact and case-sensitive.

use crate::domain::entities::ComposedPrompt;

/// Isolate the newly generated reply from the oracle output
pub fn extract(generated: &str, composed: &ComposedPrompt, prompt: &str) -> String {
    let reply = generated
        .strip_prefix(composed.as_str())
        .or_else(|| generated.strip_prefix(prompt))
        .unwrap_or(generated);

    reply.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::compose;
    use crate::domain::value_objects::Personality;

    fn kiwi(prompt: &str) -> ComposedPrompt {
        compose(Personality::Kiwi.instruction(), prompt)
    }

    #[test]
    fn test_strips_composed_echo() {
        let composed = kiwi("hello");
        let generated = format!("{composed} Hiiii! I'm so happy!");
        assert_eq!(extract(&generated, &composed, "hello"), "Hiiii! I'm so happy!");
    }

    #[test]
    fn test_strips_bare_prompt_echo() {
        let composed = kiwi("hello");
        let generated = "hello   Meow meow!\n";
        assert_eq!(extract(generated, &composed, "hello"), "Meow meow!");
    }

    #[test]
    fn test_unrelated_output_only_trimmed() {
        let composed = kiwi("hello");
        let generated = "\n  Purr... a nap sounds nice.  ";
        assert_eq!(
            extract(generated, &composed, "hello"),
            "Purr... a nap sounds nice."
        );
    }

    #[test]
    fn test_composed_checked_before_prompt() {
        // The instruction itself begins with the user's text here, so both
        // prefixes match; only the longer one must be stripped.
        let prompt = "You are";
        let composed = compose("You are a parrot.", prompt);
        let generated = format!("{composed} Squawk!");
        assert_eq!(extract(&generated, &composed, prompt), "Squawk!");
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let composed = kiwi("hello");
        let generated = "HELLO there";
        assert_eq!(extract(generated, &composed, "hello"), "HELLO there");
    }

    #[test]
    fn test_empty_prompt_leaves_generated_intact() {
        let composed = kiwi("");
        assert_eq!(extract("  Hiii!  ", &composed, ""), "Hiii!");
    }

    #[test]
    fn test_echo_only_yields_empty_reply() {
        let composed = kiwi("hello");
        assert_eq!(extract(composed.as_str(), &composed, "hello"), "");
    }

    #[test]
    fn test_leading_whitespace_difference_is_not_an_echo() {
        let composed = kiwi("hello");
        let generated = format!(" {composed} Hi");
        let reply = extract(&generated, &composed, "hello");
        assert!(reply.starts_with("You are a happy"));
        assert!(reply.ends_with("AI: Hi"));
    }
}
