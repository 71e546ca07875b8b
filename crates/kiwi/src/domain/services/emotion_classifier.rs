//! Emotion Classifier
//!
//! Keyword scan over [`KEYWORD_TABLE`]. First category with any hit wins,
//! regardless of where in the text the keyword appears or how many other
//! categories also match. Matching is a plain substring test on the
//! lowercased reply, so keywords also match inside longer words.

use crate::domain::value_objects::{Emotion, KEYWORD_TABLE};

/// Label a reply by the first matching keyword category
pub fn classify(reply: &str) -> Emotion {
    let text = reply.to_lowercase();

    for (emotion, keywords) in KEYWORD_TABLE {
        if let Some(keyword) = keywords.iter().find(|k| text.contains(**k)) {
            tracing::debug!("Emotion {} matched on {:?}", emotion, keyword);
            return *emotion;
        }
    }

    Emotion::Neutral
}
