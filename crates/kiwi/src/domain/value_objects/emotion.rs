//! Emotion - Coarse emotion label for a pet reply

use serde::{Deserialize, Serialize};

/// Emotion label shown by the pet frontend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Excited,
    Sadness,
    Anger,
    Disgust,
    Fear,
    Surprise,
    Love,
    Shy,
    #[default]
    Neutral,
}

/// Trigger substrings per emotion, in scan order.
///
/// Both the category order and the keyword order are significant: the
/// classifier returns the first category with any matching keyword.
/// Keywords are lowercase because they are matched against lowercased text.
pub const KEYWORD_TABLE: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy", "joy", "glad", "delight", "cheer", "smile", "smiling", "great", "good",
            "best", ":)", "*nod*", "friend",
        ],
    ),
    (
        Emotion::Excited,
        &[
            "excite",
            "thrill",
            "elate",
            "ecstatic",
            "overjoy",
            "enthusiastic",
            "pumped",
            "energize",
            "exhilarate",
            "amazing",
            "fantastic",
            "definitely",
            "yes",
            "^o^",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad",
            "unhappy",
            "down",
            "depress",
            "cry",
            "tears",
            "gloomy",
            "upset",
            "sorrow",
            "heartbroken",
            "miserable",
            "blue",
            "no",
            ":(",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry",
            "mad",
            "furious",
            "irritate",
            "annoy",
            "rage",
            "horrible",
            "terrible",
            "frustrate",
            "enrage",
            "livid",
            "d:<",
        ],
    ),
    (
        Emotion::Disgust,
        &[
            "disgust", "gross", "sick", "repulse", "nauseate", "yuck", "eww", "ugh",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "afraid",
            "scared",
            "fear",
            "terrified",
            "terrify",
            "nervous",
            "anxious",
            "scary",
            "horrified",
            "horrify",
            "frighten",
            "petrified",
            "petrify",
            "spook",
        ],
    ),
    (
        Emotion::Surprise,
        &[
            "surprise",
            "surprised",
            "amaze",
            "astonish",
            "shock",
            "wow",
            "unexpected",
            "unbelievable",
            "incredible",
        ],
    ),
    (
        Emotion::Love,
        &["love", "adore", "fond", "dear", "sweet", "heart", "<3"],
    ),
    (
        Emotion::Shy,
        &[
            "shy",
            "bashful",
            "timid",
            "reserved",
            "introvert",
            "self-conscious",
            "embarrassed",
            "blush",
            "nervous",
            "awkward",
            "hesitant",
            "sheepish",
            "quiet",
            "reticent",
            "withdrawn",
            "i don't know",
            "o///o",
        ],
    ),
];

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Excited => "excited",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Love => "love",
            Emotion::Shy => "shy",
            Emotion::Neutral => "neutral",
        }
    }

    /// Trigger keywords for this emotion (empty for `Neutral`)
    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORD_TABLE
            .iter()
            .find(|(emotion, _)| emotion == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "joy" => Ok(Emotion::Joy),
            "excited" => Ok(Emotion::Excited),
            "sadness" => Ok(Emotion::Sadness),
            "anger" => Ok(Emotion::Anger),
            "disgust" => Ok(Emotion::Disgust),
            "fear" => Ok(Emotion::Fear),
            "surprise" => Ok(Emotion::Surprise),
            "love" => Ok(Emotion::Love),
            "shy" => Ok(Emotion::Shy),
            "neutral" => Ok(Emotion::Neutral),
            _ => Err(format!("Unknown emotion: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_scan_order() {
        let order: Vec<Emotion> = KEYWORD_TABLE.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            order,
            vec![
                Emotion::Joy,
                Emotion::Excited,
                Emotion::Sadness,
                Emotion::Anger,
                Emotion::Disgust,
                Emotion::Fear,
                Emotion::Surprise,
                Emotion::Love,
                Emotion::Shy,
            ]
        );
    }

    #[test]
    fn test_every_category_has_lowercase_keywords() {
        for (emotion, keywords) in KEYWORD_TABLE {
            assert!(!keywords.is_empty(), "{emotion} has no keywords");
            for keyword in *keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_neutral_has_no_keywords() {
        assert!(Emotion::Neutral.keywords().is_empty());
        assert_eq!(Emotion::Love.keywords()[0], "love");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for (emotion, _) in KEYWORD_TABLE {
            assert_eq!(emotion.to_string().parse::<Emotion>(), Ok(*emotion));
        }
        assert_eq!("neutral".parse::<Emotion>(), Ok(Emotion::Neutral));
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Emotion::Sadness).unwrap(), "\"sadness\"");
    }
}
