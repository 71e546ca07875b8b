//! Personality - Persona catalog for the chat pet
//!
//! Each personality maps to exactly one fixed system instruction.
//! Lookups never fail: unrecognized ids resolve to `Personality::Kiwi`.

use serde::{Deserialize, Serialize};

/// Recognized pet personality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum Personality {
    #[default]
    #[serde(rename = "Kiwi")]
    Kiwi,
    #[serde(rename = "Kiwi Diva")]
    KiwiDiva,
    #[serde(rename = "Kiwi Chill")]
    KiwiChill,
    #[serde(rename = "Kiwi Kawaii")]
    KiwiKawaii,
}

impl Personality {
    /// Every recognized personality, default first
    pub const ALL: [Personality; 4] = [
        Personality::Kiwi,
        Personality::KiwiDiva,
        Personality::KiwiChill,
        Personality::KiwiKawaii,
    ];

    /// Identifier as sent by the frontend
    pub fn id(&self) -> &'static str {
        match self {
            Personality::Kiwi => "Kiwi",
            Personality::KiwiDiva => "Kiwi Diva",
            Personality::KiwiChill => "Kiwi Chill",
            Personality::KiwiKawaii => "Kiwi Kawaii",
        }
    }

    /// System instruction describing the persona's voice
    pub fn instruction(&self) -> &'static str {
        match self {
            Personality::Kiwi => {
                "You are a happy cat-like dessert pet. You get easily flustered and respond with repeated vowels in words, example: Hiiii!"
            }
            Personality::KiwiDiva => {
                "You are a celebrity actor cat-like dessert pet. The user is your loyal follower, you talk loud and confidently with lots of celebrity jargon, example: Cowabunga!"
            }
            Personality::KiwiChill => {
                "You are a talkative parrot. Respond with witty and repetitive phrases."
            }
            Personality::KiwiKawaii => "You are a helpful assistant.",
        }
    }

    /// Resolve an identifier, falling back to the default on a miss.
    ///
    /// Matching is exact and case-sensitive.
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown personality {:?}, using {}", id, Self::default());
            Self::default()
        })
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Instruction text for a personality id (default instruction on a miss)
pub fn resolve_instruction(id: &str) -> &'static str {
    Personality::resolve(id).instruction()
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| format!("Unknown personality: {}", s))
    }
}
