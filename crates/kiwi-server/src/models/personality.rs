//! Personality Models - Catalog listing for the frontend picker

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use kiwi::Personality;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PersonalityInfo {
    #[schema(example = "Kiwi Diva")]
    pub id: String,
    pub instruction: String,
    pub is_default: bool,
}

impl From<Personality> for PersonalityInfo {
    fn from(personality: Personality) -> Self {
        Self {
            id: personality.id().to_string(),
            instruction: personality.instruction().to_string(),
            is_default: personality.is_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PersonalitiesResponse {
    pub default: String,
    pub personalities: Vec<PersonalityInfo>,
}

impl PersonalitiesResponse {
    pub fn catalog() -> Self {
        Self {
            default: Personality::default().id().to_string(),
            personalities: Personality::ALL.into_iter().map(Into::into).collect(),
        }
    }
}
