//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ErrorResponse,
    // Personality models
    PersonalitiesResponse,
    PersonalityInfo,
    // Chat models
    RunRequest,
    RunResponse,
};

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::run::run,
        super::personality::list_personalities,
    ),
    info(
        title = "Kiwi API",
        version = "0.1.0",
        description = "Chat-pet backend: persona-styled replies with a keyword-derived emotion label.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Chat", description = "Chat - persona reply and emotion"),
        (name = "Personality", description = "Personality - catalog of pet personas"),
    ),
    components(
        schemas(
            HealthCheck,
            RunRequest,
            RunResponse,
            ErrorResponse,
            PersonalityInfo,
            PersonalitiesResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/run", "/personalities", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
