use std::sync::Arc;

use anyhow::Context;
use kiwi::GenerationOracle;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::HttpOracle;
use application::ChatService;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(oracle: Arc<dyn GenerationOracle>, config: ServerConfig) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(oracle, config.max_new_tokens)),
            config: Arc::new(config),
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🥝 Kiwi API initializing...");

    let config = ServerConfig::from_secrets(&secrets);

    // The oracle is created once and shared by every request
    let oracle = HttpOracle::new(&config).context("Failed to initialize generation oracle")?;

    match oracle.health_check().await {
        Ok(true) => tracing::info!(
            "🧁 Generation oracle ready: {} ({})",
            config.oracle_url,
            config.model_id
        ),
        Ok(false) => tracing::warn!(
            "⚠️  Generation oracle at {} reported unhealthy",
            config.oracle_url
        ),
        Err(e) => tracing::warn!(
            "⚠️  Generation oracle at {} unreachable: {}",
            config.oracle_url,
            e
        ),
    }

    tracing::info!(
        "🌐 CORS origins: {}",
        config.allowed_origins.join(", ")
    );

    let state = AppState::new(Arc::new(oracle), config);
    let router = routes::app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Kiwi API ready - POST /run");

    Ok(router.into())
}
