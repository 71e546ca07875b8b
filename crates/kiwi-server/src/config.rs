//! Server configuration
//!
//! Read from the deployment secret store. Missing keys use defaults;
//! unparsable numbers fall back to defaults with a warning.

use std::time::Duration;

use kiwi::DEFAULT_MAX_NEW_TOKENS;

const DEFAULT_ORACLE_URL: &str = "http://localhost:8080";
const DEFAULT_MODEL_ID: &str = "s-qaiser/Kiwi2";
const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 120;
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["https://api.kiwiai.online", "https://localhost"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub oracle_url: String,
    pub oracle_api_key: Option<String>,
    pub model_id: String,
    pub max_new_tokens: u32,
    pub oracle_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            oracle_url: DEFAULT_ORACLE_URL.to_string(),
            oracle_api_key: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            oracle_timeout: Duration::from_secs(DEFAULT_ORACLE_TIMEOUT_SECS),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ServerConfig {
    /// Load from Shuttle secrets
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let oracle_url = get("ORACLE_URL").unwrap_or_else(|| {
            tracing::warn!(
                "⚠️  No ORACLE_URL set - using {}",
                defaults.oracle_url
            );
            defaults.oracle_url.clone()
        });

        let max_new_tokens =
            parse_or_default(get("MAX_NEW_TOKENS"), "MAX_NEW_TOKENS", defaults.max_new_tokens);

        let timeout_secs = parse_or_default(
            get("ORACLE_TIMEOUT_SECS"),
            "ORACLE_TIMEOUT_SECS",
            defaults.oracle_timeout.as_secs(),
        );

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            oracle_url,
            oracle_api_key: get("ORACLE_API_KEY"),
            model_id: get("MODEL_ID").unwrap_or(defaults.model_id),
            max_new_tokens,
            oracle_timeout: Duration::from_secs(timeout_secs),
            allowed_origins,
        }
    }
}

fn parse_or_default<T>(value: Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️  Invalid {}={:?} - using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
