//! HTTP Generation Oracle
//!
//! Calls a text-generation inference server (Hugging Face wire shape) using
//! reqwest. The server is asked to return the full text, so replies usually
//! echo the composed prompt; the extractor handles either case.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use kiwi::{DomainError, GenerationOracle};

use crate::config::ServerConfig;

/// HTTP implementation of GenerationOracle
pub struct HttpOracle {
    client: Client,
    url: String,
    api_key: Option<String>,
    model_id: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    generated_text: String,
}

/// Inference servers answer with either a candidate list or a single object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Many(Vec<Candidate>),
    One(Candidate),
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        match self {
            GenerateResponse::Many(candidates) => {
                candidates.into_iter().next().map(|c| c.generated_text)
            }
            GenerateResponse::One(candidate) => Some(candidate.generated_text),
        }
    }
}

impl HttpOracle {
    pub fn new(config: &ServerConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.oracle_timeout)
            .user_agent(concat!("kiwi-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.oracle_url.trim_end_matches('/').to_string(),
            api_key: config.oracle_api_key.clone(),
            model_id: config.model_id.clone(),
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl GenerationOracle for HttpOracle {
    async fn generate(&self, text: &str, max_new_tokens: u32) -> Result<String, DomainError> {
        let request = GenerateRequest {
            inputs: text,
            parameters: GenerateParameters {
                max_new_tokens,
                return_full_text: true,
            },
        };

        let response = self
            .authorize(self.client.post(&self.url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::Generation(format!("Oracle timed out: {e}"))
                } else {
                    DomainError::Generation(format!("Oracle unreachable: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Generation(format!(
                "Oracle error ({}): {}",
                status, body
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Generation(format!("Invalid oracle response: {e}")))?;

        body.first_text()
            .ok_or_else(|| DomainError::Generation("No generation returned".to_string()))
    }

    fn oracle_name(&self) -> &str {
        "http"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        let response = self
            .authorize(self.client.get(format!("{}/health", self.url)))
            .send()
            .await
            .map_err(DomainError::generation)?;

        Ok(response.status().is_success())
    }
}
