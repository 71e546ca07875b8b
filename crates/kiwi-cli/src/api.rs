//! Kiwi API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the Kiwi server
pub struct KiwiClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct RunRequest<'a> {
    pub prompt: &'a str,
    pub personality: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct RunResponse {
    pub result: String,
    pub emotion: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonalityInfo {
    pub id: String,
    pub instruction: String,
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct PersonalitiesResponse {
    pub personalities: Vec<PersonalityInfo>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl KiwiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Send one chat turn
    pub async fn run(&self, prompt: &str, personality: &str) -> Result<RunResponse> {
        let url = format!("{}/run", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&RunRequest {
                prompt,
                personality,
            })
            .send()
            .await
            .context("Failed to connect to Kiwi API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, message);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// List personalities known to the server
    pub async fn personalities(&self) -> Result<Vec<PersonalityInfo>> {
        let url = format!("{}/personalities", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Kiwi API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let catalog: PersonalitiesResponse =
            resp.json().await.context("Failed to parse response")?;

        Ok(catalog.personalities)
    }
}
