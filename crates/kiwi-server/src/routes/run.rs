//! Run Route - One chat turn with the pet
//!
//! The body is read as raw bytes so an empty body can be told apart from
//! malformed JSON before anything else happens.

use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::Instrument;
use uuid::Uuid;

use kiwi::DomainError;

use crate::models::{ErrorResponse, RunRequest, RunResponse};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::EmptyRequest => StatusCode::BAD_REQUEST,
        DomainError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Generation(_) => StatusCode::BAD_GATEWAY,
        DomainError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match &err {
        DomainError::EmptyRequest => err.to_string(),
        DomainError::MalformedRequest(msg)
        | DomainError::Generation(msg)
        | DomainError::Configuration(msg) => msg.clone(),
    };

    if status.is_server_error() {
        tracing::error!("❌ {}", err);
    } else {
        tracing::warn!("Rejected request: {}", err);
    }

    (status, Json(ErrorResponse::new(message)))
}

/// Generate a persona-styled reply and its emotion
///
/// POST /run {"prompt": "...", "personality": "Kiwi"}
#[utoipa::path(
    post,
    path = "/run",
    request_body = RunRequest,
    responses(
        (status = 200, description = "Reply generated", body = RunResponse),
        (status = 400, description = "Empty request body", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 502, description = "Generation failed", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn run(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RunResponse>, ApiError> {
    let span = tracing::info_span!("run", request_id = %Uuid::new_v4());

    async move {
        tracing::debug!("Raw body: {}", String::from_utf8_lossy(&body));

        let request = RunRequest::from_body(&body).map_err(error_response)?;

        let reply = state
            .chat_service
            .respond(&request.prompt, &request.personality)
            .await
            .map_err(error_response)?;

        Ok::<_, ApiError>(Json(RunResponse::from(reply)))
    }
    .instrument(span)
    .await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/run", post(run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::routes;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use kiwi::GenerationOracle;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Echoes the composed prompt plus a fixed reply, counting calls
    struct EchoOracle {
        reply: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerationOracle for EchoOracle {
        async fn generate(&self, text: &str, _max: u32) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{}{}", text, self.reply))
        }

        fn oracle_name(&self) -> &str {
            "echo"
        }

        fn model_id(&self) -> &str {
            "test"
        }
    }

    struct DownOracle;

    #[async_trait]
    impl GenerationOracle for DownOracle {
        async fn generate(&self, _text: &str, _max: u32) -> Result<String, DomainError> {
            Err(DomainError::Generation("Oracle timed out".to_string()))
        }

        fn oracle_name(&self) -> &str {
            "down"
        }

        fn model_id(&self) -> &str {
            "test"
        }
    }

    fn echo(reply: &'static str) -> Arc<EchoOracle> {
        Arc::new(EchoOracle {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    fn app_with(oracle: Arc<dyn GenerationOracle>) -> Router {
        routes::app(AppState::new(oracle, ServerConfig::default()))
    }

    async fn post_run(app: Router, body: &'static str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/run")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_run_happy_path() {
        let oracle = echo(" Hiiii! I'm so happy!");
        let (status, body) = post_run(
            app_with(oracle.clone()),
            r#"{"prompt": "hello", "personality": "Kiwi"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": "Hiiii! I'm so happy!", "emotion": "joy"}));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_defaults() {
        let oracle = echo(" Purr.");
        let (status, body) = post_run(app_with(oracle), "{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": "Purr.", "emotion": "neutral"}));
    }

    #[tokio::test]
    async fn test_empty_body_never_reaches_oracle() {
        let oracle = echo(" unused");
        let (status, body) = post_run(app_with(oracle.clone()), "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Empty request body"}));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let oracle = echo(" unused");
        let (status, body) = post_run(app_with(oracle.clone()), "{prompt").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_is_bad_gateway() {
        let (status, body) = post_run(app_with(Arc::new(DownOracle)), r#"{"prompt": "hi"}"#).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({"error": "Oracle timed out"}));
    }

    #[tokio::test]
    async fn test_personalities_listing() {
        let response = app_with(echo(""))
            .oneshot(
                Request::builder()
                    .uri("/personalities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["default"], "Kiwi");
        assert_eq!(body["personalities"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["personalities"][1]["id"], "Kiwi Diva");
    }

    #[tokio::test]
    async fn test_cors_preflight_for_allowed_origin() {
        let response = app_with(echo(""))
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/run")
                    .header("origin", "https://localhost")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            "https://localhost"
        );
        assert_eq!(
            headers.get("access-control-allow-credentials").unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_rejects_unknown_origin() {
        let response = app_with(echo(""))
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/run")
                    .header("origin", "https://evil.example")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }
}
