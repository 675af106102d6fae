//! Axum route handlers.
//!
//! # Routes
//!
//! - `GET  /health`      — returns `{"status": "ok", ...}`
//! - `POST /api/gemini`  — accepts a chat request, returns `{"response": ...}`
//! - `GET  /`            — redirects to the demo page
//! - `GET  /:filename`   — serves a demo asset, plain 404 when missing

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chat::ReplyOrchestrator;
use crate::errors::ReplyError;
use crate::types::{ChatMessage, ConversationContext};

/// Shared application state for the HTTP server. Everything inside is
/// immutable after startup, so cloning per request needs no locking.
#[derive(Clone)]
pub struct AppState {
    /// Reply engine, fixed at startup.
    pub orchestrator: Arc<ReplyOrchestrator>,
    /// Directory demo assets are served from.
    pub static_dir: String,
}

/// Incoming chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    #[serde(default)]
    pub message: String,
    /// Free-text scenario context.
    #[serde(default)]
    pub context: Option<String>,
    /// Prior conversation, oldest first.
    #[serde(default, rename = "chatHistory")]
    pub chat_history: Vec<ChatMessage>,
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/gemini", post(reply_handler))
        .route("/", get(index_handler))
        .route("/:filename", get(static_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "recovery-seed",
    }))
}

/// POST /api/gemini — produce one reply.
///
/// Success: `{"response": text}`, where the text carries a scripted
/// marker when it came from degraded mode. Validation failure: 400 with
/// `{"error": ...}`. Anything unexpected: 500 with a generic message.
async fn reply_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let context = ConversationContext {
        context: request.context,
        history: request.chat_history,
    };

    match state.orchestrator.handle(&request.message, &context).await {
        Ok(reply) => Ok(Json(serde_json::json!({ "response": reply.text }))),
        Err(err @ ReplyError::EmptyMessage) => Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": err.to_string() })),
        )),
        Err(ReplyError::Internal(detail)) => {
            tracing::error!("unexpected failure while handling reply: {}", detail);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": ReplyError::Internal(detail).to_string() })),
            ))
        }
    }
}

/// GET / — send the browser to the demo page.
async fn index_handler() -> Redirect {
    Redirect::to("/index.html")
}

/// GET /:filename — serve a demo asset from the static directory.
async fn static_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    // Flat directory only; anything that walks out of it is treated as
    // missing.
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(not_found(&filename));
    }

    let path = std::path::Path::new(&state.static_dir).join(&filename);
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Ok(Html(content)),
        Err(_) => Err(not_found(&filename)),
    }
}

fn not_found(filename: &str) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("파일을 찾을 수 없습니다: {}", filename),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::chat::scripted::library;
    use crate::chat::SCRIPTED_MARKER;

    use super::*;

    fn scripted_state() -> AppState {
        AppState {
            orchestrator: Arc::new(ReplyOrchestrator::degraded()),
            static_dir: "static".to_string(),
        }
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/gemini")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_router(scripted_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "recovery-seed");
    }

    #[tokio::test]
    async fn test_empty_message_is_bad_request() {
        let app = app_router(scripted_state());

        let response = app
            .oneshot(chat_request(r#"{"message": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "사용자 메시지가 없습니다.");
    }

    #[tokio::test]
    async fn test_missing_message_field_is_bad_request() {
        let app = app_router(scripted_state());

        let response = app.oneshot(chat_request(r#"{}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_scripted_reply_carries_marker() {
        let app = app_router(scripted_state());

        let response = app
            .oneshot(chat_request(r#"{"message": "상사가 너무 무시해요"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        let text = json["response"].as_str().unwrap();
        assert!(text.starts_with(SCRIPTED_MARKER));
    }

    #[tokio::test]
    async fn test_closing_reply_is_exact() {
        let app = app_router(scripted_state());

        let response = app
            .oneshot(chat_request(r#"{"message": "종료"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["response"],
            format!("{}{}", SCRIPTED_MARKER, library().closing_utterance())
        );
    }

    #[tokio::test]
    async fn test_chat_history_is_accepted() {
        let app = app_router(scripted_state());

        let body = r#"{
            "message": "맞아요 정말 답답해요",
            "context": "자기자비 연습",
            "chatHistory": [
                {"sender": "user", "message": "요즘 힘들어요"},
                {"sender": "bot", "message": "어떤 일이 있으셨나요?"}
            ]
        }"#;
        let response = app.oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_static_file_is_404() {
        let app = app_router(scripted_state());

        let request = Request::builder()
            .uri("/missing.html")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_redirects() {
        let app = app_router(scripted_state());

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_redirection());
    }
}
