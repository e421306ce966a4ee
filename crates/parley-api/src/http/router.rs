//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/chat` always, `GET /api/history` only when the relay
//! persists its log, `GET /health` for liveness. Middleware: permissive
//! CORS (the browser frontend is served from a different origin) and
//! request tracing.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use parley_core::repository::message::MessageRepository;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router<R: MessageRepository + 'static>(state: AppState<R>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut api_routes = Router::new().route("/chat", post(handlers::chat::chat::<R>));
    if state.relay.persistence_enabled() {
        api_routes = api_routes.route("/history", get(handlers::history::history::<R>));
    }

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use parley_core::llm::box_provider::BoxLlmProvider;
    use parley_core::llm::provider::LlmProvider;
    use parley_core::relay::service::{ChatRelay, UPSTREAM_FAILURE_REPLY};
    use parley_infra::memory::InMemoryMessageRepository;
    use parley_types::llm::{CompletionReply, CompletionRequest, LlmError};

    /// Provider scripted to either reply with fixed text or fail upstream.
    struct ScriptedProvider {
        reply: Option<&'static str>,
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionReply, LlmError> {
            match self.reply {
                Some(text) => Ok(CompletionReply {
                    content: text.to_string(),
                }),
                None => Err(LlmError::Upstream {
                    message: "connection refused".to_string(),
                }),
            }
        }
    }

    fn router_with(reply: Option<&'static str>, persist: bool) -> Router {
        let provider = BoxLlmProvider::new(ScriptedProvider { reply });
        let store = persist.then(InMemoryMessageRepository::new);
        build_router(AppState::new(ChatRelay::new(
            provider,
            store,
            "test-model".to_string(),
        )))
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_history() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/api/history")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_reply() {
        let router = router_with(Some("Hi there!"), false);
        let response = router.oneshot(post_chat(r#"{"message":"Hello"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "response": "Hi there!" }));
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message() {
        let router = router_with(Some("Hi there!"), false);
        let response = router.oneshot(post_chat(r#"{"message":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "No message provided" }));
    }

    #[tokio::test]
    async fn test_chat_rejects_missing_message_field() {
        let router = router_with(Some("Hi there!"), false);
        let response = router.oneshot(post_chat(r#"{}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "No message provided" }));
    }

    #[tokio::test]
    async fn test_chat_rejects_absent_body() {
        let router = router_with(Some("Hi there!"), false);
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "No message provided" }));
    }

    #[tokio::test]
    async fn test_chat_appends_history_in_order() {
        let router = router_with(Some("Hi there!"), true);
        let response = router
            .clone()
            .oneshot(post_chat(r#"{"message":"Hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router.oneshot(get_history()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let history = body_json(response).await;
        let entries = history.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["sender"], "user");
        assert_eq!(entries[0]["text"], "Hello");
        assert_eq!(entries[1]["sender"], "llm");
        assert_eq!(entries[1]["text"], "Hi there!");
        assert!(entries[0]["id"].as_i64().unwrap() < entries[1]["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn test_history_route_absent_without_persistence() {
        let router = router_with(Some("Hi there!"), false);
        let response = router.oneshot(get_history()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upstream_failure_still_returns_200_without_llm_row() {
        let router = router_with(None, true);
        let response = router
            .clone()
            .oneshot(post_chat(r#"{"message":"Hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "response": UPSTREAM_FAILURE_REPLY })
        );

        let response = router.oneshot(get_history()).await.unwrap();
        let history = body_json(response).await;
        let entries = history.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["sender"], "user");
    }

    #[tokio::test]
    async fn test_history_is_idempotent() {
        let router = router_with(Some("Hi there!"), true);
        router
            .clone()
            .oneshot(post_chat(r#"{"message":"Hello"}"#))
            .await
            .unwrap();

        let first = body_json(router.clone().oneshot(get_history()).await.unwrap()).await;
        let second = body_json(router.oneshot(get_history()).await.unwrap()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = router_with(Some("Hi there!"), false);
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }
}
