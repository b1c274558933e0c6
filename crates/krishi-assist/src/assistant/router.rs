use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::service::ChatAssistant;
use crate::language::Language;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Accepted for compatibility with the web client; replies do not depend on it.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub topic: Option<String>,
    pub suggestions: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Router exposing the chat endpoint.
pub fn chat_router(assistant: Arc<ChatAssistant>) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .with_state(assistant)
}

pub(crate) async fn chat_handler(
    State(assistant): State<Arc<ChatAssistant>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    // Only a missing or empty message is rejected; whitespace gets the general help reply.
    let message = match request.message.as_deref() {
        Some(message) if !message.is_empty() => message,
        _ => {
            let payload = json!({ "error": "Message is required" });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let language = request
        .language
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or_default();
    let reply = assistant.respond(message, language);

    let response = ChatResponse {
        reply: reply.reply,
        topic: reply.topic,
        suggestions: reply.suggestions,
        timestamp: Utc::now(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        chat_router(Arc::new(
            ChatAssistant::builtin().expect("embedded catalogs are valid"),
        ))
    }

    async fn post_json(router: Router, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::post("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        let value = serde_json::from_slice(&bytes).expect("json body");
        (status, value)
    }

    #[tokio::test]
    async fn chat_route_answers_in_requested_language() {
        let (status, body) = post_json(
            router(),
            json!({ "message": "मौसम कैसा रहेगा?", "language": "hi" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topic"], "weather");
        assert!(body["reply"]
            .as_str()
            .expect("reply string")
            .contains("पूर्वानुमान"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn chat_route_defaults_to_english() {
        let (status, body) = post_json(router(), json!({ "message": "seed rate for wheat" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topic"], "seeds");
        assert!(body["reply"]
            .as_str()
            .expect("reply string")
            .starts_with("Use quality certified seeds"));
    }

    #[tokio::test]
    async fn chat_route_rejects_missing_or_empty_messages() {
        let (status, body) = post_json(router(), json!({ "message": "" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");

        let (status, _) = post_json(router(), json!({ "language": "en" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_route_answers_whitespace_with_general_help() {
        let (status, body) = post_json(router(), json!({ "message": "   \t " })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["topic"].is_null());
        assert!(body["reply"]
            .as_str()
            .expect("reply string")
            .starts_with("I'm here to help with farming questions"));
    }

    #[tokio::test]
    async fn chat_handler_falls_back_for_unknown_topics() {
        let assistant = Arc::new(ChatAssistant::builtin().expect("embedded catalogs are valid"));
        let request = ChatRequest {
            message: Some("asdkjaslkdj".to_string()),
            language: Some("en".to_string()),
            context: None,
        };

        let response = chat_handler(State(assistant), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
