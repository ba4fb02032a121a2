use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Router builder exposing the conversational JSON contract.
pub fn chat_router() -> Router {
    Router::new().route("/api/v1/chat", post(chat_handler))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, alias = "farmerId")]
    pub farmer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    /// Stamped at the route boundary; the narrator itself is pure.
    pub timestamp: DateTime<Utc>,
}

pub(crate) async fn chat_handler(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let response = super::respond(&request.message, request.farmer_id.as_deref());
    Json(ChatResponse {
        response,
        timestamp: Utc::now(),
    })
}
