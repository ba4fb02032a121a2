use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use shamba_score::advisor::chat_router;
use shamba_score::messaging::{message_router, LoggingMessageSink};

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("build request")
}

#[tokio::test]
async fn chat_route_answers_greetings_and_stamps_a_timestamp() {
    let response = chat_router()
        .oneshot(post_json("/api/v1/chat", &json!({ "message": "hello" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body
        .get("response")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("Shamba Score Assistant"));
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn chat_route_accepts_the_camel_case_farmer_id() {
    let payload = json!({ "message": "what is my score?", "farmerId": "FM0001" });
    let response = chat_router()
        .oneshot(post_json("/api/v1/chat", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let text = body
        .get("response")
        .and_then(Value::as_str)
        .unwrap_or_default();
    assert!(text.contains("John Mwangi"));
    assert!(text.contains("85.3"));
}

#[tokio::test]
async fn chat_route_prompts_for_unknown_ids() {
    let payload = json!({ "message": "score", "farmer_id": "FM9999" });
    let response = chat_router()
        .oneshot(post_json("/api/v1/chat", &payload))
        .await
        .expect("route executes");

    let body = read_json_body(response).await;
    assert!(body
        .get("response")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("provide a valid Farmer ID"));
}

#[tokio::test]
async fn message_routes_acknowledge_delivery() {
    let router = message_router(Arc::new(LoggingMessageSink));
    let payload = json!({
        "phone": "0712345678",
        "message": "Your Shamba Score is 85.3.",
        "farmer_id": "FM0001",
    });

    let response = router
        .oneshot(post_json("/api/v1/messages/sms", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("status").and_then(Value::as_str), Some("sent"));
    assert_eq!(body.get("channel").and_then(Value::as_str), Some("SMS"));
}
