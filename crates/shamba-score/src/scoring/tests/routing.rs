use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::scoring::{score_router, ScoringEngine};

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn router() -> axum::Router {
    score_router(Arc::new(ScoringEngine::standard()))
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
async fn score_route_defaults_absent_fields() {
    let response = router()
        .oneshot(post_json("/api/v1/score", &json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;

    let score = payload
        .get("credit_score")
        .and_then(Value::as_f64)
        .expect("credit_score present");
    assert!((0.0..=100.0).contains(&score));
    assert_eq!(
        payload.get("risk_category").and_then(Value::as_str),
        Some("Moderate")
    );
    assert_eq!(
        payload
            .get("top_contributing_factors")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(3)
    );
}

#[tokio::test]
async fn score_route_accepts_partial_feature_payloads() {
    let payload = json!({
        "savings_rate": 0.45,
        "loan_repayment_history": 1.0,
        "chama_participation": 1,
    });

    let response = router()
        .oneshot(post_json("/api/v1/score", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let probability = body
        .get("approval_probability")
        .and_then(Value::as_f64)
        .expect("approval_probability present");
    assert!((0.0..=1.0).contains(&probability));
}

#[tokio::test]
async fn batch_route_scores_every_farmer() {
    let payload = json!({
        "farmers": [
            { "farmer_id": "FM0001", "savings_rate": 0.35 },
            { "mean_ndvi": 0.4 },
        ]
    });

    let response = router()
        .oneshot(post_json("/api/v1/score/batch", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total_farmers").and_then(Value::as_u64), Some(2));

    let results = body
        .get("results")
        .and_then(Value::as_array)
        .expect("results present");
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].get("farmer_id").and_then(Value::as_str),
        Some("FM0001")
    );
    // Farmers without an id get a positional one.
    assert_eq!(
        results[1].get("farmer_id").and_then(Value::as_str),
        Some("farmer-2")
    );
}

#[tokio::test]
async fn feature_catalog_groups_the_fifteen_features() {
    let response = router()
        .oneshot(
            axum::http::Request::get("/api/v1/score/features")
                .body(axum::body::Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;

    let total: usize = ["satellite", "financial", "community", "agricultural", "climate"]
        .iter()
        .map(|group| {
            body.get(*group)
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or(0)
        })
        .sum();
    assert_eq!(total, 15);
}

#[tokio::test]
async fn malformed_bodies_are_rejected_at_the_boundary() {
    let response = router()
        .oneshot(
            axum::http::Request::post("/api/v1/score")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{not json"))
                .expect("build request"),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}
