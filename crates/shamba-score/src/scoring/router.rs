use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::features::{feature_catalog, FarmerFeatures, FeatureCatalog, FeatureInput};
use super::{ScoreResult, ScoringEngine};

/// Router builder exposing the scoring JSON contract.
pub fn score_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/score/batch", post(batch_score_handler))
        .route("/api/v1/score/features", get(feature_catalog_handler))
        .with_state(engine)
}

/// Batch request: one entry per farmer, each carrying any subset of the
/// feature fields.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchScoreRequest {
    pub farmers: Vec<BatchFarmerInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchFarmerInput {
    #[serde(default)]
    pub farmer_id: Option<String>,
    #[serde(flatten)]
    pub features: FeatureInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchScoreResponse {
    pub total_farmers: usize,
    pub results: Vec<BatchScoreEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchScoreEntry {
    pub farmer_id: String,
    #[serde(flatten)]
    pub result: ScoreResult,
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    Json(input): Json<FeatureInput>,
) -> Json<ScoreResult> {
    let features = FarmerFeatures::from_input(input);
    Json(engine.score(&features))
}

pub(crate) async fn batch_score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    Json(request): Json<BatchScoreRequest>,
) -> Json<BatchScoreResponse> {
    let total_farmers = request.farmers.len();
    let results = request
        .farmers
        .into_iter()
        .enumerate()
        .map(|(index, farmer)| {
            let farmer_id = farmer
                .farmer_id
                .unwrap_or_else(|| format!("farmer-{}", index + 1));
            let features = FarmerFeatures::from_input(farmer.features);
            BatchScoreEntry {
                farmer_id,
                result: engine.score(&features),
            }
        })
        .collect();

    Json(BatchScoreResponse {
        total_farmers,
        results,
    })
}

pub(crate) async fn feature_catalog_handler() -> Json<FeatureCatalog> {
    Json(feature_catalog())
}
