use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::Recommendation;
use crate::services::recommender::DEFAULT_COUNT;

use super::AppState;

/// Query parameters for the recommend endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    /// Free-text movie title; absent is treated like an empty query
    pub title: Option<String>,
    /// Maximum number of recommendations to return
    pub count: Option<usize>,
}

/// Liveness greeting at the root path
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Movie recommendation backend is live" }))
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Top-N similar movies for a queried title.
///
/// An unknown, empty, or missing title yields `[]` with a 200 status;
/// "not found" is not an error for this endpoint.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Json<Vec<Recommendation>> {
    let title = params.title.unwrap_or_default();
    let count = params.count.unwrap_or(DEFAULT_COUNT);
    Json(state.recommender.recommend(&title, count))
}

/// All known titles, for client-side autocomplete
pub async fn list_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.recommender.list_titles())
}
