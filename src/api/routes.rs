use axum::{middleware, routing::get, Router};
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

use crate::middleware::{propagate_request_id, request_span};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS so any frontend origin can call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api/movies", movie_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(cors)
}

/// Movie routes under /api/movies
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/recommend", get(handlers::recommend))
        .route("/titles", get(handlers::list_titles))
}
