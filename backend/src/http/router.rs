//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.body_limit_bytes;

    let api_v1 = Router::new()
        // Video records
        .route("/videos", get(handlers::list_videos).post(handlers::create_video))
        .route(
            "/videos/{video_id}",
            get(handlers::get_video).delete(handlers::delete_video),
        )
        // Timeline
        .route("/videos/{video_id}/timeline", get(handlers::get_video_timeline))
        .route("/timeline", post(handlers::compute_timeline))
        // Report
        .route("/analytics/report", get(handlers::get_analytics_report));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Long videos carry one sample per second
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
