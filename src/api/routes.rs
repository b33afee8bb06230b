use std::path::Path;

use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::error::handle_panic;
use crate::middleware::session_middleware;

use super::handlers;
use super::AppState;

/// Creates the main router with all routes and layers
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Quiz pipeline
        .route("/predict", post(handlers::predict))
        .route("/result", get(handlers::result))
        // Static pages
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/quiz", ServeFile::new(static_dir.join("quiz.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(session_middleware)),
        )
        .with_state(state)
}

/// Builds the tracing span covering one request
fn make_span(request: &Request) -> tracing::Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
    )
}
