//! Router assembly for the compile service HTTP API.
//!
//! [`build_router`] wires the two handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router with both API routes.
///
/// CORS is permissive (the playground frontend may be served from any
/// origin). TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/compile", post(handlers::compile::compile))
        .route("/hello", get(handlers::hello::hello))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
