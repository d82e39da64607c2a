//! Binary entrypoint for the Parrot compile service.
//!
//! Reads configuration from environment variables:
//! - `PARROT_PORT`: server listen port (default: "3000")
//! - `PARROT_BACKEND`: compile strategy, "local" or "model" (default: "local")
//! - `LLM_API_KEY`, `LLM_ENDPOINT`, `LLM_MODEL`, `PARROT_MAX_TOKENS`:
//!   completion service settings, read when the model backend is selected

use parrot_server::config::Config;
use parrot_server::router::build_router;
use parrot_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()
        .expect("Failed to load configuration");

    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(backend = config.backend.name(), "parrot compile service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
