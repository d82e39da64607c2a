//! Application state shared across handler tasks.
//!
//! [`AppState`] carries the one configured compile backend behind an `Arc`
//! so axum can clone it per request. The backend is immutable after
//! startup; no locks are involved.

use std::sync::Arc;

use crate::backend::{CompileBackend, LocalBackend, ModelBackend};
use crate::config::{BackendKind, Config};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The active compile strategy.
    pub backend: Arc<dyn CompileBackend>,
}

impl AppState {
    /// Creates the state for the backend the configuration selects.
    pub fn from_config(config: &Config) -> Self {
        let backend: Arc<dyn CompileBackend> = match &config.backend {
            BackendKind::Local => Arc::new(LocalBackend),
            BackendKind::Model(llm) => Arc::new(ModelBackend::new(llm.clone())),
        };
        AppState { backend }
    }

    /// Creates the state around an explicit backend (for testing).
    pub fn with_backend(backend: Arc<dyn CompileBackend>) -> Self {
        AppState { backend }
    }
}
