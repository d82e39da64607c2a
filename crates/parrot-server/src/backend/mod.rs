//! Compile strategies behind one interface.
//!
//! A deployment runs exactly one [`CompileBackend`]: the local token
//! substitution or the model-backed prompt-and-relay path. Handlers see
//! only the trait; which implementation is live comes from
//! [`crate::config::BackendKind`].

pub mod local;
pub mod model;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::schema::compile::CompiledOutput;

pub use local::LocalBackend;
pub use model::ModelBackend;

/// One compile strategy.
#[async_trait]
pub trait CompileBackend: Send + Sync {
    /// Maximum accepted source length in characters.
    fn max_source_len(&self) -> usize;

    /// Compiles already-validated Parrot source into the response payload.
    async fn compile(&self, source: &str) -> Result<CompiledOutput, ApiError>;
}
