//! Local substitution backend.

use async_trait::async_trait;

use parrot_core::transform;

use crate::error::ApiError;
use crate::schema::compile::CompiledOutput;

use super::CompileBackend;

/// The non-model compile path: fixed token substitution, no outbound calls.
#[derive(Debug, Default)]
pub struct LocalBackend;

#[async_trait]
impl CompileBackend for LocalBackend {
    fn max_source_len(&self) -> usize {
        transform::MAX_SOURCE_LEN
    }

    async fn compile(&self, source: &str) -> Result<CompiledOutput, ApiError> {
        Ok(CompiledOutput::Source(transform::compile_local(source)))
    }
}
