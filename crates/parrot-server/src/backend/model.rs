//! Model-backed compile path: compose the prompt, forward it, validate
//! the reply, relay the program.

use std::sync::Arc;

use async_trait::async_trait;

use parrot_core::{contract, prompt};

use crate::config::LlmConfig;
use crate::error::ApiError;
use crate::llm_provider::{ChatCompletionClient, Completion};
use crate::schema::compile::CompiledOutput;

use super::CompileBackend;

/// Compile path that delegates translation to the completion service.
pub struct ModelBackend {
    completion: Arc<dyn Completion>,
}

impl ModelBackend {
    /// Production construction: a real chat client from configuration.
    pub fn new(config: LlmConfig) -> Self {
        Self::with_completion(Arc::new(ChatCompletionClient::new(config)))
    }

    /// Wraps an explicit completion implementation; tests pass stubs.
    pub fn with_completion(completion: Arc<dyn Completion>) -> Self {
        ModelBackend { completion }
    }
}

#[async_trait]
impl CompileBackend for ModelBackend {
    fn max_source_len(&self) -> usize {
        prompt::MAX_SOURCE_LEN
    }

    async fn compile(&self, source: &str) -> Result<CompiledOutput, ApiError> {
        let composed = prompt::build_compile_prompt(source);
        let raw = self.completion.complete(&composed).await?;
        let program = contract::parse_reply(&raw)?;
        Ok(CompiledOutput::Program(program))
    }
}
