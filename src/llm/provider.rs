use async_trait::async_trait;

use crate::error::Result;
use crate::llm::prompts::GenerationRequest;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Produce the markdown body for one requested document.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
    fn name(&self) -> &str;
}
