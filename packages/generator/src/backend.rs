// ABOUTME: Seam between the orchestrator and the external generation service
// ABOUTME: Async trait implemented by the Gemini client and by test doubles

use async_trait::async_trait;
use tracing::debug;

use namecraft_ai::{AIService, AIServiceError, StructuredOptions};
use namecraft_prompts::GenerationCall;

/// One prompt in, raw response text out (or `None` when the service produced nothing)
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, call: &GenerationCall) -> Result<Option<String>, AIServiceError>;
}

#[async_trait]
impl GenerationBackend for AIService {
    async fn generate(&self, call: &GenerationCall) -> Result<Option<String>, AIServiceError> {
        let options = StructuredOptions {
            response_schema: call.response_schema.clone(),
            temperature: call.sampling.temperature,
            top_p: call.sampling.top_p,
        };

        let response = self.generate_structured(&call.prompt, &options).await?;
        debug!(
            "Generation used {} tokens on {}",
            response.usage.total_tokens(),
            self.model()
        );

        Ok(response.data)
    }
}
