use std::sync::Arc;

use spool_types::{ResearchRecord, ThreadConfig};

use crate::error::{LlmError, Result};
use crate::extract::extract_json;
use crate::prompts::COMPOSE_THREAD_PROMPT;
use crate::traits::{GenerateClient, GenerationConfig};

/// Turns a research record into an ordered list of post texts.
pub struct ThreadComposer {
    client: Arc<dyn GenerateClient>,
    config: GenerationConfig,
}

impl ThreadComposer {
    pub fn new(client: Arc<dyn GenerateClient>) -> Self {
        Self {
            client,
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Composes the post texts for a thread.
    ///
    /// The length and count budgets in `thread_config` go into the prompt;
    /// they are not enforced on the parsed result. Callers needing a hard
    /// guarantee validate the returned posts themselves.
    pub async fn compose(
        &self,
        research: &ResearchRecord,
        thread_config: &ThreadConfig,
    ) -> Result<Vec<String>> {
        let research_json = serde_json::to_string(research)
            .map_err(|e| LlmError::Backend(format!("failed to serialize research record: {e}")))?;

        let prompt = COMPOSE_THREAD_PROMPT
            .replace("{max_posts}", &thread_config.max_posts.to_string())
            .replace("{max_post_length}", &thread_config.max_post_length.to_string())
            .replace("{research_json}", &research_json);

        let raw = self
            .client
            .generate(&prompt, &self.config)
            .await
            .map_err(|e| LlmError::Backend(e.to_string()))?;

        let value = extract_json(&raw)?;
        let posts: Vec<String> =
            serde_json::from_value(value).map_err(|_| LlmError::GenerationFailed)?;

        if posts.is_empty() {
            return Err(LlmError::GenerationFailed);
        }

        tracing::debug!(posts = posts.len(), "thread composed");
        Ok(posts)
    }
}
