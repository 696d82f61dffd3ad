use std::sync::Arc;

use spool_types::{ResearchRecord, ResearchReport};

use crate::error::{LlmError, Result};
use crate::extract::extract_json;
use crate::prompts::{GROUNDED_RESEARCH_PROMPT, UNGROUNDED_RESEARCH_PROMPT};
use crate::traits::{GenerateClient, GenerationConfig};

/// Research service over a generation backend.
///
/// Holds no local state between calls: repeated research on the same topic
/// may return different content because the backend is non-deterministic.
pub struct ResearchClient {
    client: Arc<dyn GenerateClient>,
    config: GenerationConfig,
}

impl ResearchClient {
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

    /// Researches a topic with grounded search, requesting citations.
    ///
    /// A response without a citations field still succeeds with an empty
    /// citation list.
    pub async fn research_with_search(&self, query: &str) -> Result<ResearchRecord> {
        let prompt = GROUNDED_RESEARCH_PROMPT.replace("{topic}", query);
        self.run_research(&prompt).await
    }

    /// Researches a topic from model knowledge alone; no citations are
    /// requested or expected.
    pub async fn research_without_search(&self, query: &str) -> Result<ResearchRecord> {
        let prompt = UNGROUNDED_RESEARCH_PROMPT.replace("{topic}", query);
        self.run_research(&prompt).await
    }

    async fn run_research(&self, prompt: &str) -> Result<ResearchRecord> {
        let raw = self
            .client
            .generate(prompt, &self.config)
            .await
            .map_err(|e| LlmError::Backend(e.to_string()))?;

        let value = extract_json(&raw)?;
        let report: ResearchReport =
            serde_json::from_value(value).map_err(|_| LlmError::InvalidResponseFormat {
                raw: raw.trim().to_string(),
            })?;

        tracing::debug!(
            findings = report.key_findings.len(),
            citations = report.citations.len(),
            "research response parsed"
        );

        Ok(ResearchRecord::Report(report))
    }
}
