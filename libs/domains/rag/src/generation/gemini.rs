use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::GenerationProvider;
use crate::error::{RagError, RagResult};
use crate::gemini::GeminiConfig;
use crate::gemini::wire::{self, Content};
use crate::models::Candidate;

/// Gemini `generateContent` provider
pub struct GeminiGenerationProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGenerationProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<Map<String, Value>>,
}

/// Finish reasons that mean the candidate was withheld, not completed.
const BLOCKING_FINISH_REASONS: [&str; 2] = ["SAFETY", "RECITATION"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn into_candidates(self) -> RagResult<Vec<Candidate>> {
        if self.candidates.is_empty() {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(RagError::Generation(format!("prompt blocked: {reason}")));
            }
        }

        if let Some(reason) = self
            .candidates
            .iter()
            .filter_map(|c| c.finish_reason.as_deref())
            .find(|reason| BLOCKING_FINISH_REASONS.contains(reason))
        {
            return Err(RagError::Generation(format!("candidate blocked: {reason}")));
        }

        Ok(self
            .candidates
            .into_iter()
            .map(|candidate| Candidate {
                parts: candidate
                    .content
                    .map(|c| c.parts.into_iter().map(wire::content_part).collect())
                    .unwrap_or_default(),
                finish_reason: candidate.finish_reason,
            })
            .collect())
    }
}

#[async_trait]
impl GenerationProvider for GeminiGenerationProvider {
    async fn generate(&self, prompt: &str) -> RagResult<Vec<Candidate>> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
        };

        let url = self
            .config
            .endpoint(&self.config.generation_model, "generateContent");
        let response = wire::authorize(self.client.post(url), &self.config)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Generation(e.to_string()))?;

        let body: GenerateContentResponse = wire::read_json(response)
            .await
            .map_err(RagError::Generation)?;

        let candidates = body.into_candidates()?;
        debug!(candidates = candidates.len(), "Generation finished");
        Ok(candidates)
    }
}
