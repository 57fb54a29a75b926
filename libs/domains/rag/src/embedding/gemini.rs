use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EmbeddingProvider;
use crate::error::{RagError, RagResult};
use crate::gemini::GeminiConfig;
use crate::gemini::wire::{self, Content};
use crate::models::Embedding;

/// Gemini `embedContent` / `batchEmbedContents` provider
pub struct GeminiEmbeddingProvider {
    client: Client,
    config: GeminiConfig,
    model: String,
}

impl GeminiEmbeddingProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: GeminiConfig) -> Self {
        let model = crate::gemini::model_path(&config.embedding_model);
        Self {
            client,
            config,
            model,
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbedContentRequest<'a> {
    model: &'a str,
    content: Content<'a>,
}

#[derive(Debug, Serialize)]
struct BatchEmbedContentsRequest<'a> {
    requests: Vec<EmbedContentRequest<'a>>,
}

#[derive(Debug, Deserialize)]
struct ContentEmbedding {
    #[serde(default)]
    values: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Debug, Deserialize)]
struct BatchEmbedContentsResponse {
    #[serde(default)]
    embeddings: Vec<ContentEmbedding>,
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed(&self, text: &str) -> RagResult<Embedding> {
        let request = EmbedContentRequest {
            model: &self.model,
            content: Content::text(text),
        };

        let url = self.config.endpoint(&self.model, "embedContent");
        let response = wire::authorize(self.client.post(url), &self.config)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Embedding(e.to_string()))?;

        let body: EmbedContentResponse = wire::read_json(response)
            .await
            .map_err(RagError::Embedding)?;

        Ok(Embedding::new(body.embedding.values))
    }

    async fn embed_batch(&self, texts: &[String]) -> RagResult<Vec<Embedding>> {
        let request = BatchEmbedContentsRequest {
            requests: texts
                .iter()
                .map(|text| EmbedContentRequest {
                    model: &self.model,
                    content: Content::text(text),
                })
                .collect(),
        };

        let url = self.config.endpoint(&self.model, "batchEmbedContents");
        let response = wire::authorize(self.client.post(url), &self.config)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Embedding(e.to_string()))?;

        let body: BatchEmbedContentsResponse = wire::read_json(response)
            .await
            .map_err(RagError::Embedding)?;

        debug!(
            requested = texts.len(),
            returned = body.embeddings.len(),
            "Batch embeddings received"
        );

        Ok(body
            .embeddings
            .into_iter()
            .map(|e| Embedding::new(e.values))
            .collect())
    }
}
