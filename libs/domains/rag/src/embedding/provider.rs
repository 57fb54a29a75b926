use async_trait::async_trait;

use crate::error::RagResult;
use crate::models::Embedding;

/// Trait for embedding generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embedding for a single text
    async fn embed(&self, text: &str) -> RagResult<Embedding>;

    /// Generate embeddings for multiple texts in one call.
    ///
    /// The result is returned as the provider sent it; callers check the count.
    async fn embed_batch(&self, texts: &[String]) -> RagResult<Vec<Embedding>>;
}
