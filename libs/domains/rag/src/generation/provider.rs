use async_trait::async_trait;

use crate::error::RagResult;
use crate::models::Candidate;

/// Trait for text generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Sends a single-turn user prompt and returns the candidates as received.
    async fn generate(&self, prompt: &str) -> RagResult<Vec<Candidate>>;
}
