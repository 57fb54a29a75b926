mod gemini;
mod provider;

pub use gemini::GeminiEmbeddingProvider;
pub use provider::EmbeddingProvider;

#[cfg(test)]
pub use provider::MockEmbeddingProvider;
