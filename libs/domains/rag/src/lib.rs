//! RAG Domain Library
//!
//! Retrieval-augmented generation over a vector store: documents are embedded
//! and stored; questions are embedded, matched against the stored documents and
//! answered by a generation model grounded on the matches.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────┐
//!                    │   RagService    │  ← ingest / ask
//!                    └────────┬────────┘
//!          ┌──────────────────┼───────────────────┐
//! ┌────────▼────────┐ ┌───────▼─────────┐ ┌───────▼──────────┐
//! │EmbeddingProvider│ │   VectorStore   │ │GenerationProvider│
//! │    (trait)      │ │    (trait)      │ │     (trait)      │
//! └────────┬────────┘ └───────┬─────────┘ └───────┬──────────┘
//!          │                  │                   │
//! ┌────────▼────────┐ ┌───────▼─────────┐ ┌───────▼──────────┐
//! │ GeminiEmbedding │ │  WeaviateStore  │ │ GeminiGeneration │
//! └─────────────────┘ └─────────────────┘ └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_rag::{
//!     GeminiConfig, GeminiEmbeddingProvider, GeminiGenerationProvider, RagService,
//!     WeaviateConfig, WeaviateStore,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gemini = GeminiConfig::from_env()?;
//! let store = WeaviateStore::new(WeaviateConfig::from_env());
//!
//! let service = RagService::new(
//!     store,
//!     Arc::new(GeminiEmbeddingProvider::new(gemini.clone())),
//!     Arc::new(GeminiGenerationProvider::new(gemini)),
//!     "Document",
//! );
//!
//! service.ingest(vec!["Rust is a systems programming language.".into()]).await?;
//! let answer = service.ask("What is Rust?").await?;
//! # Ok(())
//! # }
//! ```

pub mod embedding;
pub mod error;
pub mod gemini;
pub mod generation;
pub mod handlers;
pub mod models;
pub mod prompt;
pub mod service;
pub mod store;
pub mod weaviate;

// Re-export commonly used types
pub use embedding::{EmbeddingProvider, GeminiEmbeddingProvider};
pub use error::{RagError, RagResult};
pub use gemini::GeminiConfig;
pub use generation::{GeminiGenerationProvider, GenerationProvider};
pub use handlers::ApiDoc as RagApiDoc;
pub use models::{
    AddDocumentsRequest, AskQuestionRequest, Candidate, ContentPart, Embedding, IngestResponse,
    StoredObject,
};
pub use prompt::build_prompt;
pub use service::{RETRIEVAL_LIMIT, RagService};
pub use store::VectorStore;
pub use weaviate::{WeaviateConfig, WeaviateStore};
