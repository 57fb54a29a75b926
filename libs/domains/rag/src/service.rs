use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, RagResult};
use crate::generation::GenerationProvider;
use crate::models::{ContentPart, StoredObject};
use crate::prompt::build_prompt;
use crate::store::VectorStore;

/// Number of passages retrieved as context for each question.
pub const RETRIEVAL_LIMIT: u32 = 4;

/// Retrieval-augmented generation over one vector store collection.
///
/// Ingestion embeds documents and stores them in the configured class;
/// questions are embedded, matched against that class and answered by the
/// generation model with the matches as context.
pub struct RagService<S: VectorStore> {
    store: S,
    embedder: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn GenerationProvider>,
    collection_class: String,
}

impl<S: VectorStore> RagService<S> {
    /// Creates the service. The first letter of `collection_class` is
    /// uppercased, as Weaviate class names must start with a capital.
    pub fn new(
        store: S,
        embedder: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn GenerationProvider>,
        collection_class: impl Into<String>,
    ) -> Self {
        let collection_class: String = collection_class.into();
        Self {
            store,
            embedder,
            generator,
            collection_class: class_name(&collection_class),
        }
    }

    /// Class every document is stored in and searched from.
    pub fn collection_class(&self) -> &str {
        &self.collection_class
    }

    /// Creates the collection in the store if it does not exist yet.
    pub async fn ensure_collection(&self) -> RagResult<()> {
        self.store.ensure_collection(&self.collection_class).await
    }

    /// Embeds every document in one batch and writes them to the store.
    ///
    /// Nothing is written unless the provider returns exactly one embedding
    /// per document. Returns the number of stored objects.
    #[instrument(skip(self, documents), fields(documents = documents.len()))]
    pub async fn ingest(&self, documents: Vec<String>) -> RagResult<usize> {
        let embeddings = self.embedder.embed_batch(&documents).await?;
        info!(embeddings = embeddings.len(), "Embeddings generated successfully");

        if embeddings.len() != documents.len() {
            return Err(RagError::EmbeddingCountMismatch {
                expected: documents.len(),
                actual: embeddings.len(),
            });
        }

        let objects: Vec<StoredObject> = documents
            .into_iter()
            .zip(embeddings)
            .map(|(text, embedding)| StoredObject {
                class: self.collection_class.clone(),
                text,
                vector: embedding.values,
            })
            .collect();
        let count = objects.len();

        self.store.insert_batch(objects).await?;

        info!(count, class = %self.collection_class, "Documents stored");
        Ok(count)
    }

    /// Answers `question` using the closest stored passages as context.
    #[instrument(skip(self, question))]
    pub async fn ask(&self, question: &str) -> RagResult<String> {
        let embedding = self.embedder.embed(question).await?;

        let contexts = self
            .store
            .search_near_vector(&self.collection_class, embedding.values, RETRIEVAL_LIMIT)
            .await?;
        debug!(contexts = contexts.len(), "Context retrieved");

        let prompt = build_prompt(question, &contexts);
        let candidates = self.generator.generate(&prompt).await?;

        let candidate = candidates
            .into_iter()
            .next()
            .ok_or_else(|| RagError::Generation("no candidates returned".to_string()))?;

        if candidate.parts.is_empty() {
            debug!(finish_reason = ?candidate.finish_reason, "Candidate has no content");
        }

        let mut answer = Vec::with_capacity(candidate.parts.len());
        for part in candidate.parts {
            match part {
                ContentPart::Text(text) => answer.push(text),
                ContentPart::Other { kind } => {
                    warn!(kind = %kind, "Unexpected content part in generation response");
                    return Err(RagError::UnexpectedContentPart(kind));
                }
            }
        }

        Ok(answer.join("\n"))
    }

    /// Readiness of the backing store.
    pub async fn check_ready(&self) -> RagResult<()> {
        self.store.is_ready().await
    }
}

fn class_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
