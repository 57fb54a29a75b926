use async_trait::async_trait;

use crate::error::RagResult;
use crate::models::StoredObject;

/// Storage operations the relay needs from a vector database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Write all objects in one batch request.
    async fn insert_batch(&self, objects: Vec<StoredObject>) -> RagResult<()>;

    /// Nearest-neighbour search in `class`, returning the `text` of up to `limit` hits,
    /// closest first.
    async fn search_near_vector(
        &self,
        class: &str,
        vector: Vec<f32>,
        limit: u32,
    ) -> RagResult<Vec<String>>;

    /// Create `class` with a `text` property if it doesn't exist yet.
    async fn ensure_collection(&self, class: &str) -> RagResult<()>;

    /// Whether the store is accepting requests.
    async fn is_ready(&self) -> RagResult<()>;
}
