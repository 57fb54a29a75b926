//! RAG relay - document ingestion and question answering over HTTP

use std::sync::Arc;

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_rag::{GeminiEmbeddingProvider, GeminiGenerationProvider, RagService, WeaviateStore};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        weaviate = %config.weaviate.url,
        class = %config.collection_class,
        embedding_model = %config.gemini.embedding_model,
        generation_model = %config.gemini.generation_model,
        "Starting RAG relay"
    );

    let service = Arc::new(RagService::new(
        WeaviateStore::new(config.weaviate.clone()),
        Arc::new(GeminiEmbeddingProvider::new(config.gemini.clone())),
        Arc::new(GeminiGenerationProvider::new(config.gemini.clone())),
        config.collection_class.clone(),
    ));

    if let Err(e) = service.ensure_collection().await {
        warn!(
            error = %e,
            class = service.collection_class(),
            "Could not ensure collection exists; continuing"
        );
    }

    let router = create_router::<openapi::ApiDoc>(api::routes(service));
    let app = router.merge(health_router(config.app));

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("RAG relay shutdown complete");
    Ok(())
}
