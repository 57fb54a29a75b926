//! API routes

use std::sync::Arc;

use axum::Router;
use domain_rag::{RagService, VectorStore, handlers};

/// Domain routes plus the readiness check, all at the root.
pub fn routes<S: VectorStore + 'static>(service: Arc<RagService<S>>) -> Router {
    handlers::router(service.clone()).merge(handlers::ready_router(service))
}
