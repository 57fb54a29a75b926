//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "RAG Relay",
    version = "0.1.0",
    description = "Document ingestion and grounded question answering over Gemini and Weaviate"
))]
struct RelayInfo;

/// Combined OpenAPI documentation for the relay
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = RelayInfo::openapi();
        doc.merge(domain_rag::RagApiDoc::openapi());
        doc
    }
}
