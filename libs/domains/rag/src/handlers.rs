use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::{
    HealthCheckFuture, JsonBody, errors::responses::ClientErrorResponse, run_health_checks,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::RagResult;
use crate::models::{AddDocumentsRequest, AskQuestionRequest, IngestResponse};
use crate::service::RagService;
use crate::store::VectorStore;

const TAG: &str = "rag";

/// OpenAPI documentation for the RAG endpoints
#[derive(OpenApi)]
#[openapi(
    paths(add_documents, ask_question, ready),
    components(
        schemas(AddDocumentsRequest, AskQuestionRequest, IngestResponse),
        responses(ClientErrorResponse)
    ),
    tags(
        (name = TAG, description = "Document ingestion and grounded question answering")
    )
)]
pub struct ApiDoc;

/// `POST /document` and `POST /ask`.
pub fn router<S: VectorStore + 'static>(service: Arc<RagService<S>>) -> Router {
    Router::new()
        .route("/document", post(add_documents))
        .route("/ask", post(ask_question))
        .with_state(service)
}

/// `GET /ready`, reporting whether the vector store is reachable.
pub fn ready_router<S: VectorStore + 'static>(service: Arc<RagService<S>>) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(service)
}

/// Embed documents and store them in the collection
#[utoipa::path(
    post,
    path = "/document",
    tag = TAG,
    request_body = AddDocumentsRequest,
    responses(
        (status = 200, description = "Documents embedded and stored", body = IngestResponse),
        (status = 400, response = ClientErrorResponse)
    )
)]
async fn add_documents<S: VectorStore>(
    State(service): State<Arc<RagService<S>>>,
    JsonBody(input): JsonBody<AddDocumentsRequest>,
) -> RagResult<Json<IngestResponse>> {
    service.ingest(input.documents).await?;
    Ok(Json(IngestResponse::success()))
}

/// Answer a question using the stored documents as context
#[utoipa::path(
    post,
    path = "/ask",
    tag = TAG,
    request_body = AskQuestionRequest,
    responses(
        (status = 200, description = "Generated answer", body = String),
        (status = 400, response = ClientErrorResponse)
    )
)]
async fn ask_question<S: VectorStore>(
    State(service): State<Arc<RagService<S>>>,
    JsonBody(input): JsonBody<AskQuestionRequest>,
) -> RagResult<Json<String>> {
    let answer = service.ask(&input.question).await?;
    Ok(Json(answer))
}

/// Readiness check
#[utoipa::path(
    get,
    path = "/ready",
    tag = TAG,
    responses(
        (status = 200, description = "Vector store reachable"),
        (status = 503, description = "Vector store unreachable")
    )
)]
async fn ready<S: VectorStore>(State(service): State<Arc<RagService<S>>>) -> Response {
    let store_check: HealthCheckFuture<'_> =
        Box::pin(async { service.check_ready().await.map_err(|e| e.to_string()) });

    run_health_checks(vec![("vector_store", store_check)])
        .await
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn doc() -> Value {
        serde_json::to_value(ApiDoc::openapi()).unwrap()
    }

    #[test]
    fn test_both_post_routes_document_every_client_error() {
        let doc = doc();

        for path in ["/document", "/ask"] {
            let pointer = format!("/paths/{}/post/responses/400/$ref", path.replace('/', "~1"));
            assert_eq!(
                doc.pointer(&pointer).and_then(Value::as_str),
                Some("#/components/responses/ClientErrorResponse"),
                "{path}"
            );
        }
    }

    #[test]
    fn test_client_error_response_has_an_example_per_code() {
        let doc = doc();
        let examples = doc
            .pointer("/components/responses/ClientErrorResponse/content/application~1json/examples")
            .and_then(Value::as_object)
            .unwrap();

        let mut codes: Vec<&str> = examples
            .values()
            .filter_map(|example| example.pointer("/value/code").and_then(Value::as_str))
            .collect();
        codes.sort_unstable();

        assert_eq!(codes, ["BAD_REQUEST", "JSON_EXTRACTION", "UPSTREAM_ERROR"]);
    }
}
