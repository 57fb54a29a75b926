//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

/// Every 400 a relay route can return, one example per error code.
#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body, unusable embeddings, or a downstream failure whose message is passed through",
    content_type = "application/json",
    examples(
        ("Malformed body" = (
            summary = "Body is not valid JSON for the route",
            value = json!({
                "error": "Failed to deserialize the JSON body into the target type: missing field `question`",
                "code": "JSON_EXTRACTION"
            })
        )),
        ("Embedding count mismatch" = (
            summary = "Provider returned a different number of embeddings than documents",
            value = json!({
                "error": "expected 2 embeddings, got 1",
                "code": "BAD_REQUEST"
            })
        )),
        ("Upstream failure" = (
            summary = "Model API or vector store rejected the call",
            value = json!({
                "error": "Gemini API error (400 Bad Request): API key not valid",
                "code": "UPSTREAM_ERROR"
            })
        ))
    )
)]
pub struct ClientErrorResponse(pub ErrorResponse);
