//! JSON body extractor with a uniform 400 rejection.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor whose every rejection renders as `400` with an [`ErrorResponse`] body.
///
/// Plain `axum::Json` answers 415 for a missing content type and 422 for a body
/// that parses but does not fit the target type; handlers using this extractor
/// answer 400 for all of them.
///
/// ```ignore
/// async fn ask(JsonBody(req): JsonBody<AskRequest>) -> impl IntoResponse { ... }
/// ```
///
/// [`ErrorResponse`]: crate::errors::ErrorResponse
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorCode, ErrorResponse};
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Echo {
        value: String,
    }

    async fn echo(JsonBody(body): JsonBody<Echo>) -> String {
        body.value
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    async fn send(content_type: Option<&str>, body: &'static str) -> (StatusCode, Vec<u8>) {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let response = app()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let (status, body) = send(Some("application/json"), r#"{"value":"hi"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"hi");
    }

    #[tokio::test]
    async fn test_rejections_are_bad_request() {
        for (content_type, body) in [
            (Some("application/json"), "{not json"),
            (Some("application/json"), r#"{"other":1}"#),
            (None, r#"{"value":"hi"}"#),
        ] {
            let (status, bytes) = send(content_type, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");

            let parsed: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(parsed.code, ErrorCode::JsonExtraction);
            assert!(!parsed.error.is_empty());
        }
    }
}
