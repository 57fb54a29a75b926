use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use core_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("expected {expected} embeddings, got {actual}")]
    EmbeddingCountMismatch { expected: usize, actual: usize },

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("unexpected content part type {0}")]
    UnexpectedContentPart(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type RagResult<T> = Result<T, RagError>;

impl From<ConfigError> for RagError {
    fn from(err: ConfigError) -> Self {
        RagError::Config(err.to_string())
    }
}

/// Every request-scoped failure is a client error; upstream messages pass through unchanged.
impl From<RagError> for AppError {
    fn from(err: RagError) -> Self {
        match err {
            RagError::EmbeddingCountMismatch { .. } => AppError::BadRequest(err.to_string()),
            RagError::Embedding(msg) | RagError::VectorStore(msg) | RagError::Generation(msg) => {
                AppError::Upstream(msg)
            }
            RagError::UnexpectedContentPart(_) => AppError::Upstream(err.to_string()),
            RagError::Config(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for RagError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_helpers::ErrorCode;

    #[test]
    fn test_mismatch_message_names_both_counts() {
        let err = RagError::EmbeddingCountMismatch {
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "expected 2 embeddings, got 1");
    }

    #[test]
    fn test_upstream_errors_keep_their_message() {
        let app: AppError = RagError::VectorStore("connection refused".into()).into();
        assert!(matches!(&app, AppError::Upstream(msg) if msg == "connection refused"));
        assert_eq!(
            app.status_and_code(),
            (StatusCode::BAD_REQUEST, ErrorCode::UpstreamError)
        );
    }

    #[test]
    fn test_request_errors_are_all_bad_request() {
        let errors = [
            RagError::EmbeddingCountMismatch {
                expected: 3,
                actual: 0,
            },
            RagError::Embedding("quota".into()),
            RagError::VectorStore("down".into()),
            RagError::Generation("blocked".into()),
            RagError::UnexpectedContentPart("functionCall".into()),
        ];

        for err in errors {
            let app: AppError = err.into();
            assert_eq!(app.status_and_code().0, StatusCode::BAD_REQUEST);
        }
    }
}
