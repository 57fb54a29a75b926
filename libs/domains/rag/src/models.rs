use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dense vector produced by an embedding model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }
}

/// One record written to the vector store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub class: String,
    pub text: String,
    pub vector: Vec<f32>,
}

/// A piece of a generated candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text(String),
    /// Anything that isn't plain text (inline data, function calls, ...).
    Other { kind: String },
}

impl ContentPart {
    pub fn text(value: impl Into<String>) -> Self {
        ContentPart::Text(value.into())
    }
}

/// One answer candidate from the generation model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Candidate {
    pub parts: Vec<ContentPart>,
    pub finish_reason: Option<String>,
}

impl Candidate {
    pub fn from_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            parts,
            finish_reason: None,
        }
    }
}

// ============================================================================
// HTTP DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddDocumentsRequest {
    /// Documents to embed and store, one object per entry
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskQuestionRequest {
    #[schema(example = "What is Rust?")]
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngestResponse {
    #[schema(example = "Successfully generated documents")]
    pub message: String,
}

impl IngestResponse {
    pub const SUCCESS: &'static str = "Successfully generated documents";

    pub fn success() -> Self {
        Self {
            message: Self::SUCCESS.to_string(),
        }
    }
}
