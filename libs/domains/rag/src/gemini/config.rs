use core_config::{env_or_default, env_required};

use crate::error::RagResult;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API configuration
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub embedding_model: String,
    pub generation_model: String,
}

impl GeminiConfig {
    pub fn new(
        api_key: impl Into<String>,
        embedding_model: impl Into<String>,
        generation_model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            embedding_model: embedding_model.into(),
            generation_model: generation_model.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `GEMINI_KEY`, `EMBEDDING_MODEL_NAME` and `LLM_MODEL` (all required)
    /// plus the optional `GEMINI_BASE_URL`.
    pub fn from_env() -> RagResult<Self> {
        Ok(Self {
            api_key: env_required("GEMINI_KEY")?,
            base_url: env_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            embedding_model: env_required("EMBEDDING_MODEL_NAME")?,
            generation_model: env_required("LLM_MODEL")?,
        })
    }

    /// Full URL for `method` on `model`, e.g. `.../models/gemini-pro:generateContent`.
    pub fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/{}:{}",
            self.base_url.trim_end_matches('/'),
            model_path(model),
            method
        )
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("embedding_model", &self.embedding_model)
            .field("generation_model", &self.generation_model)
            .finish()
    }
}

/// Resource name for a model; bare names get the `models/` prefix.
pub(crate) fn model_path(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}
