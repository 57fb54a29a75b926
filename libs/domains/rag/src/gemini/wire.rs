use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GeminiConfig;
use crate::models::ContentPart;

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    pub parts: Vec<TextPart<'a>>,
}

impl<'a> Content<'a> {
    pub fn text(text: &'a str) -> Self {
        Self {
            role: None,
            parts: vec![TextPart { text }],
        }
    }

    pub fn user_text(text: &'a str) -> Self {
        Self {
            role: Some("user"),
            ..Self::text(text)
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Converts a raw response part into a [`ContentPart`].
///
/// Parts carrying a `text` field are text; anything else is reported by its
/// first field name (`inlineData`, `functionCall`, ...).
pub(crate) fn content_part(part: Map<String, Value>) -> ContentPart {
    match part.get("text").and_then(Value::as_str) {
        Some(text) => ContentPart::Text(text.to_string()),
        None => ContentPart::Other {
            kind: part
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| "empty".to_string()),
        },
    }
}

/// Attaches the API key header.
pub(crate) fn authorize(request: RequestBuilder, config: &GeminiConfig) -> RequestBuilder {
    request.header("x-goog-api-key", &config.api_key)
}

/// Decodes a successful JSON body, or turns a failed one into a readable message.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!(
            "Gemini API error ({}): {}",
            status,
            error_message(&body)
        ));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Invalid Gemini response: {e}"))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.to_string())
}
