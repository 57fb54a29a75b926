use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use super::{WeaviateConfig, query};
use crate::error::{RagError, RagResult};
use crate::models::StoredObject;
use crate::store::VectorStore;

/// Weaviate-backed implementation of [`VectorStore`] over its REST and GraphQL APIs.
pub struct WeaviateStore {
    client: Client,
    config: WeaviateConfig,
}

impl WeaviateStore {
    pub fn new(config: WeaviateConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: WeaviateConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: RequestBuilder) -> RagResult<Response> {
        request
            .send()
            .await
            .map_err(|e| RagError::VectorStore(e.to_string()))
    }
}

// ===== Wire types =====

#[derive(Debug, Serialize)]
struct BatchObjectsRequest<'a> {
    objects: Vec<BatchObject<'a>>,
}

#[derive(Debug, Serialize)]
struct BatchObject<'a> {
    class: &'a str,
    properties: TextProperties<'a>,
    vector: &'a [f32],
}

#[derive(Debug, Serialize)]
struct TextProperties<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BatchObjectResponse {
    #[serde(default)]
    result: Option<ObjectResult>,
}

#[derive(Debug, Deserialize)]
struct ObjectResult {
    #[serde(default)]
    errors: Option<ErrorList>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorList {
    #[serde(default)]
    error: Vec<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<GraphQlData>,
    #[serde(default)]
    errors: Vec<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlData {
    #[serde(rename = "Get", default)]
    get: HashMap<String, Option<Vec<TextHit>>>,
}

#[derive(Debug, Deserialize)]
struct TextHit {
    #[serde(default)]
    text: String,
}

/// Decodes a 2xx JSON body or reports the status with Weaviate's error messages.
async fn read_json<T: DeserializeOwned>(response: Response) -> RagResult<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| RagError::VectorStore(format!("Invalid Weaviate response: {e}")))
}

async fn check_status(response: Response) -> RagResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(RagError::VectorStore(format!(
        "Weaviate error ({}): {}",
        status,
        error_message(&body)
    )))
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorList>(body) {
        Ok(list) if !list.error.is_empty() => join_messages(&list.error),
        _ => body.to_string(),
    }
}

fn join_messages(errors: &[ErrorMessage]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// First per-object failure in a batch response, if any.
fn first_object_error(results: Vec<BatchObjectResponse>) -> Option<String> {
    results
        .into_iter()
        .filter_map(|r| r.result.and_then(|res| res.errors))
        .flat_map(|list| list.error)
        .map(|e| e.message)
        .next()
}

fn extract_texts(response: GraphQlResponse, class: &str) -> RagResult<Vec<String>> {
    if !response.errors.is_empty() {
        return Err(RagError::VectorStore(join_messages(&response.errors)));
    }

    let hits = response
        .data
        .and_then(|mut data| data.get.remove(class))
        .flatten()
        .unwrap_or_default();

    Ok(hits.into_iter().map(|hit| hit.text).collect())
}

#[async_trait]
impl VectorStore for WeaviateStore {
    async fn insert_batch(&self, objects: Vec<StoredObject>) -> RagResult<()> {
        let request = BatchObjectsRequest {
            objects: objects
                .iter()
                .map(|o| BatchObject {
                    class: &o.class,
                    properties: TextProperties { text: &o.text },
                    vector: &o.vector,
                })
                .collect(),
        };

        let response = self
            .send(self.client.post(self.url("/v1/batch/objects")).json(&request))
            .await?;
        let results: Vec<BatchObjectResponse> = read_json(response).await?;

        if let Some(message) = first_object_error(results) {
            return Err(RagError::VectorStore(message));
        }

        debug!(count = objects.len(), "Batch objects stored");
        Ok(())
    }

    async fn search_near_vector(
        &self,
        class: &str,
        vector: Vec<f32>,
        limit: u32,
    ) -> RagResult<Vec<String>> {
        let query = query::near_vector(class, &vector, limit)?;

        let response = self
            .send(
                self.client
                    .post(self.url("/v1/graphql"))
                    .json(&json!({ "query": query })),
            )
            .await?;
        let body: GraphQlResponse = read_json(response).await?;

        extract_texts(body, class)
    }

    async fn ensure_collection(&self, class: &str) -> RagResult<()> {
        query::validate_class(class)?;

        let response = self
            .send(self.client.get(self.url(&format!("/v1/schema/{class}"))))
            .await?;

        if response.status() != StatusCode::NOT_FOUND {
            check_status(response).await?;
            debug!(class, "Collection already exists");
            return Ok(());
        }

        let schema = json!({
            "class": class,
            "vectorizer": "none",
            "properties": [
                { "name": "text", "dataType": ["text"] }
            ]
        });
        let response = self
            .send(self.client.post(self.url("/v1/schema")).json(&schema))
            .await?;
        check_status(response).await?;

        info!(class, "Created collection");
        Ok(())
    }

    async fn is_ready(&self) -> RagResult<()> {
        let response = self
            .send(self.client.get(self.url("/v1/.well-known/ready")))
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_batch_request_shape() {
        let objects = [StoredObject {
            class: "Document".into(),
            text: "hello".into(),
            vector: vec![0.25, 0.5],
        }];
        let request = BatchObjectsRequest {
            objects: objects
                .iter()
                .map(|o| BatchObject {
                    class: &o.class,
                    properties: TextProperties { text: &o.text },
                    vector: &o.vector,
                })
                .collect(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"objects": [{"class": "Document", "properties": {"text": "hello"}, "vector": [0.25, 0.5]}]})
        );
    }

    #[test]
    fn test_first_object_error() {
        let results: Vec<BatchObjectResponse> = serde_json::from_value(json!([
            {"class": "Document", "result": {}},
            {"class": "Document", "result": {"errors": {"error": [{"message": "vector lengths don't match"}]}}},
            {"class": "Document", "result": {"errors": {"error": [{"message": "second"}]}}}
        ]))
        .unwrap();

        assert_eq!(
            first_object_error(results).as_deref(),
            Some("vector lengths don't match")
        );
    }

    #[test]
    fn test_clean_batch_has_no_error() {
        let results: Vec<BatchObjectResponse> =
            serde_json::from_value(json!([{"result": {"status": "SUCCESS"}}, {}])).unwrap();
        assert!(first_object_error(results).is_none());
    }

    fn graphql(value: Value) -> GraphQlResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_texts_reads_configured_class() {
        let body = graphql(json!({
            "data": {"Get": {"Article": [{"text": "a"}, {"text": "b"}]}}
        }));
        assert_eq!(extract_texts(body, "Article").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_texts_missing_class_is_empty() {
        let body = graphql(json!({"data": {"Get": {"Article": null}}}));
        assert!(extract_texts(body, "Article").unwrap().is_empty());

        let body = graphql(json!({"data": {"Get": {}}}));
        assert!(extract_texts(body, "Article").unwrap().is_empty());
    }

    #[test]
    fn test_graphql_errors_fail() {
        let body = graphql(json!({
            "data": {"Get": {"Article": null}},
            "errors": [{"message": "class Article not found"}]
        }));
        let err = extract_texts(body, "Article").unwrap_err();
        assert!(matches!(err, RagError::VectorStore(msg) if msg == "class Article not found"));
    }

    #[test]
    fn test_error_message_parsing() {
        assert_eq!(
            error_message(r#"{"error":[{"message":"no such class"}]}"#),
            "no such class"
        );
        assert_eq!(error_message("bad gateway"), "bad gateway");
    }
}
