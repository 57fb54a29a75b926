//! GraphQL text for `Get` queries.

use crate::error::{RagError, RagResult};

/// Weaviate class names are GraphQL type names: a capital letter, then word characters.
pub(crate) fn validate_class(class: &str) -> RagResult<()> {
    let mut chars = class.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(RagError::VectorStore(format!(
            "invalid collection class name: {class:?}"
        )))
    }
}

pub(crate) fn near_vector(class: &str, vector: &[f32], limit: u32) -> RagResult<String> {
    validate_class(class)?;
    let vector = serde_json::to_string(vector)
        .map_err(|e| RagError::VectorStore(format!("failed to encode vector: {e}")))?;

    Ok(format!(
        "{{ Get {{ {class}(nearVector: {{vector: {vector}}}, limit: {limit}) {{ text }} }} }}"
    ))
}
