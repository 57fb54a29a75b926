//! Prompt assembly for grounded question answering.

/// Builds the generation prompt from the question and the retrieved passages.
///
/// Passages are joined with a single newline, in retrieval order. No escaping
/// is applied to either input.
pub fn build_prompt(question: &str, contexts: &[String]) -> String {
    let context = contexts.join("\n");

    format!(
        "
### Question:
{question}

### Context:
{context}
### Instructions:
- Provide a clear and concise response based on the context provided.
- Stay focused on the context and avoid making assumptions beyond the given data.
- Use the context to guide your response and provide a well-reasoned answer.
- Ensure that your response is relevant and addresses the question asked.
- If the question does not relate to the context, answer it as normal."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_starts_with_empty_line() {
        let prompt = build_prompt("q", &[]);
        assert!(prompt.starts_with("\n### Question:\nq\n"));
    }

    #[test]
    fn test_contexts_joined_in_order() {
        let contexts = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
        let prompt = build_prompt("What?", &contexts);

        assert!(prompt.contains("### Context:\nalpha\nbeta\ngamma\n### Instructions:"));
    }

    #[test]
    fn test_empty_context_leaves_blank_section() {
        let prompt = build_prompt("What is Rust?", &[]);
        assert!(prompt.contains("### Context:\n\n### Instructions:"));
    }

    #[test]
    fn test_inputs_are_not_escaped() {
        let prompt = build_prompt("### Question:\n{x}", &["\"quoted\"".to_string()]);

        assert!(prompt.contains("\n### Question:\n### Question:\n{x}\n"));
        assert!(prompt.contains("\"quoted\""));
    }

    #[test]
    fn test_prompt_ends_with_last_instruction() {
        let prompt = build_prompt("q", &["c".to_string()]);
        assert!(prompt.ends_with("- If the question does not relate to the context, answer it as normal."));
    }
}
