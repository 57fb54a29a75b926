use core_config::env_or_default;

pub const DEFAULT_WEAVIATE_URL: &str = "http://localhost:5555";

/// Weaviate connection configuration
#[derive(Debug, Clone)]
pub struct WeaviateConfig {
    pub url: String,
}

impl WeaviateConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Reads `WEAVIATE_URL`, defaulting to a local instance.
    pub fn from_env() -> Self {
        Self::new(env_or_default("WEAVIATE_URL", DEFAULT_WEAVIATE_URL))
    }
}

impl Default for WeaviateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WEAVIATE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_instance() {
        temp_env::with_var_unset("WEAVIATE_URL", || {
            assert_eq!(WeaviateConfig::from_env().url, "http://localhost:5555");
        });
    }

    #[test]
    fn test_reads_override() {
        temp_env::with_var("WEAVIATE_URL", Some("http://weaviate:8080"), || {
            assert_eq!(WeaviateConfig::from_env().url, "http://weaviate:8080");
        });
    }
}
