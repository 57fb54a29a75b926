//! Configuration for the RAG relay

use core_config::{AppInfo, FromEnv, app_info, env_required, server::ServerConfig};
use domain_rag::{GeminiConfig, WeaviateConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub gemini: GeminiConfig,
    pub weaviate: WeaviateConfig,
    /// Vector store class documents are written to and searched in
    pub collection_class: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let gemini = GeminiConfig::from_env()?;
        let collection_class = env_required("COLLECTION_CLASS")?;
        let weaviate = WeaviateConfig::from_env();

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            gemini,
            weaviate,
            collection_class,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [(&str, Option<&str>); 4] = [
        ("GEMINI_KEY", Some("key")),
        ("LLM_MODEL", Some("gemini-1.5-flash")),
        ("EMBEDDING_MODEL_NAME", Some("text-embedding-004")),
        ("COLLECTION_CLASS", Some("Document")),
    ];

    #[test]
    fn test_loads_with_required_vars() {
        temp_env::with_vars(REQUIRED, || {
            temp_env::with_vars_unset(["PORT", "HOST", "WEAVIATE_URL"], || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "rag_relay");
                assert_eq!(config.collection_class, "Document");
                assert_eq!(config.gemini.generation_model, "gemini-1.5-flash");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.weaviate.url, "http://localhost:5555");
            });
        });
    }

    #[test]
    fn test_missing_collection_class_fails() {
        temp_env::with_vars(REQUIRED, || {
            temp_env::with_var_unset("COLLECTION_CLASS", || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("COLLECTION_CLASS"));
            });
        });
    }

    #[test]
    fn test_missing_model_fails() {
        temp_env::with_vars(REQUIRED, || {
            temp_env::with_var("LLM_MODEL", Some(""), || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("LLM_MODEL"));
            });
        });
    }
}
