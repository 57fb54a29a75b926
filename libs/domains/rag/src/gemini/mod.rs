//! Shared plumbing for the Gemini REST API.
//!
//! Both the embedding and the generation providers talk to the same
//! `generativelanguage` endpoint with the same key, so configuration,
//! endpoint building and error decoding live here.

mod config;
pub(crate) mod wire;

pub use config::{DEFAULT_GEMINI_BASE_URL, GeminiConfig};
pub(crate) use config::model_path;
