mod client;
mod config;
mod query;

pub use client::WeaviateStore;
pub use config::{DEFAULT_WEAVIATE_URL, WeaviateConfig};
