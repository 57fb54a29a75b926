mod gemini;
mod provider;

pub use gemini::GeminiGenerationProvider;
pub use provider::GenerationProvider;

#[cfg(test)]
pub use provider::MockGenerationProvider;
