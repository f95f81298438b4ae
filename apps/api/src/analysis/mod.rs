// Bias analysis: prompt construction, the single model call, and response validation.
// All model calls go through llm_client — no direct Gemini HTTP calls here.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validation;
