//! Analysis Client — one bounded model call per job description, classified into
//! success or exactly one of three error kinds.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::build_prompt;
use crate::analysis::validation::validate_analysis;
use crate::llm_client::{strip_json_fences, LlmError, ModelClient};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// The call failed, returned a non-success status, or timed out. The user may retry.
    #[error("The analysis service is unavailable: {0}")]
    ServiceUnavailable(String),

    /// The model answered with something that is not JSON.
    #[error("The analysis service returned a malformed response: {0}")]
    MalformedResponse(String),

    /// The model answered with JSON of the wrong shape.
    #[error("The analysis response did not match the expected format: {0}")]
    SchemaMismatch(String),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent { .. } => AnalysisError::MalformedResponse(err.to_string()),
            LlmError::Http(_) | LlmError::Api { .. } | LlmError::Envelope(_) => {
                AnalysisError::ServiceUnavailable(err.to_string())
            }
        }
    }
}

/// Runs bias analyses against an injected model client.
#[derive(Clone)]
pub struct Analyzer {
    client: Arc<dyn ModelClient>,
    timeout: Duration,
}

impl Analyzer {
    pub fn new(client: Arc<dyn ModelClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub async fn analyze(&self, job_description: &str) -> Result<AnalysisResult, AnalysisError> {
        let prompt = build_prompt(job_description);

        let text = tokio::time::timeout(self.timeout, self.client.generate_json(&prompt))
            .await
            .map_err(|_| {
                warn!("Model call exceeded {}s", self.timeout.as_secs());
                AnalysisError::ServiceUnavailable(format!(
                    "no response within {} seconds",
                    self.timeout.as_secs()
                ))
            })??;

        let result = parse_analysis(&text)?;
        debug!(
            "Analysis complete: {} flagged phrase(s), {} tip(s)",
            result.biased_phrases.len(),
            result.tips().len()
        );
        Ok(result)
    }
}

/// Parses raw model text into a validated result.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let value: serde_json::Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    validate_analysis(&value).map_err(|e| AnalysisError::SchemaMismatch(e.to_string()))
}
