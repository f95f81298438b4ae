use serde::{Deserialize, Serialize};

/// Shown beneath every analysis result.
pub const DISCLAIMER: &str = "Note: This tool provides general linguistic suggestions based on research on inclusive hiring. \
    It does not constitute legal or HR advice. \
    Always consult diversity and inclusion professionals for critical decisions.";

/// One user action's worth of input. Created per request, never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub job_description: String,
}

/// A phrase the model flagged, with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasedPhrase {
    pub phrase: String,
    pub reason: String,
}

/// Validated model output. `biased_phrases` and `rewritten_description` are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub biased_phrases: Vec<BiasedPhrase>,
    pub rewritten_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

impl AnalysisResult {
    pub fn has_bias(&self) -> bool {
        !self.biased_phrases.is_empty()
    }

    /// Tips to render; absent and empty are the same to the reader.
    pub fn tips(&self) -> &[String] {
        self.tips.as_deref().unwrap_or(&[])
    }
}
