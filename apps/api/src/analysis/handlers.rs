//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::{AnalysisRequest, AnalysisResult, DISCLAIMER};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub bias_detected: bool,
    pub result: AnalysisResult,
    pub disclaimer: &'static str,
}

/// POST /api/v1/analyze
///
/// Runs one bias analysis. Nothing is stored; the id only correlates log lines.
/// Body rejections are returned in the same error envelope as every other failure.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;

    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a job description to analyze.".to_string(),
        ));
    }

    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        chars = request.job_description.chars().count(),
        "Analyzing job description"
    );

    let result = state.analyzer.analyze(&request.job_description).await?;

    info!(
        %analysis_id,
        flagged = result.biased_phrases.len(),
        "Analysis succeeded"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        bias_detected: result.has_bias(),
        result,
        disclaimer: DISCLAIMER,
    }))
}
