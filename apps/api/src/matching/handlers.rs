//! Axum route handlers for the matching API.

use std::sync::Arc;

use axum::{extract::FromRequest, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::service::{EnhancedSummary, JobAnalysis, RankingReport, ResumeMatch};
use crate::matching::suggestions::{suggest_skills, SkillSuggestions};
use crate::models::candidate::{CandidateProfile, ExperienceEntry};
use crate::state::AppState;

/// JSON body extractor whose rejections render as the standard failure body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Successful responses carry `"success": true` next to the payload fields.
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

fn success<T: Serialize>(data: T) -> Json<Success<T>> {
    Json(Success {
        success: true,
        data,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct RankCandidatesRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
}

#[derive(Debug, Deserialize)]
pub struct MatchResumeRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_data: Option<CandidateProfile>,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceSummaryRequest {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/analyze-job
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeJobRequest>,
) -> Result<Json<Success<JobAnalysis>>, AppError> {
    let analysis = state.matcher.analyze_job(&request.job_description)?;
    Ok(success(analysis))
}

/// POST /api/v1/ai/rank-candidates
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RankCandidatesRequest>,
) -> Result<Json<Success<RankingReport>>, AppError> {
    debug!(candidates = request.candidates.len(), "Rank request received");

    // TF-IDF per candidate is CPU-bound; keep it off the async executor.
    let matcher = Arc::clone(&state.matcher);
    let report = tokio::task::spawn_blocking(move || {
        matcher.rank(&request.job_description, request.candidates)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}")))??;

    Ok(success(report))
}

/// POST /api/v1/ai/match-resume
pub async fn handle_match_resume(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MatchResumeRequest>,
) -> Result<Json<Success<ResumeMatch>>, AppError> {
    let matcher = Arc::clone(&state.matcher);
    let result = tokio::task::spawn_blocking(move || {
        matcher.match_resume(&request.job_description, request.resume_data.as_ref())
    })
    .await
    .map_err(|e| {
        AppError::Internal(anyhow::anyhow!("spawn_blocking failed in resume match: {e}"))
    })??;

    Ok(success(result))
}

/// POST /api/v1/ai/enhance-summary
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EnhanceSummaryRequest>,
) -> Result<Json<Success<EnhancedSummary>>, AppError> {
    let enhanced = state
        .matcher
        .enhance_summary(&request.summary, &request.skills, &request.experience);
    Ok(success(enhanced))
}

/// POST /api/v1/ai/suggest-skills
pub async fn handle_suggest_skills() -> Json<Success<SkillSuggestions>> {
    let suggestions = suggest_skills(&mut rand::thread_rng());
    success(suggestions)
}
