//! Matching operations — validation, orchestration and truncation around the
//! extractor, scorer, ranker and explainer.
//!
//! `JobMatcher` holds the only shared state: the read-only entity recognizer
//! chosen at startup. Every operation is otherwise a pure function of its input.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::entities::{EntityRecognizer, NullRecognizer};
use crate::matching::explainer::{enhance_summary, improvement_suggestions, recommendations_for_job};
use crate::matching::extractor::{extract_experience_years, extract_skills};
use crate::matching::ranker::{average_score, matched_skills, missing_skills, rank_candidates, MatchResult};
use crate::matching::similarity::compute_similarity;
use crate::models::candidate::{CandidateProfile, ExperienceEntry};

const KEY_SKILLS_LIMIT: usize = 8;
const RANKED_LIMIT: usize = 10;
const MISSING_SKILLS_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct JobAnalysis {
    pub key_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub experience_years: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub ranked_candidates: Vec<MatchResult>,
    pub total_candidates: usize,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeMatch {
    /// Similarity as a percentage, two decimal places.
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhancedSummary {
    pub enhanced_summary: String,
}

#[derive(Debug, Clone)]
pub struct JobMatcher {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(Arc::new(NullRecognizer))
    }
}

impl JobMatcher {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    pub fn recognizer_backend(&self) -> &'static str {
        self.recognizer.backend()
    }

    /// Key skills, tailoring advice and required experience for a job description.
    pub fn analyze_job(&self, job_description: &str) -> Result<JobAnalysis, AppError> {
        if job_description.trim().is_empty() {
            return Err(AppError::Validation("Job description is required".to_string()));
        }

        let found_skills = extract_skills(job_description, self.recognizer.as_ref());
        let recommendations = recommendations_for_job(job_description, &found_skills);
        let experience_years = extract_experience_years(job_description);

        info!(
            skills = found_skills.len(),
            experience_years, "Job description analyzed"
        );

        Ok(JobAnalysis {
            key_skills: found_skills.into_iter().take(KEY_SKILLS_LIMIT).collect(),
            recommendations,
            experience_years,
        })
    }

    /// Ranks candidates against a job; returns the top ten plus totals.
    pub fn rank(
        &self,
        job_description: &str,
        candidates: Vec<CandidateProfile>,
    ) -> Result<RankingReport, AppError> {
        if job_description.trim().is_empty() || candidates.is_empty() {
            return Err(AppError::Validation(
                "Job description and candidates are required".to_string(),
            ));
        }

        let total_candidates = candidates.len();
        let mut ranked = rank_candidates(job_description, candidates, self.recognizer.as_ref());
        let avg_score = average_score(&ranked);
        ranked.truncate(RANKED_LIMIT);

        info!(total_candidates, avg_score, "Candidates ranked");

        Ok(RankingReport {
            ranked_candidates: ranked,
            total_candidates,
            avg_score,
        })
    }

    /// Scores one resume against a job and lists gaps to close.
    pub fn match_resume(
        &self,
        job_description: &str,
        resume: Option<&CandidateProfile>,
    ) -> Result<ResumeMatch, AppError> {
        let resume = match resume {
            Some(r) if !job_description.trim().is_empty() && !r.is_blank() => r,
            _ => {
                return Err(AppError::Validation(
                    "Job description and resume data are required".to_string(),
                ))
            }
        };

        let similarity = compute_similarity(job_description, resume);
        let job_skills = extract_skills(job_description, self.recognizer.as_ref());

        let matched = matched_skills(&job_skills, resume);
        let mut missing = missing_skills(&job_skills, resume);
        missing.truncate(MISSING_SKILLS_LIMIT);

        let improvement_suggestions =
            improvement_suggestions(job_description, resume, self.recognizer.as_ref());

        info!(
            similarity,
            matched = matched.len(),
            "Resume matched against job"
        );

        Ok(ResumeMatch {
            match_score: round_percent(similarity),
            matched_skills: matched,
            missing_skills: missing,
            improvement_suggestions,
        })
    }

    pub fn enhance_summary(
        &self,
        summary: &str,
        skills: &[String],
        experience: &[ExperienceEntry],
    ) -> EnhancedSummary {
        EnhancedSummary {
            enhanced_summary: enhance_summary(summary, skills, experience),
        }
    }
}

/// `ratio` as a percentage rounded to two decimal places.
fn round_percent(ratio: f64) -> f64 {
    (ratio * 100.0 * 100.0).round() / 100.0
}
