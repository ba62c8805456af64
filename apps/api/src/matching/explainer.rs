//! Rule-based advice: what to stress for a job, what a resume is missing, and
//! a rewritten professional summary.

use crate::matching::entities::EntityRecognizer;
use crate::matching::extractor::extract_skills;
use crate::matching::ranker::missing_skills;
use crate::models::candidate::{CandidateProfile, ExperienceEntry};

const BASELINE_RECOMMENDATIONS: [&str; 3] = [
    "Highlight relevant technical skills prominently in your summary section",
    "Use action verbs and quantify achievements with specific metrics",
    "Tailor your project descriptions to match the job requirements",
];

const MAX_SUGGESTIONS: usize = 4;
const HIGHLIGHTED_SKILLS: usize = 3;
const MIN_PROJECTS: usize = 2;

const DEFAULT_SUMMARY: &str = "Dedicated professional with strong technical skills";
const SUMMARY_CLOSING: &str = "Proven track record of delivering high-quality solutions and driving business growth through technology innovation.";

/// Advice for tailoring a resume to `job_text`.
///
/// Baseline lines come first, then (in this order) a skills line when any
/// were found, an Agile line and a leadership line.
pub fn recommendations_for_job(job_text: &str, found_skills: &[String]) -> Vec<String> {
    let mut recommendations: Vec<String> =
        BASELINE_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect();

    if !found_skills.is_empty() {
        let top: Vec<&str> = found_skills
            .iter()
            .take(HIGHLIGHTED_SKILLS)
            .map(String::as_str)
            .collect();
        recommendations.push(format!("Emphasize your experience with: {}", top.join(", ")));
    }

    let text_lower = job_text.to_lowercase();

    if text_lower.contains("agile") || text_lower.contains("scrum") {
        recommendations.push("Highlight your experience with Agile methodologies".to_string());
    }

    if text_lower.contains("lead") || text_lower.contains("senior") {
        recommendations
            .push("Emphasize leadership experience and mentoring capabilities".to_string());
    }

    recommendations
}

/// Concrete resume fixes for one candidate, at most four.
pub fn improvement_suggestions(
    job_text: &str,
    candidate: &CandidateProfile,
    recognizer: &dyn EntityRecognizer,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let job_skills = extract_skills(job_text, recognizer);
    let missing = missing_skills(&job_skills, candidate);
    if !missing.is_empty() {
        let top: Vec<&str> = missing
            .iter()
            .take(HIGHLIGHTED_SKILLS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!("Consider adding these skills: {}", top.join(", ")));
    }

    if candidate.filled_project_count() < MIN_PROJECTS {
        suggestions
            .push("Add more project examples to demonstrate your technical abilities".to_string());
    }

    if candidate.about.trim().is_empty() {
        suggestions
            .push("Add a compelling professional summary highlighting your key strengths".to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Rewrites a professional summary around the candidate's top skills and
/// number of roles held.
pub fn enhance_summary(summary: &str, skills: &[String], experience: &[ExperienceEntry]) -> String {
    let base = match summary.trim() {
        "" => DEFAULT_SUMMARY,
        s => s,
    };

    let top_skills: Vec<&str> = skills
        .iter()
        .take(HIGHLIGHTED_SKILLS)
        .filter(|s| !s.trim().is_empty())
        .map(String::as_str)
        .collect();
    let skill_text = if top_skills.is_empty() {
        String::new()
    } else {
        format!(" with expertise in {}", top_skills.join(", "))
    };

    let roles = experience
        .iter()
        .filter(|e| !e.company.trim().is_empty())
        .count();
    let experience_text = if roles > 0 {
        format!(" and {roles}+ years of industry experience")
    } else {
        String::new()
    };

    format!("{base}{skill_text}{experience_text}. {SUMMARY_CLOSING}")
}
