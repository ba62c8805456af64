//! Candidate scoring: weighs text similarity, skill overlap, experience and
//! education into one number per candidate, then orders candidates by it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::entities::EntityRecognizer;
use crate::matching::extractor::{extract_experience_years, extract_skills};
use crate::matching::similarity::compute_similarity;
use crate::models::candidate::CandidateProfile;

/// Each filled education entry contributes this much, up to 1.0.
const EDUCATION_STEP: f64 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub similarity: f64,
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            similarity: 0.4,
            skill: 0.3,
            experience: 0.2,
            education: 0.1,
        }
    }
}

/// Weighted composite: 0.4*similarity + 0.3*skill + 0.2*experience + 0.1*education
pub fn compute_composite_score(
    similarity: f64,
    skill: f64,
    experience: f64,
    education: f64,
    weights: &MatchWeights,
) -> f64 {
    (weights.similarity * similarity
        + weights.skill * skill
        + weights.experience * experience
        + weights.education * education)
        .clamp(0.0, 1.0)
}

/// One scored candidate.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub candidate: CandidateProfile,
    pub score: f64,
    pub similarity_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub matched_skills: Vec<String>,
}

/// Job skills (in their extracted order) that appear among the candidate's skills.
pub fn matched_skills(job_skills: &[String], candidate: &CandidateProfile) -> Vec<String> {
    let candidate_skills = candidate.normalized_skills();
    job_skills
        .iter()
        .filter(|s| candidate_skills.contains(s))
        .cloned()
        .collect()
}

/// Job skills the candidate does not list.
pub fn missing_skills(job_skills: &[String], candidate: &CandidateProfile) -> Vec<String> {
    let candidate_skills = candidate.normalized_skills();
    job_skills
        .iter()
        .filter(|s| !candidate_skills.contains(s))
        .cloned()
        .collect()
}

/// Scores every candidate against the job and returns them best first.
///
/// Sorting is stable, so candidates with equal scores keep their input order.
pub fn rank_candidates(
    job_text: &str,
    candidates: Vec<CandidateProfile>,
    recognizer: &dyn EntityRecognizer,
) -> Vec<MatchResult> {
    let weights = MatchWeights::default();
    let job_skills = extract_skills(job_text, recognizer);
    let required_years = extract_experience_years(job_text);

    debug!(
        job_skills = job_skills.len(),
        required_years,
        candidates = candidates.len(),
        "Ranking candidates"
    );

    let mut results: Vec<MatchResult> = candidates
        .into_iter()
        .map(|candidate| {
            let similarity_score = compute_similarity(job_text, &candidate);

            let matched = matched_skills(&job_skills, &candidate);
            let skill_score = matched.len() as f64 / job_skills.len().max(1) as f64;

            let experience_score = (candidate.filled_experience_count() as f64
                / required_years.max(1) as f64)
                .min(1.0);

            let education_score =
                (candidate.filled_education_count() as f64 * EDUCATION_STEP).min(1.0);

            let score = compute_composite_score(
                similarity_score,
                skill_score,
                experience_score,
                education_score,
                &weights,
            );

            MatchResult {
                candidate,
                score,
                similarity_score,
                skill_score,
                experience_score,
                education_score,
                matched_skills: matched,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

/// Mean score, or 0.0 for no results.
pub fn average_score(results: &[MatchResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::entities::NullRecognizer;
    use crate::models::candidate::{EducationEntry, ExperienceEntry};

    const JOB: &str =
        "Looking for a Python developer with 3+ years of experience and AWS skills, agile team";

    fn candidate_with(skills: &[&str], companies: usize, degrees: usize) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: (0..companies)
                .map(|i| ExperienceEntry {
                    company: format!("Company {i}"),
                    ..Default::default()
                })
                .collect(),
            education: (0..degrees)
                .map(|_| EducationEntry {
                    degree: "BSc".into(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_combined_score_full() {
        let w = MatchWeights::default();
        let score = compute_composite_score(1.0, 1.0, 1.0, 1.0, &w);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_combined_score_partial() {
        let w = MatchWeights::default();
        // 0.4*0.5 + 0.3*1.0 + 0.2*0.5 + 0.1*0.0 = 0.2 + 0.3 + 0.1 = 0.6
        let score = compute_composite_score(0.5, 1.0, 0.5, 0.0, &w);
        assert!((score - 0.6).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_end_to_end_python_aws_candidate() {
        let candidate = candidate_with(&["Python", "AWS", "Docker"], 1, 0);
        let results = rank_candidates(JOB, vec![candidate], &NullRecognizer);
        let r = &results[0];

        // Job skills are python, aws, agile.
        assert!((r.skill_score - 2.0 / 3.0).abs() < 1e-9);
        assert!((r.experience_score - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(r.education_score, 0.0);
        assert!(r.similarity_score > 0.0);
        assert_eq!(r.matched_skills, vec!["python", "aws"]);
    }

    #[test]
    fn test_results_sorted_descending() {
        let candidates = vec![
            candidate_with(&[], 0, 0),
            candidate_with(&["Python", "AWS"], 3, 2),
            candidate_with(&["Python"], 1, 0),
        ];
        let results = rank_candidates(JOB, candidates, &NullRecognizer);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(results[0].candidate.skills, vec!["Python", "AWS"]);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let mut first = candidate_with(&["Python"], 1, 0);
        first.extra.insert("name".into(), "first".into());
        let mut second = first.clone();
        second.extra.insert("name".into(), "second".into());
        let mut third = first.clone();
        third.extra.insert("name".into(), "third".into());

        let results = rank_candidates(JOB, vec![first, second, third], &NullRecognizer);
        let names: Vec<_> = results
            .iter()
            .map(|r| r.candidate.extra["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_candidate_list() {
        let results = rank_candidates(JOB, vec![], &NullRecognizer);
        assert!(results.is_empty());
        assert_eq!(average_score(&results), 0.0);
    }

    #[test]
    fn test_scores_are_bounded() {
        let candidates = vec![
            candidate_with(&["Python", "AWS", "Agile"], 10, 10),
            candidate_with(&[], 0, 0),
        ];
        for r in rank_candidates(JOB, candidates, &NullRecognizer) {
            for s in [
                r.score,
                r.similarity_score,
                r.skill_score,
                r.experience_score,
                r.education_score,
            ] {
                assert!((0.0..=1.0).contains(&s), "Score {s} out of range");
            }
        }
    }

    #[test]
    fn test_education_capped_at_one() {
        let results = rank_candidates(JOB, vec![candidate_with(&[], 0, 7)], &NullRecognizer);
        assert_eq!(results[0].education_score, 1.0);
    }

    #[test]
    fn test_no_required_years_counts_single_role_as_full() {
        let results = rank_candidates(
            "Python developer",
            vec![candidate_with(&[], 1, 0)],
            &NullRecognizer,
        );
        assert_eq!(results[0].experience_score, 1.0);
    }

    #[test]
    fn test_job_without_skills_scores_zero_skill() {
        let results = rank_candidates(
            "Friendly baker wanted",
            vec![candidate_with(&["Python"], 0, 0)],
            &NullRecognizer,
        );
        assert_eq!(results[0].skill_score, 0.0);
    }

    #[test]
    fn test_missing_skills_complement_matched() {
        let job_skills: Vec<String> = vec!["python".into(), "aws".into(), "agile".into()];
        let candidate = candidate_with(&["python", " AGILE "], 0, 0);
        assert_eq!(matched_skills(&job_skills, &candidate), vec!["python", "agile"]);
        assert_eq!(missing_skills(&job_skills, &candidate), vec!["aws"]);
    }

    #[test]
    fn test_average_score() {
        let mut results = rank_candidates(
            JOB,
            vec![candidate_with(&[], 0, 0), candidate_with(&[], 0, 0)],
            &NullRecognizer,
        );
        results[0].score = 0.2;
        results[1].score = 0.6;
        assert!((average_score(&results) - 0.4).abs() < 1e-9);
    }
}
