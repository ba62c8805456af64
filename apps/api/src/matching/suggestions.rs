//! Trending-skill suggestions drawn from a fixed catalogue.
//!
//! The random source is a parameter so callers (and tests) choose it.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const PICKS_PER_CATEGORY: usize = 2;
const MAX_SUGGESTIONS: usize = 8;

pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming",
        &["Python", "JavaScript", "Java", "Go", "Rust", "TypeScript"],
    ),
    (
        "Web Development",
        &["React", "Vue.js", "Angular", "Node.js", "Next.js", "Svelte"],
    ),
    (
        "Data & AI",
        &["Machine Learning", "Data Science", "TensorFlow", "PyTorch", "Pandas", "NumPy"],
    ),
    (
        "Cloud & DevOps",
        &["AWS", "Azure", "Docker", "Kubernetes", "Terraform", "Jenkins"],
    ),
    (
        "Databases",
        &["PostgreSQL", "MongoDB", "Redis", "Elasticsearch", "GraphQL", "MySQL"],
    ),
];

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillSuggestions {
    pub suggested_skills: Vec<&'static str>,
    pub categories: Vec<SkillCategory>,
}

/// Picks two skills per category, then up to eight of those picks.
pub fn suggest_skills<R: Rng + ?Sized>(rng: &mut R) -> SkillSuggestions {
    let mut pool: Vec<&'static str> = SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, skills)| {
            skills
                .choose_multiple(&mut *rng, PICKS_PER_CATEGORY.min(skills.len()))
                .copied()
                .collect::<Vec<_>>()
        })
        .collect();

    pool.shuffle(&mut *rng);
    pool.truncate(MAX_SUGGESTIONS);

    let categories = SKILL_CATEGORIES
        .iter()
        .map(|(name, skills)| SkillCategory {
            name: *name,
            skills: skills.to_vec(),
        })
        .collect();

    SkillSuggestions {
        suggested_skills: pool,
        categories,
    }
}
