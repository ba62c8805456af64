use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single work-history entry as submitted by the resume form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub college: String,
    pub year: String,
}

/// Candidate profile built from an inbound request payload.
///
/// Every field defaults when absent. Fields the matcher does not read
/// (name, email, achievements, ...) are kept in `extra` so they can be echoed
/// back unchanged in ranking results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub about: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateProfile {
    /// Non-blank skills, trimmed and lower-cased, in submission order.
    pub fn normalized_skills(&self) -> Vec<String> {
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Experience entries that name a company.
    pub fn filled_experience_count(&self) -> usize {
        self.experience
            .iter()
            .filter(|e| !e.company.trim().is_empty())
            .count()
    }

    /// Projects with a title or a description.
    pub fn filled_project_count(&self) -> usize {
        self.projects
            .iter()
            .filter(|p| !p.title.trim().is_empty() || !p.description.trim().is_empty())
            .count()
    }

    /// Education entries that name a degree.
    pub fn filled_education_count(&self) -> usize {
        self.education
            .iter()
            .filter(|e| !e.degree.trim().is_empty())
            .count()
    }

    /// True when the payload carried nothing at all: no summary, no list entries
    /// and no extra fields.
    pub fn is_blank(&self) -> bool {
        self.about.trim().is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.education.is_empty()
            && self.extra.is_empty()
    }

    /// Flattens the free-text parts of the profile into one document:
    /// summary, skills, experience descriptions, project descriptions.
    pub fn document_text(&self) -> String {
        let skills = self.skills.join(" ");
        let experience = self
            .experience
            .iter()
            .map(|e| e.description.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let projects = self
            .projects
            .iter()
            .map(|p| p.description.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        format!("{}\n{}\n{}\n{}", self.about, skills, experience, projects)
    }
}
