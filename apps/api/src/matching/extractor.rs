//! Text feature extraction — skill keywords and years-of-experience signals.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::entities::EntityRecognizer;
use crate::matching::vocabulary::SKILL_KEYWORDS;

/// "5 years of experience", "5+ years exp", "10 yrs experience", "3 years in".
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"([0-9]+)\s*\+?\s*years?\s*(?:of\s*)?(?:experience|exp)",
        r"([0-9]+)\s*\+?\s*yrs?\s*(?:experience|exp)",
        r"([0-9]+)\s*\+?\s*years?\s*in",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern is valid"))
    .collect()
});

/// Extracts skills from free text.
///
/// Vocabulary keywords found as case-insensitive substrings come first, in
/// vocabulary order. Skill-like entities reported by `recognizer` follow, in
/// order of appearance, lower-cased and de-duplicated.
pub fn extract_skills(text: &str, recognizer: &dyn EntityRecognizer) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let mut skills: Vec<String> = SKILL_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .map(|kw| kw.to_string())
        .collect();

    for span in recognizer.extract_entities(text) {
        if !span.label.is_skill_like() {
            continue;
        }
        let entity = span.text.trim().to_lowercase();
        if !entity.is_empty() && !skills.contains(&entity) {
            skills.push(entity);
        }
    }

    skills
}

/// Returns the largest "N years" figure mentioned in `text`, or 0.
pub fn extract_experience_years(text: &str) -> u32 {
    let text_lower = text.to_lowercase();

    EXPERIENCE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(&text_lower))
        .filter_map(|caps| caps.get(1))
        // Digits only, so a parse failure is overflow.
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .max()
        .unwrap_or(0)
}
