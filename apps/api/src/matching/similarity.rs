//! TF-IDF cosine similarity between a job description and a candidate document.
//!
//! The corpus is always exactly `{job text, candidate document}` and is rebuilt
//! on every call: IDF depends on that pair, so nothing is cached across calls.

use std::collections::{BTreeMap, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::candidate::CandidateProfile;

/// Cap on the number of features kept across the corpus.
const MAX_FEATURES: usize = 1000;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Similarity between a job description and a candidate, in [0, 1].
///
/// Degenerate inputs (no usable terms on either side) score 0.0.
pub fn compute_similarity(job_text: &str, candidate: &CandidateProfile) -> f64 {
    text_similarity(job_text, &candidate.document_text())
}

/// Cosine similarity of the TF-IDF vectors of `a` and `b`, fitted on `{a, b}`.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let docs = [term_counts(a), term_counts(b)];

    let vocabulary = build_vocabulary(&docs);
    if vocabulary.is_empty() {
        debug!("Empty TF-IDF vocabulary; similarity defaults to 0.0");
        return 0.0;
    }

    let n_docs = docs.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let df = docs.iter().filter(|d| d.contains_key(term.as_str())).count() as f64;
            ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    let left = weighted_vector(&docs[0], &vocabulary, &idf);
    let right = weighted_vector(&docs[1], &vocabulary, &idf);

    cosine(&left, &right).clamp(0.0, 1.0)
}

/// Unigram and bigram counts after lower-casing and stop-word removal.
fn term_counts(text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !STOP_WORDS.contains(*t))
        .collect();

    let mut counts = HashMap::new();
    for token in &tokens {
        *counts.entry((*token).to_string()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// Corpus vocabulary, limited to the `MAX_FEATURES` most frequent terms.
/// Ties break on term order; the result is sorted by term.
fn build_vocabulary(docs: &[HashMap<String, usize>]) -> Vec<String> {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in docs {
        for (term, count) in doc {
            *totals.entry(term.as_str()).or_insert(0) += count;
        }
    }

    let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
    if ranked.len() > MAX_FEATURES {
        // Stable sort keeps alphabetical order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(MAX_FEATURES);
        ranked.sort_by(|a, b| a.0.cmp(b.0));
    }

    ranked.into_iter().map(|(term, _)| term.to_string()).collect()
}

fn weighted_vector(
    counts: &HashMap<String, usize>,
    vocabulary: &[String],
    idf: &[f64],
) -> Vec<f64> {
    vocabulary
        .iter()
        .zip(idf)
        .map(|(term, w)| counts.get(term).copied().unwrap_or(0) as f64 * w)
        .collect()
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let score = text_similarity("rust backend services", "rust backend services");
        assert!((score - 1.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(text_similarity("python developer", "gardening tulips"), 0.0);
    }

    #[test]
    fn test_both_empty_score_zero() {
        assert_eq!(text_similarity("", ""), 0.0);
    }

    #[test]
    fn test_only_stop_words_score_zero() {
        assert_eq!(text_similarity("the and of", "with which we"), 0.0);
    }

    #[test]
    fn test_one_side_empty_scores_zero() {
        assert_eq!(text_similarity("python developer", ""), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let score = text_similarity(
            "python developer with aws experience",
            "experienced python engineer building data pipelines",
        );
        assert!(score > 0.0 && score < 1.0, "Score was {score}");
    }

    #[test]
    fn test_single_character_tokens_are_ignored() {
        assert_eq!(text_similarity("c r", "c r"), 0.0);
    }

    #[test]
    fn test_term_counts_include_bigrams() {
        let counts = term_counts("Machine learning engineer");
        assert_eq!(counts.get("machine learning"), Some(&1));
        assert_eq!(counts.get("learning engineer"), Some(&1));
        assert_eq!(counts.get("engineer"), Some(&1));
    }

    #[test]
    fn test_bigrams_skip_stop_words() {
        let counts = term_counts("data of science");
        assert_eq!(counts.get("data science"), Some(&1));
        assert!(!counts.contains_key("of"));
    }

    #[test]
    fn test_vocabulary_is_capped() {
        let text: String = (0..1200).map(|i| format!("term{i} ")).collect();
        let docs = [term_counts(&text), term_counts("")];
        assert_eq!(build_vocabulary(&docs).len(), MAX_FEATURES);
    }

    #[test]
    fn test_candidate_similarity_uses_profile_text() {
        let candidate = CandidateProfile {
            about: "Python developer".into(),
            skills: vec!["AWS".into()],
            ..Default::default()
        };
        let score = compute_similarity("Python developer on AWS", &candidate);
        assert!(score > 0.0 && score <= 1.0, "Score was {score}");
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = "rust tokio axum services";
        let b = "axum web services written in rust";
        assert!((text_similarity(a, b) - text_similarity(b, a)).abs() < 1e-12);
    }
}
