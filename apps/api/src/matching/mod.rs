// Candidate–job matching engine.
// Implements: skill/experience extraction, TF-IDF similarity, composite ranking,
// recommendations, and the HTTP handlers that expose them.

pub mod entities;
pub mod explainer;
pub mod extractor;
pub mod handlers;
pub mod ranker;
pub mod service;
pub mod similarity;
pub mod suggestions;
pub mod vocabulary;
