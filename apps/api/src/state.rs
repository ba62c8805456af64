use std::sync::Arc;

use crate::matching::service::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless matcher. Holds the read-only entity recognizer selected at startup.
    pub matcher: Arc<JobMatcher>,
}
