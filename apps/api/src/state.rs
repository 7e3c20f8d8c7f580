use std::sync::Arc;

use crate::recommender::RecommenderContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Strategy chosen at startup. Its corpus is read-only, so handlers share it freely.
    pub recommender: Arc<RecommenderContext>,
}
