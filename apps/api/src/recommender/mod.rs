//! Club recommendation: pluggable strategies behind a thin context wrapper.
//!
//! Default: `KeywordMatchStrategy` (substring counting over name, summary and
//! description). `AppState` holds a `RecommenderContext` built at startup.

pub mod context;
pub mod formatter;
pub mod keyword;

use serde::{Deserialize, Serialize};

pub use context::RecommenderContext;
pub use formatter::{format_recommendations, ClubRecommendation};
pub use keyword::KeywordMatchStrategy;

/// What the caller tells us about the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserData {
    /// Comma-separated free text, e.g. "engineering, robotics, art".
    pub interests: String,
}

impl UserData {
    pub fn new(interests: impl Into<String>) -> Self {
        Self {
            interests: interests.into(),
        }
    }
}

/// A recommendation backend. Implement this to swap ranking logic without
/// touching the route handler or the CLI.
pub trait RecommendationStrategy: Send + Sync {
    fn recommend(&self, user_data: &UserData) -> Vec<ClubRecommendation>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}
