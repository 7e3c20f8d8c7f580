use tracing::debug;

use crate::recommender::{ClubRecommendation, RecommendationStrategy, UserData};

/// Binds one strategy at construction and forwards every request to it.
pub struct RecommenderContext {
    strategy: Box<dyn RecommendationStrategy>,
}

impl RecommenderContext {
    pub fn new(strategy: Box<dyn RecommendationStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn get_recommendations(&self, user_data: &UserData) -> Vec<ClubRecommendation> {
        let recommendations = self.strategy.recommend(user_data);
        debug!(
            "{} strategy returned {} recommendations",
            self.strategy.name(),
            recommendations.len()
        );
        recommendations
    }
}
