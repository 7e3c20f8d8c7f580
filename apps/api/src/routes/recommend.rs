use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::recommender::{ClubRecommendation, UserData};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ClubRecommendation>,
}

/// POST /api/v1/recommend
///
/// Body: `{ "interests": "engineering, robotics, community service" }`.
/// Empty interests or no matches yield an empty list, never an error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<UserData>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Json(user_data) = payload?;

    let recommendations = state.recommender.get_recommendations(&user_data);
    info!(
        "Recommended {} clubs for interests {:?}",
        recommendations.len(),
        user_data.interests
    );

    Ok(Json(RecommendationsResponse { recommendations }))
}
