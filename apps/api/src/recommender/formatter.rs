use serde::{Deserialize, Serialize};

use crate::models::club::ClubRecord;

/// Public projection of a club returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRecommendation {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub summary: Option<String>,
}

impl From<&ClubRecord> for ClubRecommendation {
    fn from(club: &ClubRecord) -> Self {
        Self {
            name: club.name.clone(),
            short_name: club.short_name.clone(),
            summary: club.summary.clone(),
        }
    }
}

/// Projects ranked clubs onto the response shape. Order is preserved.
pub fn format_recommendations(clubs: &[&ClubRecord]) -> Vec<ClubRecommendation> {
    clubs.iter().copied().map(ClubRecommendation::from).collect()
}
