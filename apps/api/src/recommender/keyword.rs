//! Keyword matching — ranks clubs by how often the user's interests appear in
//! their name, summary and description.
//!
//! Deterministic and synchronous. Matching is case-insensitive substring
//! counting: keyword "eng" hits "Engineering".

use tracing::debug;

use crate::corpus::Corpus;
use crate::models::club::ClubRecord;
use crate::recommender::{format_recommendations, ClubRecommendation, RecommendationStrategy, UserData};

pub const DEFAULT_LIMIT: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Strategy
// ────────────────────────────────────────────────────────────────────────────

/// Default recommendation backend. Owns its corpus for its whole lifetime.
pub struct KeywordMatchStrategy {
    corpus: Corpus,
    limit: usize,
}

impl KeywordMatchStrategy {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_limit(corpus, DEFAULT_LIMIT)
    }

    pub fn with_limit(corpus: Corpus, limit: usize) -> Self {
        Self { corpus, limit }
    }
}

impl RecommendationStrategy for KeywordMatchStrategy {
    fn recommend(&self, user_data: &UserData) -> Vec<ClubRecommendation> {
        let clubs = recommend_clubs(&user_data.interests, &self.corpus, self.limit);
        format_recommendations(&clubs)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// A club paired with its score for the current request.
#[derive(Debug, Clone, Copy)]
pub struct ScoredClub<'a> {
    pub club: &'a ClubRecord,
    pub score: usize,
}

/// Splits interests on commas, trimming and lower-casing each piece.
/// Empty pieces (e.g. from a trailing comma) are dropped; duplicates are kept.
pub fn tokenize_interests(interests: &str) -> Vec<String> {
    interests
        .split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// Name, summary and description joined by single spaces, lower-cased.
/// Missing fields contribute an empty string. Markup is left in place.
pub fn searchable_text(club: &ClubRecord) -> String {
    [
        club.name.as_deref(),
        club.summary.as_deref(),
        club.description_html.as_deref(),
    ]
    .map(|field| field.unwrap_or(""))
    .join(" ")
    .to_lowercase()
}

/// Sum over keywords of non-overlapping occurrences in the club's searchable text.
pub fn calculate_match_score(club: &ClubRecord, keywords: &[String]) -> usize {
    let text = searchable_text(club);
    keywords
        .iter()
        .filter(|keyword| !keyword.is_empty())
        .map(|keyword| text.matches(keyword.as_str()).count())
        .sum()
}

/// Scores every club, drops zero scores and sorts by score descending.
/// Equal scores keep corpus order, i.e. ascending club id.
pub fn rank_clubs<'a>(corpus: &'a Corpus, keywords: &[String]) -> Vec<ScoredClub<'a>> {
    let mut scored: Vec<ScoredClub<'a>> = corpus
        .clubs()
        .map(|club| ScoredClub {
            club,
            score: calculate_match_score(club, keywords),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    // Stable sort, so ties stay in id order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Returns at most `limit` matching clubs, best first.
/// Empty or whitespace-only interests yield no recommendations.
pub fn recommend_clubs<'a>(interests: &str, corpus: &'a Corpus, limit: usize) -> Vec<&'a ClubRecord> {
    if interests.trim().is_empty() {
        return Vec::new();
    }

    let keywords = tokenize_interests(interests);
    let ranked = rank_clubs(corpus, &keywords);
    debug!(
        "{} of {} clubs matched keywords {:?}",
        ranked.len(),
        corpus.len(),
        keywords
    );

    ranked.into_iter().take(limit).map(|scored| scored.club).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
