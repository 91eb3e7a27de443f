use serde::{Deserialize, Serialize};

use super::defaults;

/// Point values and thresholds for the recommendation rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Item category is one of the profile's interests.
    pub interest_match: f64,
    /// Item level is one of the profile's accepted levels.
    pub level_match: f64,
    /// Free-only tier and a free item.
    pub free_tier: f64,
    /// Budget tier and an item under the price ceiling.
    pub budget_tier: f64,
    /// Premium tier and an item at or above the price ceiling.
    pub premium_tier: f64,
    pub popularity: f64,
    pub quality: f64,
    pub bestseller: f64,
    pub novelty: f64,
    /// Item shares a category with something recently viewed.
    pub history_similarity: f64,
    /// Subtracted (as a positive magnitude) when the item was already viewed.
    pub viewed_penalty: f64,
    /// Price boundary between the budget and premium tiers.
    pub budget_price_ceiling: f64,
    /// Enrollment must be strictly greater than this for the popularity bonus.
    pub popularity_min_students: u64,
    /// Rating must be at least this for the quality bonus.
    pub quality_min_rating: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            interest_match: defaults::DEFAULT_INTEREST_MATCH_POINTS,
            level_match: defaults::DEFAULT_LEVEL_MATCH_POINTS,
            free_tier: defaults::DEFAULT_FREE_TIER_POINTS,
            budget_tier: defaults::DEFAULT_BUDGET_TIER_POINTS,
            premium_tier: defaults::DEFAULT_PREMIUM_TIER_POINTS,
            popularity: defaults::DEFAULT_POPULARITY_POINTS,
            quality: defaults::DEFAULT_QUALITY_POINTS,
            bestseller: defaults::DEFAULT_BESTSELLER_POINTS,
            novelty: defaults::DEFAULT_NOVELTY_POINTS,
            history_similarity: defaults::DEFAULT_HISTORY_SIMILARITY_POINTS,
            viewed_penalty: defaults::DEFAULT_VIEWED_PENALTY,
            budget_price_ceiling: defaults::DEFAULT_BUDGET_PRICE_CEILING,
            popularity_min_students: defaults::DEFAULT_POPULARITY_MIN_STUDENTS,
            quality_min_rating: defaults::DEFAULT_QUALITY_MIN_RATING,
        }
    }
}

impl ScoringConfig {
    /// Named point values, for validation and diagnostics.
    pub fn point_values(&self) -> [(&'static str, f64); 12] {
        [
            ("interest_match", self.interest_match),
            ("level_match", self.level_match),
            ("free_tier", self.free_tier),
            ("budget_tier", self.budget_tier),
            ("premium_tier", self.premium_tier),
            ("popularity", self.popularity),
            ("quality", self.quality),
            ("bestseller", self.bestseller),
            ("novelty", self.novelty),
            ("history_similarity", self.history_similarity),
            ("viewed_penalty", self.viewed_penalty),
            ("budget_price_ceiling", self.budget_price_ceiling),
        ]
    }
}
