use crate::errors::FeedResult;
use crate::models::{CatalogItem, ScoredItem, UserInterestProfile, ViewHistory};

/// Ranked, annotated recommendations for a profile/history pair.
pub trait IRecommender: Send + Sync {
    /// `limit` of `None` uses the configured default.
    fn recommend(
        &self,
        catalog: &[CatalogItem],
        profile: &UserInterestProfile,
        history: &ViewHistory,
        limit: Option<usize>,
    ) -> FeedResult<Vec<ScoredItem>>;
}
