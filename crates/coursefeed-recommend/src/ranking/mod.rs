//! RankingPipeline: score → sort → truncate.

pub mod reasons;
pub mod scorer;

use coursefeed_core::config::{FeedConfig, ScoringConfig};
use coursefeed_core::models::{CatalogItem, ScoredItem};
use coursefeed_core::traits::IJitterSource;

use scorer::ScoringContext;

/// Rule-table scoring followed by a stable descending sort and truncation.
#[derive(Debug, Clone, Default)]
pub struct RankingPipeline {
    weights: ScoringConfig,
    feed: FeedConfig,
}

impl RankingPipeline {
    pub fn new(weights: ScoringConfig, feed: FeedConfig) -> Self {
        Self { weights, feed }
    }

    pub fn rank(
        &self,
        catalog: &[CatalogItem],
        ctx: &ScoringContext<'_>,
        limit: usize,
        jitter: &mut dyn IJitterSource,
    ) -> Vec<ScoredItem> {
        // Stage 1: Rule-table scoring (every item exactly once).
        let scored = scorer::score(catalog, ctx, &self.weights, &self.feed, jitter);

        // Stage 2: Sort and truncate.
        sort_and_truncate(scored, limit)
    }
}

/// Sort by descending match score and keep the first `limit`.
/// The sort is stable: equal scores keep catalog order.
pub fn sort_and_truncate(mut scored: Vec<ScoredItem>, limit: usize) -> Vec<ScoredItem> {
    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    scored.truncate(limit);
    scored
}
