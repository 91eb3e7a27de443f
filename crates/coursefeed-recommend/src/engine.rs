//! Recommender: implements IRecommender, orchestrates validation → scoring → ranking.

use std::collections::HashSet;

use coursefeed_core::config::CoursefeedConfig;
use coursefeed_core::errors::{FeedError, FeedResult};
use coursefeed_core::models::{CatalogItem, ScoredItem, UserInterestProfile, ViewHistory};
use coursefeed_core::traits::{IJitterSource, IRecommender};
use tracing::{debug, info};

use crate::jitter;
use crate::ranking::scorer::ScoringContext;
use crate::ranking::RankingPipeline;

/// The "recommended for you" feed. Holds no per-call state, so one instance can
/// serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    ranking: RankingPipeline,
    config: CoursefeedConfig,
}

impl Recommender {
    /// Build from an already-validated config. See [`Recommender::try_new`].
    pub fn new(config: CoursefeedConfig) -> Self {
        Self {
            ranking: RankingPipeline::new(config.scoring.clone(), config.feed.clone()),
            config,
        }
    }

    /// Validate `config`, then build.
    pub fn try_new(config: CoursefeedConfig) -> FeedResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &CoursefeedConfig {
        &self.config
    }

    /// Run a scoring pass with an explicit jitter source.
    pub fn recommend_with(
        &self,
        catalog: &[CatalogItem],
        profile: &UserInterestProfile,
        history: &ViewHistory,
        limit: Option<usize>,
        jitter: &mut dyn IJitterSource,
    ) -> FeedResult<Vec<ScoredItem>> {
        validate_catalog(catalog)?;

        let limit = limit.unwrap_or(self.config.feed.default_limit);
        if catalog.is_empty() || limit == 0 {
            debug!(catalog = catalog.len(), limit, "nothing to rank");
            return Ok(Vec::new());
        }

        if profile.is_cold_start() {
            debug!("cold-start profile, ranking on popularity, quality and novelty");
        }

        let ctx = ScoringContext::new(catalog, profile, history);
        debug!(
            catalog = catalog.len(),
            viewed = history.len(),
            history_categories = ctx.history_categories().len(),
            "scoring catalog"
        );

        let ranked = self.ranking.rank(catalog, &ctx, limit, jitter);

        info!(
            returned = ranked.len(),
            top_score = ranked.first().map(|s| s.match_score),
            "recommendation pass complete"
        );

        Ok(ranked)
    }
}

impl IRecommender for Recommender {
    fn recommend(
        &self,
        catalog: &[CatalogItem],
        profile: &UserInterestProfile,
        history: &ViewHistory,
        limit: Option<usize>,
    ) -> FeedResult<Vec<ScoredItem>> {
        let mut jitter = jitter::from_config(&self.config.feed);
        self.recommend_with(catalog, profile, history, limit, jitter.as_mut())
    }
}

/// Every item must satisfy its invariants and ids must be unique.
pub fn validate_catalog(catalog: &[CatalogItem]) -> FeedResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.len());
    for item in catalog {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(FeedError::invalid(format!(
                "duplicate catalog id {}",
                item.id
            )));
        }
    }
    Ok(())
}
