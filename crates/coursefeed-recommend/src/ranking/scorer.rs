//! Weighted rule-table scorer.
//!
//! Rules, in attachment order: interest match, level match, price tier, popularity,
//! quality, bestseller, novelty, history similarity, viewed penalty. Jitter is added
//! last as its own step, then the score is clamped at zero.

use std::collections::{HashMap, HashSet};

use coursefeed_core::config::{FeedConfig, ScoringConfig};
use coursefeed_core::models::{
    CatalogItem, Category, PriceTier, ReasonKind, ScoreBreakdown, ScoredItem, UserInterestProfile,
    ViewHistory,
};
use coursefeed_core::traits::IJitterSource;

use super::reasons::ReasonSet;

/// Per-pass inputs shared by every item: the profile, the history, and the
/// categories the history resolves to.
#[derive(Debug)]
pub struct ScoringContext<'a> {
    pub profile: &'a UserInterestProfile,
    pub history: &'a ViewHistory,
    history_categories: HashSet<Category>,
}

impl<'a> ScoringContext<'a> {
    /// Resolve history ids against `catalog`. Ids no longer in the catalog are skipped.
    pub fn new(
        catalog: &[CatalogItem],
        profile: &'a UserInterestProfile,
        history: &'a ViewHistory,
    ) -> Self {
        let by_id: HashMap<&str, Category> = catalog
            .iter()
            .map(|item| (item.id.as_str(), item.category))
            .collect();
        let history_categories = history
            .iter()
            .filter_map(|id| by_id.get(id).copied())
            .collect();

        Self {
            profile,
            history,
            history_categories,
        }
    }

    pub fn history_categories(&self) -> &HashSet<Category> {
        &self.history_categories
    }

    pub fn was_viewed(&self, item: &CatalogItem) -> bool {
        self.history.contains(&item.id)
    }
}

/// Score every catalog item, in catalog order. Jitter is drawn once per item, in order.
pub fn score(
    catalog: &[CatalogItem],
    ctx: &ScoringContext<'_>,
    weights: &ScoringConfig,
    feed: &FeedConfig,
    jitter: &mut dyn IJitterSource,
) -> Vec<ScoredItem> {
    catalog
        .iter()
        .map(|item| {
            let (raw_score, reasons) = rule_score(item, ctx, weights);
            let drawn = jitter.sample(feed.jitter_max);
            ScoredItem {
                item: item.clone(),
                match_score: (raw_score + drawn).max(0.0),
                reasons: reasons.finish(feed.reason_ordering, feed.max_reasons),
                breakdown: ScoreBreakdown {
                    raw_score,
                    jitter: drawn,
                },
            }
        })
        .collect()
}

/// Sum the rule table for one item. Returns the unclamped score and its reasons.
pub fn rule_score(
    item: &CatalogItem,
    ctx: &ScoringContext<'_>,
    weights: &ScoringConfig,
) -> (f64, ReasonSet) {
    let profile = ctx.profile;
    let mut score = 0.0;
    let mut reasons = ReasonSet::new();

    if profile.categories.contains(&item.category) {
        score += weights.interest_match;
        reasons.insert(
            ReasonKind::InterestMatch,
            format!("Matches your interest in {}", item.category),
        );
    }

    if profile.levels.contains(&item.level) {
        score += weights.level_match;
    }

    score += price_tier_points(profile.price_tier, item.price, weights);

    if item.students > weights.popularity_min_students {
        score += weights.popularity;
        reasons.insert(
            ReasonKind::Popular,
            format!("Popular with {} students", item.students),
        );
    }

    if item.rating >= weights.quality_min_rating {
        score += weights.quality;
        reasons.insert(
            ReasonKind::Trending,
            format!("Highly rated ({:.1})", item.rating),
        );
    }

    if item.bestseller {
        score += weights.bestseller;
        reasons.insert(ReasonKind::Popular, "Bestseller");
    }

    if item.is_new {
        score += weights.novelty;
        reasons.insert(ReasonKind::New, "New course");
    }

    let viewed = ctx.was_viewed(item);

    if !viewed && ctx.history_categories.contains(&item.category) {
        score += weights.history_similarity;
        if !reasons.has(ReasonKind::InterestMatch) {
            reasons.insert(
                ReasonKind::SimilarToHistory,
                format!("Similar to {} courses you viewed", item.category),
            );
        }
    }

    if viewed {
        score -= weights.viewed_penalty;
    }

    (score, reasons)
}

/// Points for the profile's single price tier.
fn price_tier_points(tier: PriceTier, price: f64, weights: &ScoringConfig) -> f64 {
    match tier {
        PriceTier::NoPreference => 0.0,
        PriceTier::FreeOnly if price == 0.0 => weights.free_tier,
        PriceTier::Budget if price < weights.budget_price_ceiling => weights.budget_tier,
        PriceTier::Premium if price >= weights.budget_price_ceiling => weights.premium_tier,
        _ => 0.0,
    }
}
