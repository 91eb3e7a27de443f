use coursefeed_core::config::CoursefeedConfig;
use coursefeed_core::models::{
    CatalogItem, Category, Level, PriceTier, ReasonOrdering, UserInterestProfile, ViewHistory,
};
use coursefeed_core::traits::IRecommender;
use coursefeed_recommend::jitter::{NoJitter, SeededJitter};
use coursefeed_recommend::Recommender;
use proptest::prelude::*;

fn arb_item(id: usize) -> impl Strategy<Value = CatalogItem> {
    (
        0..Category::ALL.len(),
        0..Level::ALL.len(),
        0u32..200,
        0u32..=50,
        0u64..150_000,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(move |(c, l, price, rating, students, bestseller, is_new)| {
            CatalogItem::new(format!("c{id}"), Category::ALL[c], Level::ALL[l])
                .with_price(price as f64)
                .with_rating(rating as f64 / 10.0)
                .with_students(students)
                .with_bestseller(bestseller)
                .with_new(is_new)
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<CatalogItem>> {
    (0usize..25).prop_flat_map(|n| (0..n).map(arb_item).collect::<Vec<_>>())
}

fn arb_profile() -> impl Strategy<Value = UserInterestProfile> {
    (
        prop::collection::btree_set(0..Category::ALL.len(), 0..4),
        prop::collection::btree_set(0..Level::ALL.len(), 0..4),
        0usize..4,
    )
        .prop_map(|(cats, levels, tier)| UserInterestProfile {
            categories: cats.into_iter().map(|i| Category::ALL[i]).collect(),
            levels: levels.into_iter().map(|i| Level::ALL[i]).collect(),
            price_tier: [
                PriceTier::NoPreference,
                PriceTier::FreeOnly,
                PriceTier::Budget,
                PriceTier::Premium,
            ][tier],
            ..UserInterestProfile::default()
        })
}

fn arb_history() -> impl Strategy<Value = ViewHistory> {
    prop::collection::vec(0usize..30, 0..25)
        .prop_map(|ids| ViewHistory::from_ids(ids.into_iter().map(|i| format!("c{i}")), 20))
}

/// Feed settings as they might arrive unvalidated, including hostile jitter bounds.
fn arb_feed_config() -> impl Strategy<Value = CoursefeedConfig> {
    (
        0usize..10,
        any::<bool>(),
        prop_oneof![Just(f64::INFINITY), Just(f64::NAN), 0.0f64..20.0],
        any::<u64>(),
    )
        .prop_map(|(max_reasons, insertion, jitter_max, seed)| {
            let mut config = CoursefeedConfig::default();
            config.feed.max_reasons = max_reasons;
            config.feed.reason_ordering = if insertion {
                ReasonOrdering::Insertion
            } else {
                ReasonOrdering::Priority
            };
            config.feed.jitter_max = jitter_max;
            config.feed.jitter_seed = Some(seed);
            config
        })
}

proptest! {
    #[test]
    fn result_is_bounded_by_limit_and_catalog(
        catalog in arb_catalog(),
        profile in arb_profile(),
        history in arb_history(),
        limit in 0usize..30,
    ) {
        let ranked = Recommender::default()
            .recommend_with(&catalog, &profile, &history, Some(limit), &mut SeededJitter::new(9))
            .unwrap();
        prop_assert!(ranked.len() <= limit.min(catalog.len()));
        prop_assert_eq!(ranked.len(), limit.min(catalog.len()));
    }

    #[test]
    fn scores_are_non_negative_and_reasons_capped(
        catalog in arb_catalog(),
        profile in arb_profile(),
        history in arb_history(),
        seed in any::<u64>(),
    ) {
        let ranked = Recommender::default()
            .recommend_with(&catalog, &profile, &history, Some(30), &mut SeededJitter::new(seed))
            .unwrap();
        for s in &ranked {
            prop_assert!(s.match_score >= 0.0);
            prop_assert!(s.reasons.len() <= 2);
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn scoring_without_jitter_is_idempotent(
        catalog in arb_catalog(),
        profile in arb_profile(),
        history in arb_history(),
    ) {
        let engine = Recommender::default();
        let a = engine.recommend_with(&catalog, &profile, &history, None, &mut NoJitter).unwrap();
        let b = engine.recommend_with(&catalog, &profile, &history, None, &mut NoJitter).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn viewing_an_item_lowers_its_rule_score(
        catalog in arb_catalog(),
        profile in arb_profile(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!catalog.is_empty());
        let target = catalog[pick.index(catalog.len())].id.clone();
        let engine = Recommender::default();
        let n = Some(catalog.len());

        let fresh = engine
            .recommend_with(&catalog, &profile, &ViewHistory::new(), n, &mut NoJitter)
            .unwrap();
        let viewed = engine
            .recommend_with(&catalog, &profile, &ViewHistory::from_ids([target.clone()], 20), n, &mut NoJitter)
            .unwrap();

        let before = fresh.iter().find(|s| s.id() == target).unwrap().breakdown.raw_score;
        let after = viewed.iter().find(|s| s.id() == target).unwrap().breakdown.raw_score;
        prop_assert!(after < before);
    }

    #[test]
    fn interest_bonus_is_monotone(
        item in arb_item(0),
        profile in arb_profile(),
    ) {
        let mut interested = profile.clone();
        interested.categories.insert(item.category);
        let mut indifferent = profile;
        indifferent.categories.remove(&item.category);

        let engine = Recommender::default();
        let catalog = vec![item];
        let history = ViewHistory::new();
        let with = engine.recommend_with(&catalog, &interested, &history, None, &mut NoJitter).unwrap();
        let without = engine.recommend_with(&catalog, &indifferent, &history, None, &mut NoJitter).unwrap();
        prop_assert!(with[0].match_score >= without[0].match_score);
    }

    #[test]
    fn reason_cap_and_score_floor_hold_for_any_feed_config(
        config in arb_feed_config(),
        catalog in arb_catalog(),
        profile in arb_profile(),
        history in arb_history(),
    ) {
        let ranked = Recommender::new(config)
            .recommend(&catalog, &profile, &history, Some(30))
            .unwrap();
        for s in &ranked {
            prop_assert!(s.reasons.len() <= 2);
            prop_assert!(s.match_score >= 0.0);
            prop_assert!(s.breakdown.jitter.is_finite());
        }
    }
}
