//! CompareEngine: weighted per-criterion winner scoring for 2–4 courses.

use std::collections::HashSet;

use coursefeed_core::config::CompareConfig;
use coursefeed_core::constants::{MAX_COMPARE_ITEMS, MIN_COMPARE_ITEMS};
use coursefeed_core::errors::{FeedError, FeedResult};
use coursefeed_core::models::{
    CatalogItem, CompareCriterion, Comparison, ComparisonScore, CriterionResult, Level,
};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CompareEngine {
    weights: CompareConfig,
}

impl CompareEngine {
    pub fn new(weights: CompareConfig) -> Self {
        Self { weights }
    }

    /// Compare courses side by side.
    ///
    /// Each criterion is won by every course holding the best value, unless all of
    /// them tie. A course scores the weights of the criteria it wins; the overall
    /// winner is the single top scorer, or `None` on a shared top score.
    pub fn compare(&self, items: &[CatalogItem]) -> FeedResult<Comparison> {
        if !(MIN_COMPARE_ITEMS..=MAX_COMPARE_ITEMS).contains(&items.len()) {
            return Err(FeedError::invalid(format!(
                "compare needs {MIN_COMPARE_ITEMS} to {MAX_COMPARE_ITEMS} courses, got {}",
                items.len()
            )));
        }
        let mut seen = HashSet::new();
        for item in items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(FeedError::invalid(format!(
                    "course {} listed twice in comparison",
                    item.id
                )));
            }
        }

        let mut scores: Vec<ComparisonScore> = items
            .iter()
            .map(|item| ComparisonScore {
                id: item.id.clone(),
                score: 0.0,
                criteria_won: 0,
            })
            .collect();

        let mut criteria = Vec::with_capacity(CompareCriterion::ALL.len());
        for criterion in CompareCriterion::ALL {
            let weight = self.weight(criterion);
            let winners = criterion_winners(items, criterion);
            for &idx in &winners {
                scores[idx].score += weight;
                scores[idx].criteria_won += 1;
            }
            criteria.push(CriterionResult {
                criterion,
                weight,
                winners: winners.iter().map(|&i| items[i].id.clone()).collect(),
            });
        }

        let winner = unique_top(&scores);
        debug!(courses = items.len(), ?winner, "comparison complete");

        Ok(Comparison {
            criteria,
            scores,
            winner,
        })
    }

    fn weight(&self, criterion: CompareCriterion) -> f64 {
        match criterion {
            CompareCriterion::Rating => self.weights.rating,
            CompareCriterion::Price => self.weights.price,
            CompareCriterion::Students => self.weights.students,
            CompareCriterion::Bestseller => self.weights.bestseller,
            CompareCriterion::Level => self.weights.level,
        }
    }
}

/// Higher is better for every criterion.
fn criterion_value(item: &CatalogItem, criterion: CompareCriterion) -> f64 {
    match criterion {
        CompareCriterion::Rating => item.rating,
        CompareCriterion::Price => -item.price,
        CompareCriterion::Students => item.students as f64,
        CompareCriterion::Bestseller => f64::from(u8::from(item.bestseller)),
        CompareCriterion::Level => f64::from(u8::from(item.level == Level::AllLevels)),
    }
}

/// Indices of the items holding the best value. Empty when every item ties.
fn criterion_winners(items: &[CatalogItem], criterion: CompareCriterion) -> Vec<usize> {
    let values: Vec<f64> = items
        .iter()
        .map(|item| criterion_value(item, criterion))
        .collect();
    let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let winners: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == best)
        .map(|(i, _)| i)
        .collect();
    if winners.len() == items.len() {
        Vec::new()
    } else {
        winners
    }
}

fn unique_top(scores: &[ComparisonScore]) -> Option<String> {
    let best = scores.iter().map(|s| s.score).fold(f64::NEG_INFINITY, f64::max);
    if best <= 0.0 {
        return None;
    }
    let mut top = scores.iter().filter(|s| s.score == best);
    match (top.next(), top.next()) {
        (Some(only), None) => Some(only.id.clone()),
        _ => None,
    }
}
