use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Category, Level};

/// How price factors into recommendations. Exactly one tier applies per profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTier {
    #[default]
    NoPreference,
    FreeOnly,
    Budget,
    Premium,
}

/// A user's declared preferences. Persisted by the caller, read-only to the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInterestProfile {
    pub categories: BTreeSet<Category>,
    pub levels: BTreeSet<Level>,
    pub price_tier: PriceTier,
    pub goals: BTreeSet<String>,
    pub last_updated: DateTime<Utc>,
}

impl Default for UserInterestProfile {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            levels: BTreeSet::from([Level::Beginner, Level::Intermediate]),
            price_tier: PriceTier::NoPreference,
            goals: BTreeSet::new(),
            last_updated: Utc::now(),
        }
    }
}

impl UserInterestProfile {
    /// Build a profile interested in `categories`, keeping the remaining defaults.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Add the category if absent, remove it if present. Returns whether it is now included.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        let included = if self.categories.remove(&category) {
            false
        } else {
            self.categories.insert(category)
        };
        self.touch();
        included
    }

    pub fn set_levels(&mut self, levels: impl IntoIterator<Item = Level>) {
        self.levels = levels.into_iter().collect();
        self.touch();
    }

    pub fn set_price_tier(&mut self, tier: PriceTier) {
        self.price_tier = tier;
        self.touch();
    }

    /// Add a goal. Blank goals are ignored. Returns whether the goal was newly added.
    pub fn add_goal(&mut self, goal: impl Into<String>) -> bool {
        let goal = goal.into();
        let goal = goal.trim();
        if goal.is_empty() {
            return false;
        }
        let added = self.goals.insert(goal.to_string());
        if added {
            self.touch();
        }
        added
    }

    pub fn remove_goal(&mut self, goal: &str) -> bool {
        let removed = self.goals.remove(goal.trim());
        if removed {
            self.touch();
        }
        removed
    }

    /// No stated interests or goals: the feed runs on popularity, quality and novelty alone.
    pub fn is_cold_start(&self) -> bool {
        self.categories.is_empty() && self.goals.is_empty()
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
