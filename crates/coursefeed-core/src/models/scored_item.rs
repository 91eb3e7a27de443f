use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CatalogItem, Reason};

/// The components of a match score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Sum of the rule table, before jitter and clamping. May be negative.
    pub raw_score: f64,
    /// Jitter added on top of `raw_score`.
    pub jitter: f64,
}

/// A catalog item with its match score and up to a few reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    pub item: CatalogItem,
    /// `max(raw_score + jitter, 0)`.
    pub match_score: f64,
    pub reasons: Vec<Reason>,
    pub breakdown: ScoreBreakdown,
}

impl ScoredItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }
}
