use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A row of the course comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum CompareCriterion {
    /// Higher rating wins.
    Rating,
    /// Lower price wins.
    Price,
    /// Higher enrollment wins.
    Students,
    /// Bestsellers win.
    Bestseller,
    /// All-levels courses win.
    Level,
}

impl CompareCriterion {
    pub const ALL: [CompareCriterion; 5] = [
        Self::Rating,
        Self::Price,
        Self::Students,
        Self::Bestseller,
        Self::Level,
    ];
}

/// Outcome of one criterion. `winners` is empty when every course ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    pub criterion: CompareCriterion,
    pub weight: f64,
    pub winners: Vec<String>,
}

/// Accumulated comparison score for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonScore {
    pub id: String,
    pub score: f64,
    pub criteria_won: usize,
}

/// Full comparison result. `winner` is `None` when the top score is shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub criteria: Vec<CriterionResult>,
    /// In input order.
    pub scores: Vec<ComparisonScore>,
    pub winner: Option<String>,
}
