use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-criterion weights for the course comparison view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub rating: f64,
    pub price: f64,
    pub students: f64,
    pub bestseller: f64,
    pub level: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            rating: defaults::DEFAULT_COMPARE_RATING_WEIGHT,
            price: defaults::DEFAULT_COMPARE_PRICE_WEIGHT,
            students: defaults::DEFAULT_COMPARE_STUDENTS_WEIGHT,
            bestseller: defaults::DEFAULT_COMPARE_BESTSELLER_WEIGHT,
            level: defaults::DEFAULT_COMPARE_LEVEL_WEIGHT,
        }
    }
}
