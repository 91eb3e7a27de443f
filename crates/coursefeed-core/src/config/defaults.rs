// Single source of truth for all default values.

// --- Scoring: points ---
pub const DEFAULT_INTEREST_MATCH_POINTS: f64 = 30.0;
pub const DEFAULT_LEVEL_MATCH_POINTS: f64 = 10.0;
pub const DEFAULT_FREE_TIER_POINTS: f64 = 15.0;
pub const DEFAULT_BUDGET_TIER_POINTS: f64 = 10.0;
pub const DEFAULT_PREMIUM_TIER_POINTS: f64 = 10.0;
pub const DEFAULT_POPULARITY_POINTS: f64 = 15.0;
pub const DEFAULT_QUALITY_POINTS: f64 = 10.0;
pub const DEFAULT_BESTSELLER_POINTS: f64 = 20.0;
pub const DEFAULT_NOVELTY_POINTS: f64 = 5.0;
pub const DEFAULT_HISTORY_SIMILARITY_POINTS: f64 = 20.0;
pub const DEFAULT_VIEWED_PENALTY: f64 = 50.0;

// --- Scoring: thresholds ---
pub const DEFAULT_BUDGET_PRICE_CEILING: f64 = 50.0; // budget: price < ceiling, premium: price >= ceiling
pub const DEFAULT_POPULARITY_MIN_STUDENTS: u64 = 50_000; // strictly greater than
pub const DEFAULT_QUALITY_MIN_RATING: f64 = 4.7;

// --- Feed ---
pub const DEFAULT_FEED_LIMIT: usize = 12;
pub const DEFAULT_MAX_REASONS: usize = 2;
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;
pub const DEFAULT_JITTER_MAX: f64 = 5.0;

// --- Compare ---
pub const DEFAULT_COMPARE_RATING_WEIGHT: f64 = 3.0;
pub const DEFAULT_COMPARE_PRICE_WEIGHT: f64 = 2.0;
pub const DEFAULT_COMPARE_STUDENTS_WEIGHT: f64 = 2.0;
pub const DEFAULT_COMPARE_BESTSELLER_WEIGHT: f64 = 1.0;
pub const DEFAULT_COMPARE_LEVEL_WEIGHT: f64 = 1.0;
