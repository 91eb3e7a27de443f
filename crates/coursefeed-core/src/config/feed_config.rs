use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ReasonOrdering;

/// Feed shaping: result size, reason cap, history bound, jitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Number of items returned when the caller gives no limit.
    pub default_limit: usize,
    /// Reasons kept per scored item, 1 or 2.
    pub max_reasons: usize,
    /// Recently-viewed entries kept before FIFO eviction.
    pub history_capacity: usize,
    /// Upper bound (exclusive) of the per-item jitter. `0.0` disables jitter.
    pub jitter_max: f64,
    /// Seed for reproducible jitter. `None` draws from the thread RNG.
    pub jitter_seed: Option<u64>,
    /// How reasons are ordered before the cap is applied.
    pub reason_ordering: ReasonOrdering,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_FEED_LIMIT,
            max_reasons: defaults::DEFAULT_MAX_REASONS,
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
            jitter_max: defaults::DEFAULT_JITTER_MAX,
            jitter_seed: None,
            reason_ordering: ReasonOrdering::default(),
        }
    }
}
