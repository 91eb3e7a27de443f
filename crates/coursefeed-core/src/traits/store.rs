use crate::errors::FeedResult;
use crate::models::{UserInterestProfile, ViewHistory};

/// Persistence for the interest profile. Missing state loads as the default profile.
pub trait IProfileStore: Send + Sync {
    fn load_profile(&self) -> FeedResult<UserInterestProfile>;
    fn save_profile(&self, profile: &UserInterestProfile) -> FeedResult<()>;
}

/// Persistence for the recently-viewed history. Missing state loads as an empty history.
pub trait IHistoryStore: Send + Sync {
    fn load_history(&self) -> FeedResult<ViewHistory>;

    /// Append `id` (dedupe, FIFO eviction) and persist. Returns the updated history.
    fn record_view(&self, id: &str) -> FeedResult<ViewHistory>;
}
