/// coursefeed version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum rating a catalog item may carry.
pub const MAX_RATING: f64 = 5.0;

/// Fewest courses the compare view accepts.
pub const MIN_COMPARE_ITEMS: usize = 2;

/// Most courses the compare view accepts side by side.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// Local-store key holding the serialized interest profile.
pub const PROFILE_STORE_KEY: &str = "coursefeed.profile";

/// Local-store key holding the serialized view history.
pub const HISTORY_STORE_KEY: &str = "coursefeed.history";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "COURSEFEED_";

/// Hard cap on reasons attached to one scored item.
pub const MAX_REASONS: usize = 2;
