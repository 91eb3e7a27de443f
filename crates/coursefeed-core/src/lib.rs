//! # coursefeed-core
//!
//! Foundation crate for the coursefeed recommender.
//! Defines the catalog, profile, history and result types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CoursefeedConfig;
pub use errors::{FeedError, FeedResult};
pub use models::{
    CatalogItem, Category, Level, PriceTier, Reason, ReasonKind, ScoredItem, UserInterestProfile,
    ViewHistory,
};
