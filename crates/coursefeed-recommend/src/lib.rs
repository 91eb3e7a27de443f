//! # coursefeed-recommend
//!
//! The "recommended for you" feed and the course comparison view.
//! A weighted rule table scores every catalog item against an interest profile and a
//! recently-viewed history; results are sorted, truncated and annotated with reasons.
//!
//! ## Architecture
//!
//! ```text
//! Recommender (IRecommender)
//! ├── Catalog validation (invariants, unique ids)
//! ├── ScoringContext (history ids → categories)
//! ├── RankingPipeline
//! │   ├── Scorer (9-rule table + explicit jitter + clamp)
//! │   ├── ReasonSet (insert-if-absent by kind, ordered, capped)
//! │   └── Sort (stable, descending) + truncate
//! └── Jitter (none | fixed | seeded | thread rng)
//! CompareEngine (per-criterion winners → weighted score)
//! LocalStore (IProfileStore + IHistoryStore over JSON documents)
//! ```

pub mod compare;
pub mod engine;
pub mod jitter;
pub mod ranking;
pub mod store;

pub use compare::CompareEngine;
pub use engine::Recommender;
pub use ranking::RankingPipeline;
pub use store::LocalStore;
