pub mod jitter;
pub mod recommender;
pub mod store;

pub use jitter::IJitterSource;
pub use recommender::IRecommender;
pub use store::{IHistoryStore, IProfileStore};
