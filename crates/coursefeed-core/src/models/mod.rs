pub mod catalog_item;
pub mod comparison;
pub mod history;
pub mod profile;
pub mod reason;
pub mod scored_item;

pub use catalog_item::{CatalogItem, Category, Level};
pub use comparison::{CompareCriterion, Comparison, ComparisonScore, CriterionResult};
pub use history::ViewHistory;
pub use profile::{PriceTier, UserInterestProfile};
pub use reason::{Reason, ReasonKind, ReasonOrdering};
pub use scored_item::{ScoreBreakdown, ScoredItem};
