use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::MAX_RATING;
use crate::errors::{FeedError, FeedResult};

/// Marketplace category. Closed set; the catalog provider maps onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Development,
    Business,
    Finance,
    ItSoftware,
    Design,
    Marketing,
    PersonalDevelopment,
    Photography,
    Music,
    HealthFitness,
    DataScience,
    Language,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Self::Development,
        Self::Business,
        Self::Finance,
        Self::ItSoftware,
        Self::Design,
        Self::Marketing,
        Self::PersonalDevelopment,
        Self::Photography,
        Self::Music,
        Self::HealthFitness,
        Self::DataScience,
        Self::Language,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Business => "business",
            Self::Finance => "finance",
            Self::ItSoftware => "it-software",
            Self::Design => "design",
            Self::Marketing => "marketing",
            Self::PersonalDevelopment => "personal-development",
            Self::Photography => "photography",
            Self::Music => "music",
            Self::HealthFitness => "health-fitness",
            Self::DataScience => "data-science",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experience level a course targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::AllLevels,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::AllLevels => "all-levels",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One purchasable learning unit (a "course").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within a catalog.
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub category: Category,
    pub price: f64,
    /// In [0, 5].
    pub rating: f64,
    /// Enrollment count.
    pub students: u64,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub is_new: bool,
    pub level: Level,
}

impl CatalogItem {
    /// Create an item with neutral defaults; adjust fields with the `with_*` builders.
    pub fn new(id: impl Into<String>, category: Category, level: Level) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            category,
            price: 0.0,
            rating: 0.0,
            students: 0,
            bestseller: false,
            is_new: false,
            level,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_students(mut self, students: u64) -> Self {
        self.students = students;
        self
    }

    pub fn with_bestseller(mut self, bestseller: bool) -> Self {
        self.bestseller = bestseller;
        self
    }

    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Check the item invariants: non-empty id, price >= 0, rating in [0, 5].
    pub fn validate(&self) -> FeedResult<()> {
        if self.id.trim().is_empty() {
            return Err(FeedError::invalid("catalog item id must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(FeedError::invalid(format!(
                "catalog item {} has invalid price {}",
                self.id, self.price
            )));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(FeedError::invalid(format!(
                "catalog item {} has rating {} outside [0, {MAX_RATING}]",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}
