use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why an item was recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonKind {
    InterestMatch,
    Trending,
    SimilarToHistory,
    Popular,
    New,
    Completion,
}

impl ReasonKind {
    /// Display priority, lower first:
    /// interest-match, similar-to-history, popular, trending, new, completion.
    pub fn priority(self) -> u8 {
        match self {
            Self::InterestMatch => 0,
            Self::SimilarToHistory => 1,
            Self::Popular => 2,
            Self::Trending => 3,
            Self::New => 4,
            Self::Completion => 5,
        }
    }
}

/// A short, categorized explanation attached to a scored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reason {
    pub kind: ReasonKind,
    pub message: String,
}

impl Reason {
    pub fn new(kind: ReasonKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Order applied to an item's reasons before they are capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonOrdering {
    /// Sort by [`ReasonKind::priority`], ties in attachment order.
    #[default]
    Priority,
    /// Keep rule attachment order.
    Insertion,
}
