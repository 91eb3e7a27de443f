//! Ordered reason set: insert-if-absent by kind, capped on output.

use coursefeed_core::constants::MAX_REASONS;
use coursefeed_core::models::{Reason, ReasonKind, ReasonOrdering};

/// Reasons accumulated while an item is scored. At most one reason per kind.
#[derive(Debug, Clone, Default)]
pub struct ReasonSet {
    reasons: Vec<Reason>,
}

impl ReasonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, kind: ReasonKind) -> bool {
        self.reasons.iter().any(|r| r.kind == kind)
    }

    /// Attach a reason unless one of the same kind is already present.
    pub fn insert(&mut self, kind: ReasonKind, message: impl Into<String>) -> bool {
        if self.has(kind) {
            return false;
        }
        self.reasons.push(Reason::new(kind, message));
        true
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Order and cap the set. Priority ordering is stable, so equal priorities keep attachment order.
    /// The cap never exceeds [`MAX_REASONS`].
    pub fn finish(mut self, ordering: ReasonOrdering, max: usize) -> Vec<Reason> {
        if ordering == ReasonOrdering::Priority {
            self.reasons.sort_by_key(|r| r.kind.priority());
        }
        self.reasons.truncate(max.min(MAX_REASONS));
        self.reasons
    }
}
