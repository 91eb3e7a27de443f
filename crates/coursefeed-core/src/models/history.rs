use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_HISTORY_CAPACITY;

/// Bounded record of recently viewed item ids, oldest first.
///
/// Invariants: no duplicates, `len() <= capacity()`, FIFO eviction past the bound.
/// Serializes as a plain array of ids; deserializing applies the default capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ViewHistory {
    ids: VecDeque<String>,
    capacity: usize,
}

impl Default for ViewHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A zero capacity is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            ids: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rehydrate from a persisted oldest-first list, applying the same
    /// dedupe and eviction rules as a sequence of [`record_view`](Self::record_view) calls.
    pub fn from_ids<I, S>(ids: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::with_capacity(capacity);
        for id in ids {
            history.record_view(id);
        }
        history
    }

    /// Record that `id` was viewed. Returns `false` (no-op) if it is already present.
    pub fn record_view(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push_back(id);
        while self.ids.len() > self.capacity {
            self.ids.pop_front();
        }
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|v| v == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl From<Vec<String>> for ViewHistory {
    fn from(ids: Vec<String>) -> Self {
        Self::from_ids(ids, DEFAULT_HISTORY_CAPACITY)
    }
}

impl From<ViewHistory> for Vec<String> {
    fn from(history: ViewHistory) -> Self {
        history.ids.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_view_is_a_noop() {
        let mut history = ViewHistory::new();
        assert!(history.record_view("a"));
        assert!(history.record_view("b"));
        assert!(!history.record_view("a"));
        assert_eq!(history.ids(), vec!["a", "b"]);
    }

    #[test]
    fn oldest_entry_is_evicted_past_capacity() {
        let mut history = ViewHistory::new();
        for i in 0..25 {
            history.record_view(format!("c{i}"));
        }
        assert_eq!(history.len(), 20);
        assert!(!history.contains("c4"));
        assert!(history.contains("c5"));
        assert_eq!(history.iter().next(), Some("c5"));
        assert_eq!(history.iter().last(), Some("c24"));
    }

    #[test]
    fn from_ids_applies_dedupe_and_bound() {
        let history = ViewHistory::from_ids(["a", "b", "a", "c", "d"], 3);
        assert_eq!(history.ids(), vec!["b", "c", "d"]);
        assert_eq!(history.capacity(), 3);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = ViewHistory::with_capacity(0);
        history.record_view("a");
        history.record_view("b");
        assert_eq!(history.ids(), vec!["b"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let history = ViewHistory::from_ids(["x", "y"], 20);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
        let back: ViewHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
