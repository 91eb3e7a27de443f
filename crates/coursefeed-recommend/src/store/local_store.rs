//! In-memory key → JSON document store, shaped like browser local storage.

use std::collections::HashMap;
use std::sync::RwLock;

use coursefeed_core::config::defaults::DEFAULT_HISTORY_CAPACITY;
use coursefeed_core::config::FeedConfig;
use coursefeed_core::constants::{HISTORY_STORE_KEY, PROFILE_STORE_KEY};
use coursefeed_core::errors::{FeedResult, StoreError};
use coursefeed_core::models::{UserInterestProfile, ViewHistory};
use coursefeed_core::traits::{IHistoryStore, IProfileStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub struct LocalStore {
    entries: RwLock<HashMap<String, String>>,
    history_capacity: usize,
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore {
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// History bounded by `feed.history_capacity`.
    pub fn from_config(feed: &FeedConfig) -> Self {
        Self::with_history_capacity(feed.history_capacity)
    }

    pub fn with_history_capacity(history_capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            history_capacity,
        }
    }

    /// Raw stored document, if any.
    pub fn get_raw(&self, key: &str) -> FeedResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    pub fn set_raw(&self, key: &str, value: impl Into<String>) -> FeedResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn remove(&self, key: &str) -> FeedResult<bool> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.remove(key).is_some())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> FeedResult<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw).map_err(|e| StoreError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> FeedResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.set_raw(key, raw)
    }
}

impl IProfileStore for LocalStore {
    fn load_profile(&self) -> FeedResult<UserInterestProfile> {
        let profile = self.read_json(PROFILE_STORE_KEY)?;
        if profile.is_none() {
            debug!("no stored profile, using defaults");
        }
        Ok(profile.unwrap_or_default())
    }

    fn save_profile(&self, profile: &UserInterestProfile) -> FeedResult<()> {
        self.write_json(PROFILE_STORE_KEY, profile)
    }
}

impl IHistoryStore for LocalStore {
    fn load_history(&self) -> FeedResult<ViewHistory> {
        let ids: Vec<String> = self.read_json(HISTORY_STORE_KEY)?.unwrap_or_default();
        Ok(ViewHistory::from_ids(ids, self.history_capacity))
    }

    fn record_view(&self, id: &str) -> FeedResult<ViewHistory> {
        // Hold the write lock across read-modify-write so concurrent views are not lost.
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        let ids: Vec<String> = match entries.get(HISTORY_STORE_KEY) {
            Some(raw) => serde_json::from_str(raw).map_err(|e| StoreError::Serialization {
                key: HISTORY_STORE_KEY.to_string(),
                message: e.to_string(),
            })?,
            None => Vec::new(),
        };

        let mut history = ViewHistory::from_ids(ids, self.history_capacity);
        if history.record_view(id) {
            let raw = serde_json::to_string(&history).map_err(|e| StoreError::Serialization {
                key: HISTORY_STORE_KEY.to_string(),
                message: e.to_string(),
            })?;
            entries.insert(HISTORY_STORE_KEY.to_string(), raw);
        }
        Ok(history)
    }
}
