use std::sync::Arc;
use std::thread;

use coursefeed_core::config::CoursefeedConfig;
use coursefeed_core::constants::{HISTORY_STORE_KEY, PROFILE_STORE_KEY};
use coursefeed_core::errors::{FeedError, StoreError};
use coursefeed_core::models::{Category, PriceTier, UserInterestProfile};
use coursefeed_core::traits::{IHistoryStore, IProfileStore};
use coursefeed_recommend::LocalStore;

#[test]
fn missing_state_loads_defaults() {
    let store = LocalStore::new();
    let profile = store.load_profile().unwrap();
    assert!(profile.is_cold_start());
    assert!(store.load_history().unwrap().is_empty());
}

#[test]
fn profile_survives_a_save_and_load() {
    let store = LocalStore::new();
    let mut profile = UserInterestProfile::default();
    profile.toggle_category(Category::DataScience);
    profile.set_price_tier(PriceTier::Premium);
    profile.add_goal("get promoted");
    store.save_profile(&profile).unwrap();

    let loaded = store.load_profile().unwrap();
    assert_eq!(loaded, profile);
    assert!(store.get_raw(PROFILE_STORE_KEY).unwrap().unwrap().contains("data-science"));
}

#[test]
fn record_view_dedupes_and_evicts() {
    let store = LocalStore::with_history_capacity(3);
    for id in ["a", "b", "a", "c", "d"] {
        store.record_view(id).unwrap();
    }
    let history = store.load_history().unwrap();
    assert_eq!(history.ids(), vec!["b", "c", "d"]);
    assert_eq!(
        store.get_raw(HISTORY_STORE_KEY).unwrap().as_deref(),
        Some(r#"["b","c","d"]"#)
    );
}

#[test]
fn oversized_persisted_history_is_trimmed_on_load() {
    let store = LocalStore::with_history_capacity(2);
    store.set_raw(HISTORY_STORE_KEY, r#"["a","b","c"]"#).unwrap();
    assert_eq!(store.load_history().unwrap().ids(), vec!["b", "c"]);
}

#[test]
fn history_capacity_comes_from_config() {
    let config = CoursefeedConfig::from_toml("[feed]\nhistory_capacity = 3").unwrap();
    let store = LocalStore::from_config(&config.feed);
    for id in ["a", "b", "c", "d", "e"] {
        store.record_view(id).unwrap();
    }
    let history = store.load_history().unwrap();
    assert_eq!(history.capacity(), 3);
    assert_eq!(history.ids(), vec!["c", "d", "e"]);
}

#[test]
fn corrupt_document_is_a_serialization_error() {
    let store = LocalStore::new();
    store.set_raw(PROFILE_STORE_KEY, "{not json").unwrap();
    let err = store.load_profile().unwrap_err();
    assert!(matches!(
        err,
        FeedError::Store(StoreError::Serialization { ref key, .. }) if key == PROFILE_STORE_KEY
    ));
}

#[test]
fn concurrent_views_are_not_lost() {
    let store = Arc::new(LocalStore::new());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..5 {
                    store.record_view(&format!("t{t}-{i}")).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.load_history().unwrap().len(), 20);
}

#[test]
fn remove_clears_a_key() {
    let store = LocalStore::new();
    store.record_view("x").unwrap();
    assert!(store.remove(HISTORY_STORE_KEY).unwrap());
    assert!(!store.remove(HISTORY_STORE_KEY).unwrap());
    assert!(store.load_history().unwrap().is_empty());
}
