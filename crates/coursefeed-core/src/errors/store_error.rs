/// Profile/history store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to (de)serialize value under key {key}: {message}")]
    Serialization { key: String, message: String },

    #[error("store lock poisoned")]
    Poisoned,
}
