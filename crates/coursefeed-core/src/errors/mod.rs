//! Error handling for coursefeed.
//! One error enum per subsystem, `thiserror` only, aggregated into [`FeedError`].

pub mod config_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

/// Top-level error for every public coursefeed operation.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl FeedError {
    /// Shorthand for [`FeedError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
