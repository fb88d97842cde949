//! Error types for the asset stores.

/// Errors returned by [`AssetStore`](crate::store::AssetStore) operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// SQLite error.
    #[error("{0}")]
    Backend(#[from] rusqlite::Error),

    /// A stored document could not be encoded or decoded.
    #[error("document codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The configured collection name is not a plain identifier.
    #[error("invalid collection name: {name:?}")]
    InvalidCollection { name: String },

    /// The blocking task running a store call panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(String),

    /// The connection mutex was poisoned by a panicking holder.
    #[error("store connection poisoned")]
    Poisoned,
}
