//! Persistence for assets, keyed by URI.

mod document;
mod error;
mod memory;

pub use document::DocumentStore;
pub use error::StoreError;
pub use memory::MemoryStore;

use crate::model::Asset;

/// Backing store for the asset collection.
///
/// Implementations must be `Send + Sync`; a single handle is shared by every
/// request. Writes are last-writer-wins per key.
#[async_trait::async_trait]
pub trait AssetStore: Send + Sync {
    /// Every asset, ordered by name ascending (ties broken by URI).
    async fn list_all(&self) -> Result<Vec<Asset>, StoreError>;

    /// Point lookup by URI. Returns `None` if no asset has that URI.
    async fn get(&self, uri: &str) -> Result<Option<Asset>, StoreError>;

    /// Write the full record keyed by `asset.uri`, replacing any existing one.
    async fn upsert(&self, asset: &Asset) -> Result<(), StoreError>;

    /// Delete the record at `uri`. Removing a missing key is not an error.
    async fn remove(&self, uri: &str) -> Result<(), StoreError>;
}
