//! In-memory asset store.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::{AssetStore, StoreError};
use crate::model::Asset;

/// Asset store backed by a `RwLock<HashMap>`.
///
/// Used by tests and by the server's `--memory` mode. Nothing is persisted.
#[derive(Default)]
pub struct MemoryStore {
    assets: RwLock<HashMap<String, Asset>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AssetStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Asset>, StoreError> {
        let map = self.assets.read().await;
        let mut assets: Vec<Asset> = map.values().cloned().collect();
        assets.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.uri.cmp(&b.uri)));
        Ok(assets)
    }

    async fn get(&self, uri: &str) -> Result<Option<Asset>, StoreError> {
        Ok(self.assets.read().await.get(uri).cloned())
    }

    async fn upsert(&self, asset: &Asset) -> Result<(), StoreError> {
        debug!(uri = %asset.uri, "storing asset in memory");
        self.assets
            .write()
            .await
            .insert(asset.uri.clone(), asset.clone());
        Ok(())
    }

    async fn remove(&self, uri: &str) -> Result<(), StoreError> {
        self.assets.write().await.remove(uri);
        debug!(uri, "removed asset from memory");
        Ok(())
    }
}
