//! In-Memory Store - Process-local Asset Table
//!
//! Same contract as the PostgreSQL adapter, backed by a shared vector.
//! Used by the `memory` backend and by tests. Identity assignment
//! happens under the write lock, so concurrent commits never share an id.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Asset, AssetId, NewAsset, TrackedAsset};
use crate::ports::repository::{AssetRepository, RepositoryProvider};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Asset>,
    last_id: AssetId,
}

/// Shared table handed out as request-scoped repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryProvider {
    type Repository = InMemoryAssetRepository;

    fn scoped(&self) -> Self::Repository {
        InMemoryAssetRepository {
            table: Arc::clone(&self.table),
            staged: Vec::new(),
        }
    }
}

/// One unit of work over the shared table.
#[derive(Debug)]
pub struct InMemoryAssetRepository {
    table: Arc<RwLock<Table>>,
    staged: Vec<TrackedAsset>,
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn get_all(&self) -> Result<Vec<Asset>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn get_by_id(&self, id: AssetId) -> Result<Option<Asset>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn add(&mut self, asset: NewAsset) -> Result<TrackedAsset> {
        let tracked = TrackedAsset::new(asset);
        self.staged.push(tracked.clone());
        Ok(tracked)
    }

    async fn save_changes(&mut self) -> Result<bool> {
        if self.staged.is_empty() {
            return Ok(false);
        }

        let mut table = self.table.write().await;
        let written = self.staged.len();
        for tracked in self.staged.drain(..) {
            table.last_id += 1;
            let id = table.last_id;
            table.rows.push(tracked.draft().clone().into_asset(id));
            tracked.mark_persisted(id);
        }

        debug!(rows = written, "In-memory commit");
        Ok(true)
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
