//! Repository Port - Asset Persistence Interface
//!
//! The API layer and use cases only see these traits, never a concrete
//! database. Writes are two-phase: `add` stages a draft, `save_changes`
//! commits everything staged and assigns identities.

use async_trait::async_trait;

use crate::domain::{Asset, AssetId, NewAsset, TrackedAsset};

/// Read/write contract over asset storage.
///
/// One instance is a unit of work: staged drafts belong to it alone
/// and are discarded if it is dropped before `save_changes`.
#[async_trait]
pub trait AssetRepository: Send + Sync {
  /// Every stored asset, in storage order. No paging.
  async fn get_all(&self) -> anyhow::Result<Vec<Asset>>;

  /// A single asset, or `None` when the id is unknown.
  async fn get_by_id(&self, id: AssetId) -> anyhow::Result<Option<Asset>>;

  /// Stage a draft for insertion. Assigns nothing and writes nothing.
  async fn add(&mut self, asset: NewAsset) -> anyhow::Result<TrackedAsset>;

  /// Commit staged drafts. Returns whether at least one row was written.
  async fn save_changes(&mut self) -> anyhow::Result<bool>;

  /// Whether the backing store is reachable.
  async fn is_healthy(&self) -> bool;
}

/// Source of request-scoped repositories.
///
/// Shared across requests; each call to `scoped` yields an independent
/// unit of work over the same durable store.
pub trait RepositoryProvider: Send + Sync + 'static {
  type Repository: AssetRepository + 'static;

  fn scoped(&self) -> Self::Repository;
}
