//! Portfolio Service - List and Create Flows
//!
//! Orchestrates one request-scoped repository:
//! - listing every holding
//! - staging + committing a new holding and reading back its identity
//! - aggregating the dashboard summary

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::domain::{Asset, NewAsset, PortfolioSummary};
use crate::ports::repository::AssetRepository;

/// Application service over a single unit of work.
pub struct PortfolioService<R: AssetRepository> {
  /// Request-scoped repository.
  repository: R,
}

impl<R: AssetRepository> PortfolioService<R> {
  /// Wrap a repository.
  pub fn new(repository: R) -> Self {
    Self { repository }
  }

  /// Every stored asset.
  #[instrument(skip(self))]
  pub async fn list_assets(&self) -> Result<Vec<Asset>> {
    let assets = self.repository.get_all().await?;
    debug!(count = assets.len(), "Assets loaded");
    Ok(assets)
  }

  /// Persist a new asset and return it with its assigned id.
  ///
  /// No field validation: negative or zero amounts are stored as given.
  #[instrument(skip(self, draft), fields(symbol = %draft.symbol))]
  pub async fn create_asset(&mut self, draft: NewAsset) -> Result<Asset> {
    let tracked = self.repository.add(draft).await?;
    let saved = self.repository.save_changes().await?;

    let asset = tracked
      .persisted()
      .context("Asset was not assigned an id on save")?;

    info!(
      id = asset.id,
      symbol = %asset.symbol,
      rows_written = saved,
      "Asset created"
    );

    Ok(asset)
  }

  /// Count and aggregate value of the whole portfolio.
  #[instrument(skip(self))]
  pub async fn summary(&self) -> Result<PortfolioSummary> {
    let assets = self.repository.get_all().await?;
    PortfolioSummary::try_from_assets(&assets)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use mockall::mock;
  use rust_decimal_macros::dec;

  use super::*;
  use crate::domain::{AssetId, TrackedAsset};

  mock! {
    pub Repo {}

    #[async_trait::async_trait]
    impl AssetRepository for Repo {
      async fn get_all(&self) -> anyhow::Result<Vec<Asset>>;
      async fn get_by_id(&self, id: AssetId) -> anyhow::Result<Option<Asset>>;
      async fn add(&mut self, asset: NewAsset) -> anyhow::Result<TrackedAsset>;
      async fn save_changes(&mut self) -> anyhow::Result<bool>;
      async fn is_healthy(&self) -> bool;
    }
  }

  fn qqq() -> NewAsset {
    NewAsset::new("QQQ", "Invesco QQQ", dec!(10), dec!(400), None)
  }

  #[tokio::test]
  async fn test_list_returns_repository_contents() {
    let mut repo = MockRepo::new();
    repo
      .expect_get_all()
      .times(1)
      .returning(|| Ok(vec![qqq().into_asset(1)]));

    let service = PortfolioService::new(repo);
    let assets = service.list_assets().await.unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].symbol, "QQQ");
  }

  #[tokio::test]
  async fn test_create_stages_then_commits() {
    let staged: Arc<Mutex<Vec<TrackedAsset>>> = Arc::default();
    let mut repo = MockRepo::new();

    let on_add = Arc::clone(&staged);
    repo.expect_add().times(1).returning(move |draft| {
      let tracked = TrackedAsset::new(draft);
      on_add.lock().unwrap().push(tracked.clone());
      Ok(tracked)
    });

    let on_save = Arc::clone(&staged);
    repo.expect_save_changes().times(1).returning(move || {
      for tracked in on_save.lock().unwrap().drain(..) {
        tracked.mark_persisted(42);
      }
      Ok(true)
    });

    let mut service = PortfolioService::new(repo);
    let asset = service.create_asset(qqq()).await.unwrap();
    assert_eq!(asset.id, 42);
    assert_eq!(asset.asset_type, "ETF");
    assert_eq!(asset.total_value(), dec!(4000));
  }

  #[tokio::test]
  async fn test_create_fails_when_nothing_committed() {
    let mut repo = MockRepo::new();
    repo
      .expect_add()
      .returning(|draft| Ok(TrackedAsset::new(draft)));
    repo.expect_save_changes().returning(|| Ok(false));

    let mut service = PortfolioService::new(repo);
    assert!(service.create_asset(qqq()).await.is_err());
  }

  #[tokio::test]
  async fn test_storage_fault_propagates() {
    let mut repo = MockRepo::new();
    repo
      .expect_get_all()
      .returning(|| Err(anyhow::anyhow!("connection refused")));

    let service = PortfolioService::new(repo);
    let err = service.summary().await.unwrap_err();
    assert!(err.to_string().contains("connection refused"));
  }
}
