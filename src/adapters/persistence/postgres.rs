//! PostgreSQL Adapter - `Assets` Table over a sqlx Pool
//!
//! Implements the `AssetRepository` port. Reads materialize the full
//! table; staged drafts are inserted in one transaction on
//! `save_changes`, and the identity column supplies each `Id`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info, instrument, warn};

use crate::config::DatabaseConfig;
use crate::domain::{Asset, AssetId, NewAsset, TrackedAsset};
use crate::ports::repository::{AssetRepository, RepositoryProvider};

const SELECT_ALL: &str = r#"
SELECT "Id", "Symbol", "Name", "Quantity", "PricePerShare", "Type"
FROM "Assets"
ORDER BY "Id"
"#;

const SELECT_BY_ID: &str = r#"
SELECT "Id", "Symbol", "Name", "Quantity", "PricePerShare", "Type"
FROM "Assets"
WHERE "Id" = $1
"#;

const INSERT: &str = r#"
INSERT INTO "Assets" ("Symbol", "Name", "Quantity", "PricePerShare", "Type")
VALUES ($1, $2, $3, $4, $5)
RETURNING "Id"
"#;

/// Row image of the `Assets` table.
#[derive(Debug, FromRow)]
struct AssetRow {
    #[sqlx(rename = "Id")]
    id: AssetId,
    #[sqlx(rename = "Symbol")]
    symbol: String,
    #[sqlx(rename = "Name")]
    name: String,
    #[sqlx(rename = "Quantity")]
    quantity: Decimal,
    #[sqlx(rename = "PricePerShare")]
    price_per_share: Decimal,
    #[sqlx(rename = "Type")]
    asset_type: String,
}

impl From<AssetRow> for Asset {
    fn from(row: AssetRow) -> Self {
        Self {
            id: row.id,
            symbol: row.symbol,
            name: row.name,
            quantity: row.quantity,
            price_per_share: row.price_per_share,
            asset_type: row.asset_type,
        }
    }
}

/// Pool-backed provider. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct PgProvider {
    pool: PgPool,
}

impl PgProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration. Fails fast if the server is
    /// unreachable.
    #[instrument(skip(config), fields(max_connections = config.max_connections))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        info!("PostgreSQL pool established");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl RepositoryProvider for PgProvider {
    type Repository = PgAssetRepository;

    fn scoped(&self) -> Self::Repository {
        PgAssetRepository {
            pool: self.pool.clone(),
            staged: Vec::new(),
        }
    }
}

/// One unit of work against PostgreSQL.
pub struct PgAssetRepository {
    pool: PgPool,
    staged: Vec<TrackedAsset>,
}

#[async_trait]
impl AssetRepository for PgAssetRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Asset>> {
        let rows: Vec<AssetRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .context("Failed to load assets")?;

        debug!(count = rows.len(), "Loaded asset rows");
        Ok(rows.into_iter().map(Asset::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: AssetId) -> Result<Option<Asset>> {
        let row: Option<AssetRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load asset {id}"))?;

        Ok(row.map(Asset::from))
    }

    async fn add(&mut self, asset: NewAsset) -> Result<TrackedAsset> {
        let tracked = TrackedAsset::new(asset);
        self.staged.push(tracked.clone());
        Ok(tracked)
    }

    #[instrument(skip(self))]
    async fn save_changes(&mut self) -> Result<bool> {
        if self.staged.is_empty() {
            return Ok(false);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let mut assigned = Vec::with_capacity(self.staged.len());
        for tracked in &self.staged {
            let draft = tracked.draft();
            let id: AssetId = sqlx::query_scalar(INSERT)
                .bind(&draft.symbol)
                .bind(&draft.name)
                .bind(draft.quantity)
                .bind(draft.price_per_share)
                .bind(&draft.asset_type)
                .fetch_one(&mut *tx)
                .await
                .with_context(|| format!("Failed to insert asset {}", draft.symbol))?;
            assigned.push(id);
        }

        tx.commit().await.context("Failed to commit assets")?;

        let written = assigned.len();
        for (tracked, id) in self.staged.drain(..).zip(assigned) {
            tracked.mark_persisted(id);
        }

        debug!(rows = written, "Assets committed");
        Ok(written > 0)
    }

    async fn is_healthy(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "PostgreSQL health probe failed");
                false
            }
        }
    }
}
